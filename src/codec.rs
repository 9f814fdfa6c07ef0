use crate::alphabet::{self, Alphabet, STANDARD};
use crate::PAD;

/// A Base64 codec bound to one alphabet.
///
/// The lookup tables are built at construction and never change, so a shared
/// `&Base64` is safe to use from any number of threads.
pub struct Base64 {
    alphabet: Alphabet,
}

const CODEC: Base64 = Base64::with_alphabet(STANDARD);

impl Base64 {
    /// Builds a codec from a caller-supplied 64-character alphabet.
    pub fn new(alphabet: &str) -> Result<Self, alphabet::Error> {
        Ok(Self::with_alphabet(alphabet.parse()?))
    }

    pub const fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The codec bound to the standard alphabet.
    pub fn standard() -> &'static Self {
        &CODEC
    }

    pub fn alphabet(&self) -> &str {
        self.alphabet.as_str()
    }

    pub(crate) fn table(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns true when `input` is a well-formed Base64 string under this
    /// codec's alphabet: length a multiple of 4, at most 2 trailing padding
    /// markers, every other character in the alphabet.
    pub fn is_base64_string(&self, input: &str) -> bool {
        let bytes = input.as_bytes();
        if bytes.len() % 4 != 0 {
            return false;
        }
        let data = match bytes {
            [head @ .., PAD, PAD] => head,
            [head @ .., PAD] => head,
            _ => bytes,
        };
        data.iter().all(|&value| self.alphabet.contains(value))
    }
}

impl Default for Base64 {
    fn default() -> Self {
        Self::with_alphabet(STANDARD)
    }
}

/// Returns true when `input` is a well-formed standard-alphabet Base64 string.
pub fn is_base64_string(input: &str) -> bool {
    Base64::standard().is_base64_string(input)
}
