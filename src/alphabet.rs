use crate::PAD;
use std::str::FromStr;
use std::{error, fmt};

/// Errors reported while validating an alphabet definition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    InvalidSymbol { character: char, index: usize },
    DuplicateSymbol { character: char, first: usize, second: usize },
}

/// Errors reported while looking up an encoded symbol.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => {
                write!(f, "Alphabet must contain 64 symbols, got {}", length)
            }
            Self::InvalidSymbol { character, index } => {
                write!(f, "Invalid symbol '{}' at index {}", character, index)
            }
            Self::DuplicateSymbol { character, first, second } => {
                write!(f, "Duplicate symbol '{}' at indexes {} and {}", character, first, second)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAsciiCharacter { character, index } => {
                write!(f, "Non-ascii character {:#02x} at index {}", character, index)
            }
            Self::InvalidCharacter { character, index } => {
                write!(f, "Invalid character '{}' at index {}", character, index)
            }
        }
    }
}

/// Ordered 64-symbol set with its forward and reverse lookup tables.
///
/// `symbols` is the index→byte base map used when encoding; `indexes` is the
/// byte→index map used when decoding. Symbols are ASCII, so character-domain
/// and byte-domain lookups share `indexes`. Both tables are built once at
/// construction and never mutated.
#[derive(Debug)]
pub struct Alphabet {
    symbols: [u8; 64],
    indexes: [Option<u8>; 128],
}

/// The standard Base64 alphabet, `A–Z a–z 0–9 + /`.
pub const STANDARD: Alphabet =
    match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build standard alphabet"),
    };

impl Alphabet {
    /// Builds an alphabet from exactly 64 symbol bytes.
    ///
    /// Permitted symbols are ASCII graphic characters excluding the padding
    /// marker. Reports the offending symbol and its index on failure.
    pub const fn new(symbols: &[u8; 64]) -> Result<Self, Error> {
        let mut table = [0u8; 64];
        let mut indexes: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < table.len() {
            let character = symbols[index];
            if character <= 0x20 || character >= 0x7f || character == PAD {
                return Err(Error::InvalidSymbol {
                    character: character as char,
                    index,
                });
            }
            if let Some(first) = indexes[character as usize] {
                return Err(Error::DuplicateSymbol {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            table[index] = character;
            indexes[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { symbols: table, indexes })
    }

    /// The alphabet string itself. The lookup tables stay private.
    pub fn as_str(&self) -> &str {
        // Construction guarantees ASCII symbols.
        unsafe { std::str::from_utf8_unchecked(&self.symbols) }
    }

    pub(crate) const fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    pub(crate) fn index_of(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { character: value, index });
        }
        match self.indexes[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub(crate) fn contains(&self, value: u8) -> bool {
        value < 128 && self.indexes[value as usize].is_some()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    /// Builds an alphabet from a caller-supplied 64-character string.
    fn from_str(alphabet: &str) -> Result<Self, Error> {
        let length = alphabet.chars().count();
        if length != 64 {
            return Err(Error::InvalidLength { length });
        }
        for (index, character) in alphabet.chars().enumerate() {
            if !character.is_ascii() {
                return Err(Error::InvalidSymbol { character, index });
            }
        }
        let symbols: &[u8; 64] = alphabet
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidLength { length })?;
        Self::new(symbols)
    }
}

/// Returns true when `candidate` is a well-formed 64-symbol alphabet.
pub fn is_alphabet(candidate: &str) -> bool {
    candidate.parse::<Alphabet>().is_ok()
}
