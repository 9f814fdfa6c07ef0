use crate::alphabet;
use crate::codec::Base64;
use std::{error, fmt, str};

/// Errors reported while decoding a text payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    /// The decoded bytes are not valid UTF-8.
    InvalidUtf8(str::Utf8Error),
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
            Self::InvalidUtf8(error) => write!(f, "Decoded payload is not UTF-8: {}", error),
        }
    }
}

impl From<alphabet::DecodeError> for DecodeError {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::NonAsciiCharacter { character, index } => {
                Self::NonAsciiCharacter { character, index }
            }
            alphabet::DecodeError::InvalidCharacter { character, index } => {
                Self::InvalidCharacter { character, index }
            }
        }
    }
}

impl Base64 {
    /// Encodes the UTF-8 bytes of `text` to Base64.
    pub fn encode_text(&self, text: &str) -> String {
        self.encode_to_string(text.as_bytes())
    }

    /// Decodes a Base64 string into a UTF-8 text payload.
    pub fn decode_text(&self, input: &str) -> Result<String, DecodeError> {
        let bytes = self.decode_from_string(input)?;
        String::from_utf8(bytes).map_err(|error| DecodeError::InvalidUtf8(error.utf8_error()))
    }
}

pub fn encode_text(text: &str) -> String {
    Base64::standard().encode_text(text)
}

pub fn decode_text(input: &str) -> Result<String, DecodeError> {
    Base64::standard().decode_text(input)
}
