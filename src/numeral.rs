use crate::alphabet;
use crate::codec::Base64;
use crate::{MAX_SAFE_INTEGER, SIGN};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use std::{error, fmt};

/// Errors reported while encoding a fixed-width integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IntEncodeError {
    OutOfSafeRange { value: i64 },
}

/// Errors reported while decoding a numeral string.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The input holds no digits (empty input or a bare sign marker).
    MissingDigits,
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    /// The accumulated magnitude left the safe integer range. Never reported
    /// by the big-integer decoder.
    OutOfSafeRange,
}

impl error::Error for IntEncodeError {}

impl fmt::Display for IntEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfSafeRange { value } => {
                write!(f, "Value {} outside the safe integer range", value)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDigits => write!(f, "Numeral holds no digits"),
            Self::NonAsciiCharacter { character, index } => {
                write!(f, "Non-ascii character {:#02x} at index {}", character, index)
            }
            Self::InvalidCharacter { character, index } => {
                write!(f, "Invalid character '{}' at index {}", character, index)
            }
            Self::OutOfSafeRange => write!(f, "Numeral outside the safe integer range"),
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
    /// Encodes a signed integer as a sign-prefixed base-64 numeral, most
    /// significant digit first. Zero encodes to the symbol at index 0 with no
    /// sign marker.
    ///
    /// The magnitude must lie within the safe integer range so that encoded
    /// numerals stay interchangeable with fixed-width implementations.
    pub fn encode_int(&self, value: i64) -> Result<String, IntEncodeError> {
        if value.unsigned_abs() > MAX_SAFE_INTEGER as u64 {
            return Err(IntEncodeError::OutOfSafeRange { value });
        }
        let alphabet = self.table();
        let mut output = Vec::with_capacity(10);
        if value < 0 {
            output.push(SIGN);
        }
        let digits_start = output.len();
        let mut magnitude = value.unsigned_abs();
        loop {
            output.push(alphabet.symbol((magnitude % 64) as usize));
            magnitude /= 64;
            if magnitude == 0 {
                break;
            }
        }
        output[digits_start..].reverse();
        Ok(unsafe { String::from_utf8_unchecked(output) })
    }

    /// Decodes a sign-prefixed base-64 numeral into a signed integer.
    pub fn decode_int(&self, input: &str) -> Result<i64, DecodeError> {
        let alphabet = self.table();
        let (negative, digits_start) = sign_of(input.as_bytes());
        let digits = &input.as_bytes()[digits_start..];
        if digits.is_empty() {
            return Err(DecodeError::MissingDigits);
        }
        let mut value: i64 = 0;
        for (position, &byte) in digits.iter().enumerate() {
            let digit = alphabet.index_of(byte, digits_start + position)? as i64;
            value = value
                .checked_mul(64)
                .and_then(|value| value.checked_add(digit))
                .filter(|&value| value <= MAX_SAFE_INTEGER)
                .ok_or(DecodeError::OutOfSafeRange)?;
        }
        Ok(if negative { -value } else { value })
    }

    /// Encodes an arbitrary-precision integer as a sign-prefixed base-64
    /// numeral. No magnitude ceiling.
    pub fn encode_big_int(&self, value: &BigInt) -> String {
        let alphabet = self.table();
        if value.is_zero() {
            return (alphabet.symbol(0) as char).to_string();
        }
        let digits = value.magnitude().to_radix_be(64);
        let mut output = Vec::with_capacity(digits.len() + 1);
        if value.sign() == Sign::Minus {
            output.push(SIGN);
        }
        output.extend(digits.iter().map(|&digit| alphabet.symbol(digit as usize)));
        unsafe { String::from_utf8_unchecked(output) }
    }

    /// Decodes a sign-prefixed base-64 numeral into an arbitrary-precision
    /// integer.
    pub fn decode_big_int(&self, input: &str) -> Result<BigInt, DecodeError> {
        let alphabet = self.table();
        let (negative, digits_start) = sign_of(input.as_bytes());
        let digits = &input.as_bytes()[digits_start..];
        if digits.is_empty() {
            return Err(DecodeError::MissingDigits);
        }
        let mut magnitude = BigUint::zero();
        for (position, &byte) in digits.iter().enumerate() {
            let digit = alphabet.index_of(byte, digits_start + position)?;
            magnitude = magnitude * 64u32 + (digit as u32);
        }
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_biguint(sign, magnitude))
    }
}

fn sign_of(input: &[u8]) -> (bool, usize) {
    match input.first() {
        Some(&byte) if byte == SIGN => (true, 1),
        _ => (false, 0),
    }
}

pub fn encode_int(value: i64) -> Result<String, IntEncodeError> {
    Base64::standard().encode_int(value)
}

pub fn decode_int(input: &str) -> Result<i64, DecodeError> {
    Base64::standard().decode_int(input)
}

pub fn encode_big_int(value: &BigInt) -> String {
    Base64::standard().encode_big_int(value)
}

pub fn decode_big_int(input: &str) -> Result<BigInt, DecodeError> {
    Base64::standard().decode_big_int(input)
}
