//! Configurable Base64 codec.
//!
//! Bidirectional conversion between byte buffers and RFC 4648 Base64 text
//! over a caller-configurable 64-symbol alphabet, plus two sign-prefixed
//! base-64 positional numeral encodings (fixed-width safe integers and
//! arbitrary-precision integers) built on the same alphabet.
//!
//! Every operation is available as a method on a [`Base64`] instance and as a
//! free function bound to the standard-alphabet instance:
//!
//! ```
//! let encoded = base64_codec::encode_to_string(b"foobar");
//! assert_eq!(encoded, "Zm9vYmFy");
//! assert_eq!(base64_codec::decode(&encoded).unwrap(), b"foobar");
//!
//! assert_eq!(base64_codec::encode_int(9007199254740991).unwrap(), "f////////");
//! ```

mod alphabet;
mod codec;
mod decode;
mod encode;
mod numeral;
mod range;
mod text;

pub use alphabet::{is_alphabet, Alphabet, DecodeError, Error as AlphabetError, STANDARD};
pub use codec::{is_base64_string, Base64};
pub use decode::{decode, decode_from_string, decode_from_string_range, decode_range};
pub use encode::{encode, encode_range, encode_to_string, encode_to_string_range};
pub use numeral::{
    decode_big_int, decode_int, encode_big_int, encode_int, DecodeError as NumeralDecodeError,
    IntEncodeError,
};
pub use text::{decode_text, encode_text, DecodeError as TextDecodeError};

/// Number of symbols in the alphabet.
pub const BASE: usize = 64;

/// Bits carried by one encoded symbol.
pub const BITS_PER_SYMBOL: usize = 6;

/// The standard Base64 alphabet string.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding marker appended to align encoded output to 4 symbols.
pub const PAD: u8 = b'=';

/// Sign marker prefixed to negative numerals.
pub const SIGN: u8 = b'-';

/// Largest magnitude the fixed-width numeral codec accepts, 2^53 - 1.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Negated [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;
