use crate::alphabet::DecodeError;
use crate::codec::Base64;
use crate::range;
use crate::PAD;

impl Base64 {
    /// Decodes Base64 symbol bytes back into the original bytes.
    ///
    /// Fails with the offending value and its position on the first byte that
    /// is not an alphabet symbol; no partial result is returned. Input whose
    /// length is not a multiple of 4 is decoded as unpadded Base64.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
        self.decode_selection(input.as_ref())
    }

    /// Decodes the `[start, end)` selection of `input`, with `slice`-style
    /// bounds. Error positions are relative to the selection.
    pub fn decode_range(
        &self,
        input: impl AsRef<[u8]>,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<Vec<u8>, DecodeError> {
        let input = input.as_ref();
        let (start, end) = range::resolve(input.len(), start, end);
        self.decode_selection(&input[start..end])
    }

    /// Decodes a Base64 string back into the original bytes.
    pub fn decode_from_string(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        self.decode_selection(input.as_bytes())
    }

    pub fn decode_from_string_range(
        &self,
        input: &str,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<Vec<u8>, DecodeError> {
        self.decode_range(input.as_bytes(), start, end)
    }

    fn decode_selection(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let alphabet = self.table();

        // Padding is only recognized on canonical, multiple-of-4 input.
        let mut padding = 0;
        if !input.is_empty() && input.len() % 4 == 0 {
            if input[input.len() - 1] == PAD {
                padding += 1;
                if input[input.len() - 2] == PAD {
                    padding += 1;
                }
            }
        }
        let data_length = input.len() - padding;

        let mut output = Vec::with_capacity(data_length / 4 * 3 + 2);
        let mut index = 0;
        while index + 4 <= data_length {
            let i0 = alphabet.index_of(input[index], index)? as u32;
            let i1 = alphabet.index_of(input[index + 1], index + 1)? as u32;
            let i2 = alphabet.index_of(input[index + 2], index + 2)? as u32;
            let i3 = alphabet.index_of(input[index + 3], index + 3)? as u32;
            let value = (i0 << 18) | (i1 << 12) | (i2 << 6) | i3;
            output.push((value >> 16) as u8);
            output.push((value >> 8) as u8);
            output.push(value as u8);
            index += 4;
        }

        // Trailing group of 1, 2 or 3 data symbols yields 0, 1 or 2 bytes.
        // Every symbol is validated, even one that completes no byte.
        match data_length - index {
            1 => {
                alphabet.index_of(input[index], index)?;
            }
            2 => {
                let i0 = alphabet.index_of(input[index], index)?;
                let i1 = alphabet.index_of(input[index + 1], index + 1)?;
                output.push((i0 << 2) | (i1 >> 4));
            }
            3 => {
                let i0 = alphabet.index_of(input[index], index)?;
                let i1 = alphabet.index_of(input[index + 1], index + 1)?;
                let i2 = alphabet.index_of(input[index + 2], index + 2)?;
                output.push((i0 << 2) | (i1 >> 4));
                output.push(((i1 & 0x0f) << 4) | (i2 >> 2));
            }
            _ => {}
        }

        Ok(output)
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    Base64::standard().decode(input)
}

pub fn decode_range(
    input: impl AsRef<[u8]>,
    start: Option<isize>,
    end: Option<isize>,
) -> Result<Vec<u8>, DecodeError> {
    Base64::standard().decode_range(input, start, end)
}

pub fn decode_from_string(input: &str) -> Result<Vec<u8>, DecodeError> {
    Base64::standard().decode_from_string(input)
}

pub fn decode_from_string_range(
    input: &str,
    start: Option<isize>,
    end: Option<isize>,
) -> Result<Vec<u8>, DecodeError> {
    Base64::standard().decode_from_string_range(input, start, end)
}

#[cfg(test)]
mod tests {
    use crate::alphabet::DecodeError;
    use crate::codec::Base64;

    #[test]
    fn decode() {
        assert_eq!(super::decode("FPucA9l+"), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]));
        assert_eq!(super::decode("FPucA9k="), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9]));
        assert_eq!(super::decode("FPucAw=="), Ok(vec![0x14, 0xfb, 0x9c, 0x03]));
        assert_eq!(super::decode(""), Ok(b"".to_vec()));
        assert_eq!(super::decode("Zg=="), Ok(b"f".to_vec()));
        assert_eq!(super::decode("Zm8="), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("Zm9v"), Ok(b"foo".to_vec()));
        assert_eq!(super::decode("Zm9vYg=="), Ok(b"foob".to_vec()));
        assert_eq!(super::decode("Zm9vYmE="), Ok(b"fooba".to_vec()));
        assert_eq!(super::decode("Zm9vYmFy"), Ok(b"foobar".to_vec()));
        assert_eq!(
            super::decode("AAIECA8fP3//"),
            Ok(vec![0x00, 0x02, 0x04, 0x08, 0x0f, 0x1f, 0x3f, 0x7f, 0xff])
        );
    }

    #[test]
    fn decode_unpadded_input() {
        assert_eq!(super::decode("Zg"), Ok(b"f".to_vec()));
        assert_eq!(super::decode("Zm8"), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("Zm9vYg"), Ok(b"foob".to_vec()));
        // A lone trailing symbol carries no complete byte but is validated.
        assert_eq!(super::decode("Zm9vY"), Ok(b"foo".to_vec()));
        assert_eq!(
            super::decode("Zm9v!"),
            Err(DecodeError::InvalidCharacter { character: '!', index: 4 })
        );
    }

    #[test]
    fn decode_reports_invalid_characters() {
        assert_eq!(
            super::decode("Zm.v"),
            Err(DecodeError::InvalidCharacter { character: '.', index: 2 })
        );
        assert_eq!(
            super::decode([b'Z', b'm', 0xc3, b'v']),
            Err(DecodeError::NonAsciiCharacter { character: 0xc3, index: 2 })
        );
        // Padding in a data position is not a symbol.
        assert_eq!(
            super::decode("Z==="),
            Err(DecodeError::InvalidCharacter { character: '=', index: 1 })
        );
        assert_eq!(
            super::decode("Zm=v"),
            Err(DecodeError::InvalidCharacter { character: '=', index: 2 })
        );
    }

    #[test]
    fn decode_range() {
        let input = "??Zm9vYmFy";
        assert_eq!(super::decode_from_string_range(input, Some(2), None), Ok(b"foobar".to_vec()));
        assert_eq!(super::decode_from_string_range(input, Some(-8), Some(-4)), Ok(b"foo".to_vec()));
        assert_eq!(super::decode_from_string_range(input, Some(6), Some(2)), Ok(vec![]));
        assert_eq!(
            super::decode_from_string_range(input, None, None),
            Err(DecodeError::InvalidCharacter { character: '?', index: 0 })
        );
    }

    #[test]
    fn decode_with_custom_alphabet() {
        let codec = Base64::new(
            "+/ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        )
        .unwrap();
        assert_eq!(codec.decode("Xk7t"), Ok(b"foo".to_vec()));
        assert_eq!(codec.decode("++++"), Ok(vec![0x00, 0x00, 0x00]));
    }
}
