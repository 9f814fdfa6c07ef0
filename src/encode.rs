use crate::codec::Base64;
use crate::range;
use crate::PAD;

impl Base64 {
    /// Encodes `input` to Base64, returning the ASCII symbol bytes.
    ///
    /// Output length is always a multiple of 4.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        self.encode_selection(input.as_ref())
    }

    /// Encodes the `[start, end)` selection of `input`, with `slice`-style
    /// bounds: negative values count from the end, both clamp into range.
    pub fn encode_range(
        &self,
        input: impl AsRef<[u8]>,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Vec<u8> {
        let input = input.as_ref();
        let (start, end) = range::resolve(input.len(), start, end);
        self.encode_selection(&input[start..end])
    }

    /// Encodes `input` to a Base64 `String`.
    pub fn encode_to_string(&self, input: impl AsRef<[u8]>) -> String {
        let output = self.encode_selection(input.as_ref());
        // The output only contains alphabet symbols and padding, all ASCII.
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn encode_to_string_range(
        &self,
        input: impl AsRef<[u8]>,
        start: Option<isize>,
        end: Option<isize>,
    ) -> String {
        let output = self.encode_range(input, start, end);
        unsafe { String::from_utf8_unchecked(output) }
    }

    fn encode_selection(&self, input: &[u8]) -> Vec<u8> {
        let alphabet = self.table();
        let mut output = Vec::with_capacity(input.len().div_ceil(3) * 4);
        let mut groups = input.chunks_exact(3);
        for group in &mut groups {
            let value =
                ((group[0] as u32) << 16) | ((group[1] as u32) << 8) | (group[2] as u32);
            output.push(alphabet.symbol(((value >> 18) & 0x3f) as usize));
            output.push(alphabet.symbol(((value >> 12) & 0x3f) as usize));
            output.push(alphabet.symbol(((value >> 6) & 0x3f) as usize));
            output.push(alphabet.symbol((value & 0x3f) as usize));
        }
        match *groups.remainder() {
            [b0] => {
                output.push(alphabet.symbol((b0 >> 2) as usize));
                output.push(alphabet.symbol(((b0 & 0x03) << 4) as usize));
                output.push(PAD);
                output.push(PAD);
            }
            [b0, b1] => {
                output.push(alphabet.symbol((b0 >> 2) as usize));
                output.push(alphabet.symbol((((b0 & 0x03) << 4) | (b1 >> 4)) as usize));
                output.push(alphabet.symbol(((b1 & 0x0f) << 2) as usize));
                output.push(PAD);
            }
            _ => {}
        }
        output
    }
}

pub fn encode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Base64::standard().encode(input)
}

pub fn encode_range(input: impl AsRef<[u8]>, start: Option<isize>, end: Option<isize>) -> Vec<u8> {
    Base64::standard().encode_range(input, start, end)
}

pub fn encode_to_string(input: impl AsRef<[u8]>) -> String {
    Base64::standard().encode_to_string(input)
}

pub fn encode_to_string_range(
    input: impl AsRef<[u8]>,
    start: Option<isize>,
    end: Option<isize>,
) -> String {
    Base64::standard().encode_to_string_range(input, start, end)
}

#[cfg(test)]
mod tests {
    use crate::codec::Base64;

    #[test]
    fn encode() {
        assert_eq!(super::encode_to_string([0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]), "FPucA9l+");
        assert_eq!(super::encode_to_string([0x14, 0xfb, 0x9c, 0x03, 0xd9]), "FPucA9k=");
        assert_eq!(super::encode_to_string([0x14, 0xfb, 0x9c, 0x03]), "FPucAw==");
        assert_eq!(super::encode_to_string(b""), "");
        assert_eq!(super::encode_to_string(b"f"), "Zg==");
        assert_eq!(super::encode_to_string(b"fo"), "Zm8=");
        assert_eq!(super::encode_to_string(b"foo"), "Zm9v");
        assert_eq!(super::encode_to_string(b"foob"), "Zm9vYg==");
        assert_eq!(super::encode_to_string(b"fooba"), "Zm9vYmE=");
        assert_eq!(super::encode_to_string(b"foobar"), "Zm9vYmFy");
        assert_eq!(
            super::encode_to_string([0x00, 0x02, 0x04, 0x08, 0x0f, 0x1f, 0x3f, 0x7f, 0xff]),
            "AAIECA8fP3//"
        );
    }

    #[test]
    fn encode_returns_ascii_bytes() {
        assert_eq!(super::encode(b"foo"), b"Zm9v");
        assert_eq!(super::encode(b"f"), b"Zg==");
    }

    #[test]
    fn encode_range() {
        let input = b"foobar";
        assert_eq!(super::encode_to_string_range(input, None, None), "Zm9vYmFy");
        assert_eq!(super::encode_to_string_range(input, Some(3), None), "YmFy");
        assert_eq!(super::encode_to_string_range(input, Some(-3), None), "YmFy");
        assert_eq!(super::encode_to_string_range(input, Some(0), Some(3)), "Zm9v");
        assert_eq!(super::encode_to_string_range(input, None, Some(-5)), "Zg==");
        assert_eq!(super::encode_to_string_range(input, Some(4), Some(2)), "");
        assert_eq!(super::encode_to_string_range(input, Some(-100), Some(100)), "Zm9vYmFy");
    }

    #[test]
    fn encode_with_custom_alphabet() {
        let codec = Base64::new(
            "+/ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        )
        .unwrap();
        assert_eq!(codec.encode_to_string([0x00, 0x00, 0x00]), "++++");
        assert_eq!(codec.encode_to_string(b"foo"), "Xk7t");
    }
}
