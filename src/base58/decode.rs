use super::Alphabet;
use crate::error::ValidationError;

#[derive(Clone, Copy)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Fails on the first byte, from the left, that is not a symbol of the alphabet.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, ValidationError> {
        let input = input.as_ref();
        let zero = self.alphabet.zero();
        let zeros = input.iter().take_while(|&&value| value == zero).count();

        // little-endian base 256 digits, log(58) / log(256) is just under 0.733
        let mut bytes: Vec<u8> = Vec::with_capacity((input.len() - zeros) * 733 / 1000 + 1);
        for (index, &value) in input.iter().enumerate().skip(zeros) {
            let mut carry = self.alphabet.decode(value, index)? as usize;
            for byte in &mut bytes {
                carry += (*byte as usize) * 58;
                *byte = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                bytes.push((carry & 0xFF) as u8);
                carry >>= 8;
            }
        }

        let mut output = Vec::with_capacity(zeros + bytes.len());
        output.resize(zeros, 0);
        output.extend(bytes.iter().rev());
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

static DECODER: Decoder = Decoder::new(&Alphabet::DEFAULT);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, ValidationError> {
    Decoder::default().decode(input)
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Decoder};
    use crate::error::ValidationError;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("StV1DL6CwTryKyV"), Ok(b"hello world".to_vec()));
        assert_eq!(super::decode("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(super::decode("7YXq9G"), Ok(vec![0xff, 0xff, 0xff, 0xff]));
        assert_eq!(super::decode("3EFU7m"), Ok(vec![0x57, 0x2e, 0x47, 0x94]));
        assert_eq!(super::decode("Rt5zm"), Ok(vec![0x10, 0xc8, 0x51, 0x1e]));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::decode("1"), Ok(vec![0x00]));
        assert_eq!(super::decode("1111"), Ok(vec![0x00; 4]));
        assert_eq!(super::decode("12"), Ok(vec![0x00, 0x01]));
        assert_eq!(super::decode("11StV1DL6CwTryKyV"), Ok(b"\0\0hello world".to_vec()));
    }

    #[test]
    fn invalid_character() {
        let result = super::decode("hello world");
        assert_eq!(result, Err(ValidationError::InvalidCharacter { character: 'l', index: 2 }));
        assert_eq!(
            result.unwrap_err().to_string(),
            "provided string contained invalid character 'l' at byte 2"
        );

        let result = super::decode(b"xyz\x08");
        assert_eq!(
            result.unwrap_err().to_string(),
            "provided string contained invalid character '\\u{8}' at byte 3"
        );

        assert_eq!(
            super::decode("11O0"),
            Err(ValidationError::InvalidCharacter { character: 'O', index: 2 })
        );
    }

    #[test]
    fn non_ascii_character() {
        let result = super::decode([b'2', 0xC3, 0xA9]);
        assert_eq!(result, Err(ValidationError::NonAsciiCharacter { index: 1 }));
        assert_eq!(
            result.unwrap_err().to_string(),
            "provided string contained non-ascii character starting at byte 1"
        );
        assert_eq!(
            super::decode("1é"),
            Err(ValidationError::NonAsciiCharacter { index: 1 })
        );
        assert_eq!(
            super::decode([b'l', 0xFF]),
            Err(ValidationError::InvalidCharacter { character: 'l', index: 0 })
        );
    }

    #[test]
    fn decode_with_alphabet() {
        let decoder = Decoder::new(&Alphabet::RIPPLE);
        assert_eq!(decoder.decode("StVrDLaUATiyKyV"), Ok(b"hello world".to_vec()));
        assert_eq!(decoder.decode("rrStVrDLaUATiyKyV"), Ok(b"\0\0hello world".to_vec()));
        assert_eq!(decoder.decode("r"), Ok(vec![0x00]));
        assert_eq!(
            decoder.decode("r0"),
            Err(ValidationError::InvalidCharacter { character: '0', index: 1 })
        );
        assert_eq!(Decoder::new(&Alphabet::FLICKR).decode("rTu1dk6cWsRYjYu"), Ok(b"hello world".to_vec()));
    }
}
