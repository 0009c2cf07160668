use super::Alphabet;

#[derive(Clone, Copy)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Reads `input` as a big-endian integer and writes it out in base 58, one zero symbol per leading zero byte.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let zeros = input.iter().take_while(|&&value| value == 0).count();

        // little-endian base 58 digits, log(256) / log(58) is just under 1.38
        let mut digits: Vec<u8> = Vec::with_capacity((input.len() - zeros) * 138 / 100 + 1);
        for &value in &input[zeros..] {
            let mut carry = value as usize;
            for digit in &mut digits {
                carry += (*digit as usize) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                digits.push((carry % 58) as u8);
                carry /= 58;
            }
        }

        let mut output = Vec::with_capacity(zeros + digits.len());
        output.resize(zeros, self.alphabet.zero());
        output.extend(digits.iter().rev().map(|&digit| self.alphabet.encode(digit as usize)));
        output
    }

    /// Same as `encode`, but as text. Every symbol is ascii, so each byte is one `char`.
    pub fn encode_to_string(&self, input: impl AsRef<[u8]>) -> String {
        self.encode(input).into_iter().map(char::from).collect()
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

static ENCODER: Encoder = Encoder::new(&Alphabet::DEFAULT);

pub fn encode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Encoder::default().encode(input)
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Encoder};

    #[test]
    fn encode() {
        assert_eq!(super::encode(b""), b"");
        assert_eq!(super::encode("a"), b"2g");
        assert_eq!(super::encode("bbb"), b"a3gV");
        assert_eq!(super::encode("hello world"), b"StV1DL6CwTryKyV");
        assert_eq!(super::encode("simply a long string"), b"2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(super::encode([0xff, 0xff, 0xff, 0xff]), b"7YXq9G");
        assert_eq!(super::encode([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), b"ABnLTmg");
        assert_eq!(
            super::encode([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            b"1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::encode(b"\0\0hello world"), b"11StV1DL6CwTryKyV");
        assert_eq!(super::encode([0x00, 0x01]), b"12");
        assert_eq!(super::encode([0x00]), b"1");
        assert_eq!(super::encode([0x00; 10]), b"1111111111");
    }

    #[test]
    fn encode_with_alphabet() {
        let encoder = Encoder::new(&Alphabet::RIPPLE);
        assert_eq!(encoder.encode("hello world"), b"StVrDLaUATiyKyV");
        assert_eq!(encoder.encode(b"\0\0hello world"), b"rrStVrDLaUATiyKyV");
        assert_eq!(encoder.encode([0x00]), b"r");
        assert_eq!(Encoder::new(&Alphabet::FLICKR).encode("hello world"), b"rTu1dk6cWsRYjYu");
        assert_eq!(Encoder::new(&Alphabet::MONERO).encode("hello world"), b"StV1DL6CwTryKyV");
    }

    #[test]
    fn encode_to_string() {
        assert_eq!(Encoder::default().encode_to_string("hello world"), "StV1DL6CwTryKyV");
        assert_eq!(Encoder::new(&Alphabet::RIPPLE).encode_to_string(b"\0hello world"), "rStVrDLaUATiyKyV");
        assert_eq!(Encoder::default().encode_to_string(""), "");
    }
}
