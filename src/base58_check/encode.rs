use super::{checksum, Alphabet};
use crate::base58;

#[derive(Clone, Copy)]
pub struct Encoder<'a> {
    encoder: base58::Encoder<'a>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            encoder: base58::Encoder::new(alphabet),
        }
    }

    fn extend_input(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let mut extended = Vec::with_capacity(input.len() + super::CHECKSUM_LENGTH);
        extended.extend_from_slice(input);
        extended.extend_from_slice(&checksum(input));
        extended
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        self.encoder.encode(self.extend_input(input))
    }

    pub fn encode_to_string(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode_to_string(self.extend_input(input))
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

static ENCODER: Encoder = Encoder::new(&Alphabet::DEFAULT);

pub fn encode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Encoder::default().encode(input)
}
