use super::{checksum, Alphabet, CHECKSUM_LENGTH};
use crate::{base58, error::ValidationError};

#[derive(Clone, Copy)]
pub struct Decoder<'a> {
    decoder: base58::Decoder<'a>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            decoder: base58::Decoder::new(alphabet),
        }
    }

    /// Decodes `input` and strips the trailing checksum once it has been verified.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, ValidationError> {
        let mut output = self.decoder.decode(input)?;
        let len = verify_checksum(&output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

static DECODER: Decoder = Decoder::new(&Alphabet::DEFAULT);

/// Returns the length of the payload in front of the checksum.
fn verify_checksum(buffer: &[u8]) -> Result<usize, ValidationError> {
    if buffer.len() < CHECKSUM_LENGTH {
        return Err(ValidationError::NoChecksum { length: buffer.len() });
    }
    let len = buffer.len() - CHECKSUM_LENGTH;
    let (payload, trailer) = buffer.split_at(len);
    let calculated = checksum(payload);
    let mut expected = [0u8; CHECKSUM_LENGTH];
    expected.copy_from_slice(trailer);
    if calculated != expected {
        return Err(ValidationError::InvalidChecksum {
            checksum: calculated,
            expected_checksum: expected,
        });
    }
    Ok(len)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, ValidationError> {
    Decoder::default().decode(input)
}
