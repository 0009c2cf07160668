use sha2::{Digest, Sha256};

pub const CHECKSUM_LENGTH: usize = 4;

/// First four bytes of `sha256(sha256(payload))`.
pub fn checksum(payload: impl AsRef<[u8]>) -> [u8; CHECKSUM_LENGTH] {
    let first = Sha256::digest(payload.as_ref());
    let second = Sha256::digest(first.as_slice());
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&second[..CHECKSUM_LENGTH]);
    checksum
}
