use std::{error, fmt};

/// Everything that can go wrong while building an alphabet or decoding base58 text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// The alphabet was not exactly 58 bytes long.
    InvalidAlphabetLength { length: usize },
    /// The alphabet contained a byte outside the ascii range at `index`.
    NonAsciiAlphabetCharacter { index: usize },
    /// The alphabet used the same byte twice, `first` and `second` are the two lowest positions.
    DuplicateCharacter { character: char, first: usize, second: usize },
    /// The input contained a byte that is not a symbol of the alphabet.
    InvalidCharacter { character: char, index: usize },
    /// The input contained a byte outside the ascii range at `index`.
    NonAsciiCharacter { index: usize },
    /// The decoded buffer was shorter than a checksum.
    NoChecksum { length: usize },
    /// `checksum` was computed over the payload, `expected_checksum` was carried by the input.
    InvalidChecksum { checksum: [u8; 4], expected_checksum: [u8; 4] },
}

impl error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlphabetLength { length } => {
                write!(f, "Expected a bytes of length 58 but received length {}", length)
            }
            Self::NonAsciiAlphabetCharacter { index } => {
                write!(f, "alphabet contained a non-ascii character at {}", index)
            }
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "alphabet contained a duplicate character `{}` at indexes {} and {}", character, first, second)
            }
            Self::InvalidCharacter { character, index } => {
                write!(f, "provided string contained invalid character {:?} at byte {}", character, index)
            }
            Self::NonAsciiCharacter { index } => {
                write!(f, "provided string contained non-ascii character starting at byte {}", index)
            }
            Self::NoChecksum { .. } => write!(f, "provided string is too small to contain a checksum"),
            Self::InvalidChecksum {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "invalid checksum, calculated checksum: '{:?}', expected checksum: {:?}",
                checksum, expected_checksum
            ),
        }
    }
}
