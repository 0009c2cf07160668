use crate::error::ValidationError;
use std::fmt;

const INVALID: u8 = 0xFF;

/// A bijection between the digits `0..58` and 58 distinct ascii bytes.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Alphabet {
    encode: [u8; 58],
    decode: [u8; 128],
}

const fn build(characters: &[u8; 58]) -> Alphabet {
    match Alphabet::new(characters) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    }
}

impl Alphabet {
    pub const BITCOIN: Self = build(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
    pub const MONERO: Self = build(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
    pub const RIPPLE: Self = build(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");
    pub const FLICKR: Self = build(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ");
    pub const DEFAULT: Self = Self::BITCOIN;

    pub const fn new(characters: &[u8; 58]) -> Result<Self, ValidationError> {
        let mut decode = [INVALID; 128];

        let mut index = 0;
        while index < 58 {
            let character = characters[index];
            if character >= 128 {
                return Err(ValidationError::NonAsciiAlphabetCharacter { index });
            }
            let first = decode[character as usize];
            if first != INVALID {
                return Err(ValidationError::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            decode[character as usize] = index as u8;
            index += 1;
        }

        Ok(Self {
            encode: *characters,
            decode,
        })
    }

    pub fn from_slice(characters: impl AsRef<[u8]>) -> Result<Self, ValidationError> {
        let characters = characters.as_ref();
        let characters: &[u8; 58] = characters
            .try_into()
            .map_err(|_| ValidationError::InvalidAlphabetLength { length: characters.len() })?;
        Self::new(characters)
    }

    #[inline(always)]
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Maps a symbol back to its digit, `index` is only used to locate the byte in the error.
    #[inline(always)]
    pub fn decode(&self, character: u8, index: usize) -> Result<u8, ValidationError> {
        if character >= 128 {
            return Err(ValidationError::NonAsciiCharacter { index });
        }
        match self.decode[character as usize] {
            INVALID => Err(ValidationError::InvalidCharacter {
                character: character as char,
                index,
            }),
            value => Ok(value),
        }
    }

    /// The symbol standing for a leading zero byte.
    pub const fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn as_bytes(&self) -> &[u8; 58] {
        &self.encode
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let characters: String = self.encode.iter().map(|&character| character as char).collect();
        f.debug_tuple("Alphabet").field(&characters).finish()
    }
}
