//! Base58 and Base58Check codecs over pluggable 58-symbol alphabets.

pub mod alphabet;
pub mod base58;
pub mod base58_check;
pub mod error;

pub use alphabet::Alphabet;
pub use error::ValidationError;
