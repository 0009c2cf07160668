pub mod decode;
pub mod encode;

pub use crate::alphabet::Alphabet;
pub use decode::{decode, Decoder};
pub use encode::{encode, Encoder};
