pub mod error;
pub mod macros;
pub mod poly;
pub mod prelude;
pub mod radix;
pub mod traits;

pub use crate::{
    error::{DecodeError, SynthesisError},
    poly::Polynomial,
    radix::{decode, encode, MAX_BASE, MIN_BASE},
};
