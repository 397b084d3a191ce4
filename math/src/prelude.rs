pub use crate::error::{DecodeError, SynthesisError};
pub use crate::poly::Polynomial;
pub use crate::radix::{decode, encode};
pub use crate::traits::Coefficient;
pub use crate::{from_roots, poly};
