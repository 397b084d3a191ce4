use math::{radix, DecodeError};
use serde::{Deserialize, Serialize};

/// One located root entry from the input document.
///
/// `index` is the 1-based key the entry was found under; it is what error
/// messages refer to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRecord {
    pub index: usize,
    /// Kept signed so a negative base still reaches the decoder, which
    /// rejects it digit by digit.
    pub base: i64,
    pub literal: String,
}

impl RootRecord {
    pub fn new(index: usize, base: i64, literal: impl Into<String>) -> Self {
        Self {
            index,
            base,
            literal: literal.into(),
        }
    }

    /// Decode the literal in this record's base.
    pub fn decode(&self) -> Result<i64, DecodeError> {
        radix::decode(&self.literal, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_in_its_own_base() {
        assert_eq!(RootRecord::new(1, 16, "-ff").decode(), Ok(-255));
        assert_eq!(RootRecord::new(2, 2, "111").decode(), Ok(7));
    }

    #[test]
    fn surfaces_decoder_errors_unchanged() {
        assert_eq!(
            RootRecord::new(3, 10, "").decode(),
            Err(DecodeError::EmptyLiteral)
        );
        assert_eq!(
            RootRecord::new(4, -2, "1").decode(),
            Err(DecodeError::DigitOutOfRange {
                ch: '1',
                digit: 1,
                base: -2
            })
        );
    }
}
