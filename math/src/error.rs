pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("literal contains no digits")]
        EmptyLiteral,
        #[error("invalid digit {ch:?} at byte offset {position}")]
        InvalidDigit { ch: char, position: usize },
        #[error("digit {ch:?} (value {digit}) is out of range for base {base}")]
        DigitOutOfRange { ch: char, digit: u32, base: i64 },
        #[error("literal does not fit in a signed 64-bit integer")]
        Overflow,
        #[error("base {0} is outside the supported range 2..=16")]
        UnsupportedBase(u32),
    }
}

pub mod synthesis {
    use thiserror::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error(
            "coefficient of x^{power} overflowed while folding root #{step} ({root})"
        )]
        Overflow { step: usize, root: i64, power: usize },
    }
}

pub use radix::Error as DecodeError;
pub use synthesis::Error as SynthesisError;

