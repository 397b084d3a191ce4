use std::fmt::Debug;
use std::fmt::Display;

use num_traits::CheckedAdd;
use num_traits::CheckedMul;
use num_traits::CheckedSub;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::PrimInt;
use num_traits::Signed;

/// Fixed-width signed integers usable as polynomial coefficients.
///
/// Every arithmetic step the synthesizer performs goes through the `Checked*`
/// operations, so an implementor must report overflow instead of wrapping.
pub trait Coefficient:
    Copy
    + Debug
    + Display
    + Eq
    + Ord
    + ConstZero
    + ConstOne
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + Signed
    + PrimInt
    + Send
    + Sync
{
}

impl<T> Coefficient for T where
    T: Copy
        + Debug
        + Display
        + Eq
        + Ord
        + ConstZero
        + ConstOne
        + CheckedAdd
        + CheckedSub
        + CheckedMul
        + Signed
        + PrimInt
        + Send
        + Sync
{
}

/// Fused `acc + a * b` that reports overflow in either step.
pub trait CheckedMulAdd: Coefficient {
    #[must_use]
    fn checked_mul_add(self, a: Self, b: Self) -> Option<Self> {
        a.checked_mul(&b).and_then(|product| self.checked_add(&product))
    }

    #[must_use]
    fn checked_mul_sub(self, a: Self, b: Self) -> Option<Self> {
        a.checked_mul(&b).and_then(|product| self.checked_sub(&product))
    }
}

impl<T: Coefficient> CheckedMulAdd for T {}
