//! Dense univariate polynomials over fixed-width signed integers.
//!
//! Coefficients are stored in ascending power order, so `coeffs[j]` is the
//! coefficient of `x^j`. All arithmetic is checked; the crate never widens to
//! a bigger integer type and never wraps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;
use crate::traits::{CheckedMulAdd, Coefficient};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial<C: Coefficient = i64> {
    coeffs: Vec<C>,
}

impl<C: Coefficient> Polynomial<C> {
    /// The constant polynomial `1`, the empty product.
    pub fn one() -> Self {
        Self {
            coeffs: vec![C::ONE],
        }
    }

    /// Build the monic polynomial `(x - r_1)(x - r_2)...(x - r_k)`.
    ///
    /// Roots are folded strictly in the given order. The final coefficients do
    /// not depend on that order, but the first step that overflows does, and
    /// it is reported as [`SynthesisError::Overflow`].
    ///
    /// ```
    /// use math::poly::Polynomial;
    ///
    /// let p = Polynomial::from_roots(&[2, 3]).unwrap();
    /// assert_eq!(p.coefficients(), &[6, -5, 1]);
    /// ```
    pub fn from_roots(roots: &[C]) -> Result<Self, SynthesisError>
    where
        C: Into<i64>,
    {
        roots
            .iter()
            .enumerate()
            .try_fold(Self::one(), |acc, (step, &root)| {
                acc.mul_linear(root).map_err(|power| SynthesisError::Overflow {
                    step: step + 1,
                    root: root.into(),
                    power,
                })
            })
    }

    /// Multiply by `(x - root)`, returning a fresh polynomial one degree
    /// higher. `Err(power)` names the coefficient of `x^power` that overflowed.
    pub fn mul_linear(&self, root: C) -> Result<Self, usize> {
        let mut next = vec![C::ZERO; self.coeffs.len() + 1];
        for (j, &c) in self.coeffs.iter().enumerate() {
            next[j + 1] = next[j + 1].checked_add(&c).ok_or(j + 1)?;
            next[j] = next[j].checked_mul_sub(root, c).ok_or(j)?;
        }
        Ok(Self { coeffs: next })
    }

    /// Ascending-power coefficients (`[c_0, c_1, ..., c_d]`).
    pub fn coefficients(&self) -> &[C] {
        &self.coeffs
    }

    /// Coefficients from `x^d` down to the constant term.
    pub fn coefficients_high_to_low(
        &self,
    ) -> impl ExactSizeIterator<Item = C> + '_ {
        self.coeffs.iter().rev().copied()
    }

    /// Degree of the stored representation (length minus one).
    ///
    /// Leading zeros passed to [`From<Vec<C>>`] are trimmed, so this is the
    /// true degree for every non-zero polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Coefficient of the highest stored power; zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> C {
        self.coeffs.last().copied().unwrap_or(C::ZERO)
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient() == C::ONE
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Evaluate at `x` with Horner's rule. `None` if any step overflows.
    pub fn evaluate(&self, x: C) -> Option<C> {
        self.coeffs
            .iter()
            .rev()
            .try_fold(C::ZERO, |acc, &c| acc.checked_mul(&x)?.checked_add(&c))
    }
}

impl<C: Coefficient> From<Vec<C>> for Polynomial<C> {
    fn from(mut coeffs: Vec<C>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(C::ZERO);
        }
        Self { coeffs }
    }
}

impl<C: Coefficient, const N: usize> From<[C; N]> for Polynomial<C> {
    fn from(coeffs: [C; N]) -> Self {
        Self::from(coeffs.to_vec())
    }
}

impl<C: Coefficient> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (power, &c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            // Render the sign separately so `C::min_value()` never needs `abs`.
            let rendered = c.to_string();
            let magnitude = rendered.trim_start_matches('-');
            let negative = c < C::ZERO;
            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            let unit = magnitude == "1";
            match power {
                0 => write!(f, "{magnitude}")?,
                1 if unit => write!(f, "x")?,
                1 => write!(f, "{magnitude}x")?,
                _ if unit => write!(f, "x^{power}")?,
                _ => write!(f, "{magnitude}x^{power}")?,
            }
        }
        Ok(())
    }
}
