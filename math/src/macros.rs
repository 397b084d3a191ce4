//! Shared macros for constructing core math primitives.

/// Construct a [`Polynomial`](crate::poly::Polynomial) from ascending-power
/// coefficients.
///
/// ```
/// use math::prelude::*;
///
/// let p: Polynomial = poly![6, -5, 1];
/// assert_eq!(p.to_string(), "x^2 - 5x + 6");
/// assert_eq!(poly![0; 3], Polynomial::from(vec![0i64]));
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::prelude::Polynomial::one()
    }};
    ($arr:expr) => {{
        $crate::prelude::Polynomial::from($arr)
    }};
    ($val:expr; $count:expr) => {{
        let value = $val;
        let count = $count;
        $crate::prelude::Polynomial::from(vec![value; count])
    }};
    ($($coeff:expr),+ $(,)?) => {{
        $crate::prelude::Polynomial::from(vec![$($coeff),+])
    }};
}

/// Build the monic polynomial with the given roots, propagating overflow.
///
/// ```
/// use math::prelude::*;
///
/// let p: Polynomial = from_roots![2, 3].unwrap();
/// assert_eq!(p, poly![6, -5, 1]);
/// ```
#[macro_export]
macro_rules! from_roots {
    ($($root:expr),* $(,)?) => {
        $crate::prelude::Polynomial::from_roots(&[$($root),*])
    };
}
