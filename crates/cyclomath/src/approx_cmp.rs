//! Approximate comparison functions that automatically use [`EPSILON`].

pub use approx::AbsDiffEq;
use num_traits::Zero;

use crate::{EPSILON, Float};

/// Compares two numbers, but considers them equal if they are separated by less
/// than `EPSILON`.
///
/// Handles infinity specially.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    // use native float equality to handle infinities
    a == b || approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Returns whether one number is less than another by at least `EPSILON`.
pub fn approx_lt<T: AbsDiffEq<Epsilon = Float> + PartialOrd>(a: &T, b: &T) -> bool {
    a < b && !approx_eq(a, b)
}

/// Returns whether `x` is less than `-EPSILON`.
pub fn is_approx_negative<T: AbsDiffEq<Epsilon = Float> + PartialOrd + Zero>(x: &T) -> bool {
    approx_lt(x, &T::zero())
}
/// Returns whether `x` is less than `EPSILON`, which includes anything that is
/// approximately zero.
pub fn is_approx_nonpositive<T: AbsDiffEq<Epsilon = Float> + PartialOrd + Zero>(x: &T) -> bool {
    x < &T::zero() || approx_eq(x, &T::zero())
}
/// Returns `f` as an integer if it is approximately equal to one.
pub fn to_approx_integer(f: Float) -> Option<i64> {
    Some(f.round() as i64).filter(|&i| approx_eq(&f, &(i as Float)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_sign() {
        assert!(is_approx_nonpositive(&0.0000001));
        assert!(is_approx_nonpositive(&-3.0));
        assert!(!is_approx_nonpositive(&0.1));
        assert!(is_approx_negative(&-0.1));
        assert!(!is_approx_negative(&-0.0000001));
    }

    #[test]
    fn test_to_approx_integer() {
        assert_eq!(to_approx_integer(2.9999999), Some(3));
        assert_eq!(to_approx_integer(-1.0000001), Some(-1));
        assert_eq!(to_approx_integer(std::f64::consts::SQRT_2), None);
    }
}
