//! Coefficient domains and their elements.

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::Float;

/// Element of a coefficient domain.
pub trait Scalar:
    fmt::Debug
    + fmt::Display
    + Clone
    + PartialEq
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Returns the image of the element under the real embedding.
    ///
    /// For non-real elements this is the real part.
    fn to_float(&self) -> Float;

    /// Returns whether the element is zero or negative.
    fn is_nonpositive(&self) -> bool {
        self.is_zero() || self.to_float() < 0.0
    }
}

/// Coefficient domain for matrices in the reflection representation.
///
/// Domains are values (not just types) so that they can be displayed, compared,
/// and used as part of a cache key.
pub trait CoefficientRing:
    fmt::Debug + fmt::Display + Clone + Eq + Hash + Send + Sync + 'static
{
    /// Type of elements of the domain.
    type Element: Scalar;
    /// Field of fractions of the domain, which may be the domain itself.
    type FractionField: Field;

    /// Returns the image of an integer in the domain.
    fn from_integer(&self, n: i64) -> Self::Element;

    /// Returns `2cos(π/m)`, or an error if the domain cannot represent it.
    ///
    /// `m = 1` gives `-2`.
    fn two_cos_pi_over(&self, m: u32) -> Result<Self::Element, CoercionError>;

    /// Returns the field of fractions of the domain.
    fn fraction_field(&self) -> Self::FractionField;
    /// Embeds an element into the field of fractions.
    fn to_fraction_field(
        &self,
        x: &Self::Element,
    ) -> <Self::FractionField as CoefficientRing>::Element;
}

/// Coefficient domain in which every nonzero integer is invertible.
pub trait Field: CoefficientRing {
    /// Divides an element by a nonzero integer.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    fn div_integer(&self, x: &Self::Element, n: i64) -> Self::Element;
}

/// Error returned when a value cannot be represented in a coefficient domain.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to convert {value} to an element of {ring}")]
pub struct CoercionError {
    /// Description of the value.
    pub value: String,
    /// Name of the coefficient domain.
    pub ring: String,
}
impl CoercionError {
    /// Constructs the error for `2cos(π/m)` in `ring`.
    pub fn two_cos_pi_over(m: u32, ring: &impl fmt::Display) -> Self {
        CoercionError {
            value: format!("2cos(pi/{m})"),
            ring: ring.to_string(),
        }
    }
}

/// Returns `2cos(π/m)` if it is an integer.
///
/// By Niven's theorem this only happens for `m ∈ {1, 2, 3}`.
pub fn integral_two_cos_pi_over(m: u32) -> Option<i64> {
    match m {
        1 => Some(-2),
        2 => Some(0),
        3 => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_two_cos() {
        assert_eq!(integral_two_cos_pi_over(1), Some(-2));
        assert_eq!(integral_two_cos_pi_over(2), Some(0));
        assert_eq!(integral_two_cos_pi_over(3), Some(1));
        assert_eq!(integral_two_cos_pi_over(4), None);
        assert_eq!(integral_two_cos_pi_over(0), None);
    }

    #[test]
    fn test_coercion_error_message() {
        let e = CoercionError::two_cos_pi_over(4, &"Integer Ring");
        assert_eq!(
            e.to_string(),
            "unable to convert 2cos(pi/4) to an element of Integer Ring",
        );
    }
}
