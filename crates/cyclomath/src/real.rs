//! Approximate real numbers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::approx_cmp::{approx_eq, is_approx_nonpositive};
use crate::ring::integral_two_cos_pi_over;
use crate::{CoefficientRing, CoercionError, Field, Float, Scalar};

/// Floating-point real number whose equality is approximate.
#[derive(Debug, Default, Copy, Clone)]
pub struct Real(pub Float);
impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(&self.0, &other.0)
    }
}
impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing `-0`.
        if approx_eq(&self.0, &0.0) {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
impl From<Float> for Real {
    fn from(value: Float) -> Self {
        Real(value)
    }
}

impl Add for Real {
    type Output = Real;

    fn add(self, rhs: Self) -> Self::Output {
        Real(self.0 + rhs.0)
    }
}
impl Sub for Real {
    type Output = Real;

    fn sub(self, rhs: Self) -> Self::Output {
        Real(self.0 - rhs.0)
    }
}
impl Mul for Real {
    type Output = Real;

    fn mul(self, rhs: Self) -> Self::Output {
        Real(self.0 * rhs.0)
    }
}
impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Self::Output {
        Real(-self.0)
    }
}
impl Zero for Real {
    fn zero() -> Self {
        Real(0.0)
    }
    fn is_zero(&self) -> bool {
        approx_eq(&self.0, &0.0)
    }
}
impl One for Real {
    fn one() -> Self {
        Real(1.0)
    }
}
impl Scalar for Real {
    fn to_float(&self) -> Float {
        self.0
    }
    fn is_nonpositive(&self) -> bool {
        is_approx_nonpositive(&self.0)
    }
}

/// Field of 53-bit floating-point real numbers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RealField;
impl fmt::Display for RealField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real Field with 53 bits of precision")
    }
}
impl CoefficientRing for RealField {
    type Element = Real;
    type FractionField = RealField;

    fn from_integer(&self, n: i64) -> Real {
        Real(n as Float)
    }
    fn two_cos_pi_over(&self, m: u32) -> Result<Real, CoercionError> {
        if m == 0 {
            return Err(CoercionError::two_cos_pi_over(m, self));
        }
        // Exact values avoid `cos(π/2) = 6.1e-17`.
        Ok(match integral_two_cos_pi_over(m) {
            Some(n) => self.from_integer(n),
            None => Real(2.0 * (std::f64::consts::PI / m as Float).cos()),
        })
    }

    fn fraction_field(&self) -> RealField {
        *self
    }
    fn to_fraction_field(&self, x: &Real) -> Real {
        *x
    }
}
impl Field for RealField {
    fn div_integer(&self, x: &Real, n: i64) -> Real {
        assert_ne!(n, 0, "division by zero");
        Real(x.0 / n as Float)
    }
}
