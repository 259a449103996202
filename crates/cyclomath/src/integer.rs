//! Integer and rational coefficient domains.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};

use crate::ring::integral_two_cos_pi_over;
use crate::{CoefficientRing, CoercionError, Field, Float, Scalar};

impl Scalar for BigInt {
    fn to_float(&self) -> Float {
        self.to_f64().unwrap_or(Float::NAN)
    }
    fn is_nonpositive(&self) -> bool {
        !self.is_positive()
    }
}

impl Scalar for BigRational {
    fn to_float(&self) -> Float {
        self.to_f64().unwrap_or(Float::NAN)
    }
    fn is_nonpositive(&self) -> bool {
        !self.is_positive()
    }
}

/// Ring of integers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IntegerRing;
impl fmt::Display for IntegerRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer Ring")
    }
}
impl CoefficientRing for IntegerRing {
    type Element = BigInt;
    type FractionField = RationalField;

    fn from_integer(&self, n: i64) -> BigInt {
        BigInt::from(n)
    }
    fn two_cos_pi_over(&self, m: u32) -> Result<BigInt, CoercionError> {
        integral_two_cos_pi_over(m)
            .map(BigInt::from)
            .ok_or_else(|| CoercionError::two_cos_pi_over(m, self))
    }

    fn fraction_field(&self) -> RationalField {
        RationalField
    }
    fn to_fraction_field(&self, x: &BigInt) -> BigRational {
        BigRational::from_integer(x.clone())
    }
}

/// Field of rational numbers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RationalField;
impl fmt::Display for RationalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational Field")
    }
}
impl CoefficientRing for RationalField {
    type Element = BigRational;
    type FractionField = RationalField;

    fn from_integer(&self, n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }
    fn two_cos_pi_over(&self, m: u32) -> Result<BigRational, CoercionError> {
        integral_two_cos_pi_over(m)
            .map(|n| self.from_integer(n))
            .ok_or_else(|| CoercionError::two_cos_pi_over(m, self))
    }

    fn fraction_field(&self) -> RationalField {
        *self
    }
    fn to_fraction_field(&self, x: &BigRational) -> BigRational {
        x.clone()
    }
}
impl Field for RationalField {
    fn div_integer(&self, x: &BigRational, n: i64) -> BigRational {
        assert_ne!(n, 0, "division by zero");
        x.clone() / BigRational::from_integer(BigInt::from(n))
    }
}
