//! Exact cyclotomic, rational, and approximate real scalars, along with square
//! matrices over them.
//!
//! Every coefficient domain implements [`CoefficientRing`], which knows how to
//! produce the values `2cos(π/m)` that appear in the reflection representation
//! of a Coxeter group.

pub use {approx, num_bigint, num_rational, num_traits as num};

/// Floating-point type used for real embeddings and approximate arithmetic.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

pub mod approx_cmp;
pub mod cyclotomic;
pub mod integer;
pub mod matrix;
pub mod real;
pub mod ring;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::cyclotomic::{Cyclotomic, UniversalCyclotomicField};
    pub use crate::integer::{IntegerRing, RationalField};
    pub use crate::matrix::Matrix;
    pub use crate::real::{Real, RealField};
    pub use crate::ring::{CoefficientRing, CoercionError, Field, Scalar};
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
