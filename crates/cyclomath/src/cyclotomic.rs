//! Exact arithmetic in the universal cyclotomic field, the union of all
//! cyclotomic fields `Q(ζ_n)`.
//!
//! An element with conductor `n` is stored as a polynomial in `ζ_n` of degree
//! less than `φ(n)`, reduced modulo the `n`th cyclotomic polynomial `Φ_n`.
//! Operating on two elements with different conductors first lifts both into
//! `Q(ζ_lcm)` using `ζ_a = ζ_lcm^(lcm/a)`.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use itertools::Itertools;
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use parking_lot::Mutex;

use crate::{CoefficientRing, CoercionError, Field, Float, Scalar};

lazy_static! {
    /// Cyclotomic polynomials computed so far, indexed by `n`.
    static ref CYCLOTOMIC_POLYNOMIALS: Mutex<HashMap<u32, Arc<[i64]>>> =
        Mutex::new(HashMap::new());
}

/// Returns the coefficients of the `n`th cyclotomic polynomial `Φ_n`, lowest
/// degree first.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn cyclotomic_polynomial(n: u32) -> Arc<[i64]> {
    assert_ne!(n, 0, "there is no 0th cyclotomic polynomial");

    if let Some(p) = CYCLOTOMIC_POLYNOMIALS.lock().get(&n) {
        return Arc::clone(p);
    }

    // Φ_n = (x^n - 1) / ∏ Φ_d over proper divisors d of n
    let mut p = vec![0_i64; n as usize + 1];
    p[0] = -1;
    p[n as usize] = 1;
    for d in (1..n).filter(|d| n % d == 0) {
        p = div_exact_monic(&p, &cyclotomic_polynomial(d));
    }

    log::trace!("computed cyclotomic polynomial Φ_{n} = {p:?}");
    let p: Arc<[i64]> = p.into();
    CYCLOTOMIC_POLYNOMIALS.lock().insert(n, Arc::clone(&p));
    p
}

/// Divides one integer polynomial by a monic one, assuming that the division
/// is exact.
fn div_exact_monic(num: &[i64], den: &[i64]) -> Vec<i64> {
    let den_degree = den.len() - 1;
    let mut rem = num.to_vec();
    let quotient_degree = rem.len() - 1 - den_degree;
    let mut quotient = vec![0; quotient_degree + 1];
    for k in (0..=quotient_degree).rev() {
        let c = rem[k + den_degree];
        quotient[k] = c;
        if c != 0 {
            for (j, &d) in den.iter().enumerate() {
                rem[k + j] -= c * d;
            }
        }
    }
    debug_assert!(rem.iter().all(|&r| r == 0), "inexact polynomial division");
    quotient
}

/// Reduces a polynomial in place modulo `Φ_n`.
fn reduce_mod_cyclotomic(poly: &mut Vec<BigRational>, n: u32) {
    let phi = cyclotomic_polynomial(n);
    let degree = phi.len() - 1;
    for high in (degree..poly.len()).rev() {
        let c = std::mem::replace(&mut poly[high], BigRational::zero());
        if c.is_zero() {
            continue;
        }
        // x^high = x^(high-degree) * (x^degree) ≡ -x^(high-degree) * (Φ_n - x^degree)
        for (j, &p) in phi[..degree].iter().enumerate() {
            if p != 0 {
                poly[high - degree + j] -= &c * BigRational::from_integer(BigInt::from(p));
            }
        }
    }
    poly.truncate(degree);
}

/// Element of the universal cyclotomic field.
#[derive(Debug, Clone)]
pub struct Cyclotomic {
    /// `n` such that the element is stored as a polynomial in `ζ_n`.
    ///
    /// This is always `1` for rational numbers.
    conductor: u32,
    /// Coefficients of `1, ζ_n, ζ_n^2, ...`, with no trailing zeros.
    coeffs: Vec<BigRational>,
}
impl Cyclotomic {
    /// Constructs a rational element.
    pub fn from_rational(q: BigRational) -> Self {
        Self::from_poly(1, vec![q])
    }
    /// Constructs an integer element.
    pub fn from_integer(n: i64) -> Self {
        Self::from_rational(BigRational::from_integer(BigInt::from(n)))
    }
    /// Returns `ζ_n^k` where `ζ_n = e^(2πi/n)`. This is written `E(n)^k`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn zeta_pow(n: u32, k: u32) -> Self {
        let k = (k % n) as usize;
        let mut coeffs = vec![BigRational::zero(); k + 1];
        coeffs[k] = BigRational::one();
        Self::from_poly(n, coeffs)
    }
    /// Returns `2cos(π/m) = ζ_2m + ζ_2m^(-1)`, or `None` if `2m` does not fit
    /// in a `u32`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    pub fn two_cos_pi_over(m: u32) -> Option<Self> {
        assert_ne!(m, 0, "2cos(π/0) is undefined");
        let n = m.checked_mul(2)?;
        Some(Self::zeta_pow(n, 1) + Self::zeta_pow(n, n - 1))
    }

    /// Constructs an element from an arbitrary polynomial in `ζ_n`.
    fn from_poly(conductor: u32, mut coeffs: Vec<BigRational>) -> Self {
        reduce_mod_cyclotomic(&mut coeffs, conductor);
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        let conductor = if coeffs.len() <= 1 { 1 } else { conductor };
        Cyclotomic { conductor, coeffs }
    }

    /// Returns the conductor that the element is currently stored with.
    ///
    /// This is `1` exactly when the element is rational, but otherwise is not
    /// necessarily minimal.
    pub fn conductor(&self) -> u32 {
        self.conductor
    }
    /// Returns whether the element is rational.
    pub fn is_rational(&self) -> bool {
        self.conductor == 1
    }
    /// Returns the element as a rational number, if it is one.
    pub fn to_rational(&self) -> Option<BigRational> {
        self.is_rational()
            .then(|| self.coeffs.first().cloned().unwrap_or_else(BigRational::zero))
    }

    /// Returns the coefficients of the element as a polynomial in `ζ_n`, where
    /// `n` is a multiple of the conductor.
    fn lift(&self, n: u32) -> Vec<BigRational> {
        debug_assert_eq!(n % self.conductor, 0);
        if n == self.conductor {
            return self.coeffs.clone();
        }
        let scale = (n / self.conductor) as usize;
        let mut poly = vec![BigRational::zero(); self.coeffs.len().saturating_sub(1) * scale + 1];
        for (k, c) in self.coeffs.iter().enumerate() {
            poly[k * scale] = c.clone();
        }
        reduce_mod_cyclotomic(&mut poly, n);
        poly
    }

    /// Applies a function to each coefficient.
    fn map_coeffs(self, f: impl Fn(BigRational) -> BigRational) -> Self {
        let coeffs = self.coeffs.into_iter().map(f).collect();
        Self::from_poly(self.conductor, coeffs)
    }
}

impl PartialEq for Cyclotomic {
    fn eq(&self, other: &Self) -> bool {
        if self.conductor == other.conductor {
            self.coeffs == other.coeffs
        } else {
            (self.clone() - other.clone()).is_zero()
        }
    }
}
impl Eq for Cyclotomic {}

impl fmt::Display for Cyclotomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.conductor;
        let terms = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(k, c)| {
                let magnitude = c.abs();
                let body = match k {
                    0 => magnitude.to_string(),
                    1 => format!("E({n})"),
                    _ => format!("E({n})^{k}"),
                };
                let body = if k == 0 || magnitude.is_one() {
                    body
                } else {
                    format!("{magnitude}*{body}")
                };
                (c.is_negative(), body)
            })
            .collect_vec();

        if terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (is_negative, body)) in terms.iter().enumerate() {
            match (i, is_negative) {
                (0, false) => write!(f, "{body}")?,
                (0, true) => write!(f, "-{body}")?,
                (_, false) => write!(f, " + {body}")?,
                (_, true) => write!(f, " - {body}")?,
            }
        }
        Ok(())
    }
}

impl Add for Cyclotomic {
    type Output = Cyclotomic;

    fn add(self, rhs: Self) -> Self::Output {
        let n = self.conductor.lcm(&rhs.conductor);
        let (a, b) = (self.lift(n), rhs.lift(n));
        let sum = a
            .into_iter()
            .zip_longest(b)
            .map(|pair| pair.reduce(|x, y| x + y))
            .collect();
        Self::from_poly(n, sum)
    }
}
impl Sub for Cyclotomic {
    type Output = Cyclotomic;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}
impl Mul for Cyclotomic {
    type Output = Cyclotomic;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let n = self.conductor.lcm(&rhs.conductor);
        let (a, b) = (self.lift(n), rhs.lift(n));
        let mut product = vec![BigRational::zero(); a.len() + b.len() - 1];
        for (i, x) in a.iter().enumerate() {
            if x.is_zero() {
                continue;
            }
            for (j, y) in b.iter().enumerate() {
                product[i + j] += x * y;
            }
        }
        Self::from_poly(n, product)
    }
}
impl Neg for Cyclotomic {
    type Output = Cyclotomic;

    fn neg(self) -> Self::Output {
        self.map_coeffs(|c| -c)
    }
}

impl Zero for Cyclotomic {
    fn zero() -> Self {
        Cyclotomic {
            conductor: 1,
            coeffs: vec![],
        }
    }
    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }
}
impl One for Cyclotomic {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl Scalar for Cyclotomic {
    fn to_float(&self) -> Float {
        let n = self.conductor as Float;
        self.coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| {
                c.to_float() * (std::f64::consts::TAU * k as Float / n).cos()
            })
            .sum()
    }
}

/// The universal cyclotomic field.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UniversalCyclotomicField;
impl fmt::Display for UniversalCyclotomicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Universal Cyclotomic Field")
    }
}
impl CoefficientRing for UniversalCyclotomicField {
    type Element = Cyclotomic;
    type FractionField = UniversalCyclotomicField;

    fn from_integer(&self, n: i64) -> Cyclotomic {
        Cyclotomic::from_integer(n)
    }
    fn two_cos_pi_over(&self, m: u32) -> Result<Cyclotomic, CoercionError> {
        if m == 0 {
            return Err(CoercionError::two_cos_pi_over(m, self));
        }
        Cyclotomic::two_cos_pi_over(m).ok_or_else(|| CoercionError::two_cos_pi_over(m, self))
    }

    fn fraction_field(&self) -> UniversalCyclotomicField {
        *self
    }
    fn to_fraction_field(&self, x: &Cyclotomic) -> Cyclotomic {
        x.clone()
    }
}
impl Field for UniversalCyclotomicField {
    fn div_integer(&self, x: &Cyclotomic, n: i64) -> Cyclotomic {
        assert_ne!(n, 0, "division by zero");
        let n = BigRational::from_integer(BigInt::from(n));
        x.clone().map_coeffs(|c| c / &n)
    }
}
