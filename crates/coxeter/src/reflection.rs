//! Reflection representation of a Coxeter group.
//!
//! The vector space has a basis of simple roots `α_i` and the symmetric
//! bilinear form `B(α_i, α_j) = -cos(π/m_ij)`, where `B(α_i, α_j) = -1` if
//! `m_ij = ∞`. The simple reflection `σ_i` acts by
//!
//! ```text
//! σ_i(λ) = λ - 2 B(α_i, λ) α_i
//! ```
//!
//! so `σ_i(α_j) = α_j + 2cos(π/m_ij) α_i`. The matrix of `σ_i` is therefore
//! the identity except in row `i`, which holds `2cos(π/m_ij)` in column `j`
//! (and `-1` on the diagonal). Column `j` of any element `w` is `w(α_j)`.

use cyclomath::num::Zero;
use cyclomath::{CoefficientRing, CoercionError, Field, Matrix};

use crate::{CoxeterLabel, CoxeterMatrix, CoxeterResult};

/// Element of the fraction field of a coefficient domain.
pub type FractionElement<R> =
    <<R as CoefficientRing>::FractionField as CoefficientRing>::Element;

/// Returns `2cos(π/m)` for a Coxeter label `m`, which is `2` if `m = ∞`.
pub fn label_value<R: CoefficientRing>(
    ring: &R,
    label: CoxeterLabel,
) -> Result<R::Element, CoercionError> {
    match label {
        CoxeterLabel::Finite(m) => ring.two_cos_pi_over(m),
        CoxeterLabel::Infinity => Ok(ring.from_integer(2)),
    }
}

/// Generator matrices and bilinear form of the reflection representation.
#[derive(Debug, Clone)]
pub struct ReflectionRepresentation<R: CoefficientRing> {
    generators: Vec<Matrix<R::Element>>,
    bilinear_form: Matrix<FractionElement<R>>,
}
impl<R: CoefficientRing> ReflectionRepresentation<R> {
    /// Constructs the reflection representation of a Coxeter matrix over a
    /// coefficient domain, or returns an error if the domain does not contain
    /// `2cos(π/m)` for some entry `m`.
    pub fn new(m: &CoxeterMatrix, ring: &R) -> CoxeterResult<Self> {
        let n = m.rank();
        let values = m
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&label| label_value(ring, label))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let generators = (0..n)
            .map(|i| {
                let mut g: Matrix<R::Element> = Matrix::ident(n);
                for (j, value) in values[i].iter().enumerate() {
                    let entry = g.get_mut(i, j);
                    *entry = entry.clone() + value.clone();
                }
                g
            })
            .collect();

        let field = ring.fraction_field();
        let bilinear_form = Matrix::from_fn(n, |i, j| {
            if m.get(i, j) == CoxeterLabel::COMMUTING {
                <FractionElement<R> as Zero>::zero()
            } else {
                field.div_integer(&ring.to_fraction_field(&values[i][j]), -2)
            }
        });

        Ok(Self {
            generators,
            bilinear_form,
        })
    }

    /// Returns the matrices of the simple reflections.
    pub fn generators(&self) -> &[Matrix<R::Element>] {
        &self.generators
    }
    /// Returns the matrix of the bilinear form over the fraction field.
    pub fn bilinear_form(&self) -> &Matrix<FractionElement<R>> {
        &self.bilinear_form
    }
}
