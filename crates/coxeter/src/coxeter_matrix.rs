use std::fmt;

use cyclomath::num_bigint::BigInt;
use cyclomath::Matrix;
use serde::Serialize;

use crate::{CoxeterError, CoxeterLabel, CoxeterResult};

/// Validated [Coxeter matrix](https://w.wiki/7SNw): symmetric, with 1 on the
/// diagonal and every off-diagonal entry at least 2 or infinite.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CoxeterMatrix {
    /// Rows of the matrix.
    rows: Vec<Vec<CoxeterLabel>>,
}
impl fmt::Display for CoxeterMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_integer_matrix(), f)
    }
}
impl CoxeterMatrix {
    /// Constructs and validates a Coxeter matrix from integer entries, where
    /// `-1` stands for infinity.
    pub fn from_ints(rows: &[Vec<i64>]) -> CoxeterResult<Self> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return Err(CoxeterError::NotSquare);
        }
        for i in 0..n {
            for j in 0..i {
                if rows[i][j] != rows[j][i] {
                    return Err(CoxeterError::NotSymmetric);
                }
            }
        }
        if let Some(row) = (0..n).find(|&i| rows[i][i] != 1) {
            let value = rows[row][row];
            return Err(CoxeterError::BadDiagonal { row, value });
        }

        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, r)| {
                r.iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        CoxeterLabel::from_int(value)
                            .filter(|&l| row == col || l != CoxeterLabel::DIAGONAL)
                            .ok_or(CoxeterError::BadLabel { row, col, value })
                    })
                    .collect::<CoxeterResult<Vec<_>>>()
            })
            .collect::<CoxeterResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Constructs and validates a Coxeter matrix from a function that returns
    /// each off-diagonal entry. Only `f(i, j)` with `i < j` is called.
    pub fn from_fn(
        rank: usize,
        mut f: impl FnMut(usize, usize) -> CoxeterLabel,
    ) -> CoxeterResult<Self> {
        let mut rows = vec![vec![CoxeterLabel::DIAGONAL; rank]; rank];
        for i in 0..rank {
            for j in i + 1..rank {
                let label = f(i, j);
                if label <= CoxeterLabel::DIAGONAL {
                    let value = label.as_int();
                    return Err(CoxeterError::BadLabel { row: i, col: j, value });
                }
                rows[i][j] = label;
                rows[j][i] = label;
            }
        }
        Ok(Self { rows })
    }

    /// Constructs a Coxeter matrix from a linear Schläfli symbol, where
    /// `indices[i]` is the label between generators `i` and `i + 1` and all
    /// other generators commute.
    pub fn linear(indices: &[u32]) -> CoxeterResult<Self> {
        Self::from_fn(indices.len() + 1, |i, j| {
            if j == i + 1 {
                CoxeterLabel::Finite(indices[i])
            } else {
                CoxeterLabel::COMMUTING
            }
        })
    }

    /// Returns the number of rows (and columns) of the matrix.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }
    /// Returns an entry of the matrix.
    pub fn get(&self, i: usize, j: usize) -> CoxeterLabel {
        self.rows[i][j]
    }
    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<CoxeterLabel>] {
        &self.rows
    }
    /// Returns the entries above the diagonal as `(i, j, label)`.
    pub fn upper_entries(&self) -> impl '_ + Iterator<Item = (usize, usize, CoxeterLabel)> {
        (0..self.rank()).flat_map(move |i| (i + 1..self.rank()).map(move |j| (i, j, self.get(i, j))))
    }
    /// Returns whether generators `i` and `j` are joined in the Coxeter
    /// diagram.
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        i != j && self.get(i, j).is_edge()
    }

    /// Returns the matrix with integer entries, using `-1` for infinity.
    pub fn to_ints(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|l| l.as_int()).collect())
            .collect()
    }
    /// Returns the matrix as an integer matrix, using `-1` for infinity.
    pub fn to_integer_matrix(&self) -> Matrix<BigInt> {
        Matrix::from_fn(self.rank(), |i, j| BigInt::from(self.get(i, j).as_int()))
    }
}

/// Strategy for generating valid Coxeter matrices.
#[cfg(test)]
pub(crate) fn arb_coxeter_matrix(
    max_rank: usize,
) -> impl proptest::strategy::Strategy<Value = CoxeterMatrix> {
    use proptest::prelude::*;

    (1..=max_rank).prop_flat_map(|rank| {
        let label = prop_oneof![
            4 => Just(CoxeterLabel::Finite(2)),
            3 => Just(CoxeterLabel::Finite(3)),
            2 => (4_u32..=8).prop_map(CoxeterLabel::Finite),
            1 => Just(CoxeterLabel::Infinity),
        ];
        proptest::collection::vec(label, rank * (rank - 1) / 2).prop_map(move |labels| {
            let mut labels = labels.into_iter();
            CoxeterMatrix::from_fn(rank, |_, _| {
                labels.next().unwrap_or(CoxeterLabel::COMMUTING)
            })
            .unwrap()
        })
    })
}
