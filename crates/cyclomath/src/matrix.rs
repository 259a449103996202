//! Square matrices over a coefficient domain.

use std::fmt;
use std::ops::{Add, Mul};

use itertools::Itertools;

use crate::Scalar;

/// N-by-N square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// Number of rows and columns.
    ndim: usize,
    /// Elements stored in **row-major** order.
    elems: Vec<T>,
}
impl<T: Scalar> Matrix<T> {
    /// Constructs a matrix with all zeros.
    pub fn zero(ndim: usize) -> Self {
        Self::from_fn(ndim, |_, _| T::zero())
    }
    /// Constructs an identity matrix.
    pub fn ident(ndim: usize) -> Self {
        Self::from_fn(ndim, |i, j| if i == j { T::one() } else { T::zero() })
    }
    /// Constructs a matrix from a function of `(row, col)` for each element.
    pub fn from_fn(ndim: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let elems = (0..ndim)
            .cartesian_product(0..ndim)
            .map(|(i, j)| f(i, j))
            .collect();
        Matrix { ndim, elems }
    }
    /// Constructs a matrix from a list of rows, or returns `None` if the rows
    /// do not form a square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let ndim = rows.len();
        if rows.iter().any(|row| row.len() != ndim) {
            return None;
        }
        let elems = rows.into_iter().flatten().collect();
        Some(Matrix { ndim, elems })
    }

    /// Returns the number of rows (and columns) of the matrix.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Returns an element of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> &T {
        assert!(row < self.ndim && col < self.ndim, "matrix index out of bounds");
        &self.elems[row * self.ndim + col]
    }
    /// Returns a mutable reference to an element of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[track_caller]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert!(row < self.ndim && col < self.ndim, "matrix index out of bounds");
        &mut self.elems[row * self.ndim + col]
    }
    /// Returns a row of the matrix.
    pub fn row(&self, row: usize) -> &[T] {
        &self.elems[row * self.ndim..(row + 1) * self.ndim]
    }
    /// Returns an iterator over a column of the matrix.
    pub fn col(&self, col: usize) -> impl '_ + ExactSizeIterator<Item = &T> {
        (0..self.ndim).map(move |row| self.get(row, col))
    }
    /// Returns an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl '_ + Iterator<Item = &[T]> {
        (0..self.ndim).map(|row| self.row(row))
    }
    /// Returns an iterator over the nonzero entries of the matrix, in row-major
    /// order.
    pub fn nonzero_entries(&self) -> impl '_ + Iterator<Item = ((usize, usize), &T)> {
        self.elems
            .iter()
            .enumerate()
            .filter(|(_, x)| !x.is_zero())
            .map(|(i, x)| ((i / self.ndim, i % self.ndim), x))
    }

    /// Returns the transpose of the matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ndim, |i, j| self.get(j, i).clone())
    }
    /// Returns whether the matrix is equal to its transpose.
    pub fn is_symmetric(&self) -> bool {
        (0..self.ndim).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
    /// Returns whether the matrix is the identity matrix.
    pub fn is_ident(&self) -> bool {
        *self == Self::ident(self.ndim)
    }

    /// Applies a function to every element of the matrix.
    pub fn map<U: Scalar>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            ndim: self.ndim,
            elems: self.elems.iter().map(f).collect(),
        }
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strings = self.elems.iter().map(|x| x.to_string()).collect_vec();
        let width = strings.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        for (i, row) in strings.chunks(self.ndim.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, s) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{s:>width$}")?;
            }
            write!(f, "]")?;
        }
        if self.ndim == 0 {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(self.ndim, rhs.ndim, "matrix dimension mismatch");
        Matrix::from_fn(self.ndim, |i, j| {
            self.row(i)
                .iter()
                .zip(rhs.col(j))
                .filter(|(a, b)| !a.is_zero() && !b.is_zero())
                .fold(T::zero(), |sum, (a, b)| sum + a.clone() * b.clone())
        })
    }
}
impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.ndim, rhs.ndim, "matrix dimension mismatch");
        Matrix::from_fn(self.ndim, |i, j| {
            self.get(i, j).clone() + rhs.get(i, j).clone()
        })
    }
}
impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

/// Constructs a matrix from rows of integers in a coefficient domain.
#[macro_export]
macro_rules! int_matrix {
    ($ring:expr; $([$($n:expr),* $(,)?]),* $(,)?) => {
        $crate::Matrix::from_rows(vec![
            $(vec![$($crate::CoefficientRing::from_integer(&$ring, $n)),*]),*
        ])
        .expect("matrix must be square")
    };
}
