//! Weights and formal characters.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::ops::{Add, AddAssign};

use itertools::Itertools;
use serde::{Serialize, Serializer};
use smallvec::{SmallVec, smallvec};

/// Element of the weight lattice `Z^(m+n)`, in the basis `ε_{-m}, ...,
/// ε_{-1}, δ_1, ..., δ_n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(SmallVec<[i64; 8]>);
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}
impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}
impl Weight {
    /// Returns the zero weight.
    pub fn zero(dim: usize) -> Self {
        Self(smallvec![0; dim])
    }
    /// Returns the basis vector with index `k`.
    #[track_caller]
    pub fn unit(dim: usize, k: usize) -> Self {
        let mut ret = Self::zero(dim);
        ret.0[k] = 1;
        ret
    }
    /// Constructs a weight from its coordinates.
    pub fn from_coords(coords: impl IntoIterator<Item = i64>) -> Self {
        Self(coords.into_iter().collect())
    }

    /// Returns the dimension of the lattice containing the weight.
    pub fn dim(&self) -> usize {
        self.0.len()
    }
    /// Returns the coordinates.
    pub fn coords(&self) -> &[i64] {
        &self.0
    }
    /// Returns a coordinate, which is zero if it is out of range.
    pub fn coord(&self, k: usize) -> i64 {
        self.0.get(k).copied().unwrap_or(0)
    }
    /// Returns whether every coordinate is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&x| x == 0)
    }
}
impl AddAssign<&Weight> for Weight {
    fn add_assign(&mut self, rhs: &Weight) {
        if self.dim() < rhs.dim() {
            self.0.resize(rhs.dim(), 0);
        }
        for (a, b) in self.0.iter_mut().zip(&rhs.0) {
            *a += b;
        }
    }
}
impl Add for Weight {
    type Output = Weight;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

/// Formal `Z`-linear combination of weights.
///
/// The character of a crystal has one term for each weight, whose
/// coefficient counts the elements of that weight.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormalCharacter {
    terms: BTreeMap<Weight, i64>,
}
impl fmt::Display for FormalCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let mut is_first = true;
        for (weight, &coefficient) in &self.terms {
            let magnitude = coefficient.unsigned_abs();
            match (is_first, coefficient < 0) {
                (true, false) => (),
                (true, true) => write!(f, "-")?,
                (false, false) => write!(f, " + ")?,
                (false, true) => write!(f, " - ")?,
            }
            if magnitude != 1 {
                write!(f, "{magnitude}*")?;
            }
            write!(f, "B[{weight}]")?;
            is_first = false;
        }
        Ok(())
    }
}
impl Serialize for FormalCharacter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.terms)
    }
}
impl FormalCharacter {
    /// Returns the zero character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coefficient` copies of a weight.
    pub fn add_term(&mut self, weight: Weight, coefficient: i64) {
        match self.terms.entry(weight) {
            Entry::Vacant(e) => {
                if coefficient != 0 {
                    e.insert(coefficient);
                }
            }
            Entry::Occupied(mut e) => {
                *e.get_mut() += coefficient;
                if *e.get() == 0 {
                    e.remove();
                }
            }
        }
    }

    /// Returns the coefficient of a weight.
    pub fn coefficient(&self, weight: &Weight) -> i64 {
        self.terms.get(weight).copied().unwrap_or(0)
    }
    /// Iterates over the weights with nonzero coefficient, in increasing
    /// order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (&Weight, i64)> {
        self.terms.iter().map(|(w, &c)| (w, c))
    }
    /// Returns the number of distinct weights.
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    /// Returns whether the character is zero.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    /// Returns the sum of the coefficients, which is the number of elements
    /// of a crystal with this character.
    pub fn dimension(&self) -> i64 {
        self.terms.values().sum()
    }
}
impl FromIterator<Weight> for FormalCharacter {
    fn from_iter<T: IntoIterator<Item = Weight>>(iter: T) -> Self {
        let mut ret = Self::new();
        for weight in iter {
            ret.add_term(weight, 1);
        }
        ret
    }
}
impl Add for FormalCharacter {
    type Output = FormalCharacter;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (weight, coefficient) in rhs.terms {
            self.add_term(weight, coefficient);
        }
        self
    }
}
