use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{Index, Weight};

/// Cartan type of the general linear Lie superalgebra `gl(m|n)`, also known
/// as `A(m-1|n-1)`.
///
/// The index set is `-m+1..=n-1`. Negative indices are the even simple roots
/// of `gl(m)`, positive indices are the even simple roots of `gl(n)`, and
/// index `0` is the odd simple root joining them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SuperCartanType {
    /// Size of the even block.
    pub m: usize,
    /// Size of the odd block.
    pub n: usize,
}
impl fmt::Display for SuperCartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gl({}|{})", self.m, self.n)
    }
}
impl SuperCartanType {
    /// Constructs the Cartan type of `gl(m|n)`.
    pub fn new(m: usize, n: usize) -> Self {
        Self { m, n }
    }

    /// Returns the range of indices.
    pub fn index_range(self) -> RangeInclusive<Index> {
        -(self.m as Index) + 1..=self.n as Index - 1
    }
    /// Returns the index set in increasing order.
    pub fn index_set(self) -> Vec<Index> {
        self.index_range().collect()
    }
    /// Returns whether `i` is in the index set.
    pub fn contains_index(self, i: Index) -> bool {
        self.index_range().contains(&i)
    }
    /// Returns whether `i` is the odd index.
    pub fn is_odd(self, i: Index) -> bool {
        i == 0 && self.contains_index(0)
    }

    /// Returns the dimension of the weight lattice.
    pub fn weight_dim(self) -> usize {
        self.m + self.n
    }
    /// Returns the pairing of the odd coroot `h_0` with a weight, which is
    /// the sum of its last even and first odd coordinates.
    pub fn odd_pairing(self, weight: &Weight) -> i64 {
        if self.m == 0 || self.n == 0 {
            return 0;
        }
        weight.coord(self.m - 1) + weight.coord(self.m)
    }
}
