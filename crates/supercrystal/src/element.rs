use std::fmt;
use std::hash::Hash;

use crate::{Index, SuperCartanType, Weight};

/// Element of a regular super crystal.
///
/// Implementors provide the Kashiwara operators and the weight. String
/// lengths and the highest weight test are derived from them.
pub trait CrystalElement: fmt::Debug + fmt::Display + Clone + Eq + Hash {
    /// Returns the Cartan type of the crystal containing the element.
    fn cartan_type(&self) -> SuperCartanType;

    /// Applies the raising operator `e_i`, returning `None` if the result is
    /// zero.
    fn e(&self, i: Index) -> Option<Self>;
    /// Applies the lowering operator `f_i`, returning `None` if the result is
    /// zero.
    fn f(&self, i: Index) -> Option<Self>;
    /// Returns the weight of the element.
    fn weight(&self) -> Weight;

    /// Returns the number of times `e_i` can be applied to the element.
    fn epsilon(&self, i: Index) -> usize {
        std::iter::successors(self.e(i), |x| x.e(i)).count()
    }
    /// Returns the number of times `f_i` can be applied to the element.
    fn phi(&self, i: Index) -> usize {
        std::iter::successors(self.f(i), |x| x.f(i)).count()
    }

    /// Returns whether no raising operator `e_i` with `i` in `index_set`
    /// applies to the element.
    fn is_highest_weight(&self, index_set: &[Index]) -> bool {
        index_set.iter().all(|&i| self.e(i).is_none())
    }
}
