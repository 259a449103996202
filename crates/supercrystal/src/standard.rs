use std::fmt;
use std::sync::OnceLock;

use itertools::Itertools;

use crate::{CrystalDigraph, CrystalElement, Index, RegularSuperCrystal, SuperCartanType, Weight};

/// Letter in the standard crystal of `gl(m|n)`, which is one of `-m, ...,
/// -1` (even) or `1, ..., n` (odd).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter {
    cartan_type: SuperCartanType,
    value: i32,
}
impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
impl Letter {
    /// Returns the letter with a given value, or `None` if it is not in the
    /// alphabet of `cartan_type`.
    pub fn new(cartan_type: SuperCartanType, value: i32) -> Option<Self> {
        let in_range = (-(cartan_type.m as i32)..=-1).contains(&value)
            || (1..=cartan_type.n as i32).contains(&value);
        in_range.then_some(Self { cartan_type, value })
    }

    /// Returns the value of the letter.
    pub fn value(self) -> i32 {
        self.value
    }
    /// Returns whether the letter is odd.
    pub fn is_odd(self) -> bool {
        self.value > 0
    }
    /// Returns the position of the letter in the alphabet.
    pub fn position(self) -> usize {
        match self.value < 0 {
            true => (self.cartan_type.m as i32 + self.value) as usize,
            false => self.cartan_type.m + self.value as usize - 1,
        }
    }

    fn with_value(self, value: i32) -> Self {
        Self { value, ..self }
    }
}
impl CrystalElement for Letter {
    fn cartan_type(&self) -> SuperCartanType {
        self.cartan_type
    }

    fn e(&self, i: Index) -> Option<Self> {
        if !self.cartan_type.contains_index(i) {
            return None;
        }
        let value = match i {
            ..0 => (self.value == i).then_some(i - 1),
            0 => (self.value == 1).then_some(-1),
            1.. => (self.value == i + 1).then_some(i),
        }?;
        Some(self.with_value(value))
    }

    fn f(&self, i: Index) -> Option<Self> {
        if !self.cartan_type.contains_index(i) {
            return None;
        }
        let value = match i {
            ..0 => (self.value == i - 1).then_some(i),
            0 => (self.value == -1).then_some(1),
            1.. => (self.value == i).then_some(i + 1),
        }?;
        Some(self.with_value(value))
    }

    fn weight(&self) -> Weight {
        Weight::unit(self.cartan_type.weight_dim(), self.position())
    }
}

/// Crystal of the natural representation of `gl(m|n)`.
///
/// ```text
///       f_{-m+1}        f_{-1}      f_0      f_1        f_{n-1}
///   -m ---------> ... ---------> -1 ----> 1 -----> ... ---------> n
/// ```
#[derive(Debug, Clone)]
pub struct StandardCrystal {
    cartan_type: SuperCartanType,
    letters: Vec<Letter>,
    digraph: OnceLock<CrystalDigraph<Letter>>,
}
impl fmt::Display for StandardCrystal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Standard crystal of {} on letters ({})",
            self.cartan_type,
            self.letters.iter().join(", "),
        )
    }
}
impl StandardCrystal {
    /// Constructs the standard crystal of `gl(m|n)`.
    pub fn new(cartan_type: SuperCartanType) -> Self {
        let m = cartan_type.m as i32;
        let n = cartan_type.n as i32;
        let letters = (-m..=-1)
            .chain(1..=n)
            .map(|value| Letter { cartan_type, value })
            .collect();
        Self {
            cartan_type,
            letters,
            digraph: OnceLock::new(),
        }
    }

    /// Returns the letter with a given value, or `None` if it is not in the
    /// alphabet.
    pub fn letter(&self, value: i32) -> Option<Letter> {
        Letter::new(self.cartan_type, value)
    }
}
impl RegularSuperCrystal for StandardCrystal {
    type Element = Letter;

    fn cartan_type(&self) -> SuperCartanType {
        self.cartan_type
    }
    fn elements(&self) -> &[Letter] {
        &self.letters
    }
    fn digraph_cache(&self) -> &OnceLock<CrystalDigraph<Letter>> {
        &self.digraph
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn gl23() -> StandardCrystal {
        StandardCrystal::new(SuperCartanType::new(2, 3))
    }

    #[test]
    fn test_letters() {
        let c = gl23();
        assert_eq!(c.to_string(), "Standard crystal of gl(2|3) on letters (-2, -1, 1, 2, 3)");
        assert_eq!(c.cardinality(), 5);
        assert_eq!(c.letter(0), None);
        assert_eq!(c.letter(4), None);
        assert_eq!(c.letter(-3), None);
        let positions = c.elements().iter().map(|x| x.position()).collect_vec();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
        assert!(c.letter(2).unwrap().is_odd());
        assert_eq!(
            c.letter(1).unwrap().weight(),
            Weight::from_coords([0, 0, 1, 0, 0]),
        );
    }

    #[test]
    fn test_operators() {
        let c = gl23();
        let l = |v| c.letter(v).unwrap();

        assert_eq!(l(-2).f(-1), Some(l(-1)));
        assert_eq!(l(-1).f(0), Some(l(1)));
        assert_eq!(l(1).f(1), Some(l(2)));
        assert_eq!(l(2).f(2), Some(l(3)));
        assert_eq!(l(3).f(3), None);
        assert_eq!(l(-1).f(-1), None);
        assert_eq!(l(1).e(0), Some(l(-1)));
        assert_eq!(l(-2).e(-1), None);

        for x in c.elements() {
            for i in c.index_set() {
                assert!(x.epsilon(i) <= 1);
                assert_eq!(x.phi(i) == 0, x.f(i).is_none());
                if let Some(y) = x.f(i) {
                    assert_eq!(y.e(i), Some(*x));
                }
            }
        }
        assert!(l(-2).is_highest_weight(&c.index_set()));
        assert!(!l(1).is_highest_weight(&c.index_set()));
        assert!(l(1).is_highest_weight(&[1, 2]));
    }

    #[test]
    fn test_digraph() {
        let c = gl23();
        let d = c.digraph();
        assert_eq!(d.to_string(), "Digraph on 5 vertices");
        assert_eq!(d.edge_count(), 4);
        let l = |v| c.letter(v).unwrap();
        assert!(d.has_edge(&l(-1), &l(1), 0));
        assert!(!d.has_edge(&l(-1), &l(1), 1));
        assert!(std::ptr::eq(d, c.digraph()));
        assert_eq!(d.vertices().count(), 5);
        assert_eq!(
            d.edges().map(|(_, _, i)| i).sorted().collect_vec(),
            vec![-1, 0, 1, 2],
        );
    }

    #[test]
    fn test_components() {
        let c = gl23();
        let top = c.letter(-2).unwrap();
        assert_eq!(c.connected_components_generators(), vec![vec![top]]);
        let components = c.connected_components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].cardinality(), 5);
        assert_eq!(
            components[0].to_string(),
            "Subcrystal of Standard crystal of gl(2|3) on letters (-2, -1, 1, 2, 3)",
        );

        let ch = c.character();
        assert_eq!(ch.dimension(), 5);
        assert_eq!(
            ch.to_string(),
            "B[(0, 0, 0, 0, 1)] + B[(0, 0, 0, 1, 0)] + B[(0, 0, 1, 0, 0)] + \
             B[(0, 1, 0, 0, 0)] + B[(1, 0, 0, 0, 0)]",
        );
    }

    #[test]
    fn test_purely_even_and_odd() {
        let c = StandardCrystal::new(SuperCartanType::new(3, 0));
        assert_eq!(c.index_set(), vec![-2, -1]);
        assert_eq!(c.digraph().edge_count(), 2);
        assert_eq!(c.connected_components().len(), 1);

        let c = StandardCrystal::new(SuperCartanType::new(0, 2));
        let l = |v| c.letter(v).unwrap();
        assert_eq!(l(1).f(1), Some(l(2)));
        assert_eq!(l(1).f(0), None);
        assert_eq!(c.connected_components_generators(), vec![vec![l(1)]]);
    }
}
