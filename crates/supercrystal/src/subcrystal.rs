use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::OnceLock;

use crate::{CrystalDigraph, CrystalElement, Index, RegularSuperCrystal, SuperCartanType};

/// Subcrystal generated by a set of elements, which is their closure under
/// the operators `e_i` and `f_i` for `i` in the index set.
#[derive(Debug, Clone)]
pub struct Subcrystal<E> {
    ambient: String,
    cartan_type: SuperCartanType,
    index_set: Vec<Index>,
    generators: Vec<E>,
    elements: Vec<E>,
    digraph: OnceLock<CrystalDigraph<E>>,
}
impl<E> fmt::Display for Subcrystal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subcrystal of {}", self.ambient)
    }
}
impl<E: CrystalElement> Subcrystal<E> {
    /// Constructs the subcrystal generated by `generators`.
    ///
    /// `ambient` names the crystal containing the generators.
    pub fn new(
        ambient: impl fmt::Display,
        cartan_type: SuperCartanType,
        index_set: Vec<Index>,
        generators: Vec<E>,
    ) -> Self {
        let mut seen: HashSet<E> = HashSet::new();
        let mut elements = vec![];
        let mut queue: VecDeque<E> = generators.iter().cloned().collect();
        while let Some(x) = queue.pop_front() {
            if !seen.insert(x.clone()) {
                continue;
            }
            for &i in &index_set {
                queue.extend(x.e(i).filter(|y| !seen.contains(y)));
                queue.extend(x.f(i).filter(|y| !seen.contains(y)));
            }
            elements.push(x);
        }

        Self {
            ambient: ambient.to_string(),
            cartan_type,
            index_set,
            generators,
            elements,
            digraph: OnceLock::new(),
        }
    }

    /// Returns the generators.
    pub fn generators(&self) -> &[E] {
        &self.generators
    }
    /// Returns whether the subcrystal contains an element.
    pub fn contains(&self, x: &E) -> bool {
        self.elements.contains(x)
    }
}
impl<E: CrystalElement> RegularSuperCrystal for Subcrystal<E> {
    type Element = E;

    fn cartan_type(&self) -> SuperCartanType {
        self.cartan_type
    }
    fn index_set(&self) -> Vec<Index> {
        self.index_set.clone()
    }
    fn elements(&self) -> &[E] {
        &self.elements
    }
    fn digraph_cache(&self) -> &OnceLock<CrystalDigraph<E>> {
        &self.digraph
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::StandardCrystal;

    #[test]
    fn test_closure_under_operators() {
        let c = StandardCrystal::new(SuperCartanType::new(2, 3));
        let top = c.letter(-2).unwrap();

        let full = Subcrystal::new(&c, c.cartan_type(), c.index_set(), vec![top]);
        assert_eq!(full.cardinality(), 5);
        assert_eq!(full.generators(), &[top]);
        assert_eq!(
            full.to_string(),
            "Subcrystal of Standard crystal of gl(2|3) on letters (-2, -1, 1, 2, 3)",
        );

        // Without the odd index, the even and odd letters are separate.
        let even = Subcrystal::new(&c, c.cartan_type(), vec![-1, 1, 2], vec![top]);
        assert_eq!(even.cardinality(), 2);
        assert!(even.contains(&c.letter(-1).unwrap()));
        assert!(!even.contains(&c.letter(1).unwrap()));
        assert_eq!(even.connected_components_generators(), vec![vec![top]]);

        // Generators in the middle of a string still produce the whole string.
        let middle = Subcrystal::new(&c, c.cartan_type(), vec![1, 2], vec![c.letter(2).unwrap()]);
        assert_eq!(middle.cardinality(), 3);
        assert_eq!(middle.connected_components_generators(), vec![vec![c.letter(1).unwrap()]]);
    }
}
