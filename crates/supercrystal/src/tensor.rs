//! Tensor products of crystals.
//!
//! For an even index `i`, the operators act by the signature rule. Each
//! factor `b` contributes `ε_i(b)` minus signs followed by `φ_i(b)` plus
//! signs, and adjacent `+ -` pairs cancel until the signature reads
//! `- ... - + ... +`. Then `f_i` acts on the factor of the leftmost
//! remaining `+` and `e_i` acts on the factor of the rightmost remaining `-`.
//! Factors are read left to right for `i < 0` and right to left for `i > 0`.
//!
//! For the odd index, both operators act on the leftmost factor whose weight
//! pairs nontrivially with the odd coroot.

use std::fmt;
use std::sync::OnceLock;

use itertools::{Either, Itertools};

use crate::{
    CrystalDigraph, CrystalElement, CrystalError, CrystalResult, Index, RegularSuperCrystal,
    SuperCartanType, Weight,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Operator {
    Raise,
    Lower,
}
impl Operator {
    fn apply<E: CrystalElement>(self, x: &E, i: Index) -> Option<E> {
        match self {
            Operator::Raise => x.e(i),
            Operator::Lower => x.f(i),
        }
    }
}

/// Element of a tensor product of crystals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TensorElement<E> {
    cartan_type: SuperCartanType,
    factors: Vec<E>,
}
impl<E: fmt::Display> fmt::Display for TensorElement<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.factors.iter().join(", "))
    }
}
impl<E: CrystalElement> TensorElement<E> {
    /// Constructs a tensor product of elements.
    pub fn new(cartan_type: SuperCartanType, factors: Vec<E>) -> Self {
        Self {
            cartan_type,
            factors,
        }
    }

    /// Returns the factors.
    pub fn factors(&self) -> &[E] {
        &self.factors
    }

    fn apply(&self, op: Operator, i: Index) -> Option<Self> {
        if !self.cartan_type.contains_index(i) {
            return None;
        }
        let k = if self.cartan_type.is_odd(i) {
            self.factors
                .iter()
                .position(|b| self.cartan_type.odd_pairing(&b.weight()) != 0)?
        } else {
            self.signature_factor(op, i)?
        };
        let mut factors = self.factors.clone();
        factors[k] = op.apply(&factors[k], i)?;
        Some(Self {
            cartan_type: self.cartan_type,
            factors,
        })
    }

    /// Returns the factor that an even operator acts on.
    fn signature_factor(&self, op: Operator, i: Index) -> Option<usize> {
        let n = self.factors.len();
        let reading_order = match i < 0 {
            true => Either::Left(0..n),
            false => Either::Right((0..n).rev()),
        };

        let mut rightmost_minus = None;
        let mut unmatched_plus: Vec<usize> = vec![];
        for k in reading_order {
            let b = &self.factors[k];
            for _ in 0..b.epsilon(i) {
                if unmatched_plus.pop().is_none() {
                    rightmost_minus = Some(k);
                }
            }
            unmatched_plus.extend(std::iter::repeat_n(k, b.phi(i)));
        }

        match op {
            Operator::Raise => rightmost_minus,
            Operator::Lower => unmatched_plus.first().copied(),
        }
    }
}
impl<E: CrystalElement> CrystalElement for TensorElement<E> {
    fn cartan_type(&self) -> SuperCartanType {
        self.cartan_type
    }

    fn e(&self, i: Index) -> Option<Self> {
        self.apply(Operator::Raise, i)
    }
    fn f(&self, i: Index) -> Option<Self> {
        self.apply(Operator::Lower, i)
    }

    fn weight(&self) -> Weight {
        self.factors
            .iter()
            .fold(Weight::zero(self.cartan_type.weight_dim()), |sum, b| {
                sum + b.weight()
            })
    }
}

/// Tensor product of finite crystals of the same Cartan type.
#[derive(Debug, Clone)]
pub struct TensorProduct<C: RegularSuperCrystal> {
    cartan_type: SuperCartanType,
    factors: Vec<C>,
    elements: Vec<TensorElement<C::Element>>,
    digraph: OnceLock<CrystalDigraph<TensorElement<C::Element>>>,
}
impl<C: RegularSuperCrystal> fmt::Display for TensorProduct<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Full tensor product of the crystals [{}]",
            self.factors.iter().join(", "),
        )
    }
}
impl<C: RegularSuperCrystal> TensorProduct<C> {
    /// Constructs the tensor product `first ⊗ rest[0] ⊗ rest[1] ⊗ ...`, or
    /// returns an error if the Cartan types differ.
    pub fn new(first: C, rest: impl IntoIterator<Item = C>) -> CrystalResult<Self> {
        let cartan_type = first.cartan_type();
        let factors = std::iter::once(first).chain(rest).collect_vec();
        if let Some(other) = factors.iter().find(|c| c.cartan_type() != cartan_type) {
            return Err(CrystalError::CartanTypeMismatch {
                expected: cartan_type,
                got: other.cartan_type(),
            });
        }

        let elements = factors
            .iter()
            .map(|c| c.elements().iter().cloned())
            .multi_cartesian_product()
            .map(|factors| TensorElement::new(cartan_type, factors))
            .collect_vec();
        log::debug!(
            "tensor product of {} crystals of type {cartan_type} has {} elements",
            factors.len(),
            elements.len(),
        );

        Ok(Self {
            cartan_type,
            factors,
            elements,
            digraph: OnceLock::new(),
        })
    }

    /// Returns the factors.
    pub fn factors(&self) -> &[C] {
        &self.factors
    }
}
impl<C: RegularSuperCrystal> RegularSuperCrystal for TensorProduct<C> {
    type Element = TensorElement<C::Element>;

    fn cartan_type(&self) -> SuperCartanType {
        self.cartan_type
    }
    fn elements(&self) -> &[Self::Element] {
        &self.elements
    }
    fn digraph_cache(&self) -> &OnceLock<CrystalDigraph<Self::Element>> {
        &self.digraph
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{FormalCharacter, Letter, StandardCrystal};

    fn tensor_power(m: usize, n: usize, k: usize) -> TensorProduct<StandardCrystal> {
        let c = StandardCrystal::new(SuperCartanType::new(m, n));
        c.tensor(&vec![&c; k - 1]).unwrap()
    }

    fn word(t: &TensorProduct<StandardCrystal>, values: &[i32]) -> TensorElement<Letter> {
        let c = &t.factors()[0];
        TensorElement::new(
            t.cartan_type(),
            values.iter().map(|&v| c.letter(v).unwrap()).collect(),
        )
    }

    /// Returns the components as `(size, generators)`, sorted.
    fn decomposition(t: &TensorProduct<StandardCrystal>) -> Vec<(usize, Vec<Vec<i32>>)> {
        t.connected_components()
            .into_iter()
            .map(|component| {
                let generators = component
                    .generators()
                    .iter()
                    .map(|g| g.factors().iter().map(|b| b.value()).collect())
                    .collect();
                (component.cardinality(), generators)
            })
            .sorted()
            .collect()
    }

    #[test]
    fn test_gl_2_3_tensor_square() {
        let t = tensor_power(2, 3, 2);
        assert_eq!(t.cardinality(), 25);
        assert_eq!(
            t.to_string(),
            "Full tensor product of the crystals [Standard crystal of gl(2|3) on letters \
             (-2, -1, 1, 2, 3), Standard crystal of gl(2|3) on letters (-2, -1, 1, 2, 3)]",
        );
        assert_eq!(
            decomposition(&t),
            vec![(12, vec![vec![-2, -2]]), (13, vec![vec![-2, -1]])],
        );

        let generators: HashSet<String> = t
            .connected_components_generators()
            .into_iter()
            .flatten()
            .map(|g| g.to_string())
            .collect();
        assert_eq!(generators, HashSet::from(["[-2, -2]".to_string(), "[-2, -1]".to_string()]));
    }

    #[test]
    fn test_small_decompositions() {
        assert_eq!(
            decomposition(&tensor_power(2, 1, 2)),
            vec![(4, vec![vec![-2, -1]]), (5, vec![vec![-2, -2]])],
        );
        assert_eq!(
            decomposition(&tensor_power(1, 2, 2)),
            vec![(4, vec![vec![-1, -1]]), (5, vec![vec![-1, 1]])],
        );
        assert_eq!(
            decomposition(&tensor_power(3, 1, 2)),
            vec![(7, vec![vec![-3, -2]]), (9, vec![vec![-3, -3]])],
        );
        assert_eq!(
            decomposition(&tensor_power(1, 1, 3)),
            vec![
                (2, vec![vec![-1, -1, -1]]),
                (2, vec![vec![-1, -1, 1]]),
                (2, vec![vec![-1, 1, -1]]),
                (2, vec![vec![-1, 1, 1]]),
            ],
        );
        assert_eq!(
            decomposition(&tensor_power(2, 2, 3)),
            vec![
                (12, vec![vec![-2, -2, -2]]),
                (12, vec![vec![-2, -1, 1]]),
                (20, vec![vec![-2, -2, -1]]),
                (20, vec![vec![-2, -1, -2]]),
            ],
        );
    }

    #[test]
    fn test_tensor_rule() {
        let t = tensor_power(2, 3, 2);

        // Even negative index: read left to right.
        assert_eq!(word(&t, &[-2, -2]).f(-1), Some(word(&t, &[-1, -2])));
        assert_eq!(word(&t, &[-1, -2]).f(-1), Some(word(&t, &[-1, -1])));
        assert_eq!(word(&t, &[-1, -2]).e(-1), Some(word(&t, &[-2, -2])));
        assert_eq!(word(&t, &[-2, -1]).e(-1), None);
        assert_eq!(word(&t, &[-2, -2]).phi(-1), 2);

        // Even positive index: read right to left.
        assert_eq!(word(&t, &[1, 1]).f(1), Some(word(&t, &[1, 2])));
        assert_eq!(word(&t, &[1, 2]).f(1), Some(word(&t, &[2, 2])));
        assert_eq!(word(&t, &[1, 2]).e(1), Some(word(&t, &[1, 1])));
        assert_eq!(word(&t, &[2, 1]).e(1), None);

        // Odd index: the leftmost factor that pairs with `h_0`.
        assert_eq!(word(&t, &[-2, -1]).f(0), Some(word(&t, &[-2, 1])));
        assert_eq!(word(&t, &[-1, -1]).f(0), Some(word(&t, &[1, -1])));
        assert_eq!(word(&t, &[1, -1]).f(0), None);
        assert_eq!(word(&t, &[1, -1]).e(0), Some(word(&t, &[-1, -1])));
        assert_eq!(word(&t, &[2, 3]).f(0), None);

        assert_eq!(word(&t, &[-2, -2]).f(3), None);
        assert_eq!(word(&t, &[-2, 3]).weight(), Weight::from_coords([1, 0, 0, 0, 1]));
    }

    #[test]
    fn test_cartan_type_mismatch() {
        let a = StandardCrystal::new(SuperCartanType::new(2, 3));
        let b = StandardCrystal::new(SuperCartanType::new(1, 1));
        assert_eq!(
            a.tensor(&[&a, &b]).unwrap_err(),
            CrystalError::CartanTypeMismatch {
                expected: SuperCartanType::new(2, 3),
                got: SuperCartanType::new(1, 1),
            },
        );
        assert_eq!(
            a.tensor(&[&b]).unwrap_err().to_string(),
            "all crystals must be of the same Cartan type (expected gl(2|3), got gl(1|1))",
        );
    }

    #[test]
    fn test_character_of_tensor_square() {
        let t = tensor_power(2, 3, 2);
        let ch = t.character();
        assert_eq!(ch.dimension(), 25);
        assert_eq!(ch.len(), 15);
        assert_eq!(ch.coefficient(&Weight::from_coords([2, 0, 0, 0, 0])), 1);
        assert_eq!(ch.coefficient(&Weight::from_coords([1, 1, 0, 0, 0])), 2);

        let by_component = t
            .connected_components()
            .iter()
            .map(|c| c.character())
            .fold(FormalCharacter::new(), |sum, c| sum + c);
        assert_eq!(by_component, ch);
    }

    proptest! {
        #[test]
        fn proptest_operators_are_inverse(
            m in 1_usize..=3,
            n in 1_usize..=3,
            k in 1_usize..=3,
            seed in any::<usize>(),
        ) {
            let t = tensor_power(m, n, k);
            let x = &t.elements()[seed % t.cardinality()];
            for i in t.index_set() {
                if let Some(y) = x.f(i) {
                    prop_assert_eq!(y.e(i), Some(x.clone()));
                    prop_assert_eq!(y.phi(i) + 1, x.phi(i));
                }
                if let Some(y) = x.e(i) {
                    prop_assert_eq!(y.f(i), Some(x.clone()));
                }
            }
        }

        #[test]
        fn proptest_components_partition(m in 1_usize..=2, n in 1_usize..=2, k in 1_usize..=3) {
            let t = tensor_power(m, n, k);
            let index_set = t.index_set();
            let mut seen = HashSet::new();
            for component in t.connected_components() {
                prop_assert!(!component.generators().is_empty());
                for g in component.generators() {
                    prop_assert!(g.is_highest_weight(&index_set));
                }
                for x in component.elements() {
                    prop_assert!(seen.insert(x.clone()), "{} is in two components", x);
                }
            }
            prop_assert_eq!(seen.len(), t.cardinality());
        }
    }
}
