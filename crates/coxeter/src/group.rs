use std::collections::HashMap;
use std::fmt;
use std::ops::Mul;
use std::sync::{Arc, Weak};

use cyclomath::{CoefficientRing, Matrix, Scalar, UniversalCyclotomicField};
use itertools::Itertools;
use smallvec::SmallVec;

use crate::cache;
use crate::classify;
use crate::label::default_index_set;
use crate::reflection::{FractionElement, ReflectionRepresentation};
use crate::{
    CartanType, CoxeterDiagram, CoxeterError, CoxeterMatrix, CoxeterResult, IndexLabel,
};

/// Description of a Coxeter system, before it is normalized to a Coxeter
/// matrix and index set.
#[derive(Debug, Clone)]
pub enum CoxeterGroupData {
    /// Coxeter matrix, with default index set `0..n`.
    Matrix(CoxeterMatrix),
    /// Coxeter diagram, with default index set the sorted vertices.
    Diagram(CoxeterDiagram),
    /// Finite Cartan type, with default index set `1..=n`.
    CartanType(CartanType),
}
impl From<CoxeterMatrix> for CoxeterGroupData {
    fn from(value: CoxeterMatrix) -> Self {
        Self::Matrix(value)
    }
}
impl From<CoxeterDiagram> for CoxeterGroupData {
    fn from(value: CoxeterDiagram) -> Self {
        Self::Diagram(value)
    }
}
impl From<CartanType> for CoxeterGroupData {
    fn from(value: CartanType) -> Self {
        Self::CartanType(value)
    }
}
impl CoxeterGroupData {
    /// Returns the Coxeter matrix and index set, using `index_set` if it is
    /// given.
    pub fn normalize(
        self,
        index_set: Option<Vec<IndexLabel>>,
    ) -> CoxeterResult<(CoxeterMatrix, Vec<IndexLabel>)> {
        let (m, default_index_set) = match self {
            CoxeterGroupData::Matrix(m) => {
                let index_set = default_index_set(m.rank());
                (m, index_set)
            }
            CoxeterGroupData::Diagram(g) => g.to_coxeter_matrix()?,
            CoxeterGroupData::CartanType(t) => (t.coxeter_matrix()?, t.index_set()),
        };
        let index_set = index_set.unwrap_or(default_index_set);

        if index_set.len() != m.rank() {
            return Err(CoxeterError::IndexSetLength {
                expected: m.rank(),
                got: index_set.len(),
            });
        }
        if let Some(dup) = index_set.iter().duplicates().next() {
            return Err(CoxeterError::DuplicateIndex(dup.clone()));
        }
        Ok((m, index_set))
    }
}

/// Whether a Coxeter group is known to be finite.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum CoxeterCategory {
    /// Finite Coxeter groups.
    #[strum(to_string = "Category of finite coxeter groups")]
    Finite,
    /// Coxeter groups that are not finite.
    #[strum(to_string = "Category of coxeter groups")]
    Infinite,
}

/// Sequence of generator positions.
pub type Word = SmallVec<[usize; 8]>;

/// Coxeter group represented as a group of matrices acting on the reflection
/// representation.
///
/// Groups are only constructed through [`CoxeterMatrixGroup::new()`], which
/// returns the same `Arc` for equal arguments.
#[derive(Debug)]
pub struct CoxeterMatrixGroup<R: CoefficientRing> {
    this: Weak<Self>,

    coxeter_matrix: CoxeterMatrix,
    ring: R,
    index_set: Vec<IndexLabel>,

    representation: ReflectionRepresentation<R>,
    /// Whether the group is finite, computed once at construction.
    is_finite: bool,
}
impl<R: CoefficientRing> fmt::Display for CoxeterMatrixGroup<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coxeter group over {} with Coxeter matrix:\n{}",
            self.ring, self.coxeter_matrix,
        )
    }
}
impl<R: CoefficientRing> CoxeterMatrixGroup<R> {
    /// Constructs a Coxeter group, or returns the existing one constructed
    /// from equal arguments.
    ///
    /// If `index_set` is `None`, the default index set for `data` is used.
    pub fn new(
        data: impl Into<CoxeterGroupData>,
        ring: R,
        index_set: Option<Vec<IndexLabel>>,
    ) -> CoxeterResult<Arc<Self>> {
        let (coxeter_matrix, index_set) = data.into().normalize(index_set)?;
        cache::get_or_try_insert_with((coxeter_matrix, ring, index_set), |key| {
            let (coxeter_matrix, ring, index_set) = key.clone();
            let representation = ReflectionRepresentation::new(&coxeter_matrix, &ring)?;
            let is_finite = classify::is_finite(&coxeter_matrix);
            log::debug!(
                "constructed {} Coxeter group of rank {} over {ring}",
                if is_finite { "finite" } else { "infinite" },
                coxeter_matrix.rank(),
            );
            Ok(Arc::new_cyclic(|this| Self {
                this: Weak::clone(this),

                coxeter_matrix,
                ring,
                index_set,

                representation,
                is_finite,
            }))
        })
    }

    /// Returns an `Arc` reference to the group.
    pub fn arc(&self) -> Arc<Self> {
        self.this.upgrade().expect("`CoxeterMatrixGroup` removed from `Arc`")
    }

    /// Returns the index set.
    pub fn index_set(&self) -> &[IndexLabel] {
        &self.index_set
    }
    /// Returns the Coxeter matrix.
    pub fn coxeter_matrix(&self) -> &CoxeterMatrix {
        &self.coxeter_matrix
    }
    /// Returns the coefficient domain.
    pub fn ring(&self) -> &R {
        &self.ring
    }
    /// Returns the number of generators.
    pub fn rank(&self) -> usize {
        self.index_set.len()
    }
    /// Returns the Coxeter diagram, whose vertices are the index set.
    pub fn coxeter_graph(&self) -> CoxeterDiagram {
        // The index set was validated at construction.
        CoxeterDiagram::from_coxeter_matrix(&self.coxeter_matrix, &self.index_set)
            .unwrap_or_default()
    }
    /// Returns the matrix of the bilinear form `B(α_i, α_j) = -cos(π/m_ij)`.
    pub fn bilinear_form(&self) -> &Matrix<FractionElement<R>> {
        self.representation.bilinear_form()
    }
    /// Returns the canonical faithful representation of the group, which is
    /// the group itself.
    pub fn canonical_representation(&self) -> Arc<Self> {
        self.arc()
    }
    /// Returns whether the group is finite.
    pub fn is_finite(&self) -> bool {
        self.is_finite
    }
    /// Returns the category of the group.
    pub fn category(&self) -> CoxeterCategory {
        match self.is_finite {
            true => CoxeterCategory::Finite,
            false => CoxeterCategory::Infinite,
        }
    }

    /// Returns the position of a label in the index set.
    pub fn index_of(&self, i: &IndexLabel) -> CoxeterResult<usize> {
        self.index_set
            .iter()
            .position(|label| label == i)
            .ok_or_else(|| CoxeterError::IndexOutOfRange(i.clone()))
    }

    /// Returns the identity element.
    pub fn one(&self) -> CoxeterMatrixElement<R> {
        self.element(Matrix::ident(self.rank()))
    }
    /// Returns the simple reflection `s_i`.
    pub fn simple_reflection(&self, i: impl Into<IndexLabel>) -> CoxeterResult<CoxeterMatrixElement<R>> {
        let index = self.index_of(&i.into())?;
        Ok(self.generator(index))
    }
    /// Returns all simple reflections, in the order of the index set.
    pub fn simple_reflections(&self) -> Vec<CoxeterMatrixElement<R>> {
        (0..self.rank()).map(|i| self.generator(i)).collect()
    }
    /// Returns the product `s_{w_0} s_{w_1} ...` of simple reflections.
    pub fn from_word(&self, word: &[IndexLabel]) -> CoxeterResult<CoxeterMatrixElement<R>> {
        let word = word
            .iter()
            .map(|i| self.index_of(i))
            .collect::<CoxeterResult<Word>>()?;
        self.from_positions(&word)
    }
    /// Returns the product of the simple reflections at the given positions
    /// in the index set, or an error if a position is not less than the rank.
    pub fn from_positions(&self, word: &[usize]) -> CoxeterResult<CoxeterMatrixElement<R>> {
        let generators = self.representation.generators();
        let mut matrix: Matrix<R::Element> = Matrix::ident(self.rank());
        for &i in word {
            let g = generators.get(i).ok_or(CoxeterError::PositionOutOfRange {
                position: i,
                rank: self.rank(),
            })?;
            matrix = &matrix * g;
        }
        Ok(self.element(matrix))
    }

    fn generator(&self, index: usize) -> CoxeterMatrixElement<R> {
        self.element(self.representation.generators()[index].clone())
    }
    fn element(&self, matrix: Matrix<R::Element>) -> CoxeterMatrixElement<R> {
        CoxeterMatrixElement {
            group: self.arc(),
            matrix,
        }
    }

    /// Returns every element of a finite group along with a reduced word for
    /// it, in order of increasing length.
    pub fn elements_with_words(&self) -> CoxeterResult<Vec<(Word, CoxeterMatrixElement<R>)>> {
        if !self.is_finite {
            return Err(CoxeterError::InfiniteGroup);
        }
        let generators = self.representation.generators();

        // Exact comparison is slow, so bucket elements by approximate entries.
        let mut seen: HashMap<Vec<i64>, Vec<usize>> = HashMap::new();
        let mut ret: Vec<(Word, Matrix<R::Element>)> = vec![];

        let mut try_insert = |word: Word,
                              matrix: Matrix<R::Element>,
                              ret: &mut Vec<(Word, Matrix<R::Element>)>| {
            let bucket = seen.entry(approx_key(&matrix)).or_default();
            if bucket.iter().any(|&i| ret[i].1 == matrix) {
                return;
            }
            bucket.push(ret.len());
            ret.push((word, matrix));
        };

        try_insert(Word::new(), Matrix::ident(self.rank()), &mut ret);
        let mut next_unprocessed_index = 0;
        while next_unprocessed_index < ret.len() {
            let (word, matrix) = ret[next_unprocessed_index].clone();
            for (i, g) in generators.iter().enumerate() {
                let mut new_word = word.clone();
                new_word.push(i);
                try_insert(new_word, &matrix * g, &mut ret);
            }
            next_unprocessed_index += 1;
        }
        log::debug!("enumerated {} elements of {}", ret.len(), self.coxeter_matrix);

        Ok(ret
            .into_iter()
            .map(|(word, matrix)| (word, self.element(matrix)))
            .collect())
    }
    /// Returns every element of a finite group.
    pub fn elements(&self) -> CoxeterResult<Vec<CoxeterMatrixElement<R>>> {
        Ok(self.elements_with_words()?.into_iter().map(|(_, e)| e).collect())
    }
    /// Returns the number of elements of a finite group.
    pub fn order(&self) -> CoxeterResult<usize> {
        Ok(self.elements_with_words()?.len())
    }
    /// Returns the number of elements of each length in a finite group.
    pub fn length_distribution(&self) -> CoxeterResult<Vec<usize>> {
        let mut ret = vec![];
        for (word, _) in self.elements_with_words()? {
            if ret.len() <= word.len() {
                ret.resize(word.len() + 1, 0);
            }
            ret[word.len()] += 1;
        }
        Ok(ret)
    }
}

/// Constructs a Coxeter group over the universal cyclotomic field with the
/// default index set.
pub fn coxeter_group(
    data: impl Into<CoxeterGroupData>,
) -> CoxeterResult<Arc<CoxeterMatrixGroup<UniversalCyclotomicField>>> {
    CoxeterMatrixGroup::new(data, UniversalCyclotomicField, None)
}

fn approx_key<T: Scalar>(matrix: &Matrix<T>) -> Vec<i64> {
    matrix
        .rows()
        .flatten()
        .map(|x| (x.to_float() * 1024.0).round() as i64)
        .collect()
}

/// Element of a [`CoxeterMatrixGroup`].
#[derive(Clone)]
pub struct CoxeterMatrixElement<R: CoefficientRing> {
    group: Arc<CoxeterMatrixGroup<R>>,
    matrix: Matrix<R::Element>,
}
impl<R: CoefficientRing> fmt::Debug for CoxeterMatrixElement<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CoxeterMatrixElement").field(&self.matrix).finish()
    }
}
impl<R: CoefficientRing> fmt::Display for CoxeterMatrixElement<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
impl<R: CoefficientRing> PartialEq for CoxeterMatrixElement<R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.group, &other.group) && self.matrix == other.matrix
    }
}
impl<R: CoefficientRing> CoxeterMatrixElement<R> {
    /// Returns the group containing the element.
    pub fn parent(&self) -> &Arc<CoxeterMatrixGroup<R>> {
        &self.group
    }
    /// Returns the matrix of the element.
    pub fn matrix(&self) -> &Matrix<R::Element> {
        &self.matrix
    }
    /// Returns the matrix of the element in the canonical faithful
    /// representation, which is its own matrix.
    pub fn canonical_matrix(&self) -> Matrix<R::Element> {
        self.matrix.clone()
    }
    /// Returns whether the element is the identity.
    pub fn is_one(&self) -> bool {
        self.matrix.is_ident()
    }

    /// Returns whether `i` is a right descent, meaning `ℓ(w s_i) < ℓ(w)`.
    ///
    /// This holds iff `w(α_i)` is a negative root, which is column `i` of the
    /// matrix.
    pub fn has_right_descent(&self, i: impl Into<IndexLabel>) -> CoxeterResult<bool> {
        let i = self.group.index_of(&i.into())?;
        Ok(self.matrix.col(i).all(|x| x.is_nonpositive()))
    }
    /// Returns the right descents of the element, in the order of the index
    /// set.
    pub fn right_descents(&self) -> Vec<IndexLabel> {
        let index_set = self.group.index_set();
        (0..index_set.len())
            .filter(|&i| self.matrix.col(i).all(|x| x.is_nonpositive()))
            .map(|i| index_set[i].clone())
            .collect()
    }
}
impl<R: CoefficientRing> Mul for &CoxeterMatrixElement<R> {
    type Output = CoxeterMatrixElement<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        assert!(
            Arc::ptr_eq(&self.group, &rhs.group),
            "cannot multiply elements of different Coxeter groups",
        );
        CoxeterMatrixElement {
            group: Arc::clone(&self.group),
            matrix: &self.matrix * &rhs.matrix,
        }
    }
}
impl<R: CoefficientRing> Mul for CoxeterMatrixElement<R> {
    type Output = CoxeterMatrixElement<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use cyclomath::num_bigint::BigInt;
    use cyclomath::prelude::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::EdgeLabel;

    fn labels(ints: &[i64]) -> Vec<IndexLabel> {
        ints.iter().map(|&i| IndexLabel::Int(i)).collect()
    }

    fn a3_over_integers() -> Arc<CoxeterMatrixGroup<IntegerRing>> {
        CoxeterMatrixGroup::new(CartanType::A(3), IntegerRing, None).unwrap()
    }

    #[test]
    fn test_display() {
        let w = coxeter_group(CartanType::H(3)).unwrap();
        assert_eq!(
            w.to_string(),
            "Coxeter group over Universal Cyclotomic Field with Coxeter matrix:\n\
             [1 3 2]\n\
             [3 1 5]\n\
             [2 5 1]",
        );

        let m = CoxeterMatrix::from_ints(&[vec![1, -1], vec![-1, 1]]).unwrap();
        let w = CoxeterMatrixGroup::new(m, IntegerRing, None).unwrap();
        assert_eq!(
            w.to_string(),
            "Coxeter group over Integer Ring with Coxeter matrix:\n[ 1 -1]\n[-1  1]",
        );
    }

    #[test]
    fn test_queries() {
        let m = CoxeterMatrix::from_ints(&[
            vec![1, 3, 2, 2],
            vec![3, 1, 4, 2],
            vec![2, 4, 1, 5],
            vec![2, 2, 5, 1],
        ])
        .unwrap();
        let w = coxeter_group(m.clone()).unwrap();
        assert_eq!(w.coxeter_matrix(), &m);
        assert_eq!(w.index_set(), labels(&[0, 1, 2, 3]));
        assert_eq!(w.rank(), 4);
        assert_eq!(w.ring(), &UniversalCyclotomicField);
        assert!(!w.is_finite());
        assert_eq!(w.category(), CoxeterCategory::Infinite);
        assert!(Arc::ptr_eq(&w.canonical_representation(), &w));
        assert_eq!(w.bilinear_form().ndim(), 4);
        assert!(w.bilinear_form().is_symmetric());

        let w = coxeter_group(CartanType::E(8)).unwrap();
        assert!(w.is_finite());
        assert_eq!(w.category(), CoxeterCategory::Finite);
        assert_eq!(w.category().to_string(), "Category of finite coxeter groups");
        assert_eq!(CoxeterCategory::Infinite.to_string(), "Category of coxeter groups");
    }

    #[test]
    fn test_canonical_identity() {
        let from_type = coxeter_group(CartanType::A(2)).unwrap();
        let from_matrix = CoxeterMatrixGroup::new(
            CoxeterMatrix::from_ints(&[vec![1, 3], vec![3, 1]]).unwrap(),
            UniversalCyclotomicField,
            Some(labels(&[1, 2])),
        )
        .unwrap();
        let from_diagram = coxeter_group(
            CoxeterDiagram::from_edges([(1.into(), 2.into(), EdgeLabel::Default)]).unwrap(),
        )
        .unwrap();
        assert!(Arc::ptr_eq(&from_type, &from_matrix));
        assert!(Arc::ptr_eq(&from_type, &from_diagram));

        // Different index set
        let other = coxeter_group(CoxeterMatrix::from_ints(&[vec![1, 3], vec![3, 1]]).unwrap())
            .unwrap();
        assert!(!Arc::ptr_eq(&from_type, &other));

        // Different coefficient domain
        let over_integers = CoxeterMatrixGroup::new(CartanType::A(2), IntegerRing, None).unwrap();
        assert_eq!(over_integers.index_set(), from_type.index_set());
        assert!(cache::cached_group_count::<IntegerRing>() >= 1);

        let infinite_graph = coxeter_group(
            CoxeterDiagram::from_edges([(0.into(), 1.into(), EdgeLabel::Infinite)]).unwrap(),
        )
        .unwrap();
        let infinite_matrix =
            coxeter_group(CoxeterMatrix::from_ints(&[vec![1, -1], vec![-1, 1]]).unwrap()).unwrap();
        assert!(Arc::ptr_eq(&infinite_graph, &infinite_matrix));
    }

    #[test]
    fn test_coxeter_graph_round_trip() {
        for t in [CartanType::A(3), CartanType::D(5), CartanType::F4, CartanType::I(7)] {
            let w = coxeter_group(t).unwrap();
            let g = w.coxeter_graph();
            assert_eq!(g.sorted_vertices(), w.index_set());
            assert!(Arc::ptr_eq(&coxeter_group(g).unwrap(), &w), "{t}");
        }

        let w = CoxeterMatrixGroup::new(
            CartanType::B(2),
            UniversalCyclotomicField,
            Some(vec!["a".into(), "b".into()]),
        )
        .unwrap();
        assert_eq!(
            w.coxeter_graph().sorted_edges(),
            vec![("a".into(), "b".into(), EdgeLabel::Value(4))],
        );
    }

    #[test]
    fn test_elements_and_descents() {
        let w = a3_over_integers();
        let [a, b, c] = [1, 2, 3].map(|i| w.simple_reflection(i).unwrap());
        assert_eq!(w.simple_reflections(), vec![a.clone(), b.clone(), c.clone()]);

        let abc = &(&a * &b) * &c;
        assert_eq!(
            abc.canonical_matrix(),
            Matrix::from_rows(
                [[0, 0, -1], [1, 0, -1], [0, 1, -1]]
                    .iter()
                    .map(|row| row.iter().map(|&x| BigInt::from(x)).collect())
                    .collect(),
            )
            .unwrap(),
        );
        assert_eq!(w.from_word(&labels(&[1, 2, 3])).unwrap(), abc);
        assert_eq!(w.from_positions(&[0, 1, 2]), Ok(abc.clone()));
        assert_eq!(
            w.from_positions(&[0, 3]),
            Err(CoxeterError::PositionOutOfRange { position: 3, rank: 3 }),
        );

        let bac = b.clone() * a.clone() * c.clone();
        let descents = [1, 2, 3].map(|i| bac.has_right_descent(i).unwrap());
        assert_eq!(descents, [true, false, true]);
        assert_eq!(bac.right_descents(), labels(&[1, 3]));

        assert!(w.one().is_one());
        assert!(w.one().right_descents().is_empty());
        assert!((&a * &a).is_one());
        assert_eq!(a.right_descents(), labels(&[1]));
        assert!(Arc::ptr_eq(abc.parent(), &w));
    }

    #[test]
    fn test_index_errors() {
        let w = a3_over_integers();
        assert_eq!(
            w.simple_reflection(4),
            Err(CoxeterError::IndexOutOfRange(IndexLabel::Int(4))),
        );
        assert_eq!(
            w.one().has_right_descent(0),
            Err(CoxeterError::IndexOutOfRange(IndexLabel::Int(0))),
        );
        assert!(w.from_word(&["x".into()]).is_err());

        assert_eq!(
            CoxeterMatrixGroup::new(CartanType::A(2), IntegerRing, Some(labels(&[1]))).unwrap_err(),
            CoxeterError::IndexSetLength {
                expected: 2,
                got: 1,
            },
        );
        assert_eq!(
            CoxeterMatrixGroup::new(CartanType::A(2), IntegerRing, Some(labels(&[5, 5])))
                .unwrap_err(),
            CoxeterError::DuplicateIndex(IndexLabel::Int(5)),
        );
    }

    #[test]
    fn test_coefficient_domain_errors() {
        let err = CoxeterMatrixGroup::new(CartanType::B(2), IntegerRing, None).unwrap_err();
        assert!(matches!(err, CoxeterError::Coercion(_)));
        assert_eq!(
            err.to_string(),
            "unable to convert 2cos(pi/4) to an element of Integer Ring",
        );
        assert!(CoxeterMatrixGroup::new(CartanType::B(2), RealField, None).is_ok());

        // 2cos(π/m) needs ζ_2m, which is out of reach for huge labels.
        let m = CoxeterMatrix::from_ints(&[vec![1, 3_000_000_000], vec![3_000_000_000, 1]])
            .unwrap();
        let err = coxeter_group(m).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unable to convert 2cos(pi/3000000000) to an element of Universal Cyclotomic Field",
        );
    }

    #[test]
    fn test_finite_enumeration() {
        let w = a3_over_integers();
        assert_eq!(w.order(), Ok(24));
        assert_eq!(w.length_distribution(), Ok(vec![1, 3, 5, 6, 5, 3, 1]));

        let w = coxeter_group(CartanType::B(3)).unwrap();
        assert_eq!(w.order(), Ok(48));
        assert_eq!(w.length_distribution(), Ok(vec![1, 3, 5, 7, 8, 8, 7, 5, 3, 1]));

        assert_eq!(coxeter_group(CartanType::H(3)).unwrap().order(), Ok(120));
        assert_eq!(coxeter_group(CartanType::I(5)).unwrap().order(), Ok(10));

        // The longest element has every generator as a descent.
        let elements = w.elements().unwrap();
        let longest = elements.last().unwrap();
        assert_eq!(longest.right_descents(), w.index_set());

        let m = CoxeterMatrix::from_ints(&[vec![1, -1], vec![-1, 1]]).unwrap();
        let w = CoxeterMatrixGroup::new(m, IntegerRing, None).unwrap();
        assert_eq!(w.order(), Err(CoxeterError::InfiniteGroup));
    }

    #[test]
    #[should_panic(expected = "different Coxeter groups")]
    fn test_mul_across_groups_panics() {
        let a2 = CoxeterMatrixGroup::new(CartanType::A(2), IntegerRing, None).unwrap();
        let a3 = a3_over_integers();
        let _ = a2.one() * a3.one();
    }

    proptest! {
        #[test]
        fn proptest_descent_flips(word in proptest::collection::vec(0_usize..3, 0..12), i in 0_usize..3) {
            let w = coxeter_group(CartanType::B(3)).unwrap();
            let label = IndexLabel::Int(i as i64 + 1);
            let x = w.from_positions(&word).unwrap();
            let xs = &x * &w.simple_reflection(label.clone()).unwrap();
            prop_assert_ne!(
                x.has_right_descent(label.clone()).unwrap(),
                xs.has_right_descent(label).unwrap(),
            );
        }
    }
}
