use std::fmt;

use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::{CoxeterError, CoxeterLabel, CoxeterMatrix, CoxeterResult, EdgeLabel, IndexLabel};

/// Coxeter diagram with labeled vertices and edges.
///
/// An unlabeled edge ([`EdgeLabel::Default`]) means 3 and a missing edge
/// means 2.
#[derive(Debug, Default, Clone)]
pub struct CoxeterDiagram {
    graph: UnGraph<IndexLabel, EdgeLabel>,
}
impl fmt::Display for CoxeterDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph on {} vertices", self.graph.node_count())
    }
}
impl PartialEq for CoxeterDiagram {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
            && self.sorted_edges() == other.sorted_edges()
    }
}
impl Eq for CoxeterDiagram {}
impl CoxeterDiagram {
    /// Constructs an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a diagram from a list of edges, adding their endpoints as
    /// vertices.
    pub fn from_edges(
        edges: impl IntoIterator<Item = (IndexLabel, IndexLabel, EdgeLabel)>,
    ) -> CoxeterResult<Self> {
        let mut ret = Self::new();
        for (a, b, label) in edges {
            ret.add_edge(a, b, label)?;
        }
        Ok(ret)
    }

    /// Constructs the diagram of a Coxeter matrix whose generators are
    /// labeled by `index_set`.
    pub fn from_coxeter_matrix(
        m: &CoxeterMatrix,
        index_set: &[IndexLabel],
    ) -> CoxeterResult<Self> {
        if index_set.len() != m.rank() {
            return Err(CoxeterError::IndexSetLength {
                expected: m.rank(),
                got: index_set.len(),
            });
        }
        let mut ret = Self::new();
        for v in index_set {
            ret.add_vertex(v.clone())?;
        }
        for (i, j, label) in m.upper_entries() {
            if label.is_edge() {
                let (a, b) = (NodeIndex::new(i), NodeIndex::new(j));
                ret.graph.add_edge(a, b, label.edge_label());
            }
        }
        Ok(ret)
    }

    /// Adds a vertex to the diagram, or returns an error if it is already
    /// present.
    pub fn add_vertex(&mut self, v: IndexLabel) -> CoxeterResult<()> {
        if self.node(&v).is_some() {
            return Err(CoxeterError::DuplicateVertex(v));
        }
        self.graph.add_node(v);
        Ok(())
    }

    /// Adds an edge to the diagram, adding its endpoints if they are not
    /// already present. Adding an edge that is already present replaces its
    /// label.
    pub fn add_edge(&mut self, a: IndexLabel, b: IndexLabel, label: EdgeLabel) -> CoxeterResult<()> {
        label.to_coxeter_label()?;
        if a == b {
            return Err(CoxeterError::SelfLoop(a));
        }
        let a = self.node_or_insert(a);
        let b = self.node_or_insert(b);
        match self.graph.find_edge(a, b) {
            Some(e) => self.graph[e] = label,
            None => {
                self.graph.add_edge(a, b, label);
            }
        }
        Ok(())
    }

    fn node(&self, v: &IndexLabel) -> Option<NodeIndex> {
        self.graph.node_indices().find(|&n| self.graph[n] == *v)
    }
    fn node_or_insert(&mut self, v: IndexLabel) -> NodeIndex {
        match self.node(&v) {
            Some(n) => n,
            None => self.graph.add_node(v),
        }
    }

    /// Returns the number of vertices in the diagram.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }
    /// Returns the vertices in sorted order.
    pub fn sorted_vertices(&self) -> Vec<IndexLabel> {
        self.graph.node_weights().cloned().sorted().collect()
    }
    /// Returns the edges, excluding [`EdgeLabel::Absent`] ones, with each pair
    /// of endpoints in sorted order and the list sorted by endpoints.
    pub fn sorted_edges(&self) -> Vec<(IndexLabel, IndexLabel, EdgeLabel)> {
        self.graph
            .edge_references()
            .filter(|e| *e.weight() != EdgeLabel::Absent)
            .map(|e| {
                let (a, b) = (&self.graph[e.source()], &self.graph[e.target()]);
                let (a, b) = if a <= b { (a, b) } else { (b, a) };
                (a.clone(), b.clone(), *e.weight())
            })
            .sorted_by(|(a1, b1, _), (a2, b2, _)| (a1, b1).cmp(&(a2, b2)))
            .collect()
    }

    /// Returns the Coxeter matrix of the diagram along with its index set,
    /// which is the sorted list of vertices.
    pub fn to_coxeter_matrix(&self) -> CoxeterResult<(CoxeterMatrix, Vec<IndexLabel>)> {
        let index_set = self.sorted_vertices();
        let n = index_set.len();
        let mut rows = vec![vec![CoxeterLabel::COMMUTING.as_int(); n]; n];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = CoxeterLabel::DIAGONAL.as_int();
        }
        for (a, b, label) in self.sorted_edges() {
            let m = label.to_coxeter_label()?.as_int();
            // Both endpoints come from `index_set`.
            let (Ok(i), Ok(j)) = (index_set.binary_search(&a), index_set.binary_search(&b)) else {
                continue;
            };
            if i == j {
                return Err(CoxeterError::SelfLoop(a));
            }
            rows[i][j] = m;
            rows[j][i] = m;
        }
        Ok((CoxeterMatrix::from_ints(&rows)?, index_set))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::label::default_index_set;

    fn edge(a: i64, b: i64, label: EdgeLabel) -> (IndexLabel, IndexLabel, EdgeLabel) {
        (a.into(), b.into(), label)
    }

    #[test]
    fn test_diagram_to_matrix() {
        let g = CoxeterDiagram::from_edges([
            edge(0, 3, EdgeLabel::Default),
            edge(1, 3, EdgeLabel::Value(15)),
            edge(2, 3, EdgeLabel::Value(7)),
            edge(0, 1, EdgeLabel::Value(3)),
        ])
        .unwrap();
        let (m, index_set) = g.to_coxeter_matrix().unwrap();
        assert_eq!(index_set, default_index_set(4));
        assert_eq!(
            m.to_ints(),
            vec![
                vec![1, 3, 2, 3],
                vec![3, 1, 2, 15],
                vec![2, 2, 1, 7],
                vec![3, 15, 7, 1],
            ],
        );
    }

    #[test]
    fn test_diagram_infinity() {
        let g = CoxeterDiagram::from_edges([
            edge(0, 1, EdgeLabel::Default),
            edge(1, 2, EdgeLabel::Value(4)),
            edge(0, 2, EdgeLabel::Infinite),
        ])
        .unwrap();
        let (m, _) = g.to_coxeter_matrix().unwrap();
        assert_eq!(m.to_ints(), vec![vec![1, 3, -1], vec![3, 1, 4], vec![-1, 4, 1]]);

        let back = CoxeterDiagram::from_coxeter_matrix(&m, &default_index_set(3)).unwrap();
        assert_eq!(
            back.sorted_edges(),
            vec![
                edge(0, 1, EdgeLabel::Default),
                edge(0, 2, EdgeLabel::Infinite),
                edge(1, 2, EdgeLabel::Value(4)),
            ],
        );
    }

    #[test]
    fn test_diagram_errors() {
        let mut g = CoxeterDiagram::new();
        assert_eq!(
            g.add_edge(1.into(), 2.into(), EdgeLabel::Value(1)),
            Err(CoxeterError::BadGraphLabel(1)),
        );
        assert_eq!(
            g.add_edge('a'.into(), 'a'.into(), EdgeLabel::Default),
            Err(CoxeterError::SelfLoop('a'.into())),
        );
        assert_eq!(g.vertex_count(), 0);
        g.add_vertex('a'.into()).unwrap();
        assert_eq!(
            g.add_vertex('a'.into()),
            Err(CoxeterError::DuplicateVertex('a'.into())),
        );
        let m = CoxeterMatrix::linear(&[3]).unwrap();
        assert_eq!(
            CoxeterDiagram::from_coxeter_matrix(&m, &default_index_set(3)),
            Err(CoxeterError::IndexSetLength { expected: 2, got: 3 }),
        );
    }

    #[test]
    fn test_diagram_string_vertices() {
        let g = CoxeterDiagram::from_edges([
            ("b".into(), "a".into(), EdgeLabel::Default),
            ("c".into(), "b".into(), EdgeLabel::Value(5)),
        ])
        .unwrap();
        let (m, index_set) = g.to_coxeter_matrix().unwrap();
        assert_eq!(index_set, vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(m, CoxeterMatrix::linear(&[3, 5]).unwrap());
        assert_eq!(g.to_string(), "Graph on 3 vertices");
    }

    proptest! {
        #[test]
        fn proptest_matrix_diagram_round_trip(m in crate::coxeter_matrix::arb_coxeter_matrix(6)) {
            let index_set = default_index_set(m.rank());
            let g = CoxeterDiagram::from_coxeter_matrix(&m, &index_set).unwrap();
            let (m2, index_set2) = g.to_coxeter_matrix().unwrap();
            prop_assert_eq!(&m2, &m);
            prop_assert_eq!(index_set2, index_set);
            let g2 = CoxeterDiagram::from_coxeter_matrix(&m2, &default_index_set(m.rank())).unwrap();
            prop_assert_eq!(g2, g);
        }
    }
}
