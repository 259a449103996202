//! Unlabeled Coxeter diagram and the graph queries used to classify it.

use itertools::Itertools;
use petgraph::algo::{astar, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::CoxeterMatrix;

/// Unlabeled simple graph on a subset of the generators of a Coxeter matrix,
/// with an edge between `i` and `j` whenever `m_ij ∉ {1, 2}`.
///
/// Vertices are referred to by their row in the Coxeter matrix.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Matrix row of each vertex, sorted. Node `k` in `graph` is `vertices[k]`.
    vertices: Vec<usize>,
    graph: UnGraph<usize, ()>,
}
impl AdjacencyGraph {
    /// Constructs the adjacency graph of a Coxeter matrix.
    pub fn new(m: &CoxeterMatrix) -> Self {
        let n = m.rank();
        let mut graph = UnGraph::with_capacity(n, n);
        let nodes = (0..n).map(|i| graph.add_node(i)).collect_vec();
        for (i, j, label) in m.upper_entries() {
            if label.is_edge() {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
        let vertices = (0..n).collect();
        Self { vertices, graph }
    }

    /// Returns the vertices of the graph.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    /// Returns whether there is an edge between two vertices.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        match (self.node(a), self.node(b)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    fn node(&self, v: usize) -> Option<NodeIndex> {
        self.vertices.binary_search(&v).ok().map(NodeIndex::new)
    }

    /// Returns the connected components of the graph, each sorted, ordered by
    /// their smallest vertex.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut union_find = UnionFind::new(self.vertex_count());
        for e in self.graph.edge_references() {
            union_find.union(e.source().index(), e.target().index());
        }
        let labels = union_find.into_labeling();
        let mut components: Vec<Vec<usize>> = vec![];
        let mut component_of_label = vec![None; self.vertex_count()];
        for (k, &v) in self.vertices.iter().enumerate() {
            let component = *component_of_label[labels[k]].get_or_insert_with(|| {
                components.push(vec![]);
                components.len() - 1
            });
            components[component].push(v);
        }
        components
    }

    /// Returns whether the graph is connected. The empty graph is not
    /// connected.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() == 1
    }

    /// Returns whether the graph is a tree.
    pub fn is_tree(&self) -> bool {
        self.is_connected() && self.edge_count() + 1 == self.vertex_count()
    }

    /// Returns the induced subgraph on a set of vertices. Vertices not in the
    /// graph are ignored.
    pub fn subgraph(&self, vertices: &[usize]) -> Self {
        let keep = |v: &usize| vertices.contains(v);
        let graph = self.graph.filter_map(
            |_, v| keep(v).then_some(*v),
            |_, &()| Some(()),
        );
        let vertices = graph.node_weights().copied().collect();
        Self { vertices, graph }
    }

    /// Returns the distance from `v` to every vertex reachable from it.
    fn distances_from(&self, v: usize) -> Vec<(usize, usize)> {
        let Some(start) = self.node(v) else {
            return vec![];
        };
        dijkstra(&self.graph, start, None, |_| 1_usize)
            .into_iter()
            .map(|(node, dist)| (self.vertices[node.index()], dist))
            .collect()
    }

    /// Returns the greatest distance from `v` to any other vertex in its
    /// connected component.
    pub fn eccentricity(&self, v: usize) -> usize {
        self.distances_from(v)
            .into_iter()
            .map(|(_, dist)| dist)
            .max()
            .unwrap_or(0)
    }
    /// Returns the eccentricity of every vertex.
    pub fn eccentricities(&self) -> Vec<(usize, usize)> {
        self.vertices
            .iter()
            .map(|&v| (v, self.eccentricity(v)))
            .collect()
    }
    /// Returns the greatest eccentricity of any vertex, assuming the graph is
    /// connected.
    pub fn diameter(&self) -> usize {
        self.vertices
            .iter()
            .map(|&v| self.eccentricity(v))
            .max()
            .unwrap_or(0)
    }

    /// Returns a shortest path from `a` to `b`, including both endpoints, or
    /// `None` if there is no such path.
    pub fn shortest_path(&self, a: usize, b: usize) -> Option<Vec<usize>> {
        let (start, end) = (self.node(a)?, self.node(b)?);
        let (_cost, path) = astar(&self.graph, start, |n| n == end, |_| 1_usize, |_| 0)?;
        Some(path.into_iter().map(|n| self.vertices[n.index()]).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn d5_plus_a2() -> CoxeterMatrix {
        // D5 on 0..5 (branching at 2) and A2 on 5..7.
        let edges = [(0, 1), (1, 2), (2, 3), (2, 4), (5, 6)];
        CoxeterMatrix::from_fn(7, |i, j| {
            if edges.contains(&(i, j)) {
                crate::CoxeterLabel::Finite(3)
            } else {
                crate::CoxeterLabel::COMMUTING
            }
        })
        .unwrap()
    }

    #[test]
    fn test_connected_components() {
        let g = AdjacencyGraph::new(&d5_plus_a2());
        assert_eq!(g.connected_components(), vec![vec![0, 1, 2, 3, 4], vec![5, 6]]);
        assert!(!g.is_connected());
        assert!(!g.is_tree());

        let isolated = AdjacencyGraph::new(&CoxeterMatrix::from_ints(&[vec![1, 2], vec![2, 1]]).unwrap());
        assert_eq!(isolated.connected_components(), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_subgraph_metrics() {
        let g = AdjacencyGraph::new(&d5_plus_a2()).subgraph(&[0, 1, 2, 3, 4]);
        assert_eq!(g.vertices(), &[0, 1, 2, 3, 4]);
        assert!(g.is_tree());
        assert_eq!(g.diameter(), 3);
        assert_eq!(
            g.eccentricities(),
            vec![(0, 3), (1, 2), (2, 2), (3, 3), (4, 3)],
        );
        assert_eq!(g.shortest_path(0, 4), Some(vec![0, 1, 2, 4]));
        assert_eq!(g.shortest_path(0, 6), None);
        assert!(g.has_edge(2, 4));
        assert!(!g.has_edge(3, 4));

        let a2 = AdjacencyGraph::new(&d5_plus_a2()).subgraph(&[6, 5]);
        assert_eq!(a2.vertices(), &[5, 6]);
        assert_eq!(a2.shortest_path(6, 5), Some(vec![6, 5]));
    }

    #[test]
    fn test_cycle_is_not_tree() {
        let m = CoxeterMatrix::from_ints(&[vec![1, 3, 3], vec![3, 1, 3], vec![3, 3, 1]]).unwrap();
        let g = AdjacencyGraph::new(&m);
        assert!(g.is_connected());
        assert!(!g.is_tree());
        assert_eq!(g.diameter(), 1);
    }
}
