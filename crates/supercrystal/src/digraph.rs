use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::{CrystalElement, Index};

/// Crystal graph, with an edge `x → f_i(x)` labeled `i` for every element `x`
/// and index `i`.
#[derive(Debug, Clone)]
pub struct CrystalDigraph<E> {
    graph: DiGraph<E, Index>,
    nodes: HashMap<E, NodeIndex>,
}
impl<E> fmt::Display for CrystalDigraph<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digraph on {} vertices", self.graph.node_count())
    }
}
impl<E: CrystalElement> CrystalDigraph<E> {
    /// Constructs the crystal graph on `elements`.
    ///
    /// Results of `f_i` outside of `elements` are added as vertices too.
    pub fn new(elements: &[E], index_set: &[Index]) -> Self {
        let mut ret = Self {
            graph: DiGraph::with_capacity(elements.len(), elements.len() * index_set.len()),
            nodes: HashMap::with_capacity(elements.len()),
        };
        for x in elements {
            ret.node_or_insert(x);
        }
        for &i in index_set {
            for x in elements {
                if let Some(y) = x.f(i) {
                    let a = ret.node_or_insert(x);
                    let b = ret.node_or_insert(&y);
                    ret.graph.add_edge(a, b, i);
                }
            }
        }
        ret
    }

    fn node_or_insert(&mut self, x: &E) -> NodeIndex {
        if let Some(&node) = self.nodes.get(x) {
            return node;
        }
        let node = self.graph.add_node(x.clone());
        self.nodes.insert(x.clone(), node);
        node
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }
    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    /// Iterates over the vertices, in the order they were added.
    pub fn vertices(&self) -> impl '_ + Iterator<Item = &E> {
        self.graph.node_weights()
    }
    /// Iterates over the edges `(x, f_i(x), i)`.
    pub fn edges(&self) -> impl '_ + Iterator<Item = (&E, &E, Index)> {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], *e.weight()))
    }
    /// Returns whether there is an edge `x → y` labeled `i`.
    pub fn has_edge(&self, x: &E, y: &E, i: Index) -> bool {
        let (Some(&a), Some(&b)) = (self.nodes.get(x), self.nodes.get(y)) else {
            return false;
        };
        self.graph.edges_connecting(a, b).any(|e| *e.weight() == i)
    }

    /// Returns the weakly connected components, ordered by their first
    /// vertex. Vertices within a component keep their order.
    pub fn weakly_connected_components(&self) -> Vec<Vec<E>> {
        let mut union_find = UnionFind::new(self.graph.node_count());
        for e in self.graph.edge_references() {
            union_find.union(e.source().index(), e.target().index());
        }
        let labels = union_find.into_labeling();
        let mut components: Vec<Vec<E>> = vec![];
        let mut component_of_label = vec![None; self.graph.node_count()];
        for node in self.graph.node_indices() {
            let component = *component_of_label[labels[node.index()]].get_or_insert_with(|| {
                components.push(vec![]);
                components.len() - 1
            });
            components[component].push(self.graph[node].clone());
        }
        components
    }
}
