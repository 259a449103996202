//! Operations shared by every finite regular super crystal.

use std::fmt;
use std::sync::OnceLock;

use crate::{
    CrystalDigraph, CrystalElement, CrystalResult, FormalCharacter, Index, Subcrystal,
    SuperCartanType, TensorProduct,
};

/// Finite regular super crystal.
///
/// Implementors list their elements and provide storage for the crystal
/// graph. Everything else is derived from the element operations.
pub trait RegularSuperCrystal: fmt::Display {
    /// Type of elements of the crystal.
    type Element: CrystalElement;

    /// Returns the Cartan type.
    fn cartan_type(&self) -> SuperCartanType;
    /// Returns the index set, which is the full index set of the Cartan type
    /// unless the crystal restricts it.
    fn index_set(&self) -> Vec<Index> {
        self.cartan_type().index_set()
    }
    /// Returns every element of the crystal.
    fn elements(&self) -> &[Self::Element];
    /// Returns the storage for [`RegularSuperCrystal::digraph()`].
    fn digraph_cache(&self) -> &OnceLock<CrystalDigraph<Self::Element>>;

    /// Returns the number of elements.
    fn cardinality(&self) -> usize {
        self.elements().len()
    }

    /// Returns the crystal graph, which is computed on first use.
    fn digraph(&self) -> &CrystalDigraph<Self::Element> {
        self.digraph_cache().get_or_init(|| {
            let digraph = CrystalDigraph::new(self.elements(), &self.index_set());
            log::trace!("built {digraph} with {} edges for {self}", digraph.edge_count());
            digraph
        })
    }

    /// Returns the highest weight elements of each connected component of
    /// the crystal graph.
    fn connected_components_generators(&self) -> Vec<Vec<Self::Element>> {
        let index_set = self.index_set();
        self.digraph()
            .weakly_connected_components()
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .filter(|x| x.is_highest_weight(&index_set))
                    .collect()
            })
            .collect()
    }

    /// Returns the connected components, each as the subcrystal generated by
    /// its highest weight elements.
    fn connected_components(&self) -> Vec<Subcrystal<Self::Element>> {
        let cartan_type = self.cartan_type();
        let index_set = self.index_set();
        let ambient = self.to_string();
        self.connected_components_generators()
            .into_iter()
            .map(|generators| {
                Subcrystal::new(&ambient, cartan_type, index_set.clone(), generators)
            })
            .collect()
    }

    /// Returns the tensor product of this crystal with `others`, or an error
    /// if their Cartan types differ.
    fn tensor(&self, others: &[&Self]) -> CrystalResult<TensorProduct<Self>>
    where
        Self: Clone + Sized,
    {
        TensorProduct::new(self.clone(), others.iter().map(|&c| c.clone()))
    }

    /// Returns the formal character, which is the sum of the weights of
    /// every element.
    fn character(&self) -> FormalCharacter {
        self.elements().iter().map(|x| x.weight()).collect()
    }
}
