//! Finite regular crystals of the general linear Lie superalgebra `gl(m|n)`.
//!
//! Concrete crystals implement [`RegularSuperCrystal`] by listing their
//! elements, and their elements implement [`CrystalElement`] by providing the
//! Kashiwara operators and weights. Crystal graphs, connected components,
//! tensor products, and characters are then available for every crystal.
//!
//! ```
//! use supercrystal::{RegularSuperCrystal, StandardCrystal, SuperCartanType};
//!
//! let c = StandardCrystal::new(SuperCartanType::new(2, 3));
//! let t = c.tensor(&[&c]).unwrap();
//! assert_eq!(t.connected_components().len(), 2);
//! ```

mod cartan;
mod category;
mod digraph;
mod element;
mod error;
mod standard;
mod subcrystal;
pub mod tensor;
pub mod weight;

pub use cartan::SuperCartanType;
pub use category::RegularSuperCrystal;
pub use digraph::CrystalDigraph;
pub use element::CrystalElement;
pub use error::{CrystalError, CrystalResult};
pub use standard::{Letter, StandardCrystal};
pub use subcrystal::Subcrystal;
pub use tensor::{TensorElement, TensorProduct};
pub use weight::{FormalCharacter, Weight};

/// Index of a simple root.
pub type Index = i32;
