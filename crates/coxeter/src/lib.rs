//! Coxeter groups realized as matrix groups in the reflection representation.
//!
//! A group is constructed from a Coxeter matrix, a Coxeter diagram, or a
//! finite Cartan type, over any [`CoefficientRing`] that contains the values
//! `2cos(π/m)` for the labels `m` that appear. Equal constructor arguments
//! always produce the same group.
//!
//! ```
//! use coxeter::{CartanType, coxeter_group};
//!
//! let w = coxeter_group(CartanType::A(3)).unwrap();
//! assert!(w.is_finite());
//! assert_eq!(w.order().unwrap(), 24);
//! ```

pub mod cache;
mod cartan;
pub mod classify;
mod coxeter_matrix;
mod diagram;
mod error;
pub mod graph;
mod group;
pub mod label;
pub mod reflection;

pub use cartan::{CartanFamily, CartanType};
pub use coxeter_matrix::CoxeterMatrix;
pub use cyclomath;
pub use cyclomath::{CoefficientRing, Matrix};
pub use diagram::CoxeterDiagram;
pub use error::{CoxeterError, CoxeterResult};
pub use group::{
    CoxeterCategory, CoxeterGroupData, CoxeterMatrixElement, CoxeterMatrixGroup, Word,
    coxeter_group,
};
pub use label::{CoxeterLabel, EdgeLabel, IndexLabel};
pub use reflection::{FractionElement, ReflectionRepresentation};
