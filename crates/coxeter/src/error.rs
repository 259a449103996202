use cyclomath::CoercionError;

use crate::IndexLabel;

/// Error that can occur while constructing or querying a Coxeter group.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoxeterError {
    #[error("the Coxeter matrix is not square")]
    NotSquare,
    #[error("the Coxeter matrix is not symmetric")]
    NotSymmetric,
    #[error("the Coxeter matrix diagonal is not all 1 (found {value} at row {row})")]
    BadDiagonal { row: usize, value: i64 },
    #[error("invalid Coxeter label {value} at ({row}, {col})")]
    BadLabel { row: usize, col: usize, value: i64 },
    #[error("invalid Coxeter graph label {0}")]
    BadGraphLabel(i64),
    #[error("unable to parse Coxeter graph label {0:?}")]
    UnknownGraphLabel(String),
    #[error("duplicate vertex {0} in Coxeter graph")]
    DuplicateVertex(IndexLabel),
    #[error("Coxeter graph edge from {0} to itself")]
    SelfLoop(IndexLabel),

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("{0} is not in the index set")]
    IndexOutOfRange(IndexLabel),
    #[error("generator position {position} is out of range for rank {rank}")]
    PositionOutOfRange { position: usize, rank: usize },
    #[error("index set has {got} labels but the Coxeter matrix has rank {expected}")]
    IndexSetLength { expected: usize, got: usize },
    #[error("duplicate label {0} in index set")]
    DuplicateIndex(IndexLabel),

    #[error("unknown Cartan type {0:?}")]
    UnknownCartanType(String),

    #[error("cannot enumerate an infinite Coxeter group")]
    InfiniteGroup,
}

/// Result type returned by Coxeter group operations.
pub type CoxeterResult<T> = Result<T, CoxeterError>;
