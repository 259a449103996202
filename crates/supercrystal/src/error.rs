use crate::SuperCartanType;

/// Error that can occur while combining crystals.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CrystalError {
    #[error("all crystals must be of the same Cartan type (expected {expected}, got {got})")]
    CartanTypeMismatch {
        expected: SuperCartanType,
        got: SuperCartanType,
    },
}

/// Result type returned by crystal operations.
pub type CrystalResult<T> = Result<T, CrystalError>;
