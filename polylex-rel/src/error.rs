//! Error type for the relation model.

/// Errors reported by the relation model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelError {
    /// A relation was combined with another of incompatible dimension.
    #[error("dimension mismatch: expected {expected} dims, got {actual}")]
    DimensionMismatch {
        /// Expected dimension count.
        expected: usize,
        /// Dimension count actually supplied.
        actual: usize,
    },

    /// A point was evaluated against a relation whose existential variable
    /// has no known definition (denominator zero).
    #[error("existential variable {index} has no known definition")]
    UnknownDiv {
        /// Index of the existential variable.
        index: usize,
    },
}
