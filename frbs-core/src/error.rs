//! Error type shared by every fallible operation in the frbs crates.

use thiserror::Error;

/// Errors raised while building partitions, composing a rule base, or
/// running learning/inference over data of the wrong shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrbsError {
    /// An example's input arity disagrees with the rule base's partitions.
    #[error("shape mismatch: rule base expects {expected} input variables, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A class label lies outside `[0, num_classes)`.
    #[error("class label {label} out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    /// An antecedent code lies outside the rule base's code space.
    #[error("antecedent code {code} out of range (code space is {space})")]
    CodeOutOfRange { code: u64, space: u64 },

    /// Invalid constructor argument (zero sets, inverted bounds, ragged
    /// input matrix, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FrbsError>;
