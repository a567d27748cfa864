//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::Property;

/// Domain errors represent violations of the shape model's rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("index out of range: {index} (valid: 0..{len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("cannot parse point from '{input}': {message}")]
    InvalidPoint { input: String, message: String },

    #[error("cannot parse shape from '{input}': {message}")]
    InvalidShape { input: String, message: String },

    #[error("label must be a single line: {0:?}")]
    InvalidLabel(String),

    #[error("comparison operand is missing")]
    MissingOperand,

    #[error("{kind} has no property '{property}'")]
    UnsupportedProperty { kind: &'static str, property: Property },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
