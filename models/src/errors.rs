// models/src/errors.rs

use std::io;

pub use thiserror::Error;

use crate::identifiers::Identifier;
use crate::vertices::NodeType;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("entity with identifier {0} was not found")]
    NotFound(String),
    #[error("entity already exists: {0}")]
    AlreadyExists(String),
    /// An edge references a node that is not part of the same graph, or ids collide.
    #[error("integrity violation in graph for patient {patient_id}: {}", .problems.join("; "))]
    IntegrityViolation {
        patient_id: String,
        problems: Vec<String>,
    },
    #[error("Failed to acquire lock: {0}")]
    LockError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::SerializationError(format!("JSON processing error: {}", err))
    }
}

/// A validation error, raised while constructing a node, edge or metadata record.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// An identifier has an invalid length.
    #[error("identifier has invalid length")]
    InvalidIdentifierLength,
    /// A required property is present but blank.
    #[error("required property {0} must not be empty")]
    EmptyRequiredProperty(&'static str),
    /// A numeric value falls outside its permitted range.
    #[error("value {value} for {field} is outside the range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A measurement must be a finite, positive number.
    #[error("measurement {0} must be a finite positive number")]
    InvalidMeasurement(&'static str),
    /// An end date precedes its start date.
    #[error("{end_field} precedes {start_field}")]
    InvalidDateRange {
        start_field: &'static str,
        end_field: &'static str,
    },
    /// A node's declared type does not agree with its property record.
    #[error("node {id} declares type {declared} but carries {actual} properties")]
    NodeTypeMismatch {
        id: Identifier,
        declared: NodeType,
        actual: NodeType,
    },
    /// The property payload could not be decoded for the declared node type.
    #[error("invalid {node_type} properties: {reason}")]
    InvalidProperties { node_type: NodeType, reason: String },
}

/// A type alias for a `Result` that returns a `GraphError` on failure.
pub type GraphResult<T> = Result<T, GraphError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fails with `EmptyRequiredProperty` when `value` is blank.
pub fn require_text(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyRequiredProperty(field));
    }
    Ok(())
}

/// Same as [`require_text`] for optional fields: absent is fine, blank is not.
pub fn optional_text(field: &'static str, value: Option<&String>) -> ValidationResult<()> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}

/// Fails unless `value` is a finite number in `0.0..=1.0`.
pub fn require_unit_interval(field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange { field, value, min: 0.0, max: 1.0 });
    }
    Ok(())
}
