//! Error types for geometry parsing and style values.

use thiserror::Error;

/// Errors raised while reading GeoJSON-style input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON object")]
    NotAnObject,
    #[error("Missing \"type\" member")]
    MissingType,
    #[error("Feature has no geometry")]
    MissingGeometry,
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while parsing style colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color: {0}")]
    Invalid(String),
}
