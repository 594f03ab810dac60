//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FloorplanError`] via `#[from]`.

use crate::id::AreaId;

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from a persistence adapter.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Client input that is missing, malformed, or violates a field rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("\"area_name\" is required")]
    MissingAreaName,

    #[error("\"area_name\" is not allowed to be empty")]
    EmptyAreaName,

    #[error("\"area_name\" length must be less than or equal to {max} characters long")]
    AreaNameTooLong { max: usize },

    #[error("\"tables\" contains a duplicate value: {0}")]
    DuplicateTable(String),

    #[error("update must contain at least one field")]
    EmptyUpdate,

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The request body could not be decoded into the expected shape.
    #[error("{0}")]
    Malformed(String),
}

/// A write would violate a uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Area Already Exists!")]
    AreaNameTaken { area_name: String },
}

/// The requested record (or any record at all) does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Area not found")]
    Area { id: AreaId },

    #[error("No Areas found")]
    NoLiveAreas,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_conflict_message_without_area_name() {
        let err = ConflictError::AreaNameTaken {
            area_name: "Patio".to_string(),
        };
        assert_eq!(err.to_string(), "Area Already Exists!");
    }

    #[test]
    fn should_forward_display_of_wrapped_validation_error() {
        let err = FloorplanError::from(ValidationError::MissingAreaName);
        assert_eq!(err.to_string(), "\"area_name\" is required");
    }

    #[test]
    fn should_display_storage_source_message() {
        let source: Box<dyn std::error::Error + Send + Sync> = "disk I/O error".into();
        let err = FloorplanError::Storage(source);
        assert_eq!(err.to_string(), "disk I/O error");
    }

    #[test]
    fn should_distinguish_missing_area_from_empty_listing() {
        let missing = NotFoundError::Area { id: AreaId::new() };
        assert_eq!(missing.to_string(), "Area not found");
        assert_eq!(NotFoundError::NoLiveAreas.to_string(), "No Areas found");
    }
}
