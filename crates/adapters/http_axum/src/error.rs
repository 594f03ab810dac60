//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use floorplan_domain::error::{FloorplanError, ValidationError};

const DEFAULT_FAILURE: &str = "Something went wrong";
const INSERT_FAILURE: &str = "Error inserting data into database";

/// JSON error body returned by API endpoints.
///
/// `error` carries the underlying failure text and is only set on 500s.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Maps [`FloorplanError`] to an HTTP response with appropriate status code.
///
/// Conflicts become 409 and missing records 404. Everything else, input
/// validation included, is reported as a 500 under an operation-specific
/// message.
#[derive(Debug)]
pub struct ApiError {
    err: FloorplanError,
    failure: &'static str,
}

impl ApiError {
    /// Wrap an error raised while inserting a record.
    pub fn inserting(err: impl Into<FloorplanError>) -> Self {
        Self {
            err: err.into(),
            failure: INSERT_FAILURE,
        }
    }
}

impl From<FloorplanError> for ApiError {
    fn from(err: FloorplanError) -> Self {
        Self {
            err,
            failure: DEFAULT_FAILURE,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::from(FloorplanError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.err {
            FloorplanError::Conflict(err) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    message: err.to_string(),
                    error: None,
                },
            ),
            FloorplanError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: err.to_string(),
                    error: None,
                },
            ),
            FloorplanError::Validation(err) => {
                tracing::error!(error = %err, "rejected invalid input");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: self.failure.to_string(),
                        error: Some(err.to_string()),
                    },
                )
            }
            FloorplanError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: self.failure.to_string(),
                        error: Some(err.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use floorplan_domain::error::{ConflictError, NotFoundError};
    use floorplan_domain::id::AreaId;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_map_conflict_to_409_without_error_field() {
        let err = FloorplanError::from(ConflictError::AreaNameTaken {
            area_name: "Patio".to_string(),
        });
        let (status, body) = render(ApiError::inserting(err)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, serde_json::json!({ "message": "Area Already Exists!" }));
    }

    #[tokio::test]
    async fn should_map_not_found_to_404() {
        let err = FloorplanError::from(NotFoundError::Area { id: AreaId::new() });
        let (status, body) = render(ApiError::from(err)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Area not found");
    }

    #[tokio::test]
    async fn should_map_validation_to_500_with_insert_message() {
        let (status, body) = render(ApiError::inserting(ValidationError::MissingAreaName)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error inserting data into database");
        assert_eq!(body["error"], "\"area_name\" is required");
    }

    #[tokio::test]
    async fn should_expose_storage_failure_text() {
        let source: Box<dyn std::error::Error + Send + Sync> = "database is locked".into();
        let (status, body) = render(ApiError::from(FloorplanError::Storage(source))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Something went wrong");
        assert_eq!(body["error"], "database is locked");
    }
}
