use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use importer::ImporterError;
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use storage::services::pace_zones::PaceError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    Pace(PaceError),
    Importer(ImporterError),
    BadRequest(String),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Pace(e) => write!(f, "Pace error: {}", e),
            Self::Importer(e) => write!(f, "Import error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Pace(_) => StatusCode::BAD_REQUEST,
            Self::Importer(ImporterError::NotConnected) => StatusCode::BAD_REQUEST,
            Self::Importer(ImporterError::ConfigError(_)) => StatusCode::BAD_REQUEST,
            Self::Importer(ImporterError::StravaError(_)) => StatusCode::BAD_GATEWAY,
            Self::Importer(ImporterError::RequestError(_)) => StatusCode::BAD_GATEWAY,
            Self::Importer(ImporterError::ParseError(_)) => StatusCode::BAD_GATEWAY,
            Self::Importer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::Pace(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Importer(ImporterError::NotConnected) => {
                json!({
                    "error": "Strava not connected"
                })
            }
            Self::Importer(ImporterError::ConfigError(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Importer(
                e @ (ImporterError::RequestError(_)
                | ImporterError::StravaError(_)
                | ImporterError::ParseError(_)),
            ) => {
                tracing::error!("Strava request failed: {:?}", e);
                json!({
                    "error": "Failed to reach Strava"
                })
            }
            Self::Importer(e) => {
                tracing::error!("Import error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<PaceError> for WebError {
    fn from(error: PaceError) -> Self {
        Self::Pace(error)
    }
}

impl From<ImporterError> for WebError {
    fn from(error: ImporterError) -> Self {
        match error {
            ImporterError::StorageError(e) => Self::Storage(e),
            other => Self::Importer(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: WebError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_time_is_bad_request() {
        let (status, body) = body_json(PaceError::InvalidTime.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid time");
    }

    #[tokio::test]
    async fn test_not_found_and_conflict() {
        let (status, _) = body_json(StorageError::NotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) =
            body_json(StorageError::ConstraintViolation("Workout not found".into()).into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Workout not found");
    }

    #[tokio::test]
    async fn test_importer_storage_errors_map_to_storage() {
        let (status, _) =
            body_json(ImporterError::StorageError(StorageError::NotFound).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = body_json(ImporterError::NotConnected.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Strava not connected");
    }
}
