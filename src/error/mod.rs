use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

/// Everything a handler can surface to the client as a failure.
///
/// Database failures keep the driver's message; the original API forwards it
/// verbatim in the error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload failed the required-field checks (400, one message per field).
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    /// Database failure on the routes that answer 400.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Database failure on the collection read, which answers 500.
    #[error("{0}")]
    Internal(sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Database(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(messages) => json!({ "error": messages }),
            ApiError::Database(reason) => json!({ "error": reason.to_string() }),
            ApiError::Internal(reason) => json!({ "error": reason.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let error = ApiError::Validation(vec!["missing required field: first_name".to_string()]);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let error = ApiError::Internal(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_maps_to_bad_request() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }
}
