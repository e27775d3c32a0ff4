use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: title and content.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON body.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("missing required fields: title and content")]
    MissingFields,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<mongodb::error::Error> for DomainError {
    fn from(err: mongodb::error::Error) -> Self {
        DomainError::Database(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl DomainError {
    /// Message shown to the caller. Server-side failures collapse to one
    /// generic string; the detail only goes to the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            DomainError::MissingFields => MISSING_FIELDS_MESSAGE,
            DomainError::InvalidBody(_) => INVALID_BODY_MESSAGE,
            DomainError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
            DomainError::Configuration(_)
            | DomainError::Database(_)
            | DomainError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::MissingFields | DomainError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            DomainError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            DomainError::Configuration(_)
            | DomainError::Database(_)
            | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.public_message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: DomainError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn missing_fields_is_a_bad_request() {
        let (status, body) = body_of(DomainError::MissingFields).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: title and content.");
    }

    #[actix_web::test]
    async fn method_not_allowed_maps_to_405() {
        let (status, body) = body_of(DomainError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
    }

    #[actix_web::test]
    async fn server_failures_do_not_leak_detail() {
        for err in [
            DomainError::Configuration("MONGODB_URI is not set".into()),
            DomainError::Database("connection refused at 10.0.0.5".into()),
            DomainError::Internal("boom".into()),
        ] {
            let (status, body) = body_of(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
        }
    }
}
