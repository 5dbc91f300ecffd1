//! HTTP error payloads and mapping from domain failures.
//!
//! Keep the domain free of transport concerns by translating
//! [`DomainError`] into actix responses here. The wire contract is one
//! uniform rule: the variant's fixed status code plus a JSON body of shape
//! `{"error": "<message>"}`.

use actix_web::error::QueryPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// JSON envelope for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure message.
    #[schema(example = "not found")]
    pub error: String,
}

/// Adapter wrapping a [`DomainError`] for actix's error plumbing.
///
/// Handlers return [`ApiResult`] and lift domain failures with `?`; actix
/// renders the response through [`ResponseError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(DomainError);

impl ApiError {
    /// The wrapped domain failure.
    #[must_use]
    pub fn domain(&self) -> &DomainError {
        &self.0
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.message())
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        // A variant declaring an out-of-range status is a programming error;
        // degrade to 500 rather than panic inside response rendering.
        StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.0.message().to_owned(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Render query-string rejections through the standard error envelope.
///
/// Registered via [`actix_web::web::QueryConfig`] so a missing or untyped
/// parameter yields the same `{"error": ..}` shape as a domain failure.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = %req.path(), "query string rejected");
    ApiError::from(DomainError::validation_with(err.to_string())).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    #[rstest]
    #[case(DomainError::not_found(), StatusCode::NOT_FOUND)]
    #[case(DomainError::validation(), StatusCode::BAD_REQUEST)]
    fn status_code_follows_the_domain(#[case] error: DomainError, #[case] expected: StatusCode) {
        assert_eq!(ApiError::from(error).status_code(), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn validation_failure_renders_error_envelope() {
        let api_error = ApiError::from(DomainError::validation());

        let response = api_error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body())
            .await
            .expect("response body to bytes");
        let body: ErrorBody = serde_json::from_slice(&bytes).expect("payload deserialises");
        assert_eq!(body.error, "validation error");
    }

    #[rstest]
    #[actix_web::test]
    async fn not_found_renders_404_with_default_message() {
        let response = ApiError::from(DomainError::not_found()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body())
            .await
            .expect("response body to bytes");
        assert_eq!(
            serde_json::from_slice::<ErrorBody>(&bytes).expect("payload deserialises"),
            ErrorBody {
                error: "not found".to_owned()
            }
        );
    }
}
