use axum::http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use menagerie_auth::BasicAuthError;
use menagerie_core::DomainError;

const BASIC_REALM: &str = "basic realm=Restricted";

/// `{"message": "<canonical reason>"}` with the given status.
pub fn json_message(status: StatusCode) -> Response {
    let message = status.canonical_reason().unwrap_or("Unknown Error");
    (status, axum::Json(json!({ "message": message }))).into_response()
}

/// `{"error": "<message>"}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::UnknownFormat(_) => json_error(StatusCode::BAD_REQUEST, "Error type not described"),
        DomainError::Decode(_) => json_message(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Rejection produced by the admin credential check.
#[derive(Debug)]
pub struct AuthRejection(pub BasicAuthError);

impl From<BasicAuthError> for AuthRejection {
    fn from(value: BasicAuthError) -> Self {
        Self(value)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        if self.0.is_malformed() {
            return json_message(StatusCode::BAD_REQUEST);
        }

        let mut res = json_message(StatusCode::UNAUTHORIZED);
        res.headers_mut()
            .insert(WWW_AUTHENTICATE, HeaderValue::from_static(BASIC_REALM));
        res
    }
}

/// How an ingest route reports failure to the client.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailureBody {
    /// 500 with an empty body.
    Empty,
    /// 500 with the generic `{"message": "Internal Server Error"}` body.
    Generic,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed reading request body: {0}")]
    Read(String),

    #[error(transparent)]
    Decode(#[from] DomainError),
}

/// An ingest failure paired with the route's failure body.
#[derive(Debug)]
pub struct IngestFailure {
    pub error: IngestError,
    pub body: FailureBody,
}

impl IntoResponse for IngestFailure {
    fn into_response(self) -> Response {
        match self.body {
            FailureBody::Empty => (StatusCode::INTERNAL_SERVER_ERROR, String::new()).into_response(),
            FailureBody::Generic => json_message(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
