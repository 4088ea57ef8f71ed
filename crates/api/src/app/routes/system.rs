use axum::{http::StatusCode, response::Response};

use crate::app::errors;

pub async fn greeting() -> &'static str {
    "Hello from the web side"
}

pub async fn not_found() -> Response {
    errors::json_message(StatusCode::NOT_FOUND)
}

pub async fn method_not_allowed() -> Response {
    errors::json_message(StatusCode::METHOD_NOT_ALLOWED)
}
