use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use menagerie_core::{CatQuery, EchoBody, EchoFormat};

use crate::app::errors;

/// `GET /cats/:format?name=..&type=..`
///
/// Query values are taken as-is; a repeated key keeps its first value.
pub async fn echo(
    Path(format): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let format = match EchoFormat::parse(&format) {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match menagerie_core::render(format, CatQuery::from_pairs(pairs)) {
        EchoBody::Text(text) => (StatusCode::OK, text).into_response(),
        EchoBody::Json(query) => (StatusCode::OK, Json(query)).into_response(),
    }
}
