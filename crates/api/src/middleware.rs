use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::header::{AUTHORIZATION, HOST},
    middleware::Next,
    response::Response,
};
use chrono::{SecondsFormat, Utc};

use menagerie_auth::{BasicAuthError, Credentials};

use crate::app::errors::AuthRejection;
use crate::context::AdminIdentity;

#[derive(Clone)]
pub struct AuthState {
    pub credentials: Arc<Credentials>,
}

/// Log one line per request: time, status, method, host+path, latency.
///
/// Never short-circuits.
pub async fn request_logger(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let host = req
        .headers()
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let response = next.run(req).await;

    tracing::info!(
        time = %Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        status = response.status().as_u16(),
        method = %method,
        host = %host,
        path = %path,
        latency = ?started.elapsed(),
        "request"
    );

    response
}

/// Gate the wrapped routes behind HTTP Basic credentials.
pub async fn basic_auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().map_err(|_| BasicAuthError::InvalidEncoding))
        .transpose()?;

    let username = menagerie_auth::authenticate(header, &state.credentials).inspect_err(|e| {
        tracing::debug!(error = %e, "admin authentication failed");
    })?;

    req.extensions_mut().insert(AdminIdentity::new(username));

    Ok(next.run(req).await)
}
