//! HTTP application wiring (Axum router + middleware).
//!
//! - `routes/`: HTTP handlers, one file per area
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;

use menagerie_auth::Credentials;

use crate::middleware::AuthState;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(admin: Credentials) -> Router {
    let auth_state = AuthState {
        credentials: Arc::new(admin),
    };

    routes::router(auth_state)
}
