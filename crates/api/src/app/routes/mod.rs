use axum::{
    Router,
    routing::{get, post},
};

use menagerie_core::{Cat, Dog, Hamster};

use crate::middleware::AuthState;

pub mod admin;
pub mod cats;
pub mod ingest;
pub mod system;

/// Router for every endpoint, with the admin group nested under `/admin`.
pub fn router(auth: AuthState) -> Router {
    Router::new()
        .route("/", get(system::greeting))
        .route("/cats/:format", get(cats::echo))
        .route("/cats", post(ingest::ingest::<Cat>))
        .route("/dogs", post(ingest::ingest::<Dog>))
        .route("/hamster", post(ingest::ingest::<Hamster>))
        .nest("/admin", admin::router(auth))
        .fallback(system::not_found)
        .method_not_allowed_fallback(system::method_not_allowed)
}
