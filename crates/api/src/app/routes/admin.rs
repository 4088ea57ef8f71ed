use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::app::routes::system;
use crate::context::AdminIdentity;
use crate::middleware::{self, AuthState};

/// Admin route group. Every request under the prefix, matched or not, is
/// logged first, then authenticated.
pub fn router(auth: AuthState) -> Router {
    Router::new()
        .route("/main", get(main_page))
        .fallback(system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logger))
                .layer(axum::middleware::from_fn_with_state(
                    auth,
                    middleware::basic_auth_middleware,
                )),
        )
}

pub async fn main_page(Extension(admin): Extension<AdminIdentity>) -> &'static str {
    tracing::debug!(admin = admin.username(), "admin page served");
    "You are at secret admin page"
}
