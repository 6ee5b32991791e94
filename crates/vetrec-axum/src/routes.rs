//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{AppContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the router for the owner record controller.
///
/// Route order follows the external surface: search endpoint at the
/// collection root, static segments (`new`, `find`) before the `{id}`
/// captures.
pub fn create_router(ctx: AppContext, cors: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    Router::new()
        .route("/health", get(health))
        .route("/owners", get(handlers::owners::find))
        .route(
            "/owners/new",
            get(handlers::owners::new_form).post(handlers::owners::create),
        )
        .route("/owners/find", get(handlers::owners::find_form))
        .route("/owners/{id}", get(handlers::owners::details))
        .route(
            "/owners/{id}/edit",
            get(handlers::owners::edit_form).post(handlers::owners::update),
        )
        .layer(build_cors_layer(cors))
        .with_state(state)
}

/// Liveness probe.
async fn health() -> &'static str {
    "OK"
}
