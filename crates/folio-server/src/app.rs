//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub fn create_router(state: Arc<AppState>) -> Router {
    // Both handlers accept every method and branch internally
    let api_routes = Router::new()
        .route("/api/contact", any(handlers::contact::submit))
        .route("/api/placeholder", any(handlers::placeholder::serve))
        .route("/api/placeholder/", any(handlers::placeholder::serve))
        .route("/api/placeholder/{*rest}", any(handlers::placeholder::serve));

    Router::new()
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
