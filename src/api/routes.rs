//! API route definitions

use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::handlers::AppState;

/// Create the API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze))
        .with_state(state)
}

/// API router with tracing, compression and optional permissive CORS
pub fn app(state: AppState, enable_cors: bool) -> Router {
    let app = api_routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new()),
    );

    if enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}
