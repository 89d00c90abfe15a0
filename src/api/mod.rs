//! HTTP layer: routing and middleware wiring.
//!
//! Routes:
//! - `POST /api/quotes` — submit a quote request
//! - `GET /api/quotes/:request_number` — fetch one request
//! - `GET /api/quotes` — paginated list, newest first
//! - `GET /health` — liveness + database ping

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::*;

use std::time::Duration;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, database::Database, services::AppState};

// =====================================
// Router builder
// =====================================
/// Builds the application router with all routes and middleware.
pub fn create_router(db: Database, config: Config) -> Router {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let state = AppState::new(db, config);

    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .layer(axum_middleware::from_fn(middleware::request_id))
        .layer(axum_middleware::from_fn(middleware::request_timing))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(CompressionLayer::new())
                // The marketing site is served from a different origin.
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new().nest("/quotes", quote_routes())
}

fn quote_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::quote::submit_quote))
        .route("/", get(handlers::quote::list_quotes))
        .route("/:request_number", get(handlers::quote::get_quote))
}
