//! Route assembly: resource, common and docs routes, static landing page, middleware.
//! Oversized bodies are rejected by the body extractors with 413 and the usual `{error}` envelope.

mod common;
mod docs;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc, DOCS_PATH, OPENAPI_PATH};
pub use test::test_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router. Unmatched paths fall through to the static directory.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(test_routes(state))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
