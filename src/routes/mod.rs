//! Router assembly: API routes, operational routes and the shared layers.

mod common;
mod trivia;

pub use common::common_routes;
pub use trivia::trivia_routes;

use crate::error::AppError;
use crate::middleware::error_envelope;
use crate::state::AppState;
use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Full application: every route, 404 fallback, error envelopes, body limit, tracing and CORS.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(trivia_routes(state))
        .fallback(|| async { AppError::NotFound("route".into()) })
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(axum::middleware::map_response(error_envelope))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
