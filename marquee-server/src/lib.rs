//! # Marquee Server
//!
//! axum front end for the Marquee movie catalogue: server-rendered HTML
//! pages, a JSON API, and layered configuration for the binary.

pub mod handlers;
pub mod infra;
pub mod routes;
pub mod views;

use axum::{Router, http::HeaderValue, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use infra::app_state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state);

    Router::new()
        .route("/health", get(handlers::api::health))
        .merge(routes::create_page_router())
        .nest("/api", routes::create_api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}

/// Permissive in dev mode, otherwise the configured allow-list (any origin
/// when the list is empty).
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let config = state.config();
    if config.dev_mode {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(
                    origin = %origin,
                    "ignoring invalid CORS origin"
                );
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([axum::http::Method::GET])
}
