use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, text_to_speech, translate};
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let static_dir = &state.config.system_config.static_dir;

    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // Upstream proxies
        .route("/api/translate", post(translate))
        .route("/api/text-to-speech", post(text_to_speech))

        // Single-page UI
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}

/// Full application router with tracing and CORS applied.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
