use crate::handlers::{health::health_check, settings::get_client_settings};
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router with all routes and middleware.
///
/// Paths that match no route and no file under `static_dir` get `index.html`,
/// so client-side routes survive a page reload.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let static_files = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Runtime settings for the browser
        .route("/client-settings.json", get(get_client_settings))
        // Compiled frontend bundle
        .fallback_service(static_files)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
