mod assets;
mod config;

use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use axum::{response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
///
/// `/static` carries the dataset, images and icons (the frontend's base path);
/// `/dist` and `/assets` carry the hashed frontend bundle.
fn build_app(config: &ServerConfig) -> Router {
    let index_path = config.dist_dir.join("index.html");

    Router::new()
        .route("/", get(move || serve_index(index_path.clone())))
        .nest(
            "/static",
            cached_static_router(&config.assets_dir, CACHE_1DAY),
        )
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&config.dist_dir.join("assets"), CACHE_IMMUTABLE),
        )
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // Refuse to serve a dataset the frontend would reject anyway
    if let Err(e) = assets::Assets::load(&config.assets_dir) {
        tracing::error!(error = %e, "Cannot start without a valid dataset");
        std::process::exit(1);
    }

    let app = build_app(&config);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr(), error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!("Server running at http://localhost:{}", config.port);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn serve_index(index_path: PathBuf) -> Html<String> {
    // Serve the built frontend, fall back to a simple message
    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Waymark</title></head>
<body>
<h1>Waymark</h1>
<p>Frontend not built yet. The dataset is available at <a href="/static/locations.json">/static/locations.json</a>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}
