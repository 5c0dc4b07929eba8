//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It serves the built client bundle and
//! answers any unknown path with `index.html` so client-side routes such as
//! `/hotels` survive a reload. `/healthz` is the only handler.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Static-site router rooted at `site_dir`.
pub fn app(site_dir: &Path) -> Router {
    let index = ServeFile::new(site_dir.join("index.html"));
    let site = ServeDir::new(site_dir)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
