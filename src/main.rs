mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = config::HostConfig::from_env().expect("invalid configuration");
    if !config.site_dir.join("index.html").is_file() {
        tracing::warn!(site_dir = %config.site_dir.display(), "index.html not found; build the client with trunk first");
    }

    let app = routes::app(&config.site_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "kenyastay listening");
    axum::serve(listener, app).await.expect("server failed");
}
