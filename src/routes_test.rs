use std::path::PathBuf;

use super::*;

const INDEX: &str = "<!DOCTYPE html><html><body>kenyastay</body></html>";

/// Fresh site directory holding an index page and one asset.
fn site_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kenyastay-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), INDEX).unwrap();
    std::fs::write(dir.join("app.css"), "body { margin: 0; }").unwrap();
    dir
}

/// Serve `site` on an ephemeral port and return its base URL.
async fn spawn(site: &Path) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(site);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let site = site_dir("healthz");
    let base = spawn(&site).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index_html() {
    let site = site_dir("root");
    let base = spawn(&site).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), INDEX);
}

#[tokio::test]
async fn static_assets_are_served_as_is() {
    let site = site_dir("asset");
    let base = spawn(&site).await;

    let resp = reqwest::get(format!("{base}/app.css")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "body { margin: 0; }");
}

#[tokio::test]
async fn client_routes_fall_back_to_index_html() {
    let site = site_dir("fallback");
    let base = spawn(&site).await;

    for path in ["/hotels", "/restaurants", "/stories", "/no-such-page"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "{path}");
        assert_eq!(resp.text().await.unwrap(), INDEX, "{path}");
    }
}
