use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use chrono::Utc;
use jcb_site_core::config::SITE_TOML;
use jcb_site_core::{Site, load_site_with, process_env};
use jcb_site_generator::sitemap::xml_escape;
use jcb_site_generator::{
    RenderOptions, assets, render_not_found, render_path, render_robots_txt, render_sitemap_xml,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
    /// Where `SITE_URL` and other overrides are read from
    env: fn(&str) -> Option<String>,
}

/// Start preview server with hot reload for local development.
///
/// Pages are rendered on every request from the current site.toml, so edits
/// show up on the next reload without restarting. Files under `public/` are
/// served as-is.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🏗️  Starting preview server...");
    println!("   Site: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'jcb-site init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = load_site_with(&path, process_env).with_context(|| format!("Failed to load {}", SITE_TOML))?;
    println!("   ✓ Loaded: {}", site.config.name);
    println!(
        "   ✓ Catalog: {} locations, {} services",
        site.catalog.locations().len(),
        site.catalog.services().len()
    );

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
        env: process_env,
    };
    let app = router(state);

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            tracing::error!(error = %e, "file watcher stopped");
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let public = ServeDir::new(state.site_path.join("public"))
        .fallback(get(not_found_handler).with_state(state.clone()));

    Router::new()
        .route("/", get(page_handler))
        .route("/about", get(page_handler))
        .route("/contact", get(page_handler))
        .route("/services", get(page_handler))
        .route("/services/{service}", get(page_handler))
        .route("/services/{service}/{location}", get(page_handler))
        .route("/location/{slug}", get(page_handler))
        .route("/blog", get(page_handler))
        .route("/blog/{slug}", get(page_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/styles.css", get(styles_handler))
        .route("/gallery.js", get(gallery_handler))
        .route("/_reload", get(sse_handler))
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the site for one request, or an error page describing the bad config
fn load(state: &AppState) -> Result<Site, Response> {
    load_site_with(&state.site_path, state.env).map_err(|e| {
        tracing::warn!(error = %e, "configuration error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!(
                r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
</body></html>"#,
                xml_escape(&e.to_string())
            )),
        )
            .into_response()
    })
}

async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let site = match load(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };
    let opts = RenderOptions::preview(Utc::now());

    match render_path(&site, uri.path(), &opts) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "unresolved page");
            (
                StatusCode::NOT_FOUND,
                Html(render_not_found(&site, uri.path(), &opts)),
            )
                .into_response()
        }
    }
}

async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let site = match load(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };
    let opts = RenderOptions::preview(Utc::now());
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(&site, uri.path(), &opts)),
    )
        .into_response()
}

async fn sitemap_handler(State(state): State<AppState>) -> Response {
    match load(&state) {
        Ok(site) => (
            [(header::CONTENT_TYPE, "application/xml")],
            render_sitemap_xml(&site, Utc::now()),
        )
            .into_response(),
        Err(response) => response,
    }
}

async fn robots_handler(State(state): State<AppState>) -> Response {
    match load(&state) {
        Ok(site) => render_robots_txt(&site).into_response(),
        Err(response) => response,
    }
}

async fn styles_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::styles_css())
}

async fn gallery_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        assets::gallery_js(),
    )
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Skip editor swap files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    yield Ok(Event::default().data("reload"));
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn state(dir: &TempDir) -> AppState {
        let (reload_tx, _) = broadcast::channel(4);
        AppState {
            site_path: dir.path().to_path_buf(),
            reload_tx,
            env: |_| None,
        }
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_location_page_renders_with_reload_hook() {
        let dir = TempDir::new().unwrap();
        let (status, body) = get_path(router(state(&dir)), "/location/naini").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Naini, Prayagraj"));
        assert!(body.contains("/_reload"));
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let dir = TempDir::new().unwrap();
        let (status, body) = get_path(router(state(&dir)), "/location/nonexistent-slug").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn test_service_location_routes() {
        let dir = TempDir::new().unwrap();
        let app = router(state(&dir));

        let (status, _) = get_path(app.clone(), "/services/excavation/naini").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get_path(app, "/services/excavation/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_sitemap_and_robots() {
        let dir = TempDir::new().unwrap();
        let app = router(state(&dir));

        let (status, body) = get_path(app.clone(), "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<?xml"));

        let (status, body) = get_path(app, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("User-Agent: *"));
    }

    #[tokio::test]
    async fn test_public_files_and_fallback() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();
        fs::write(dir.path().join("public/hello.txt"), "hi").unwrap();
        let app = router(state(&dir));

        let (status, body) = get_path(app.clone(), "/hello.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "hi");

        let (status, _) = get_path(app, "/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bad_config_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), "[site\n").unwrap();

        let (status, body) = get_path(router(state(&dir)), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Configuration Error"));
    }

    #[tokio::test]
    async fn test_config_error_text_is_escaped() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SITE_TOML),
            "[site]\nname = <script>alert(1)</script>\n",
        )
        .unwrap();

        let (status, body) = get_path(router(state(&dir)), "/about").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[tokio::test]
    async fn test_site_url_comes_from_state_env() {
        let dir = TempDir::new().unwrap();
        let mut state = state(&dir);
        state.env = |key| (key == "SITE_URL").then(|| "https://jcbbooking.com".to_string());

        let (status, body) = get_path(router(state), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sitemap: https://jcbbooking.com/sitemap.xml"));
    }
}
