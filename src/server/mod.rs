//! HTTP front end for the tessellation engine.
//!
//! `GET /triangle.svg?width=W&height=H` streams a fresh image. The engine runs on a
//! blocking thread and writes into an in-memory pipe whose read half is the response body.

mod query;

use std::io::{BufWriter, Write};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA, VARY};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tokio_util::io::{ReaderStream, SyncIoBridge};

use crate::tessellation::{self, Rect};

pub use query::{SizeError, SizeQuery};

/// Capacity of the pipe between the engine and the response body.
const PIPE_CAPACITY: usize = 64 * 1024;

const INDEX_HTML: &str = r#"<!doctype html>
<html>
	<head></head>
	<body>
		<h1>Tessellation server is running</h1>
		<a href="/triangle.svg?width=2000&height=2000">click here for a 2000x2000 triangle svg</a>
	</body>
</html>"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Largest width accepted over HTTP.
    pub max_width: u32,
    /// Largest height accepted over HTTP.
    pub max_height: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_width: 5120,
            max_height: 2880,
        }
    }
}

struct AppState {
    config: ServerConfig,
}

pub fn app(config: ServerConfig) -> Router {
    let state = Arc::new(AppState { config });
    Router::new()
        .route("/", get(index))
        .route("/triangle.svg", get(triangle_svg))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn triangle_svg(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SizeQuery>,
) -> Result<Response, SizeError> {
    let rect = query.validate(&state.config)?;

    let (reader, writer) = tokio::io::duplex(PIPE_CAPACITY);
    let bridge = SyncIoBridge::new(writer);
    tokio::task::spawn_blocking(move || render(rect, bridge));

    let resp = (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "image/svg+xml"),
            (VARY, "Accept-Encoding"),
            (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            (PRAGMA, "no-cache"),
            (EXPIRES, "0"),
        ],
        Body::from_stream(ReaderStream::new(reader)),
    )
        .into_response();
    Ok(resp)
}

/// Runs the engine to completion on the current (blocking) thread.
///
/// Dropping `sink` at the end closes the pipe, which ends the response body.
fn render<W: Write>(rect: Rect, sink: W) {
    let started = Instant::now();
    let mut sink = BufWriter::new(sink);
    let result = tessellation::generate(rect, &mut sink, &mut rand::rng())
        .and_then(|()| sink.flush());

    match result {
        Ok(()) => log::info!(
            "Triangle background of size {}, {} took {:?}",
            rect.width,
            rect.height,
            started.elapsed()
        ),
        Err(err) => log::warn!(
            "Triangle background of size {}, {} aborted after {:?}: {}",
            rect.width,
            rect.height,
            started.elapsed(),
            err
        ),
    }
}

/// Binds `config.bind` and serves until the process is stopped.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    log::info!(
        "tessellation server listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app(config)).await
}
