//! Page route handlers.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::assets;
use crate::error::WebError;
use crate::mode::RenderMode;
use crate::templates::*;

/// Shared state for page routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebState {
    pub mode: RenderMode,
}

impl WebState {
    /// Creates page state for the given mode.
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }
}

/// Create the page router.
pub fn web_routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/signin", get(signin))
        .route("/static/{*path}", get(static_asset))
        .fallback(not_found)
        .with_state(state)
}

/// Landing page handler.
async fn index(State(state): State<WebState>) -> Result<Response, WebError> {
    let template = IndexTemplate {
        dev: state.mode.is_development(),
    };
    Ok(page(state.mode, template.render()?))
}

/// Sign-in page handler.
async fn signin(State(state): State<WebState>) -> Result<Response, WebError> {
    let template = SigninTemplate {
        dev: state.mode.is_development(),
    };
    Ok(page(state.mode, template.render()?))
}

async fn static_asset(
    State(state): State<WebState>,
    Path(path): Path<String>,
) -> Result<Response, WebError> {
    let asset = assets::find(&path).ok_or_else(|| WebError::NotFound(format!("/static/{}", path)))?;

    Ok((
        [
            (header::CONTENT_TYPE, asset.content_type()),
            (header::CACHE_CONTROL, state.mode.asset_cache_control().to_string()),
        ],
        asset.bytes,
    )
        .into_response())
}

async fn not_found(uri: Uri) -> WebError {
    tracing::debug!(path = %uri.path(), "No page for path");
    WebError::NotFound(uri.path().to_string())
}

fn page(mode: RenderMode, html: String) -> Response {
    (
        [(header::CACHE_CONTROL, mode.page_cache_control())],
        Html(html),
    )
        .into_response()
}
