//! Error types for the page renderer.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::templates::ErrorTemplate;

/// Page rendering errors.
#[derive(Debug, Error)]
pub enum WebError {
    /// No page at this path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Template rendering error.
    #[error("template error: {0}")]
    Template(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            WebError::NotFound(path) => (StatusCode::NOT_FOUND, "Page not found", Some(path)),
            WebError::Template(msg) => {
                tracing::error!(error = %msg, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong", None)
            }
        };

        let page = ErrorTemplate {
            dev: false,
            status: status.as_u16(),
            message: message.to_string(),
            detail,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Error page rendering failed");
                (status, message).into_response()
            }
        }
    }
}

impl From<askama::Error> for WebError {
    fn from(err: askama::Error) -> Self {
        WebError::Template(err.to_string())
    }
}
