//! API vs page dispatch.

use axum::{
    extract::{Request, State},
    response::Response,
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::trace::TraceLayer;

use crate::observability::request_id_layer;

/// Where a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The GraphQL schema gateway.
    Api,
    /// The page renderer.
    Page,
}

/// Sends every request either to the API or to the page renderer,
/// based on a single path-prefix check.
#[derive(Clone)]
pub struct RequestRouter {
    api_path: Arc<str>,
    api: Router,
    pages: Router,
}

impl RequestRouter {
    /// Creates a router sending paths under `api_path` to `api` and
    /// everything else to `pages`.
    pub fn new(api_path: &str, api: Router, pages: Router) -> Self {
        Self {
            api_path: Arc::from(api_path),
            api,
            pages,
        }
    }

    /// The API path prefix.
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Decides where a request path goes.
    pub fn route_for(&self, path: &str) -> Route {
        if path.starts_with(&*self.api_path) {
            Route::Api
        } else {
            Route::Page
        }
    }

    /// Forwards the raw request to the selected handler.
    pub async fn dispatch(&self, request: Request) -> Response {
        let route = self.route_for(request.uri().path());
        tracing::trace!(?route, path = %request.uri().path(), "Dispatching request");

        let target = match route {
            Route::Api => self.api.clone(),
            Route::Page => self.pages.clone(),
        };

        match target.oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// Wraps the dispatcher into the top-level application, with request
    /// IDs and HTTP tracing applied to both branches.
    pub fn into_app(self) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(Arc::new(self))
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
    }
}

async fn dispatch(State(router): State<Arc<RequestRouter>>, request: Request) -> Response {
    router.dispatch(request).await
}
