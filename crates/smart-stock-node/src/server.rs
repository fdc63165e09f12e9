//! Application assembly and the HTTP server lifecycle.

use axum::Router;
use smart_stock_graphql::{build_schema, graphql_routes};
use smart_stock_store::Resolver;
use smart_stock_web::{web_routes, WebState};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::NodeError;
use crate::router::RequestRouter;

/// Builds the full application: GraphQL under the API path, pages elsewhere.
pub fn create_app(config: &Config, resolver: Resolver) -> Router {
    let api = graphql_routes(build_schema(resolver), &config.graphql_path);
    let pages = web_routes(WebState::new(config.mode));

    RequestRouter::new(&config.graphql_path, api, pages).into_app()
}

/// Binds the listener and serves until SIGTERM or Ctrl-C.
pub async fn serve(config: &Config, app: Router) -> Result<(), NodeError> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| NodeError::Bind {
            addr: config.addr,
            source,
        })?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        addr = %local_addr,
        graphql = %format!("http://{}{}", local_addr, config.graphql_path),
        mode = %config.mode,
        "GraphQL server ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Done.");
    Ok(())
}

/// Resolves on the first termination signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Disconnecting...");
}
