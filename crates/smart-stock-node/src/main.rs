//! Smart Stock Node - GraphQL API and pages on one port.

use clap::Parser;
use smart_stock_node::observability::{init_logging, LogFormat};
use smart_stock_node::{create_app, serve, Args, Config};
use smart_stock_store::{CollectionStore, Resolver};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_from(Args::parse())?;

    init_logging(&config.log_level, config.log_format == LogFormat::Json);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Smart Stock");
    tracing::info!(
        addr = %config.addr,
        graphql_path = %config.graphql_path,
        mode = %config.mode,
        log_format = ?config.log_format,
        seed = config.seed,
        "Node configuration"
    );

    let store = if config.seed {
        CollectionStore::seeded()
    } else {
        CollectionStore::new()
    };
    tracing::info!(
        users = store.user_count(),
        images = store.image_count(),
        "Collection store ready"
    );

    let app = create_app(&config, Resolver::new(Arc::new(store)));

    if let Err(e) = serve(&config, app).await {
        tracing::error!(error = %e, "Server start failed");
        return Err(e.into());
    }

    Ok(())
}
