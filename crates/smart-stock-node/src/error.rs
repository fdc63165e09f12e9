//! Node error types.

use std::net::SocketAddr;
use thiserror::Error;

/// Errors that stop the node from starting or serving.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
