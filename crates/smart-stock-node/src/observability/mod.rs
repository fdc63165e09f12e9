//! # Observability Module
//!
//! - **Structured Logging**: pretty or JSON logs, filtered by level
//! - **Request Tracing**: request ID propagation and per-request spans
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::Router;
//! use smart_stock_node::observability::{init_logging, request_id_layer};
//!
//! init_logging("info", false);
//!
//! let app: Router<()> = Router::new().layer(request_id_layer());
//! ```

mod logging;
pub mod middleware;

pub use logging::{init_logging, LogFormat};
pub use middleware::{request_id_layer, MiddlewareLayer, RequestId, REQUEST_ID_HEADER};
