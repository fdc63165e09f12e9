//! # Smart Stock Node
//!
//! The Smart Stock server: one HTTP listener in front of two handlers.
//!
//! ```text
//!                 ┌──────────────────────┐
//!   request ───▶  │    RequestRouter     │
//!                 └──────────┬───────────┘
//!          path starts with  │  anything else
//!          the API path      │
//!            ┌───────────────┴───────────────┐
//!            ▼                               ▼
//!   ┌──────────────────┐           ┌──────────────────┐
//!   │  Schema gateway  │           │  Page renderer   │
//!   │  (GraphQL)       │           │  (askama pages)  │
//!   └────────┬─────────┘           └──────────────────┘
//!            ▼
//!   ┌──────────────────┐
//!   │ Resolver + store │
//!   └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000 NODE_ENV=development cargo run --bin smart-stock-node
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Command line / environment configuration
//! - [`observability`] - Structured logging and request IDs
//! - [`router`] - API vs page dispatch
//! - [`server`] - App assembly, listener and graceful shutdown

pub mod config;
pub mod error;
pub mod observability;
pub mod router;
pub mod server;

pub use config::{Args, Config};
pub use error::NodeError;
pub use router::{RequestRouter, Route};
pub use server::{create_app, serve};
