//! Smart Stock web pages
//!
//! Renders the HTML pages served for every request outside the API path:
//! - the home page and the sign-in page, sharing one layout
//! - embedded static assets (stylesheet, logo)
//! - an HTML 404 page for everything else

pub mod assets;
pub mod error;
pub mod mode;
pub mod routes;
pub mod templates;

pub use error::WebError;
pub use mode::RenderMode;
pub use routes::{web_routes, WebState};
pub use templates::*;
