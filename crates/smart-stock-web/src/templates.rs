//! Askama template definitions.

use askama::Template;

/// Landing page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub dev: bool,
}

/// Sign-in page template.
#[derive(Template)]
#[template(path = "signin.html")]
pub struct SigninTemplate {
    pub dev: bool,
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub dev: bool,
    pub status: u16,
    pub message: String,
    pub detail: Option<String>,
}
