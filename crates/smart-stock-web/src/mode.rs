//! Development vs production rendering.

/// How pages and assets are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// No caching, development badge on every page.
    #[default]
    Development,
    /// Cacheable assets, no badge.
    Production,
}

impl RenderMode {
    /// Maps an environment name to a mode: only `production` selects
    /// [`RenderMode::Production`], anything else is development.
    pub fn from_env_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Returns true in development mode.
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    /// `Cache-Control` value for rendered pages.
    pub fn page_cache_control(self) -> &'static str {
        match self {
            Self::Development => "no-store",
            Self::Production => "no-cache",
        }
    }

    /// `Cache-Control` value for static assets.
    pub fn asset_cache_control(self) -> &'static str {
        match self {
            Self::Development => "no-store",
            Self::Production => "public, max-age=86400",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}
