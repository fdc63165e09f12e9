//! Static assets embedded in the binary.

/// An embedded static file.
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    pub path: &'static str,
    pub bytes: &'static [u8],
}

const ASSETS: &[Asset] = &[
    Asset {
        path: "styles.css",
        bytes: include_bytes!("../static/styles.css"),
    },
    Asset {
        path: "logo.svg",
        bytes: include_bytes!("../static/logo.svg"),
    },
];

/// Looks up an asset by its path below `/static/`.
pub fn find(path: &str) -> Option<Asset> {
    ASSETS.iter().find(|a| a.path == path).copied()
}

impl Asset {
    /// Content type guessed from the file extension.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(self.path)
            .first_or_octet_stream()
            .to_string()
    }
}
