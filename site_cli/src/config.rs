//! Site configuration.
//!
//! Loads an optional `site.toml`:
//!
//! ```toml
//! [site]
//! title = "Alephium"
//! lang = "en"
//!
//! [assets]
//! stars_background = "/images/stars.svg"
//! ```

use std::path::Path;

use serde::Deserialize;
use site_leptos::{DocumentMeta, PageAssets};

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document metadata shared by every page
    pub site: DocumentMeta,
    /// Decorative asset URLs
    pub assets: PageAssets,
}

impl SiteConfig {
    /// Load config from `path`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
