//! Gallery configuration file.
//!
//! Looked up in this order:
//! - the path given with `--config` (must exist)
//! - `gallery.toml` in the platform config dir:
//!   - macOS: ~/Library/Application Support/com.photo-gallery.Photo-Gallery/
//!   - Windows: %APPDATA%/photo-gallery/Photo Gallery/config/
//!   - Linux: ~/.config/photo-gallery/
//! - built-in defaults

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use gallery_ingest::DEFAULT_PHOTOS_URL;
use gallery_page::PageSize;

use crate::cli::SourceArgs;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "photo-gallery";
const APP_NAME: &str = "Photo Gallery";
const CONFIG_FILENAME: &str = "gallery.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// URL or JSON file to load items from.
    pub source: String,
    pub page_size: PageSize,
    pub request_timeout_secs: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_PHOTOS_URL.to_string(),
            page_size: PageSize::default(),
            request_timeout_secs: 30,
        }
    }
}

impl GalleryConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, args: &SourceArgs) -> Result<Self> {
        if let Some(source) = &args.source {
            self.source.clone_from(source);
        }
        if let Some(size) = args.page_size {
            self.page_size = PageSize::new(size).context("invalid --page-size")?;
        }
        Ok(self)
    }
}

/// Path of the default config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Resolve the configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<GalleryConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => {
            tracing::debug!("no config file found, using defaults");
            Ok(GalleryConfig::default())
        }
    }
}

pub fn read_config(path: &Path) -> Result<GalleryConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("parse config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: GalleryConfig = toml::from_str("page_size = 12\n").unwrap();
        assert_eq!(config.page_size.get(), 12);
        assert_eq!(config.source, DEFAULT_PHOTOS_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(toml::from_str::<GalleryConfig>("page_size = 0\n").is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let args = SourceArgs {
            source: Some("photos.json".to_string()),
            page_size: Some(5),
        };
        let config = GalleryConfig::default().with_overrides(&args).unwrap();
        assert_eq!(config.source, "photos.json");
        assert_eq!(config.page_size.get(), 5);

        let bad = SourceArgs {
            source: None,
            page_size: Some(0),
        };
        assert!(GalleryConfig::default().with_overrides(&bad).is_err());
    }
}
