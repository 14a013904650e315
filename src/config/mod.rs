//! Configuration management for `mdx-map.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets]
//! │   └── map        # [map]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # Config file discovery
//! └── mod.rs         # Config (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[map]`        | Default center, zoom, size; tile layer           |
//! | `[assets]`     | Leaflet css/js and leaflet-gpx urls              |
//! | `[markdown]`   | pulldown-cmark extensions for `mdx-map render`   |
//!
//! Every field is optional; an empty file is a valid config.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use section::{AssetsConfig, MapSectionConfig};
pub use util::{find_config_file, find_config_file_from};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{debug, log, markdown::MarkdownOptions};

/// Config file name searched for when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "mdx-map.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing mdx-map.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Map defaults and tile layer
    pub map: MapSectionConfig,

    /// Shared asset urls
    pub assets: AssetsConfig,

    /// Markdown rendering options
    pub markdown: MarkdownOptions,
}

impl Config {
    /// Resolve and load the config for a CLI run.
    ///
    /// Searches upward from cwd for `requested`. Falls back to built-in
    /// defaults when nothing is found, unless the caller named a file other
    /// than the default, in which case a missing file is an error.
    pub fn load(requested: &Path) -> Result<Self, ConfigError> {
        match find_config_file(requested) {
            Some(path) => Self::from_path(&path),
            None if requested != Path::new(DEFAULT_CONFIG_NAME) => {
                Err(ConfigError::NotFound(requested.to_path_buf()))
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections, collecting every problem before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.map.validate(&mut diag);
        self.assets.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

/// Parse config without validation.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
