//! `[assets]` section configuration.
//!
//! Urls of the Leaflet stylesheet, the Leaflet script and the
//! leaflet-gpx plugin. Each is emitted at most once per document.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! leaflet_css = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
//! leaflet_css_integrity = "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY="
//! leaflet_js = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
//! leaflet_js_integrity = "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo="
//! leaflet_gpx = "https://cdnjs.cloudflare.com/ajax/libs/leaflet-gpx/2.1.0/gpx.min.js"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Shared library asset urls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub leaflet_css: String,
    /// Subresource integrity hash for the stylesheet.
    pub leaflet_css_integrity: String,
    pub leaflet_js: String,
    /// Subresource integrity hash for the script.
    pub leaflet_js_integrity: String,
    /// The gpx plugin is loaded unpinned, without an integrity hash.
    pub leaflet_gpx: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            leaflet_css: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".into(),
            leaflet_css_integrity: "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=".into(),
            leaflet_js: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".into(),
            leaflet_js_integrity: "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=".into(),
            leaflet_gpx: "https://cdnjs.cloudflare.com/ajax/libs/leaflet-gpx/2.1.0/gpx.min.js"
                .into(),
        }
    }
}

impl AssetsConfig {
    /// Validate asset urls. Integrity hashes may be empty.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, url) in [
            ("assets.leaflet_css", &self.leaflet_css),
            ("assets.leaflet_js", &self.leaflet_js),
            ("assets.leaflet_gpx", &self.leaflet_gpx),
        ] {
            if url.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_assets_config_defaults() {
        let config = test_parse_config("");
        assert!(config.assets.leaflet_css.ends_with("leaflet@1.9.4/dist/leaflet.css"));
        assert!(config.assets.leaflet_js.ends_with("leaflet@1.9.4/dist/leaflet.js"));
        assert!(config.assets.leaflet_gpx.ends_with("gpx.min.js"));
    }

    #[test]
    fn test_assets_config_empty_url_rejected() {
        let config = test_parse_config("[assets]\nleaflet_js = \"\"");
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("assets.leaflet_js"));
    }
}
