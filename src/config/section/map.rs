//! `[map]` section configuration.
//!
//! Defaults applied to every map block whose `settings` omit a field,
//! plus the tile layer shared by all maps.
//!
//! # Example
//!
//! ```toml
//! [map]
//! initial_lat = "62.3479"     # Center latitude
//! initial_lng = "12.3970"     # Center longitude
//! initial_zoom = "9"          # Initial zoom level
//! width = "600px"             # Container width (any CSS length)
//! height = "400px"            # Container height
//! tile_url = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
//! max_zoom = 19
//! ```
//!
//! Coordinates and zoom are kept as text and copied into the generated
//! script as written.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Map defaults and tile layer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSectionConfig {
    /// Center latitude when a block sets no `initial-lat`.
    pub initial_lat: String,
    /// Center longitude when a block sets no `initial-lng`.
    pub initial_lng: String,
    /// Zoom level when a block sets no `initial-zoom`.
    pub initial_zoom: String,
    pub width: String,
    pub height: String,

    /// Tile url template passed to `L.tileLayer`.
    pub tile_url: String,
    pub max_zoom: u8,
    /// Attribution html shown in the map corner.
    pub attribution: String,
}

impl Default for MapSectionConfig {
    fn default() -> Self {
        Self {
            initial_lat: "62.3479".into(),
            initial_lng: "12.3970".into(),
            initial_zoom: "9".into(),
            width: "600px".into(),
            height: "400px".into(),
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            max_zoom: 19,
            attribution:
                "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>"
                    .into(),
        }
    }
}

impl MapSectionConfig {
    /// Validate map section.
    ///
    /// # Checks
    /// - `width`, `height` and `tile_url` must not be empty
    /// - `attribution` must not contain `'` (it is emitted inside a single-quoted js string)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.width.trim().is_empty() {
            diag.error("map.width", "must not be empty");
        }
        if self.height.trim().is_empty() {
            diag.error("map.height", "must not be empty");
        }
        if self.tile_url.trim().is_empty() {
            diag.error_with_hint(
                "map.tile_url",
                "must not be empty",
                "use https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            );
        }
        if self.attribution.contains('\'') {
            diag.error_with_hint(
                "map.attribution",
                "must not contain single quotes",
                "use &#39; instead",
            );
        }
    }
}
