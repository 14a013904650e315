//! Per-document inclusion of the shared Leaflet assets.
//!
//! The stylesheet, the script and the gpx plugin are needed once per
//! document. [`AssetFlags`] starts with everything pending and is folded
//! through the blocks in document order: the first block emits all three
//! tags, later blocks emit none unless their `settings` ask for one.

use crate::config::AssetsConfig;

use super::payload::Settings;

/// Which shared assets a block should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetFlags {
    pub css: bool,
    pub js: bool,
    pub gpx: bool,
}

impl Default for AssetFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl AssetFlags {
    /// State at the start of every document.
    pub const ALL: Self = Self {
        css: true,
        js: true,
        gpx: true,
    };

    /// State after any block: everything handled. An explicit `true` in a
    /// later block re-includes for that block only.
    pub const NONE: Self = Self {
        css: false,
        js: false,
        gpx: false,
    };

    /// Effective decision for one block: explicit settings win over the
    /// incoming state.
    pub fn resolve(self, settings: &Settings) -> Self {
        Self {
            css: settings.include_css.unwrap_or(self.css),
            js: settings.include_js.unwrap_or(self.js),
            gpx: settings.include_gpx.unwrap_or(self.gpx),
        }
    }

    /// Append the `<link>`/`<script>` tags, stylesheet first.
    pub fn write_tags(self, out: &mut String, assets: &AssetsConfig) {
        if self.css {
            out.push_str(&stylesheet_tag(assets));
        }
        // Leaflet js goes after css
        if self.js {
            out.push_str(&script_tag(assets));
        }
        if self.gpx {
            out.push_str(&format!(r#"<script src="{}"></script>"#, assets.leaflet_gpx));
        }
    }
}

fn stylesheet_tag(assets: &AssetsConfig) -> String {
    if assets.leaflet_css_integrity.is_empty() {
        format!("<link rel=stylesheet href={}>", assets.leaflet_css)
    } else {
        format!(
            r#"<link rel=stylesheet href={} integrity="{}" crossorigin>"#,
            assets.leaflet_css, assets.leaflet_css_integrity
        )
    }
}

fn script_tag(assets: &AssetsConfig) -> String {
    if assets.leaflet_js_integrity.is_empty() {
        format!(r#"<script src="{}"></script>"#, assets.leaflet_js)
    } else {
        format!(
            r#"<script src="{}" integrity="{}" crossorigin=""></script>"#,
            assets.leaflet_js, assets.leaflet_js_integrity
        )
    }
}
