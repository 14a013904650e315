//! Map block payload parsing.
//!
//! Authors usually write only the inner key/value pairs of a JSON object:
//!
//! ```text
//! "settings": { "initial-zoom": "11" },
//! "routes": [{ "gpx-url": "day1.gpx", "color": "red" }]
//! ```
//!
//! [`complete_braces`] restores the enclosing braces before parsing. After
//! that every field is looked up on its own: a missing or mistyped field
//! resolves to `None` and never disturbs its neighbours.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::MapError;

/// Parsed configuration of one map block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    pub settings: Settings,
    pub markers: Vec<Marker>,
    pub routes: Vec<Route>,
}

/// The `settings` object. Unset fields fall back to `[map]` config defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub initial_lat: Option<String>,
    pub initial_lng: Option<String>,
    pub initial_zoom: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub include_css: Option<bool>,
    pub include_js: Option<bool>,
    pub include_gpx: Option<bool>,
}

/// One `markers` entry.
///
/// Entries that are not objects parse to an empty marker so that positions
/// (and therefore default names) stay aligned with the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marker {
    pub name: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub html: Option<String>,
    pub img_src: Option<String>,
    pub url: Option<String>,
}

/// One `routes` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub gpx_url: Option<String>,
    pub color: Option<String>,
}

const SETTINGS_KEYS: [&str; 8] = [
    "initial-lat",
    "initial-lng",
    "initial-zoom",
    "width",
    "height",
    "include_leaflet_js",
    "include_leaflet_css",
    "include_leaflet_gpx",
];

impl MapConfig {
    /// Parse a raw block payload. `widget_id` only labels errors.
    pub fn parse(payload: &str, widget_id: &str) -> Result<Self, MapError> {
        let json = complete_braces(payload);
        let root: Map<String, Value> =
            serde_json::from_str(&json).map_err(|source| MapError::ConfigParse {
                widget_id: widget_id.to_string(),
                source,
            })?;

        Ok(Self::from_object(&root))
    }

    fn from_object(root: &Map<String, Value>) -> Self {
        let settings = root
            .get("settings")
            .and_then(Value::as_object)
            .map(Settings::from_object)
            .unwrap_or_default();

        let markers = entries(root, "markers")
            .map(|entry| entry.as_object().map(Marker::from_object).unwrap_or_default())
            .collect();

        let routes = entries(root, "routes")
            .map(|entry| entry.as_object().map(Route::from_object).unwrap_or_default())
            .collect();

        Self {
            settings,
            markers,
            routes,
        }
    }

    /// Settings keys that were given but are not recognized.
    pub fn unknown_settings(payload_settings: &Map<String, Value>) -> Vec<&str> {
        payload_settings
            .keys()
            .map(String::as_str)
            .filter(|key| !SETTINGS_KEYS.contains(key))
            .collect()
    }
}

impl Settings {
    fn from_object(obj: &Map<String, Value>) -> Self {
        for key in MapConfig::unknown_settings(obj) {
            crate::debug!("render"; "ignoring unknown setting `{}`", key);
        }

        Self {
            initial_lat: text(obj, "initial-lat"),
            initial_lng: text(obj, "initial-lng"),
            initial_zoom: text(obj, "initial-zoom"),
            width: text(obj, "width"),
            height: text(obj, "height"),
            include_css: obj.get("include_leaflet_css").and_then(Value::as_bool),
            include_js: obj.get("include_leaflet_js").and_then(Value::as_bool),
            include_gpx: obj.get("include_leaflet_gpx").and_then(Value::as_bool),
        }
    }
}

impl Marker {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            name: text(obj, "name"),
            lat: text(obj, "lat"),
            lng: text(obj, "lng"),
            html: text(obj, "html"),
            img_src: text(obj, "img-src"),
            url: text(obj, "url"),
        }
    }
}

impl Route {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            gpx_url: text(obj, "gpx-url"),
            color: text(obj, "color"),
        }
    }
}

/// Array entries under `key`; anything other than an array yields nothing.
fn entries<'a>(root: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    root.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

/// Opaque text of a field: strings verbatim, numbers as written in the
/// payload (`arbitrary_precision` keeps the source token).
fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Add the enclosing braces an author left out.
///
/// A leading `{` is added when the trimmed payload does not start with one.
/// A trailing `}` is added when the braces are still unbalanced afterwards,
/// so a body whose last pair closes a nested object (`"settings": {..}`) is
/// completed too.
pub fn complete_braces(payload: &str) -> Cow<'_, str> {
    let trimmed = payload.trim();
    let open = !trimmed.starts_with('{');
    let depth = brace_depth(trimmed) + i64::from(open);
    let close = depth > 0;

    if !open && !close {
        return Cow::Borrowed(payload);
    }

    let mut json = String::with_capacity(payload.len() + 2);
    if open {
        json.push('{');
    }
    json.push_str(payload);
    if close {
        json.push('}');
    }
    Cow::Owned(json)
}

/// Net count of `{` over `}` outside JSON strings.
fn brace_depth(text: &str) -> i64 {
    let mut depth = 0i64;
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_braces() {
        assert_eq!(complete_braces(""), "{}");
        assert_eq!(complete_braces("\"a\": 1\n"), "{\"a\": 1\n}");
        assert_eq!(complete_braces("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(complete_braces("{\"a\": 1\n"), "{\"a\": 1\n}");
        assert_eq!(complete_braces("\"a\": 1}"), "{\"a\": 1}");
        // Trailing brace belongs to the nested object
        assert_eq!(
            complete_braces("\"s\": {\"z\": \"5\"}"),
            "{\"s\": {\"z\": \"5\"}}"
        );
    }

    #[test]
    fn test_complete_braces_ignores_braces_in_strings() {
        assert_eq!(
            complete_braces("\"html\": \"}\\\"{\""),
            "{\"html\": \"}\\\"{\"}"
        );
    }

    #[test]
    fn test_parse_empty_payload() {
        let config = MapConfig::parse("\n", "mdx_map_1").unwrap();
        assert_eq!(config, MapConfig::default());
    }

    #[test]
    fn test_parse_settings() {
        let config = MapConfig::parse(
            r#""settings": {"initial-lat": "61.87", "initial-lng": 9.74, "width": "100%", "include_leaflet_js": false}"#,
            "mdx_map_1",
        )
        .unwrap();
        let s = &config.settings;
        assert_eq!(s.initial_lat.as_deref(), Some("61.87"));
        assert_eq!(s.initial_lng.as_deref(), Some("9.74"));
        assert_eq!(s.width.as_deref(), Some("100%"));
        assert_eq!(s.initial_zoom, None);
        assert_eq!(s.include_js, Some(false));
        assert_eq!(s.include_css, None);
    }

    #[test]
    fn test_numbers_keep_source_text() {
        let config = MapConfig::parse(
            r#""settings": {"initial-lat": 61.8, "initial-lng": 12.3970, "initial-zoom": 1e1}, "markers": [{"lat": -0.50, "lng": 7}]"#,
            "mdx_map_1",
        )
        .unwrap();
        assert_eq!(config.settings.initial_lat.as_deref(), Some("61.8"));
        assert_eq!(config.settings.initial_lng.as_deref(), Some("12.3970"));
        assert_eq!(config.settings.initial_zoom.as_deref(), Some("1e1"));
        assert_eq!(config.markers[0].lat.as_deref(), Some("-0.50"));
        assert_eq!(config.markers[0].lng.as_deref(), Some("7"));
    }

    #[test]
    fn test_mistyped_fields_are_absent() {
        let config = MapConfig::parse(
            r#""settings": {"height": [1], "width": "50px", "include_leaflet_css": "yes"}"#,
            "mdx_map_1",
        )
        .unwrap();
        assert_eq!(config.settings.height, None);
        assert_eq!(config.settings.width.as_deref(), Some("50px"));
        assert_eq!(config.settings.include_css, None);
    }

    #[test]
    fn test_parse_markers_keep_positions() {
        let config = MapConfig::parse(
            r#""markers": [{"lat": "1", "lng": "2", "img-src": "a.png"}, 7, {"name": "Hut", "url": "hut.html"}]"#,
            "mdx_map_1",
        )
        .unwrap();
        assert_eq!(config.markers.len(), 3);
        assert_eq!(config.markers[0].img_src.as_deref(), Some("a.png"));
        assert_eq!(config.markers[1], Marker::default());
        assert_eq!(config.markers[2].name.as_deref(), Some("Hut"));
        assert_eq!(config.markers[2].lat, None);
    }

    #[test]
    fn test_non_array_sections_are_empty() {
        let config =
            MapConfig::parse(r#""markers": {"lat": "1"}, "routes": "x.gpx""#, "mdx_map_1")
                .unwrap();
        assert!(config.markers.is_empty());
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_parse_routes() {
        let config = MapConfig::parse(
            r#""routes": [{"gpx-url": "a.gpx", "color": "red"}, {"color": "blue"}]"#,
            "mdx_map_1",
        )
        .unwrap();
        assert_eq!(config.routes[0].gpx_url.as_deref(), Some("a.gpx"));
        assert_eq!(config.routes[0].color.as_deref(), Some("red"));
        assert_eq!(config.routes[1].gpx_url, None);
    }

    #[test]
    fn test_parse_errors() {
        let err = MapConfig::parse("\"settings\": {", "mdx_map_4").unwrap_err();
        assert!(matches!(err, MapError::ConfigParse { .. }));
        assert_eq!(err.widget_id(), "mdx_map_4");

        let err = MapConfig::parse("not json", "mdx_map_1").unwrap_err();
        assert!(matches!(err, MapError::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_settings() {
        let value: Value =
            serde_json::from_str(r#"{"initial_lat": "1", "width": "2px", "zoom": 3}"#).unwrap();
        let unknown = MapConfig::unknown_settings(value.as_object().unwrap());
        assert_eq!(unknown, vec!["initial_lat", "zoom"]);
    }
}
