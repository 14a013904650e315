//! Map compiler: one block payload in, one HTML fragment out.
//!
//! - [`payload`] - Brace completion and field lookup
//! - [`assets`] - Shared asset flags and tags
//! - [`markup`] - Container, map script, markers, routes

pub mod assets;
pub mod markup;
pub mod payload;

pub use assets::AssetFlags;
pub use payload::{MapConfig, Marker, Route, Settings};

use crate::{config::Config, debug, error::MapError};
use markup::View;

/// Compile one block payload.
///
/// Returns the fragment and the effective asset decisions of this block.
/// A payload that is not a JSON object after brace completion is an error;
/// individual fields never are.
pub fn render(
    payload: &str,
    widget_id: &str,
    assets: AssetFlags,
    config: &Config,
) -> Result<(String, AssetFlags), MapError> {
    let map = MapConfig::parse(payload, widget_id)?;
    Ok(render_config(&map, widget_id, assets, config))
}

/// Generate markup for an already parsed block.
pub fn render_config(
    map: &MapConfig,
    widget_id: &str,
    assets: AssetFlags,
    config: &Config,
) -> (String, AssetFlags) {
    let defaults = &config.map;
    let settings = &map.settings;
    let view = View {
        lat: settings.initial_lat.as_deref().unwrap_or(&defaults.initial_lat),
        lng: settings.initial_lng.as_deref().unwrap_or(&defaults.initial_lng),
        zoom: settings.initial_zoom.as_deref().unwrap_or(&defaults.initial_zoom),
        width: settings.width.as_deref().unwrap_or(&defaults.width),
        height: settings.height.as_deref().unwrap_or(&defaults.height),
    };
    let effective = assets.resolve(settings);

    let mut html = String::with_capacity(1024 + 256 * (map.markers.len() + map.routes.len()));
    effective.write_tags(&mut html, &config.assets);
    markup::write_container(&mut html, widget_id, &view);

    html.push_str("<script>");
    markup::write_map_init(&mut html, widget_id, &view, defaults);

    for (index, marker) in map.markers.iter().enumerate() {
        let position = index + 1;
        if !markup::write_marker(&mut html, marker, position) {
            debug!("render"; "{}: skipping marker {} without lat/lng", widget_id, position);
        }
    }

    for (index, route) in map.routes.iter().enumerate() {
        if !markup::write_route(&mut html, route) {
            debug!("render"; "{}: skipping route {} without gpx-url", widget_id, index + 1);
        }
    }

    html.push_str("</script>");

    (html, effective)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_default(payload: &str) -> (String, AssetFlags) {
        render(payload, "mdx_map_1", AssetFlags::ALL, &Config::default()).unwrap()
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        let (html, effective) = render_default("");
        assert_eq!(effective, AssetFlags::ALL);
        assert!(html.contains(r#"style="width: 600px; height: 400px""#));
        assert!(html.contains("setView([62.3479, 12.3970], 9);"));
        assert!(html.ends_with("map.zoomControl.setPosition('topright');</script>"));
    }

    #[test]
    fn test_default_filling_with_markers() {
        let (html, _) = render_default(r#"{"markers":[{"lat":"1","lng":"2"}]}"#);
        assert!(html.contains("setView([62.3479, 12.3970], 9);"));
        assert!(html.contains("L.marker([1, 2]"));
        assert!(html.contains(r#"marker.bindTooltip("Marker 1");"#));
    }

    #[test]
    fn test_fragment_order() {
        let (html, _) = render_default(
            r#""markers": [{"lat": "1", "lng": "2"}], "routes": [{"gpx-url": "a.gpx"}]"#,
        );
        let link = html.find("<link").unwrap();
        let js = html.find("leaflet.js").unwrap();
        let gpx = html.find("gpx.min.js").unwrap();
        let div = html.find("<div").unwrap();
        let map = html.find("L.map(").unwrap();
        let marker = html.find("L.marker(").unwrap();
        let route = html.find("L.GPX(").unwrap();
        assert!(link < js && js < gpx && gpx < div && div < map && map < marker && marker < route);
    }

    #[test]
    fn test_marker_naming_in_order() {
        let (html, _) = render_default(
            r#""markers": [{"lat":"1","lng":"1"},{"lat":"2","lng":"2"},{"lat":"3","lng":"3"}]"#,
        );
        let first = html.find(r#"bindTooltip("Marker 1")"#).unwrap();
        let second = html.find(r#"bindTooltip("Marker 2")"#).unwrap();
        let third = html.find(r#"bindTooltip("Marker 3")"#).unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_bad_marker_does_not_stop_others() {
        let (html, _) = render_default(
            r#""markers": [{"name": "lost"}, "junk", {"lat": "5", "lng": "6"}]"#,
        );
        assert!(!html.contains("lost"));
        assert_eq!(html.matches("L.marker(").count(), 1);
        // Position counts every entry
        assert!(html.contains(r#"bindTooltip("Marker 3")"#));
    }

    #[test]
    fn test_settings_override_defaults() {
        let (html, _) = render_default(
            r#""settings": {"initial-lat": "61.87", "initial-lng": "9.74", "initial-zoom": "11", "height": "250px"}"#,
        );
        assert!(html.contains("setView([61.87, 9.74], 11);"));
        assert!(html.contains(r#"style="width: 600px; height: 250px""#));
    }

    #[test]
    fn test_numeric_settings_keep_source_text() {
        let (html, _) = render_default(
            r#""settings": {"initial-lat": 61.8, "initial-lng": 12.3970, "initial-zoom": 1e1}"#,
        );
        assert!(html.contains("setView([61.8, 12.3970], 1e1);"));
    }

    #[test]
    fn test_config_defaults_apply() {
        let mut config = Config::default();
        config.map.initial_zoom = "4".into();
        config.map.width = "100%".into();
        config.assets.leaflet_gpx = "/js/gpx.js".into();

        let (html, _) = render("", "mdx_map_1", AssetFlags::ALL, &config).unwrap();
        assert!(html.contains("setView([62.3479, 12.3970], 4);"));
        assert!(html.contains("width: 100%"));
        assert!(html.contains(r#"<script src="/js/gpx.js"></script>"#));
    }

    #[test]
    fn test_explicit_asset_settings() {
        let (html, effective) = render(
            r#""settings": {"include_leaflet_js": true, "include_leaflet_css": false}"#,
            "mdx_map_2",
            AssetFlags::NONE,
            &Config::default(),
        )
        .unwrap();
        assert!(!html.contains("<link"));
        assert!(html.contains("leaflet.js"));
        assert!(!html.contains("gpx.min.js"));
        assert_eq!(
            effective,
            AssetFlags {
                css: false,
                js: true,
                gpx: false
            }
        );
    }

    #[test]
    fn test_brace_tolerance() {
        let bare = render_default(r#""settings": {"initial-zoom":"5"}"#);
        let wrapped = render_default(r#"{"settings": {"initial-zoom":"5"}}"#);
        assert_eq!(bare, wrapped);
        assert!(bare.0.contains("], 5);"));
    }

    #[test]
    fn test_invalid_payload() {
        let err = render("\"markers\": [", "mdx_map_7", AssetFlags::ALL, &Config::default())
            .unwrap_err();
        assert_eq!(err.widget_id(), "mdx_map_7");

        let err = render("[1, 2]", "mdx_map_1", AssetFlags::ALL, &Config::default());
        assert!(err.is_err());
    }
}
