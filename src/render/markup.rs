//! Leaflet markup generation.
//!
//! Output is one line of HTML per block. Field values are copied into the
//! generated script as written; nothing is escaped.

use crate::config::MapSectionConfig;

use super::payload::{Marker, Route};

/// Icon used when a marker has neither `html` nor `img-src`.
pub const FALLBACK_ICON: &str = "📍";

/// Center and size of one map after defaults are applied.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub lat: &'a str,
    pub lng: &'a str,
    pub zoom: &'a str,
    pub width: &'a str,
    pub height: &'a str,
}

/// `<div>` the map binds to.
pub fn write_container(out: &mut String, widget_id: &str, view: &View<'_>) {
    out.push_str(&format!(
        r#"<div class="mdx-map" id="{widget_id}" style="width: {}; height: {}"></div>"#,
        view.width, view.height
    ));
}

/// Map instance, tile layer and zoom control.
pub fn write_map_init(out: &mut String, widget_id: &str, view: &View<'_>, map: &MapSectionConfig) {
    out.push_str(&format!(
        "var map = L.map('{widget_id}').setView([{}, {}], {});",
        view.lat, view.lng, view.zoom
    ));
    out.push_str(&format!(
        "L.tileLayer('{}', {{ maxZoom: {}, attribution: '{}'}}).addTo(map);",
        map.tile_url, map.max_zoom, map.attribution
    ));
    out.push_str("map.zoomControl.setPosition('topright');");
}

/// Marker statement plus its tooltip. `position` is 1-based.
///
/// Returns false (and writes nothing) when `lat` or `lng` is missing.
pub fn write_marker(out: &mut String, marker: &Marker, position: usize) -> bool {
    let (Some(lat), Some(lng)) = (&marker.lat, &marker.lng) else {
        return false;
    };

    let name = marker
        .name
        .clone()
        .unwrap_or_else(|| format!("Marker {position}"));
    let icon = marker_icon(marker);
    let onclick = marker
        .url
        .as_ref()
        .map(|url| format!(r#".on("click", function(evt) {{window.open("{url}", "_self");}})"#))
        .unwrap_or_default();

    // className "" drops leaflet's default white box behind the icon
    out.push_str(&format!(
        r#"var marker = L.marker([{lat}, {lng}], {{ icon: L.divIcon({{ html: "{icon}", iconSize: [32,32], iconAnchor: [16,16], className: "" }})}}).addTo(map){onclick};"#
    ));
    out.push_str(&format!(r#"marker.bindTooltip("{name}");"#));
    true
}

fn marker_icon(marker: &Marker) -> String {
    match (&marker.html, &marker.img_src) {
        (Some(html), _) => html.clone(),
        (None, Some(src)) => format!("<img src='{src}' />"),
        (None, None) => FALLBACK_ICON.to_string(),
    }
}

/// GPX track overlay. Returns false when `gpx-url` is missing.
pub fn write_route(out: &mut String, route: &Route) -> bool {
    let Some(url) = &route.gpx_url else {
        return false;
    };

    let color = route
        .color
        .as_ref()
        .map(|color| format!(r#", polyline_options: {{ color: "{color}", opacity: .8 }}"#))
        .unwrap_or_default();

    out.push_str(&format!(
        r#"var route = new L.GPX("{url}", {{ async: true, markers: {{ startIcon: "", endIcon: "" }}{color} }}).addTo(map);"#
    ));
    true
}
