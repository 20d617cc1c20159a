//! Leaflet map writer.
//!
//! Produces a single self-contained HTML file: Leaflet from the CDN,
//! OpenStreetMap tiles, and the [`MapView`] embedded as JSON. Open it in
//! any browser.

use crate::core::geo::MapView;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>daytrip — recommended spots</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
  var view = __VIEW__;
  var map = L.map('map').setView([view.center_lat, view.center_lon], view.zoom);
  L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  view.markers.forEach(function (m) {
    L.marker([m.lat, m.lon], { title: m.label }).addTo(map).bindPopup(m.label);
  });
</script>
</body>
</html>
"#;

/// Render `view` into an HTML file at `path`.
pub fn write_html(path: &str, view: &MapView) -> AppResult<()> {
    let json = serde_json::to_string(view).map_err(|e| AppError::Map(e.to_string()))?;
    let html = TEMPLATE.replace("__VIEW__", &json);

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(AppError::Map(format!(
            "output directory does not exist: {}",
            parent.display()
        )));
    }

    fs::write(path, html)?;
    Ok(())
}
