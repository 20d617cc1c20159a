//! Map geometry for selected spots: center point and marker list.

use crate::models::Spot;
use serde::Serialize;

/// Default center (around Kosugi) used when no selected spot carries
/// coordinates.
pub const DEFAULT_CENTER: (f64, f64) = (36.75, 137.10);

pub const DEFAULT_ZOOM: u8 = 12;

/// One map pin, labeled with the spot name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

/// Everything the map renderer needs: a center, a zoom level and the
/// markers for every selected spot that has both coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

/// Build the map view for a selection.
///
/// The center is the mean of the present `lat` values and the mean of
/// the present `lon` values, computed independently; when either set is
/// empty the `fallback` center is used. Spots missing either coordinate
/// get no marker but still appear in the text output upstream.
pub fn build_map_view(spots: &[&Spot], fallback: (f64, f64), zoom: u8) -> MapView {
    let lats: Vec<f64> = spots.iter().filter_map(|s| s.lat).collect();
    let lons: Vec<f64> = spots.iter().filter_map(|s| s.lon).collect();

    let (center_lat, center_lon) = if lats.is_empty() || lons.is_empty() {
        fallback
    } else {
        (
            lats.iter().sum::<f64>() / lats.len() as f64,
            lons.iter().sum::<f64>() / lons.len() as f64,
        )
    };

    let markers = spots
        .iter()
        .filter_map(|s| {
            s.coords().map(|(lat, lon)| Marker {
                lat,
                lon,
                label: s.name.clone(),
            })
        })
        .collect();

    MapView {
        center_lat,
        center_lon,
        zoom,
        markers,
    }
}
