use daytrip::core::geo::{self, DEFAULT_CENTER, DEFAULT_ZOOM};
use daytrip::map;
use daytrip::models::Spot;
use std::env;
use std::fs;

fn located(name: &str, lat: Option<f64>, lon: Option<f64>) -> Spot {
    Spot {
        name: name.to_string(),
        category: "公園".to_string(),
        mood: None,
        duration_min: None,
        who_with: None,
        description: String::new(),
        address: String::new(),
        url: None,
        image_path: None,
        lat,
        lon,
    }
}

#[test]
fn test_center_is_mean_of_present_coordinates() {
    let a = located("a", Some(36.70), Some(137.00));
    let b = located("b", Some(36.80), Some(137.20));
    let picks = vec![&a, &b];

    let view = geo::build_map_view(&picks, DEFAULT_CENTER, DEFAULT_ZOOM);
    assert!((view.center_lat - 36.75).abs() < 1e-9);
    assert!((view.center_lon - 137.10).abs() < 1e-9);
    assert_eq!(view.markers.len(), 2);
}

#[test]
fn test_fallback_center_when_no_spot_is_located() {
    let a = located("a", None, None);
    let picks = vec![&a];

    let view = geo::build_map_view(&picks, (36.75, 137.10), DEFAULT_ZOOM);
    assert_eq!(view.center_lat, 36.75);
    assert_eq!(view.center_lon, 137.10);
    assert!(view.markers.is_empty());
}

#[test]
fn test_half_located_spot_centers_but_gets_no_marker() {
    // lat but no lon: contributes to the lat mean, places no marker
    let a = located("a", Some(36.70), None);
    let b = located("b", Some(36.80), Some(137.20));
    let picks = vec![&a, &b];

    let view = geo::build_map_view(&picks, DEFAULT_CENTER, DEFAULT_ZOOM);
    assert!((view.center_lat - 36.75).abs() < 1e-9);
    assert!((view.center_lon - 137.20).abs() < 1e-9);

    assert_eq!(view.markers.len(), 1);
    assert_eq!(view.markers[0].label, "b");
}

#[test]
fn test_write_html_embeds_markers_and_center() {
    let a = located("海王丸パーク", Some(36.7784), Some(137.0988));
    let picks = vec![&a];
    let view = geo::build_map_view(&picks, DEFAULT_CENTER, 14);

    let mut out = env::temp_dir();
    out.push("daytrip_geo_map_test.html");
    let out = out.to_string_lossy().to_string();
    fs::remove_file(&out).ok();

    map::write_html(&out, &view).expect("write map");
    let html = fs::read_to_string(&out).expect("read map");

    assert!(html.contains("leaflet"));
    assert!(html.contains("海王丸パーク"));
    assert!(html.contains("36.7784"));
    assert!(html.contains("\"zoom\":14"));
}

#[test]
fn test_write_html_rejects_missing_directory() {
    let a = located("a", Some(36.75), Some(137.10));
    let picks = vec![&a];
    let view = geo::build_map_view(&picks, DEFAULT_CENTER, DEFAULT_ZOOM);

    let err = map::write_html("/no/such/dir/map.html", &view);
    assert!(err.is_err());
}
