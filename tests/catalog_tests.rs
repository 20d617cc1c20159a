use daytrip::catalog::Catalog;
use daytrip::errors::AppError;
use std::env;

mod common;
use common::{HEADER, sample_dataset, write_dataset};

#[test]
fn test_load_parses_optional_fields_as_none() {
    let data = sample_dataset("catalog_load");
    let catalog = Catalog::load(&data).expect("load catalog");

    assert_eq!(catalog.len(), 7);
    assert!(!catalog.is_empty());

    // 下条川千本桜 has neither duration nor coordinates
    let sakura = catalog
        .spots()
        .iter()
        .find(|s| s.name == "下条川千本桜")
        .expect("row present");
    assert_eq!(sakura.duration_min, None);
    assert_eq!(sakura.coords(), None);
    assert_eq!(sakura.link(), None);
    assert_eq!(sakura.image(), None);

    // while a fully populated row keeps everything
    let park = catalog
        .spots()
        .iter()
        .find(|s| s.name == "海王丸パーク")
        .expect("row present");
    assert_eq!(park.duration_min, Some(120));
    assert_eq!(park.link(), Some("https://www.kaiwomaru.jp/"));
    assert!(park.coords().is_some());
}

#[test]
fn test_load_missing_file() {
    let err = Catalog::load("/no/such/spots.csv").unwrap_err();
    match err {
        AppError::DatasetNotFound(path) => assert_eq!(path, "/no/such/spots.csv"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_missing_column() {
    let body = "name,category,duration_min,who_with,description,address,url,image_path,lat,lon\n";
    let data = write_dataset("catalog_no_mood", body);

    let err = Catalog::load(&data).unwrap_err();
    match err {
        AppError::MissingColumn(col) => assert_eq!(col, "mood"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_reports_offending_line() {
    let mut body = String::from(HEADER);
    body.push_str("良い店,食事,美味しいもの,60,家族と,普通の行,射水市,,,36.75,137.10\n");
    body.push_str("悪い店,食事,美味しいもの,そこそこ,家族と,壊れた行,射水市,,,36.75,137.10\n");
    let data = write_dataset("catalog_bad_line", &body);

    let err = Catalog::load(&data).unwrap_err();
    match err {
        AppError::InvalidRow { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_starter_dataset_is_loadable() {
    let mut path = env::temp_dir();
    path.push("daytrip_starter_test.csv");
    let path = path.to_string_lossy().to_string();
    std::fs::remove_file(&path).ok();

    Catalog::write_starter(&path).expect("write starter");
    let catalog = Catalog::load(&path).expect("starter loads");
    assert!(!catalog.is_empty());

    // never clobber an existing dataset
    assert!(Catalog::write_starter(&path).is_err());
}
