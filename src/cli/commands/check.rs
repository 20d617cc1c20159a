use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Companion, Mood};
use crate::ui::messages;
use std::path::Path;

/// Handle the `check` command: per-row diagnostics for the dataset.
///
/// Nothing here is fatal — a spot without coordinates simply gets no
/// marker, one without a duration never matches a duration filter.
/// The point is to make those gaps visible to whoever maintains the CSV.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalog = Catalog::load(&cfg.dataset)?;

    let mut no_coords = 0;
    let mut no_duration = 0;
    let mut missing_images = 0;

    for spot in catalog.spots() {
        if spot.coords().is_none() {
            no_coords += 1;
            messages::warning(format!("{}: no coordinates (no map marker)", spot.name));
        }

        if spot.duration_min.is_none() {
            no_duration += 1;
            messages::warning(format!(
                "{}: no duration_min (never matches a duration filter)",
                spot.name
            ));
        }

        if let Some(img) = spot.image()
            && !Path::new(img).exists()
        {
            missing_images += 1;
            messages::warning(format!("{}: image file not found: {}", spot.name, img));
        }

        for tag in unknown_tags(spot.mood_tags(), |t| Mood::from_tag(t).is_some()) {
            messages::warning(format!("{}: unknown mood tag '{}'", spot.name, tag));
        }
        for tag in unknown_tags(spot.who_with_tags(), |t| Companion::from_tag(t).is_some()) {
            messages::warning(format!("{}: unknown who_with tag '{}'", spot.name, tag));
        }
    }

    println!();
    messages::info(format!("{} spots checked", catalog.len()));
    messages::info(format!(
        "{} without coordinates, {} without duration, {} missing image files",
        no_coords, no_duration, missing_images
    ));

    if no_coords == 0 && no_duration == 0 && missing_images == 0 {
        messages::success("Dataset looks complete");
    }

    Ok(())
}

/// Split a free-text tag field on commas (ASCII or Japanese) and return
/// the tags no filter can ever select.
fn unknown_tags<'a, F>(field: &'a str, known: F) -> Vec<&'a str>
where
    F: Fn(&str) -> bool,
{
    field
        .split([',', '、'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter(|t| !known(t))
        .collect()
}
