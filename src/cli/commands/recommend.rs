use crate::catalog::Catalog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Filters, geo, select};
use crate::errors::AppResult;
use crate::map;
use crate::models::Spot;
use crate::ui::messages;
use crate::utils::formatting::{bold, wrap_indented};
use crate::utils::mins2readable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recommend {
        mood,
        duration,
        companion,
        seed,
        map: map_file,
    } = cmd
    {
        let catalog = Catalog::load(&cfg.dataset)?;

        let filters = Filters {
            mood: *mood,
            duration: *duration,
            companion: *companion,
        };

        // Fresh entropy on every run unless a seed is pinned, so the same
        // filters can surface a different subset next time.
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(*s),
            None => StdRng::from_entropy(),
        };

        let picks = select(catalog.spots(), &filters, &mut rng);

        if picks.is_empty() {
            messages::info("No spot matched your filters. Try different options!");
            return Ok(());
        }

        messages::header("Today's picks");
        for spot in &picks {
            print_spot(spot, &cfg.separator_char);
        }

        if let Some(path) = map_file {
            let view = geo::build_map_view(
                &picks,
                (cfg.fallback_lat, cfg.fallback_lon),
                cfg.map_zoom,
            );
            map::write_html(path, &view)?;
            messages::success(format!("Map written to {path}"));
        }
    }
    Ok(())
}

fn print_spot(spot: &Spot, separator_char: &str) {
    println!("\n{}", bold(&spot.name));
    println!("Category:  {}", spot.category);
    println!("Stay:      {}", mins2readable(spot.duration_min));
    println!(
        "Highlight: {}",
        wrap_indented(&spot.description, 66, "           ")
    );
    println!("Address:   {}", spot.address);

    if let Some(url) = spot.link() {
        println!("Website:   {}", url);
    }

    if let Some(img) = spot.image() {
        if Path::new(img).exists() {
            println!("Photo:     {}", img);
        } else {
            messages::warning(format!("Image file not found: {img}"));
        }
    }

    println!("{}", separator_char.repeat(40));
}
