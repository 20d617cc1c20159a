use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::mins2readable;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalog = Catalog::load(&cfg.dataset)?;

    let mut table = Table::new(&["Name", "Category", "Stay", "Mood", "With"]);
    for spot in catalog.spots() {
        table.add_row(vec![
            spot.name.clone(),
            spot.category.clone(),
            mins2readable(spot.duration_min),
            spot.mood_tags().to_string(),
            spot.who_with_tags().to_string(),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} spots in catalog", catalog.len());

    Ok(())
}
