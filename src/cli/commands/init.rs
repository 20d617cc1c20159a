use crate::catalog::Catalog;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the starter dataset (only when no dataset exists yet)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARE CONFIGURATION
    //
    // Config::init_all creates:
    //   ~/.daytrip/
    //   ~/.daytrip/daytrip.conf
    // and seeds the starter dataset when the configured one is missing.
    //
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load()?;
    let dataset = if let Some(custom) = &cli.data {
        custom.clone()
    } else {
        cfg.dataset.clone()
    };

    println!("⚙️  Initializing daytrip…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Dataset    : {}", &dataset);

    //
    // 2️⃣ SANITY-CHECK THE DATASET
    //
    // Loading validates headers and rows, so a broken catalog is
    // reported here instead of at the first `recommend`.
    //
    let catalog = Catalog::load(&dataset)?;
    println!("✅ Dataset loaded ({} spots)", catalog.len());

    println!("🎉 daytrip initialization completed!");
    Ok(())
}
