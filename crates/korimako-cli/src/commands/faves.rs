use anyhow::Result;

use korimako_core::schema::Database;
use korimako_core::taxonomy::Theme;
use korimako_data::{load_dataset, Config};
use korimako_query::arrange_favourites;

use crate::view;

/// Print every favourited bird's card, alphabetically by common name. The
/// search filters play no part here.
pub async fn run_faves(config: Config, theme: Theme) -> Result<()> {
    let db = Database::open(&config.database_path)?;
    let favourites = db.list_favourites()?;

    if favourites.is_empty() {
        println!("No favourites yet.");
        println!("Favourite birds with Space in `korimako browse`.");
        return Ok(());
    }

    let records = load_dataset(&config.dataset_path).await?;
    let results = arrange_favourites(&records, &favourites);

    for bird in &results {
        let card = view::build_infobox(bird, true, theme);
        view::console::print_infobox(&card);
    }
    println!("\n{} favourite(s)", results.len());

    Ok(())
}

/// Empty the favourites store.
pub fn run_clear_faves(config: &Config) -> Result<()> {
    let db = Database::open(&config.database_path)?;
    let removed = db.clear_favourites()?;
    println!("Removed {removed} favourite(s).");
    Ok(())
}
