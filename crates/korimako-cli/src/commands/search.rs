use anyhow::Result;

use korimako_core::schema::Database;
use korimako_core::taxonomy::{ConservationStatus, Theme};
use korimako_data::{load_dataset, Config};
use korimako_query::{arrange, SearchQuery, SortOrder, StatusFilter};

use crate::view;

/// Resolve a `--status` argument against the vocabulary. `all` (any case)
/// and omission both mean no status constraint; anything else must be one
/// of the eleven known labels.
pub fn parse_status_filter(raw: Option<&str>) -> Result<StatusFilter> {
    match raw {
        None => Ok(StatusFilter::All),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(StatusFilter::All),
        Some(s) => {
            let status = ConservationStatus::parse(s);
            if status.rank().is_none() {
                let known: Vec<String> = ConservationStatus::ALL
                    .iter()
                    .map(|st| st.label().to_string())
                    .collect();
                anyhow::bail!(
                    "Unknown conservation status: {s}\n\nValid statuses:\n  {}",
                    known.join("\n  ")
                );
            }
            Ok(StatusFilter::Only(status))
        }
    }
}

pub async fn run_search(
    config: Config,
    text: Option<String>,
    status: Option<String>,
    order: SortOrder,
    theme: Theme,
) -> Result<()> {
    let query = SearchQuery {
        text: text.unwrap_or_default(),
        status: parse_status_filter(status.as_deref())?,
        order,
    };

    let records = load_dataset(&config.dataset_path).await?;

    // A broken favourites store downgrades the buttons, never the search.
    let favourites = match Database::open(&config.database_path).and_then(|db| db.list_favourites())
    {
        Ok(names) => names,
        Err(err) => {
            log::warn!("favourites store unavailable: {err}");
            Vec::new()
        }
    };

    let results = arrange(&records, &query);
    if results.is_empty() {
        println!("No birds match the current search.");
        return Ok(());
    }

    for bird in &results {
        let card = view::build_infobox(bird, favourites.contains(&bird.common_name), theme);
        view::console::print_infobox(&card);
    }
    println!("\n{} of {} birds shown", results.len(), records.len());

    Ok(())
}
