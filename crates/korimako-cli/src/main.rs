use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use korimako_core::taxonomy::Theme;
use korimako_data::Config;
use korimako_query::SortOrder;

mod commands;
mod tui;
mod view;

#[derive(Debug, Parser)]
#[command(name = "korimako", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the favourites database (default: ~/.local/share/korimako/korimako.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Path to the bird dataset document (default: nzbird.json)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Browse the catalog interactively
    ///
    /// Opens the full-screen browser. Type `/` to edit the search text,
    /// `s` to cycle the status filter, `o` to switch the sort order, and
    /// Enter to run the search. Space favourites the selected bird, `F`
    /// shows the favourites, `C` clears them, and `t` swaps the theme.
    Browse,
    /// Search the catalog once and print the matching cards
    Search {
        /// Text to look for in any of a bird's names
        text: Option<String>,

        /// Only show birds with this conservation status
        #[arg(long)]
        status: Option<String>,

        /// How to order the results
        #[arg(long, value_enum, default_value_t = OrderArg::Alphabetical)]
        order: OrderArg,

        /// Render the cards with the red theme
        #[arg(long)]
        red: bool,
    },
    /// Print the favourited birds, alphabetically
    Faves {
        /// Render the cards with the red theme
        #[arg(long)]
        red: bool,
    },
    /// Remove every favourite from the store
    ClearFaves,
    /// List the conservation-status vocabulary
    Statuses,
    /// Show the effective configuration
    Config {
        /// Write a starter config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// The two sort orders of the search form.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OrderArg {
    Alphabetical,
    ConservationStatus,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Alphabetical => Self::Alphabetical,
            OrderArg::ConservationStatus => Self::ConservationStatus,
        }
    }
}

const fn theme_for(red: bool) -> Theme {
    if red {
        Theme::Red
    } else {
        Theme::Blue
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load_with(cli.dataset, cli.db)?;

    // Ensure the database directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        Commands::Browse => commands::run_browse(config).await,
        Commands::Search {
            text,
            status,
            order,
            red,
        } => commands::run_search(config, text, status, order.into(), theme_for(red)).await,
        Commands::Faves { red } => commands::run_faves(config, theme_for(red)).await,
        Commands::ClearFaves => commands::run_clear_faves(&config),
        Commands::Statuses => {
            commands::show_statuses();
            Ok(())
        }
        Commands::Config { init } => commands::show_config(init),
    }
}
