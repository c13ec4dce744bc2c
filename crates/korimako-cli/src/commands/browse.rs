use anyhow::Result;

use korimako_data::Config;

/// Run the interactive catalog browser.
pub async fn run_browse(config: Config) -> Result<()> {
    crate::tui::run_tui(config).await
}
