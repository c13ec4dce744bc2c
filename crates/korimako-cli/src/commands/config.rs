use anyhow::Result;

use korimako_data::config;
use korimako_data::Config;

/// Show the current effective configuration, optionally writing a starter
/// config file first.
pub fn show_config(init: bool) -> Result<()> {
    if init {
        if config::ensure_config_file()? {
            println!("Created {}\n", config::config_file_path().display());
        } else {
            println!(
                "Config file already exists: {}\n",
                config::config_file_path().display()
            );
        }
    }

    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  dataset_path: {}", config.dataset_path.display());
    println!("  database_path: {}", config.database_path.display());

    println!("\nPriority: CLI args > ENV vars (KORIMAKO_*) > Config file > Defaults");

    Ok(())
}
