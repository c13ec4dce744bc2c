pub mod browse;
pub mod config;
pub mod faves;
pub mod search;
pub mod statuses;

pub use browse::run_browse;
pub use config::show_config;
pub use faves::{run_clear_faves, run_faves};
pub use search::run_search;
pub use statuses::show_statuses;
