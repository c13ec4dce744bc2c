pub mod status;
pub mod theme;

pub use status::{ConservationStatus, FALLBACK_STYLE_TOKEN};
pub use theme::{Theme, ThemeTier};
