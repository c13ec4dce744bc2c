//! Theme palettes and indicator colours for the TUI.

use ratatui::style::Color;

use korimako_core::taxonomy::{Theme, ThemeTier};

/// Terminal colour per indicator style token.
const INDICATOR_COLORS: &[(&str, Color)] = &[
    ("col-nt", Color::Green),
    ("col-nu", Color::Cyan),
    ("col-rl", Color::Blue),
    ("col-rc", Color::LightGreen),
    ("col-dc", Color::Yellow),
    ("col-ni", Color::LightCyan),
    ("col-nv", Color::LightYellow),
    ("col-ne", Color::LightRed),
    ("col-nc", Color::Red),
    ("col-black", Color::DarkGray),
];

/// Colour for an indicator dot; tokens outside the scale (including the
/// error token) get the distinct error colour.
#[must_use]
pub fn indicator_color(style_token: &str) -> Color {
    for (token, color) in INDICATOR_COLORS {
        if *token == style_token {
            return *color;
        }
    }
    Color::Magenta
}

/// The terminal colour of one theme tier.
#[must_use]
pub fn tier_color(theme: Theme, tier: ThemeTier) -> Color {
    match (theme, tier) {
        (Theme::Blue, ThemeTier::Page) => Color::Blue,
        (Theme::Blue, ThemeTier::Panel) => Color::Cyan,
        (Theme::Blue, ThemeTier::Card) => Color::LightBlue,
        (Theme::Red, ThemeTier::Page) => Color::Red,
        (Theme::Red, ThemeTier::Panel) => Color::LightMagenta,
        (Theme::Red, ThemeTier::Card) => Color::LightRed,
    }
}
