/// The two colour schemes of the interface. Held in memory only; every run
/// starts on blue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Blue,
    Red,
}

/// The three styling tiers a theme applies to: page chrome, panels, and
/// individual cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeTier {
    Page,
    Panel,
    Card,
}

impl Theme {
    /// The other theme; toggling twice returns to the start.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }

    /// The style token for a tier, e.g. `blue-3` for cards under the blue
    /// theme.
    #[must_use]
    pub fn token(self, tier: ThemeTier) -> &'static str {
        match (self, tier) {
            (Self::Blue, ThemeTier::Page) => "blue-1",
            (Self::Blue, ThemeTier::Panel) => "blue-2",
            (Self::Blue, ThemeTier::Card) => "blue-3",
            (Self::Red, ThemeTier::Page) => "red-1",
            (Self::Red, ThemeTier::Panel) => "red-2",
            (Self::Red, ThemeTier::Card) => "red-3",
        }
    }
}
