//! Navigation panel toggle state.
//!
//! The mobile menu is a strict two-state machine owned by the click handler.
//! State is written to the DOM and never read back from it, so repeated
//! clicks alternate cleanly even if something else touches the panel's
//! inline styles.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Inline styles applied to the panel when it opens as an overlay below the
/// header.
pub const OVERLAY_LAYOUT: [(&str, &str); 8] = [
    ("flex-direction", "column"),
    ("position", "absolute"),
    ("top", "70px"),
    ("right", "0"),
    ("background", "#0a0a0a"),
    ("width", "200px"),
    ("padding", "1rem"),
    ("border", "1px solid #333"),
];

/// Whether the navigation panel is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Panel hidden (`display: none`). Initial state.
    #[default]
    Hidden,
    /// Panel shown as a column overlay (`display: flex`).
    Open,
}

impl MenuState {
    /// The state after one trigger click.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Open,
            Self::Open => Self::Hidden,
        }
    }

    /// CSS `display` value for this state.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Open => "flex",
        }
    }

    /// Whether [`OVERLAY_LAYOUT`] should be applied.
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
