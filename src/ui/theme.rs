//! Color palettes for the two theme modes.
//!
//! The palette is resolved once per render pass from the app's
//! [`ThemeMode`]; render functions only ever see a `&Theme`, so no
//! component can hold its own idea of the current mode.

use ratatui::style::Color;

use crate::app::ThemeMode;

/// A resolved color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Root background fill
    pub bg: Color,
    /// Panel border color
    pub border: Color,
    /// Headings and the logo
    pub header: Color,
    /// Body text
    pub text: Color,
    /// De-emphasized text
    pub dim: Color,
    /// Highlights: active tab marker, section markers, chips
    pub accent: Color,
    /// Filled portion of a progress meter
    pub meter_fill: Color,
    /// Unfilled portion of a progress meter
    pub meter_track: Color,
    /// Tag chip text
    pub tag: Color,
}

/// Dark palette (launch default): slate background, emerald accent.
pub const DARK: Theme = Theme {
    bg: Color::Rgb(10, 14, 22),
    border: Color::Rgb(51, 65, 85),
    header: Color::Rgb(241, 245, 249),
    text: Color::Rgb(203, 213, 225),
    dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(52, 211, 153),
    meter_fill: Color::Rgb(16, 185, 129),
    meter_track: Color::Rgb(40, 50, 66),
    tag: Color::Rgb(148, 163, 184),
};

/// Light palette: paper background, deeper emerald accent.
pub const LIGHT: Theme = Theme {
    bg: Color::Rgb(246, 248, 250),
    border: Color::Rgb(203, 213, 225),
    header: Color::Rgb(15, 23, 42),
    text: Color::Rgb(30, 41, 59),
    dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(5, 150, 105),
    meter_fill: Color::Rgb(16, 185, 129),
    meter_track: Color::Rgb(226, 232, 240),
    tag: Color::Rgb(71, 85, 105),
};

/// Resolve the palette for a theme mode.
pub fn palette(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}
