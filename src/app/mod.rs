//! Application state for the Questfolio shell.
//!
//! [`App`] owns the only mutable state in the program: the active page and
//! the theme mode, plus the render-pass bookkeeping the event loop needs
//! (terminal dimensions, dirty flag, clickable regions). All content comes
//! from the immutable [`crate::sheet::CharacterSheet`].

mod handlers;
mod navigation;
mod types;

pub use types::{Page, ThemeMode};

use crate::sheet::{self, CharacterSheet};
use crate::ui::interaction::HitAreaRegistry;

/// Root application state, passed down to render functions as read-only
/// data (the hit-area registry is the one render-pass artifact children
/// write into).
pub struct App {
    /// The static content aggregate; never mutated.
    pub sheet: &'static CharacterSheet,
    /// Which page the router currently displays.
    pub page: Page,
    /// Which palette the next render pass resolves.
    pub theme_mode: ThemeMode,
    /// Set by the quit handlers; the event loop exits when true.
    pub should_quit: bool,
    /// Draw on the next loop iteration.
    pub needs_redraw: bool,
    /// Terminal width in columns, updated on resize events.
    pub terminal_width: u16,
    /// Terminal height in rows, updated on resize events.
    pub terminal_height: u16,
    /// Clickable regions, rebuilt on every render pass.
    pub hit_areas: HitAreaRegistry,
}

impl App {
    /// Create the app in its launch state: character page, dark mode.
    pub fn new() -> Self {
        Self {
            sheet: sheet::sheet(),
            page: Page::default(),
            theme_mode: ThemeMode::default(),
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
            hit_areas: HitAreaRegistry::new(),
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Record new terminal dimensions after a resize event.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
