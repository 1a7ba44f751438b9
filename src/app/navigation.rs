//! Navigation methods for the App.

use super::{App, Page};

impl App {
    /// Switch to the given page. Switching is synchronous; pages are
    /// stateless so nothing is saved or restored.
    pub fn select_page(&mut self, page: Page) {
        if self.page != page {
            tracing::info!(prev = self.page.id(), page = page.id(), "page selected");
            self.page = page;
            self.mark_dirty();
        }
    }

    /// Switch to the page with the given id. Unrecognized ids are ignored:
    /// the set of valid ids is closed and fully enumerated by the tab bar,
    /// so an unknown id is noise, not an error.
    pub fn select_page_by_id(&mut self, id: &str) {
        match Page::from_id(id) {
            Some(page) => self.select_page(page),
            None => tracing::debug!(id, "ignoring unknown page id"),
        }
    }

    /// Cycle to the next page, wrapping around.
    pub fn next_page(&mut self) {
        self.select_page(self.page.next());
    }

    /// Cycle to the previous page, wrapping around.
    pub fn prev_page(&mut self) {
        self.select_page(self.page.prev());
    }

    /// Flip between the dark and light palettes. The effect is purely which
    /// palette the next render pass resolves; nothing is persisted.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::info!(mode = ?self.theme_mode, "theme toggled");
        self.mark_dirty();
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ThemeMode;

    #[test]
    fn test_select_page_switches() {
        let mut app = App::new();
        app.select_page(Page::Quests);
        assert_eq!(app.page, Page::Quests);
    }

    #[test]
    fn test_select_page_by_unknown_id_is_noop() {
        let mut app = App::new();
        app.select_page(Page::Codex);
        app.needs_redraw = false;
        app.select_page_by_id("warp-zone");
        assert_eq!(app.page, Page::Codex);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_select_page_by_valid_id() {
        let mut app = App::new();
        app.select_page_by_id("contact");
        assert_eq!(app.page, Page::Contact);
    }

    #[test]
    fn test_toggle_theme_twice_restores_mode() {
        let mut app = App::new();
        app.toggle_theme();
        assert_eq!(app.theme_mode, ThemeMode::Light);
        app.toggle_theme();
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_cycling_visits_every_page() {
        let mut app = App::new();
        let mut visited = vec![app.page];
        for _ in 1..Page::ALL.len() {
            app.next_page();
            visited.push(app.page);
        }
        assert_eq!(visited, Page::ALL.to_vec());
        app.next_page();
        assert_eq!(app.page, Page::Character);
    }
}
