//! Click resolution and dispatch.

use crate::app::App;

use super::hit_area::ClickAction;

/// Resolve a left click against the hit areas from the last render pass
/// and apply the matching action. Clicks that hit nothing are ignored.
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    let Some(action) = app.hit_areas.action_at(column, row) else {
        tracing::trace!(column, row, "click hit nothing");
        return;
    };
    apply_action(app, action);
}

/// Apply a resolved click action to the app.
pub fn apply_action(app: &mut App, action: ClickAction) {
    match action {
        ClickAction::SelectPage(page) => app.select_page(page),
        ClickAction::ToggleTheme => app.toggle_theme(),
        ClickAction::OpenLink(url) => open_link(&url),
    }
}

/// Open a link in the system handler. Fire-and-forget: a failure is logged
/// and otherwise ignored, matching the no-error-UI contract.
pub fn open_link(url: &str) {
    tracing::info!(url, "opening external link");
    if let Err(err) = open::that(url) {
        tracing::warn!(%err, url, "failed to open link");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Page, ThemeMode};
    use ratatui::layout::Rect;

    #[test]
    fn test_click_on_page_area_switches() {
        let mut app = App::new();
        app.hit_areas
            .register(Rect::new(4, 1, 12, 1), ClickAction::SelectPage(Page::Map));
        handle_click(&mut app, 5, 1);
        assert_eq!(app.page, Page::Map);
    }

    #[test]
    fn test_click_outside_areas_is_ignored() {
        let mut app = App::new();
        app.hit_areas
            .register(Rect::new(4, 1, 12, 1), ClickAction::SelectPage(Page::Map));
        handle_click(&mut app, 50, 20);
        assert_eq!(app.page, Page::Character);
    }

    #[test]
    fn test_apply_toggle_theme() {
        let mut app = App::new();
        apply_action(&mut app, ClickAction::ToggleTheme);
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }
}
