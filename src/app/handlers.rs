//! Keyboard and mouse handlers for the App.
//!
//! Keys and clicks are the only event sources: there are no timers, no
//! background tasks, and no async messages. Every handler either mutates
//! the two UI state fields or opens an external link.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Page};
use crate::ui::interaction::{handle_click, open_link};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.next_page(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.prev_page(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char(c @ '1'..='7') => {
                let idx = c as usize - '1' as usize;
                self.select_page(Page::ALL[idx]);
            }
            KeyCode::Char('g') => open_link(self.sheet.profile.github),
            KeyCode::Char('i') => open_link(self.sheet.profile.linkedin),
            KeyCode::Char('m') => {
                open_link(&format!("mailto:{}", self.sheet.profile.email));
            }
            _ => {}
        }
    }

    /// Handle a mouse event. Only left clicks do anything; they resolve
    /// through the hit areas registered by the last render pass.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            handle_click(self, mouse.column, mouse.row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_forward() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.page, Page::Skills);
    }

    #[test]
    fn test_back_tab_cycles_backward() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.page, Page::Contact);
    }

    #[test]
    fn test_digit_jumps_to_page() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.page, Page::Quests);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.page, Page::Character);
    }

    #[test]
    fn test_t_toggles_theme() {
        let mut app = App::new();
        let before = app.theme_mode;
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme_mode, before.toggled());
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut app = App::new();
        app.needs_redraw = false;
        app.handle_key(key(KeyCode::Char('z')));
        assert_eq!(app.page, Page::Character);
        assert!(!app.should_quit);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_non_left_click_is_ignored() {
        let mut app = App::new();
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.page, Page::Character);
    }
}
