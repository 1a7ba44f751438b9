//! Shared helpers for integration tests.
#![allow(dead_code)]

use questfolio::app::App;
use questfolio::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Render the app at the given size and return the finished terminal so
/// callers can inspect the buffer or the hit areas the pass registered.
pub fn render(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    app.update_terminal_dimensions(width, height);
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal
}

/// The rendered buffer as text, one line per terminal row.
pub fn buffer_text(terminal: &Terminal<TestBackend>, width: u16) -> String {
    let cols = width as usize;
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let mut s = cell.symbol().to_string();
            if (i + 1) % cols == 0 {
                s.push('\n');
            }
            s
        })
        .collect()
}

/// Render and return only the text.
pub fn render_to_text(app: &mut App, width: u16, height: u16) -> String {
    let terminal = render(app, width, height);
    buffer_text(&terminal, width)
}
