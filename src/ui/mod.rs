//! UI rendering for the Questfolio shell.
//!
//! The shell owns the chrome every page shares:
//! - Banner row with the logo, character name, and the theme toggle
//! - Tab bar (full labels on wide terminals, short labels on narrow ones)
//! - Footer with key hints and the copyright line
//!
//! Exactly one page body is rendered per frame. All sizing decisions go
//! through [`layout::LayoutContext`], and all colors through the palette
//! resolved from the app's theme mode at the top of [`render`].

pub mod components;
pub mod helpers;
pub mod interaction;
pub mod layout;
pub mod pages;
pub mod theme;

use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ThemeMode};
use components::tab_selector::{render_tab_bar, tab_items};
use interaction::ClickAction;
use layout::LayoutContext;
use theme::{palette, Theme};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the full UI: chrome plus the active page.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = palette(app.theme_mode);
    let ctx = LayoutContext::new(app.terminal_width, app.terminal_height);

    // Hit areas are rebuilt from scratch on every pass so they always
    // match what is on screen.
    app.hit_areas.clear();

    // Root background carries the theme
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.text)),
        area,
    );

    let header_height = if ctx.is_short() { 2 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app, &ctx, theme);
    pages::render_page(frame, chunks[1], app, &ctx, theme);
    render_footer(frame, chunks[2], app, &ctx, theme);
}

// ============================================================================
// Chrome
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    // Banner row: logo and name on the left, theme toggle on the right
    let banner_rect = Rect::new(area.x, area.y, area.width, 1);
    let banner = Line::from(vec![
        Span::styled("⚔ ", Style::default().fg(theme.accent)),
        Span::styled(
            "RPG PORTFOLIO",
            Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ", Style::default().fg(theme.dim)),
        Span::styled(
            app.sheet.profile.name,
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(banner), banner_rect);

    // Theme toggle button, labelled with the mode a click switches to
    let button_label = match app.theme_mode {
        ThemeMode::Dark => "[ Light ]",
        ThemeMode::Light => "[ Dark ]",
    };
    let button_width = button_label.width() as u16;
    if area.width > button_width + 1 {
        let button_rect = Rect::new(
            area.x + area.width - button_width - 1,
            area.y,
            button_width,
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                button_label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))),
            button_rect,
        );
        app.hit_areas.register(button_rect, ClickAction::ToggleTheme);
    }

    // Tab bar row: the same state renders both the wide and the compact
    // variant, so the marked tab can never drift between the two.
    if area.height >= 2 {
        let tab_rect = Rect::new(area.x, area.y + 1, area.width, 1);
        let items = tab_items();
        let (line, bounds) = render_tab_bar(&items, app.page, ctx, theme);
        frame.render_widget(Paragraph::new(line), tab_rect);
        for bound in bounds {
            if bound.offset >= tab_rect.width {
                continue;
            }
            let width = bound.width.min(tab_rect.width - bound.offset);
            app.hit_areas.register(
                Rect::new(tab_rect.x + bound.offset, tab_rect.y, width, 1),
                ClickAction::SelectPage(bound.page),
            );
        }
    }

    // Separator row, dropped on short terminals
    if area.height >= 3 {
        let separator_rect = Rect::new(area.x, area.y + 2, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(theme.border),
            ))),
            separator_rect,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let hints = if ctx.is_compact() {
        "q quit · tab pages · t theme"
    } else {
        "q quit · tab/←→ pages · 1-7 jump · t theme · g GitHub · i LinkedIn · m email"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", hints),
            Style::default().fg(theme.dim),
        ))),
        area,
    );

    let copyright = format!(
        "© {} {} · always shipping ",
        chrono::Utc::now().year(),
        app.sheet.profile.name
    );
    let width = copyright.width() as u16;
    if area.width > width + hints.width() as u16 + 2 {
        let rect = Rect::new(area.x + area.width - width, area.y, width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                copyright,
                Style::default().fg(theme.dim),
            ))),
            rect,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
