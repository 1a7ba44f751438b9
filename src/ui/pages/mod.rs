//! Page renderers - one module per navigation tab.
//!
//! Every page is a pure function from its slice of the character sheet to
//! widgets: no state, no I/O, no domain errors. The only thing a page
//! writes is the shell-owned hit-area registry, for pages that show
//! clickable link chips.

mod character;
mod codex;
mod contact;
mod inventory;
mod map;
mod quests;
mod skills;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Page};
use crate::ui::helpers::icon_glyph;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Theme;

/// Render the active page into the body area.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let body = render_page_heading(frame, area, app.page, theme);
    match app.page {
        Page::Character => character::render(frame, body, app, ctx, theme),
        Page::Skills => skills::render(frame, body, app, ctx, theme),
        Page::Inventory => inventory::render(frame, body, app, ctx, theme),
        Page::Codex => codex::render(frame, body, app, ctx, theme),
        Page::Quests => quests::render(frame, body, app, ctx, theme),
        Page::Map => map::render(frame, body, app, ctx, theme),
        Page::Contact => contact::render(frame, body, app, ctx, theme),
    }
}

/// Render the page heading (icon, title, description) and return what is
/// left for the page body.
fn render_page_heading(frame: &mut Frame, area: Rect, page: Page, theme: &Theme) -> Rect {
    if area.height < 4 {
        // Not enough room for a heading; give the page everything.
        return area;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{} ", icon_glyph(page.icon())),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                page.title(),
                Style::default()
                    .fg(theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", page.description()),
            Style::default().fg(theme.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    chunks[1]
}
