//! Inventory page: certifications and tools as a flat card grid.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::components::panel::{panel, panel_inner};
use crate::ui::helpers::icon_glyph;
use crate::ui::layout::{grid_rects, LayoutContext};
use crate::ui::theme::Theme;

const CARD_HEIGHT: u16 = 4;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let items = app.sheet.inventory;
    let rects = grid_rects(area, items.len(), ctx.card_columns(), CARD_HEIGHT);

    for (item, rect) in items.iter().zip(rects) {
        if rect.height == 0 {
            continue;
        }
        frame.render_widget(panel(theme), rect);
        let inner = panel_inner(rect);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", icon_glyph(item.icon)),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    item.name,
                    Style::default()
                        .fg(theme.header)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(item.detail, Style::default().fg(theme.dim))),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
