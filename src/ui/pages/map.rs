//! World map page: the forward-looking roadmap, one card per period.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::components::panel::{panel, panel_inner};
use crate::ui::layout::{grid_rects, LayoutContext};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let periods = app.sheet.roadmap;
    let tallest = periods.iter().map(|p| p.milestones.len()).max().unwrap_or(0) as u16;
    let card_height = tallest + 3;

    let rects = grid_rects(area, periods.len(), ctx.card_columns(), card_height);
    for (period, rect) in periods.iter().zip(rects) {
        if rect.height == 0 {
            continue;
        }
        frame.render_widget(panel(theme), rect);
        let inner = panel_inner(rect);

        let mut lines = vec![Line::from(Span::styled(
            period.label,
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        ))];
        for milestone in period.milestones {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.accent)),
                Span::styled(*milestone, Style::default().fg(theme.text)),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
