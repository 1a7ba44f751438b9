//! Skill tree page: one card per branch, one meter per skill.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::components::meter::meter_line;
use crate::ui::components::panel::{panel, panel_inner};
use crate::ui::helpers::icon_glyph;
use crate::ui::layout::{grid_rects, LayoutContext};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let branches = app.sheet.skill_branches;
    let tallest = branches.iter().map(|b| b.skills.len()).max().unwrap_or(0) as u16;
    let card_height = tallest + 3;

    let rects = grid_rects(area, branches.len(), ctx.card_columns(), card_height);
    for (branch, rect) in branches.iter().zip(rects) {
        if rect.height == 0 {
            continue;
        }
        frame.render_widget(panel(theme), rect);
        let inner = panel_inner(rect);

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(branch.icon)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                branch.name,
                Style::default()
                    .fg(theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        for skill in branch.skills {
            lines.push(meter_line(skill.name, skill.level, inner.width, theme));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
