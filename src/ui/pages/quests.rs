//! Quest log page: missions grouped by era, in stored order.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::components::meter::bar_line;
use crate::ui::components::panel::{panel, panel_inner};
use crate::ui::components::tags::tags_line;
use crate::ui::layout::{grid_rects, LayoutContext};
use crate::ui::theme::Theme;

const CARD_HEIGHT: u16 = 6;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let columns = ctx.card_columns();
    let bottom = area.y + area.height;
    let mut y = area.y;

    // Eras render strictly in stored order; items keep stored order inside
    // each era's grid. Eras that no longer fit are clipped, not reordered.
    for era in app.sheet.quest_eras {
        if y >= bottom {
            break;
        }
        let label = Line::from(vec![
            Span::styled("▸ ", Style::default().fg(theme.accent)),
            Span::styled(
                era.label,
                Style::default()
                    .fg(theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(label), Rect::new(area.x, y, area.width, 1));
        y += 1;

        let rows = (era.quests.len() as u16).div_ceil(columns);
        let section = Rect::new(area.x, y, area.width, (rows * CARD_HEIGHT).min(bottom - y));
        let rects = grid_rects(section, era.quests.len(), columns, CARD_HEIGHT);
        for (quest, rect) in era.quests.iter().zip(rects) {
            if rect.height == 0 {
                continue;
            }
            frame.render_widget(panel(theme), rect);
            let inner = panel_inner(rect);

            let lines = vec![
                Line::from(Span::styled(
                    quest.name,
                    Style::default()
                        .fg(theme.header)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(quest.detail, Style::default().fg(theme.dim))),
                bar_line(quest.progress, inner.width, theme),
                tags_line(quest.tags, theme),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }

        y += rows * CARD_HEIGHT + 1;
    }
}
