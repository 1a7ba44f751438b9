//! Project codex page: one card per portfolio project.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::components::panel::{panel, panel_inner};
use crate::ui::components::tags::tags_line;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::{grid_rects, LayoutContext};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let projects = app.sheet.projects;
    let tallest = projects.iter().map(|p| p.bullets.len()).max().unwrap_or(0) as u16;
    // title + summary + blank + bullets + blank + tags + link, inside borders
    let card_height = tallest + 8;

    let rects = grid_rects(area, projects.len(), ctx.card_columns(), card_height);
    for (project, rect) in projects.iter().zip(rects) {
        if rect.height == 0 {
            continue;
        }
        frame.render_widget(panel(theme), rect);
        let inner = panel_inner(rect);

        let mut lines = vec![
            Line::from(Span::styled(
                project.title,
                Style::default()
                    .fg(theme.header)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(project.summary, Style::default().fg(theme.dim))),
            Line::default(),
        ];
        for bullet in project.bullets {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.accent)),
                Span::styled(*bullet, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::default());
        lines.push(tags_line(project.tags, theme));

        // A "#" link is a placeholder: rendered dimmed, not clickable.
        let has_link = project.link.starts_with("http");
        let link_row_index = lines.len() as u16;
        lines.push(Line::from(Span::styled(
            "↗ View repo/demo",
            if has_link {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim)
            },
        )));

        frame.render_widget(Paragraph::new(lines), inner);

        if has_link && link_row_index < inner.height {
            app.hit_areas.register(
                Rect::new(inner.x, inner.y + link_row_index, inner.width.min(16), 1),
                ClickAction::OpenLink(project.link.to_string()),
            );
        }
    }
}
