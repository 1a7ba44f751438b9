//! Contact page: static copy plus the identity links.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::components::panel::{panel, panel_inner};
use crate::ui::components::tags::chip_row;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Theme;

const HEADLINE: &str = "Let's build something intelligent.";
const SUBLINE: &str = "Fast replies. Thoughtful collaboration. Clear delivery.";
const ASIDE: &str = "Want a PDF resume or a detailed case study? Ping me and I'll \
send over a concise brief and a repo link. References available on request.";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let profile = app.sheet.profile;

    let width = ctx.bounded_width(70, 40, 96).min(area.width);
    let column = Rect::new(area.x, area.y, width, area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(5), Constraint::Min(0)])
        .split(column);

    // Main card: headline, sub copy, link chips.
    frame.render_widget(panel(theme), chunks[0]);
    let inner = panel_inner(chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(
            HEADLINE,
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBLINE, Style::default().fg(theme.dim))),
        Line::default(),
    ];
    let (chips, bounds) = chip_row(&[profile.email, "GitHub", "LinkedIn"], theme);
    let chip_row_index = lines.len() as u16;
    lines.push(chips);
    frame.render_widget(Paragraph::new(lines), inner);

    if chip_row_index < inner.height {
        let y = inner.y + chip_row_index;
        let actions = [
            ClickAction::OpenLink(format!("mailto:{}", profile.email)),
            ClickAction::OpenLink(profile.github.to_string()),
            ClickAction::OpenLink(profile.linkedin.to_string()),
        ];
        for (bound, action) in bounds.iter().zip(actions) {
            let x = inner.x + bound.offset;
            if x < inner.x + inner.width {
                let width = bound.width.min(inner.x + inner.width - x);
                app.hit_areas.register(Rect::new(x, y, width, 1), action);
            }
        }
    }

    // Aside: free-form note, wrapped to fit.
    frame.render_widget(panel(theme), chunks[1]);
    let aside_inner = panel_inner(chunks[1]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            ASIDE,
            Style::default().fg(theme.dim),
        )))
        .wrap(Wrap { trim: true }),
        aside_inner,
    );
}
