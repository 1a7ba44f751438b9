//! Character sheet page: identity card, current focus, and attributes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::components::meter::meter_line;
use crate::ui::components::panel::{panel, panel_inner, section_header};
use crate::ui::components::tags::chip_row;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Theme;

/// What the hero is grinding right now; sits beside the identity card.
const CURRENT_FOCUS: [&str; 3] = [
    "21-day detox to rebuild deep work habits",
    "Daily SQL/Python reps + weekly ship cadence",
    "Portfolio projects targeting Data/AI roles",
];

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    theme: &Theme,
) {
    let sheet = app.sheet;

    // Attributes panel: section header plus one meter per stat, inside borders.
    let stats_height = sheet.stats.len() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(stats_height)])
        .split(area);

    if ctx.is_narrow() {
        render_identity(frame, chunks[0], app, theme);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[0]);
        render_identity(frame, columns[0], app, theme);
        render_focus(frame, columns[1], theme);
    }

    render_attributes(frame, chunks[1], app, theme);
}

fn render_identity(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let profile = app.sheet.profile;

    frame.render_widget(panel(theme), area);
    let inner = panel_inner(area);

    let mut lines = vec![
        Line::from(Span::styled(
            profile.name,
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.title, Style::default().fg(theme.text))),
        Line::from(Span::styled(profile.tagline, Style::default().fg(theme.dim))),
        Line::default(),
        Line::from(vec![
            Span::styled("⚑ ", Style::default().fg(theme.accent)),
            Span::styled(profile.location, Style::default().fg(theme.text)),
        ]),
    ];

    let (chips, bounds) = chip_row(&["Email", "GitHub", "LinkedIn"], theme);
    let chip_row_index = lines.len() as u16;
    lines.push(chips);
    frame.render_widget(Paragraph::new(lines), inner);

    // Chip hit areas: the chip row renders unwrapped, so its row index is
    // its y offset inside the panel.
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
}

fn render_focus(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(panel(theme), area);
    let inner = panel_inner(area);

    let mut lines = vec![section_header("CURRENT FOCUS", theme)];
    for item in CURRENT_FOCUS {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(theme.accent)),
            Span::styled(item, Style::default().fg(theme.text)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_attributes(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    frame.render_widget(panel(theme), area);
    let inner = panel_inner(area);

    let mut lines = vec![section_header("ATTRIBUTES", theme)];
    for stat in app.sheet.stats {
        lines.push(meter_line(stat.label, stat.value, inner.width, theme));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
