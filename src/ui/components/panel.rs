//! Bordered panel primitive.
//!
//! Every visual grouping in the UI goes through this one Block builder so
//! panels look identical everywhere. Panels have no behavior; headers are
//! rendered as the first line inside the panel, not as a border title.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::ui::helpers::inner_rect;
use crate::ui::theme::Theme;

/// The themed bordered panel.
pub fn panel(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
}

/// Content rect inside a panel's borders.
pub fn panel_inner(area: Rect) -> Rect {
    inner_rect(area, 1)
}

/// A panel section header line: `◈ LABEL` in the accent color.
pub fn section_header(label: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("◈ {}", label),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;

    #[test]
    fn test_panel_inner_accounts_for_borders() {
        let area = Rect::new(0, 0, 10, 6);
        assert_eq!(panel_inner(area), Rect::new(1, 1, 8, 4));
    }

    #[test]
    fn test_section_header_carries_label() {
        let line = section_header("ATTRIBUTES", &DARK);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "◈ ATTRIBUTES");
    }
}
