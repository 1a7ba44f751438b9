//! Tag chips and chip rows.
//!
//! Tags are the small `[Label]` markers on projects and quests. Chip rows
//! are the clickable variant used for contact links: the builder returns
//! column bounds alongside the line so the caller can register hit areas.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

/// A single `[Label]` tag span.
pub fn tag_span(label: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format!("[{}]", label), Style::default().fg(theme.tag))
}

/// A line of tags separated by single spaces, in stored order.
pub fn tags_line(tags: &[&str], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (idx, tag) in tags.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(tag_span(tag, theme));
    }
    Line::from(spans)
}

/// Column extent of one chip within a chip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipBounds {
    /// Column offset from the start of the row
    pub offset: u16,
    /// Width of the chip in columns
    pub width: u16,
}

/// A row of emphasized `[ Label ]` chips with per-chip column bounds.
pub fn chip_row(labels: &[&str], theme: &Theme) -> (Line<'static>, Vec<ChipBounds>) {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    let mut bounds = Vec::with_capacity(labels.len());
    let mut offset: u16 = 0;

    for (idx, label) in labels.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
            offset += 1;
        }
        let chip = format!("[ {} ]", label);
        let width = chip.width() as u16;
        bounds.push(ChipBounds { offset, width });
        spans.push(Span::styled(
            chip,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        offset += width;
    }

    (Line::from(spans), bounds)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tags_line_keeps_stored_order() {
        let line = tags_line(&["Python", "Pandas", "RAG"], &DARK);
        assert_eq!(line_text(&line), "[Python] [Pandas] [RAG]");
    }

    #[test]
    fn test_tags_line_empty() {
        let line = tags_line(&[], &DARK);
        assert_eq!(line_text(&line), "");
    }

    #[test]
    fn test_chip_row_bounds_match_rendered_text() {
        let (line, bounds) = chip_row(&["Email", "GitHub"], &DARK);
        let text = line_text(&line);
        assert_eq!(text, "[ Email ] [ GitHub ]");
        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds[0], ChipBounds { offset: 0, width: 9 });
        assert_eq!(
            bounds[1],
            ChipBounds {
                offset: 10,
                width: 10
            }
        );
    }

    #[test]
    fn test_chip_bounds_do_not_overlap() {
        let (_, bounds) = chip_row(&["a", "bb", "ccc"], &DARK);
        for pair in bounds.windows(2) {
            assert!(pair[0].offset + pair[0].width <= pair[1].offset);
        }
    }
}
