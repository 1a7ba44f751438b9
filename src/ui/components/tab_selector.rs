//! Tab Selector Component
//!
//! The horizontal page selector rendered in the header chrome. Uses a `▶`
//! marker for the active page and switches to short labels on compact
//! terminals. Alongside the rendered line it reports per-tab column
//! bounds so the shell can register click targets.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::Page;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Theme;

/// A single tab item in the selector.
#[derive(Debug, Clone, Copy)]
pub struct TabItem {
    /// The page this tab selects
    pub page: Page,
    /// Full label displayed on normal-sized terminals
    pub label: &'static str,
    /// Short label displayed on compact terminals
    pub short_label: &'static str,
}

/// One tab per page, in navigation order.
pub fn tab_items() -> Vec<TabItem> {
    Page::ALL
        .iter()
        .map(|&page| TabItem {
            page,
            label: page.label(),
            short_label: page.short_label(),
        })
        .collect()
}

/// Column extent of one tab (marker plus label) within the bar.
#[derive(Debug, Clone, Copy)]
pub struct TabBounds {
    /// The page the region selects
    pub page: Page,
    /// Column offset from the start of the bar
    pub offset: u16,
    /// Width of the clickable region in columns
    pub width: u16,
}

/// Render the tab bar for the given active page.
///
/// Both the wide and compact navigation variants come from this one
/// function reading the same state; they differ only in label length and
/// spacing, never in which tab is marked active.
pub fn render_tab_bar(
    items: &[TabItem],
    active: Page,
    ctx: &LayoutContext,
    theme: &Theme,
) -> (Line<'static>, Vec<TabBounds>) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut bounds: Vec<TabBounds> = Vec::new();

    // Leading padding
    spans.push(Span::raw("  "));
    let mut offset: u16 = 2;

    for (idx, item) in items.iter().enumerate() {
        let is_active = item.page == active;
        let label = if ctx.is_compact_nav() {
            item.short_label
        } else {
            item.label
        };
        let width = 2 + label.width() as u16;
        bounds.push(TabBounds {
            page: item.page,
            offset,
            width,
        });

        if is_active {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(theme.header)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ".to_string(), Style::default().fg(theme.dim)));
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(theme.dim),
            ));
        }
        offset += width;

        // Spacing between tabs (except after the last)
        if idx < items.len() - 1 {
            let spacing = if ctx.is_narrow() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
            offset += spacing.len() as u16;
        }
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
    fn test_tab_items_cover_every_page() {
        let items = tab_items();
        assert_eq!(items.len(), Page::ALL.len());
        for (item, page) in items.iter().zip(Page::ALL) {
            assert_eq!(item.page, page);
        }
    }

    #[test]
    fn test_marker_sits_before_active_label() {
        let items = tab_items();
        let ctx = LayoutContext::new(120, 40);
        let (line, _) = render_tab_bar(&items, Page::Skills, &ctx, &DARK);
        let text = line_text(&line);

        let marker = text.find('▶').unwrap();
        let skills = text.find("Skill Tree").unwrap();
        let character = text.find("Character").unwrap();
        assert!(marker > character);
        assert!(marker < skills);
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let items = tab_items();
        let ctx = LayoutContext::new(60, 18);
        let (line, _) = render_tab_bar(&items, Page::Character, &ctx, &DARK);
        let text = line_text(&line);
        assert!(text.contains("Skills"));
        assert!(!text.contains("Skill Tree"));
        assert!(text.contains("Char"));
        assert!(!text.contains("Character"));
    }

    #[test]
    fn test_wide_uses_full_labels() {
        let items = tab_items();
        let ctx = LayoutContext::new(120, 40);
        let (line, _) = render_tab_bar(&items, Page::Character, &ctx, &DARK);
        let text = line_text(&line);
        assert!(text.contains("Skill Tree"));
        assert!(text.contains("Inventory"));
    }

    #[test]
    fn test_bounds_align_with_rendered_columns() {
        let items = tab_items();
        let ctx = LayoutContext::new(120, 40);
        let (line, bounds) = render_tab_bar(&items, Page::Character, &ctx, &DARK);
        // Index by char: every glyph in the bar is single-width, so char
        // positions equal column positions.
        let chars: Vec<char> = line_text(&line).chars().collect();

        assert_eq!(bounds.len(), items.len());
        for (bound, item) in bounds.iter().zip(&items) {
            // The label starts two columns into its clickable region,
            // after the marker slot.
            let start = bound.offset as usize + 2;
            let rendered: String = chars[start..start + item.label.len()].iter().collect();
            assert_eq!(rendered, item.label, "bounds for {:?} drifted", item.page);
        }
    }

    #[test]
    fn test_bounds_do_not_overlap() {
        let items = tab_items();
        let ctx = LayoutContext::new(120, 40);
        let (_, bounds) = render_tab_bar(&items, Page::Character, &ctx, &DARK);
        for pair in bounds.windows(2) {
            assert!(pair[0].offset + pair[0].width <= pair[1].offset);
        }
    }
}
