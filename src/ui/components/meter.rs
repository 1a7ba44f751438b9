//! Bounded progress meter.
//!
//! Stats, skill levels, and quest progress all render through this module.
//! Stored values are unclamped; every fill calculation funnels through
//! [`clamp_level`], which is the single clamping site in the codebase.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;

const FILLED: &str = "█";
const TRACK: &str = "░";

/// Clamp a stored value to the displayable [0, 100] range.
///
/// Out-of-range values are legal in the data model and are clamped here,
/// at render time, rather than rejected.
pub fn clamp_level(value: i16) -> u8 {
    value.clamp(0, 100) as u8
}

/// Number of filled cells for a value in a bar of the given width.
pub fn fill_width(value: i16, width: u16) -> u16 {
    (clamp_level(value) as u32 * width as u32 / 100) as u16
}

/// Render the bar itself: filled cells then track cells.
pub fn meter_spans(value: i16, width: u16, theme: &Theme) -> Vec<Span<'static>> {
    let filled = fill_width(value, width);
    vec![
        Span::styled(
            FILLED.repeat(filled as usize),
            Style::default().fg(theme.meter_fill),
        ),
        Span::styled(
            TRACK.repeat((width - filled) as usize),
            Style::default().fg(theme.meter_track),
        ),
    ]
}

/// A full meter row: padded label, bar, and the raw stored value.
///
/// Only the bar is clamped; the trailing number shows the stored value, so
/// the text stays faithful to the data even when the bar saturates.
pub fn meter_line(label: &str, value: i16, width: u16, theme: &Theme) -> Line<'static> {
    // Label takes up to half the row (capped), value column takes 4.
    let label_width = (width / 2).min(18) as usize;
    let bar_width = width.saturating_sub(label_width as u16 + 5).max(4);

    let mut spans = vec![Span::styled(
        format!("{:<width$} ", truncate(label, label_width), width = label_width),
        Style::default().fg(theme.text),
    )];
    spans.extend(meter_spans(value, bar_width, theme));
    spans.push(Span::styled(
        format!(" {:>3}", value),
        Style::default().fg(theme.dim),
    ));
    Line::from(spans)
}

/// A label-less meter row: bar plus the raw stored value. Used where the
/// surrounding card already names the thing being measured.
pub fn bar_line(value: i16, width: u16, theme: &Theme) -> Line<'static> {
    let bar_width = width.saturating_sub(5).max(4);
    let mut spans = meter_spans(value, bar_width, theme);
    spans.push(Span::styled(
        format!(" {:>3}", value),
        Style::default().fg(theme.dim),
    ));
    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
