//! Responsive layout helpers.
//!
//! `LayoutContext` encapsulates the terminal dimensions captured in app
//! state and is passed to render functions so sizing decisions (tab label
//! length, card grid columns, panel stacking) all read from one place.

use ratatui::layout::Rect;

// ============================================================================
// Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layout decisions.
pub mod breakpoints {
    /// Below this width the layout is narrow: single-column card grids.
    pub const NARROW_WIDTH: u16 = 80;
    /// Below this width the tab bar switches to short labels.
    pub const COMPACT_NAV_WIDTH: u16 = 90;
    /// At or above this width card grids use three columns.
    pub const WIDE_WIDTH: u16 = 120;
    /// Below this height the chrome drops its separator row.
    pub const SHORT_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a layout context from a Rect.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }

    /// Narrow terminal: card grids collapse to one column.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::NARROW_WIDTH
    }

    /// Short terminal: the chrome sheds its separator row.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }

    /// Compact in either dimension.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Whether the tab bar should use short labels.
    ///
    /// The full labels need ~90 columns to fit all seven tabs, so the
    /// compact-nav breakpoint sits above the narrow breakpoint.
    pub fn is_compact_nav(&self) -> bool {
        self.width < breakpoints::COMPACT_NAV_WIDTH
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a proportional width clamped to min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Number of columns for card grids: 1 narrow, 2 medium, 3 wide.
    pub fn card_columns(&self) -> u16 {
        if self.is_narrow() {
            1
        } else if self.width < breakpoints::WIDE_WIDTH {
            2
        } else {
            3
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Card Grids
// ============================================================================

/// Lay out `count` equally-sized cells in a row-major grid.
///
/// Cells are `row_height` tall; rows that fall below the bottom of `area`
/// are clipped to zero-sized rects so callers can still zip rects with
/// their items without bounds checks.
pub fn grid_rects(area: Rect, count: usize, columns: u16, row_height: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let cell_width = (area.width / columns).max(1);
    let mut rects = Vec::with_capacity(count);

    for index in 0..count {
        let row = (index as u16) / columns;
        let col = (index as u16) % columns;
        let y = area.y.saturating_add(row * row_height);
        let bottom = area.y.saturating_add(area.height);
        if y >= bottom || area.width == 0 {
            rects.push(Rect::new(area.x, bottom, 0, 0));
            continue;
        }
        let height = row_height.min(bottom - y);
        rects.push(Rect::new(area.x + col * cell_width, y, cell_width, height));
    }

    rects
}
