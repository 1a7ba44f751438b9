//! Clickable region registry.

use ratatui::layout::Rect;

use crate::app::Page;

/// An action triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Switch the router to a page (tab bar entries)
    SelectPage(Page),
    /// Flip between dark and light mode (header button)
    ToggleTheme,
    /// Open an external link in the system handler (profile chips)
    OpenLink(String),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of the hit areas from the latest render pass.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registration order doubles as z-order: later areas sit on top.
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Clear all registered areas. Called at the start of each render pass.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea { rect, action });
    }

    /// Find the action for a click, topmost area first.
    pub fn action_at(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// All registered areas, in registration order.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    /// Number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let area = HitArea {
            rect: Rect::new(10, 5, 4, 2),
            action: ClickAction::ToggleTheme,
        };
        assert!(area.contains(10, 5));
        assert!(area.contains(13, 6));
        assert!(!area.contains(14, 5)); // one past the right edge
        assert!(!area.contains(10, 7)); // one past the bottom edge
        assert!(!area.contains(9, 5));
    }

    #[test]
    fn test_action_at_misses_empty_registry() {
        let registry = HitAreaRegistry::new();
        assert_eq!(registry.action_at(0, 0), None);
    }

    #[test]
    fn test_action_at_finds_registered_area() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::SelectPage(Page::Skills));
        assert_eq!(
            registry.action_at(3, 0),
            Some(ClickAction::SelectPage(Page::Skills))
        );
        assert_eq!(registry.action_at(3, 1), None);
    }

    #[test]
    fn test_later_registration_wins_overlap() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::SelectPage(Page::Skills));
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::ToggleTheme);
        assert_eq!(registry.action_at(5, 0), Some(ClickAction::ToggleTheme));
    }

    #[test]
    fn test_clear_resets() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::ToggleTheme);
        assert_eq!(registry.len(), 1);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.action_at(5, 0), None);
    }
}
