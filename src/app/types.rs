//! Type definitions for the application state.
//!
//! Contains the two pieces of UI state the shell owns:
//! - [`Page`] - which page is currently displayed
//! - [`ThemeMode`] - dark or light palette

use crate::sheet::IconTag;

/// The closed set of pages selectable from the navigation bar.
///
/// Every variant is reachable from every other in one transition; there is
/// no terminal state. The string ids are stable and used for navigation
/// requests and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Character,
    Skills,
    Inventory,
    Codex,
    Quests,
    Map,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 7] = [
        Page::Character,
        Page::Skills,
        Page::Inventory,
        Page::Codex,
        Page::Quests,
        Page::Map,
        Page::Contact,
    ];

    /// Stable identifier for this page.
    pub fn id(self) -> &'static str {
        match self {
            Page::Character => "character",
            Page::Skills => "skills",
            Page::Inventory => "inventory",
            Page::Codex => "codex",
            Page::Quests => "quests",
            Page::Map => "map",
            Page::Contact => "contact",
        }
    }

    /// Resolve a page from its stable id. Unknown ids resolve to `None`.
    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    /// Tab label on normal-sized terminals.
    pub fn label(self) -> &'static str {
        match self {
            Page::Character => "Character",
            Page::Skills => "Skill Tree",
            Page::Inventory => "Inventory",
            Page::Codex => "Codex",
            Page::Quests => "Quests",
            Page::Map => "Map",
            Page::Contact => "Contact",
        }
    }

    /// Tab label on compact terminals.
    pub fn short_label(self) -> &'static str {
        match self {
            Page::Character => "Char",
            Page::Skills => "Skills",
            Page::Inventory => "Items",
            Page::Codex => "Codex",
            Page::Quests => "Quests",
            Page::Map => "Map",
            Page::Contact => "Contact",
        }
    }

    /// Heading shown at the top of the page body.
    pub fn title(self) -> &'static str {
        match self {
            Page::Character => "Character Sheet",
            Page::Skills => "Skill Tree",
            Page::Inventory => "Inventory",
            Page::Codex => "Project Codex",
            Page::Quests => "Quest Log",
            Page::Map => "World Map",
            Page::Contact => "Contact",
        }
    }

    /// One-line description under the heading.
    pub fn description(self) -> &'static str {
        match self {
            Page::Character => "A quick look at the hero behind the builds.",
            Page::Skills => "Allocate points where it matters: data, AI, and delivery.",
            Page::Inventory => "Certifications and tools carried into every quest.",
            Page::Codex => "Playable artifacts that prove the build.",
            Page::Quests => "Missions completed, active arcs, and queued objectives.",
            Page::Map => "Where the journey is headed next (vision & roadmap).",
            Page::Contact => "Open to Data Analyst / AI Engineer / Technical PM roles (NYC · Remote)",
        }
    }

    /// Semantic icon for the page heading.
    pub fn icon(self) -> IconTag {
        match self {
            Page::Character => IconTag::Shield,
            Page::Skills => IconTag::Mind,
            Page::Inventory => IconTag::Blade,
            Page::Codex => IconTag::Tome,
            Page::Quests => IconTag::Scroll,
            Page::Map => IconTag::Compass,
            Page::Contact => IconTag::Send,
        }
    }

    /// The page after this one in navigation order, wrapping around.
    pub fn next(self) -> Page {
        let idx = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(idx + 1) % Page::ALL.len()]
    }

    /// The page before this one in navigation order, wrapping around.
    pub fn prev(self) -> Page {
        let idx = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// The two palette modes. Nothing persists: every launch starts dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default_is_character() {
        assert_eq!(Page::default(), Page::Character);
    }

    #[test]
    fn test_page_ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn test_page_from_unknown_id() {
        assert_eq!(Page::from_id("warp-zone"), None);
        assert_eq!(Page::from_id(""), None);
    }

    #[test]
    fn test_page_ids_unique() {
        for a in Page::ALL {
            for b in Page::ALL {
                if a != b {
                    assert_ne!(a.id(), b.id());
                }
            }
        }
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
            assert_eq!(page.prev().next(), page);
        }
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Page::Contact.next(), Page::Character);
        assert_eq!(Page::Character.prev(), Page::Contact);
    }

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_toggle_is_involution() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
