//! Small rendering utilities shared across pages.

use ratatui::layout::Rect;

use crate::sheet::IconTag;

/// Map a semantic icon tag to its terminal glyph.
///
/// This lookup is the only place icons become concrete; the data model
/// stores tags, never glyphs.
pub fn icon_glyph(tag: IconTag) -> &'static str {
    match tag {
        IconTag::Chip => "🖥",
        IconTag::Mind => "🧠",
        IconTag::Gear => "⚙",
        IconTag::Shield => "🛡",
        IconTag::Tome => "📖",
        IconTag::Blade => "⚔",
        IconTag::Trophy => "🏆",
        IconTag::Scroll => "📜",
        IconTag::Compass => "🧭",
        IconTag::Send => "✉",
    }
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Truncate a string with ellipsis if it exceeds max_len characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let chars: Vec<char> = s.chars().take(max_len - 3).collect();
        format!("{}...", chars.into_iter().collect::<String>())
    }
}
