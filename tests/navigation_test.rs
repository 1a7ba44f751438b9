//! Router state transitions: the closed page set and the theme toggle.

use questfolio::app::{App, Page, ThemeMode};

#[test]
fn test_default_load_state() {
    let app = App::new();
    assert_eq!(app.page, Page::Character);
    assert_eq!(app.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_every_valid_id_selects_its_page() {
    let mut app = App::new();
    for page in Page::ALL {
        app.select_page_by_id(page.id());
        assert_eq!(app.page, page);
    }
}

#[test]
fn test_unknown_id_leaves_page_unchanged() {
    let mut app = App::new();
    app.select_page(Page::Quests);
    for bogus in ["warp-zone", "", "CHARACTER", "skills "] {
        app.select_page_by_id(bogus);
        assert_eq!(app.page, Page::Quests, "id {:?} should be ignored", bogus);
    }
}

#[test]
fn test_toggle_theme_is_its_own_inverse() {
    let mut app = App::new();
    let original = app.theme_mode;
    app.toggle_theme();
    assert_ne!(app.theme_mode, original);
    app.toggle_theme();
    assert_eq!(app.theme_mode, original);
}

#[test]
fn test_forward_cycle_visits_all_pages_and_wraps() {
    let mut app = App::new();
    for expected in Page::ALL.into_iter().skip(1) {
        app.next_page();
        assert_eq!(app.page, expected);
    }
    app.next_page();
    assert_eq!(app.page, Page::Character);
}

#[test]
fn test_backward_cycle_wraps() {
    let mut app = App::new();
    app.prev_page();
    assert_eq!(app.page, Page::Contact);
    app.prev_page();
    assert_eq!(app.page, Page::Map);
}

#[test]
fn test_page_switch_marks_dirty_only_on_change() {
    let mut app = App::new();
    app.needs_redraw = false;
    app.select_page(Page::Character); // already active
    assert!(!app.needs_redraw);
    app.select_page(Page::Codex);
    assert!(app.needs_redraw);
}
