use autotrend_web::back_to_top::visible_at;
use autotrend_web::clipboard::{FEEDBACK_WINDOW, INSTALL_COMMAND};
use autotrend_web::menu::MenuState;
use autotrend_web::nav::{active_section, SectionBounds};
use std::time::Duration;

fn two_section_page() -> Vec<SectionBounds> {
    vec![
        SectionBounds {
            id: "intro".to_string(),
            top: 0,
            height: 500,
        },
        SectionBounds {
            id: "usage".to_string(),
            top: 500,
            height: 700,
        },
    ]
}

#[test]
fn test_scrolling_to_usage_activates_its_link() {
    // Page with #intro at offsets 0-500 and #usage at 500-1200, nav height
    // 60. At y=600 exactly the usage link is active.
    let sections = two_section_page();
    assert_eq!(active_section(600, 60, &sections), Some("usage"));
    assert_ne!(active_section(600, 60, &sections), Some("intro"));
}

#[test]
fn test_active_section_lies_within_its_band() {
    let sections = two_section_page();
    for y in 0..1400 {
        if let Some(id) = active_section(y, 60, &sections) {
            let section = sections.iter().find(|s| s.id == id).unwrap();
            let band_start = section.top - 60 - 100;
            assert!(y >= band_start, "y={y} below band of {id}");
            assert!(y < band_start + section.height, "y={y} past band of {id}");
        }
    }
}

#[test]
fn test_back_to_top_tracks_scroll_session() {
    // A reader scrolls down past the threshold and back up again; visibility
    // follows the offset alone, with no memory of prior state.
    assert!(!visible_at(0.0));
    assert!(!visible_at(300.0));
    assert!(visible_at(301.0));
    assert!(visible_at(900.0));
    assert!(!visible_at(120.0));
    assert!(visible_at(301.0));
}

#[test]
fn test_menu_session() {
    // Open via hamburger, close via nav link click, reopen, close via a
    // click outside the navbar. Closing transitions are absorbing.
    let mut menu = MenuState::default();
    assert!(!menu.is_open());

    menu = menu.toggled();
    assert!(menu.is_open());

    menu = MenuState::Closed; // nav link click
    assert!(!menu.is_open());

    menu = menu.toggled();
    assert!(menu.is_open());

    menu = MenuState::Closed; // outside click
    assert!(!menu.is_open());
    menu = MenuState::Closed; // repeated outside clicks stay closed
    assert!(!menu.is_open());
}

#[test]
fn test_install_copy_contract() {
    assert_eq!(INSTALL_COMMAND, "pip install autotrend");
    assert_eq!(FEEDBACK_WINDOW, Duration::from_millis(2000));
}
