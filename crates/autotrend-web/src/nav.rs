use leptos::ev;
use leptos::html;
use leptos::leptos_dom::helpers::{document, window, window_event_listener};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::menu::{MenuState, MenuStyles};

/// Distance in px before a section clears the navbar at which its trigger
/// band already starts.
const SCROLLSPY_OFFSET: i32 = 100;

/// Links shown in the navbar, in document order of their target sections.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#installation", "Installation"),
    ("#docs", "Documentation"),
    ("#examples", "Examples"),
];

/// Document offset and rendered height of one page section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: String,
    pub top: i32,
    pub height: i32,
}

/// Returns the id of the section whose trigger band contains `scroll_y`.
///
/// Each band spans `[top - nav_height - SCROLLSPY_OFFSET, .. + height)`.
/// Sections are evaluated in document order and the last match wins; above
/// the first band no section is current.
pub fn active_section<'a>(
    scroll_y: i32,
    nav_height: i32,
    sections: &'a [SectionBounds],
) -> Option<&'a str> {
    let mut current = None;
    for section in sections {
        let band_start = section.top - nav_height - SCROLLSPY_OFFSET;
        if scroll_y >= band_start && scroll_y < band_start + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Extracts the fragment id from an in-page anchor href.
pub fn target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Smooth-scrolls the viewport so that `href`'s target sits just below the
/// navbar. Anchors whose target id is missing from the document are ignored.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = target_id(href) else {
        return;
    };
    let doc = document();
    let Some(target) = doc.get_element_by_id(id) else {
        return;
    };
    let Ok(target) = target.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let nav_height = doc
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map_or(0, |el| el.offset_height());

    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top() - nav_height));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Snapshot of every identified `<section>` in the document.
fn section_bounds(doc: &web_sys::Document) -> Vec<SectionBounds> {
    let Ok(nodes) = doc.query_selector_all("section[id]") else {
        return Vec::new();
    };
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(el) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let id = el.id();
        if id.is_empty() {
            continue;
        }
        sections.push(SectionBounds {
            id,
            top: el.offset_top(),
            height: el.offset_height(),
        });
    }
    sections
}

/// Top navigation bar: brand, section links with scrollspy highlighting, and
/// the hamburger-driven mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let (active, set_active) = signal(None::<String>);
    let navbar_ref = NodeRef::<html::Nav>::new();

    // Scrollspy: recompute the current section on every scroll event and once
    // after mount.
    let update_active = move || {
        let nav_height = navbar_ref
            .get_untracked()
            .map_or(0, |nav| nav.offset_height());
        let sections = section_bounds(&document());
        let scroll_y = window().scroll_y().unwrap_or(0.0) as i32;
        set_active.set(active_section(scroll_y, nav_height, &sections).map(str::to_owned));
    };
    Effect::new(move |_| update_active());
    // Listeners stay attached for the lifetime of the page.
    window_event_listener(ev::scroll, move |_| update_active());

    // A click anywhere outside the navbar closes the mobile menu. The
    // hamburger stops propagation so its own clicks never reach this handler.
    window_event_listener(ev::click, move |ev| {
        let inside = navbar_ref
            .get_untracked()
            .zip(ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()))
            .is_some_and(|(nav, node)| nav.contains(Some(&node)));
        if !inside {
            set_menu.set(MenuState::Closed);
        }
    });

    view! {
        <nav class="navbar" node_ref=navbar_ref>
            <div class="container">
                <a
                    href="#home"
                    class="logo"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        scroll_to_anchor("#home");
                    }
                >
                    "📈 AutoTrend"
                </a>
                <button
                    class="hamburger"
                    class:active=move || menu.get().is_open()
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        set_menu.update(|state| *state = state.toggled());
                    }
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class="nav-links" class:active=move || menu.get().is_open()>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class:active=move || {
                                            active.get().as_deref() == target_id(href)
                                        }
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.prevent_default();
                                            set_menu.set(MenuState::Closed);
                                            scroll_to_anchor(href);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <MenuStyles/>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
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
    fn test_active_section_mid_page() {
        // With nav height 60, the usage band starts at 500 - 60 - 100 = 340.
        assert_eq!(active_section(600, 60, &sections()), Some("usage"));
    }

    #[test]
    fn test_active_section_band_boundaries() {
        let sections = sections();
        // usage band is [340, 1040): inclusive start, exclusive end.
        assert_eq!(active_section(339, 60, &sections), Some("intro"));
        assert_eq!(active_section(340, 60, &sections), Some("usage"));
        assert_eq!(active_section(1039, 60, &sections), Some("usage"));
        assert_eq!(active_section(1040, 60, &sections), None);
    }

    #[test]
    fn test_active_section_above_first_band() {
        let below_fold = vec![SectionBounds {
            id: "features".to_string(),
            top: 800,
            height: 400,
        }];
        assert_eq!(active_section(0, 60, &below_fold), None);
    }

    #[test]
    fn test_active_section_overlap_last_wins() {
        let overlapping = vec![
            SectionBounds {
                id: "first".to_string(),
                top: 0,
                height: 600,
            },
            SectionBounds {
                id: "second".to_string(),
                top: 400,
                height: 600,
            },
        ];
        // y = 350 falls inside both bands; document order makes "second" win.
        assert_eq!(active_section(350, 0, &overlapping), Some("second"));
    }

    #[test]
    fn test_active_section_empty() {
        assert_eq!(active_section(100, 60, &[]), None);
    }

    #[test]
    fn test_target_id() {
        assert_eq!(target_id("#features"), Some("features"));
        assert_eq!(target_id("#"), None);
        assert_eq!(target_id("https://example.com"), None);
        assert_eq!(target_id(""), None);
    }

    #[test]
    fn test_nav_links_target_identified_sections() {
        for (href, _) in NAV_LINKS {
            assert!(target_id(href).is_some(), "{href} is not an in-page anchor");
        }
    }
}
