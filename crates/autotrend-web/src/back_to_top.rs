use leptos::ev;
use leptos::leptos_dom::helpers::{window, window_event_listener};
use leptos::prelude::*;

/// Scroll offset in px beyond which the floating button is shown.
const VISIBILITY_THRESHOLD: f64 = 300.0;

/// Whether the button is visible at the given scroll offset. Purely a
/// function of the current offset, recomputed on every scroll event.
pub fn visible_at(scroll_y: f64) -> bool {
    scroll_y > VISIBILITY_THRESHOLD
}

/// Floating button that appears once the page is scrolled down and smooth
/// scrolls back to the top when clicked.
#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    // Listener stays attached for the lifetime of the page.
    window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        set_visible.set(visible_at(scroll_y));
    });

    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <button
            id="back-to-top"
            class:visible=move || visible.get()
            title="Back to top"
            on:click=scroll_to_top
        >
            <i class="fas fa-arrow-up"></i>
        </button>
        <style>
            r#"
            #back-to-top {
                position: fixed;
                bottom: 30px;
                right: 30px;
                width: 50px;
                height: 50px;
                border-radius: 50%;
                background-color: var(--primary-color);
                color: white;
                border: none;
                cursor: pointer;
                font-size: 1.2rem;
                box-shadow: var(--shadow-lg);
                transition: all 0.3s;
                opacity: 0;
                visibility: hidden;
                z-index: 999;
            }

            #back-to-top.visible {
                opacity: 1;
                visibility: visible;
            }

            #back-to-top:hover {
                background-color: var(--secondary-color);
                transform: translateY(-3px);
            }

            #back-to-top:active {
                transform: translateY(-1px);
            }

            @media (max-width: 768px) {
                #back-to-top {
                    bottom: 20px;
                    right: 20px;
                    width: 45px;
                    height: 45px;
                    font-size: 1rem;
                }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_at_top() {
        assert!(!visible_at(0.0));
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!visible_at(300.0));
        assert!(visible_at(301.0));
    }

    #[test]
    fn test_visible_when_scrolled() {
        assert!(visible_at(2400.0));
    }
}
