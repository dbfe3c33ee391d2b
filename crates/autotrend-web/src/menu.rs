use leptos::prelude::*;

/// Open/closed state of the mobile navigation menu.
///
/// The hamburger control and the collapsible link panel both derive their
/// CSS class from the same state value, so the two can never disagree. The
/// state resets to closed on every page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// State after a hamburger click.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Style fragment for the hamburger control and the collapsible link panel.
#[component]
pub fn MenuStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .hamburger {
                display: none;
                flex-direction: column;
                gap: 4px;
                background: none;
                border: none;
                cursor: pointer;
                padding: 5px;
                z-index: 1001;
            }

            .hamburger span {
                width: 25px;
                height: 3px;
                background-color: var(--text-color);
                transition: all 0.3s;
                border-radius: 2px;
            }

            .hamburger.active span:nth-child(1) {
                transform: rotate(45deg) translate(5px, 5px);
            }

            .hamburger.active span:nth-child(2) {
                opacity: 0;
            }

            .hamburger.active span:nth-child(3) {
                transform: rotate(-45deg) translate(7px, -6px);
            }

            @media (max-width: 768px) {
                .hamburger {
                    display: flex;
                }

                .nav-links {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    background-color: white;
                    flex-direction: column;
                    padding: 1rem;
                    box-shadow: var(--shadow);
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    z-index: 1000;
                }

                .nav-links.active {
                    max-height: 400px;
                }

                .nav-links li {
                    width: 100%;
                    text-align: center;
                }

                .nav-links a {
                    display: block;
                    padding: 0.75rem;
                    width: 100%;
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
    fn test_initial_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_flips_state() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }
}
