use log::debug;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{Icon, NavEntry, COMPANY_NAME, HOME_SECTION};

pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn scrolled_past(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Smoothly scrolls the section with the given element id into view.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No section #{} to scroll to", id),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub entries: &'static [NavEntry],
    pub active: String,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { entries, active } = props;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scrolled_past(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let navigate_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let links = |link_class: &'static str| -> Html {
        entries
            .iter()
            .map(|entry| {
                html! {
                    <a
                        key={entry.id}
                        href={format!("#{}", entry.id)}
                        class={classes!(link_class, (active.as_str() == entry.id).then(|| "active"))}
                        onclick={navigate_to(entry.id)}
                    >
                        {entry.name}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={format!("#{}", HOME_SECTION)} class="nav-logo" onclick={navigate_to(HOME_SECTION)}>
                    <span class="nav-logo-icon">{Icon::Camera.glyph()}</span>
                    <span>{COMPANY_NAME}</span>
                </a>

                <div class="nav-links">
                    { links("nav-link") }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Open main menu">
                    if *menu_open {
                        {"✕"}
                    } else {
                        <>
                            <span></span>
                            <span></span>
                            <span></span>
                        </>
                    }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { links("mobile-nav-link") }
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: white;
                    text-decoration: none;
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                }
                .nav-logo-icon {
                    font-size: 1.75rem;
                }
                .nav-links {
                    display: flex;
                    gap: 1rem;
                }
                .nav-link, .mobile-nav-link {
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.375rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #d1d5db;
                    text-decoration: none;
                    transition: background-color 0.3s ease, color 0.3s ease;
                }
                .nav-link:hover, .mobile-nav-link:hover {
                    background: #374151;
                    color: white;
                }
                .nav-link.active, .mobile-nav-link.active {
                    background: white;
                    color: black;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    gap: 5px;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.25rem;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                }
                .mobile-menu {
                    display: none;
                    padding: 0.5rem;
                    background: #1f2937;
                }
                .mobile-nav-link {
                    display: block;
                    font-size: 1rem;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .mobile-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_past_threshold() {
        assert!(!scrolled_past(0.0));
        assert!(!scrolled_past(SCROLL_THRESHOLD_PX));
        assert!(scrolled_past(SCROLL_THRESHOLD_PX + 1.0));
    }
}
