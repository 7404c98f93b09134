use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#contact", label: "Contact" },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_THRESHOLD
}

/// Element id an in-page link points at.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Where to scroll so the section starts just below the fixed navbar.
pub fn anchor_scroll_top(offset_top: i32) -> f64 {
    f64::from(offset_top - config::NAV_HEIGHT)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the reader is in. When several match, the last one in document
/// order wins; when none does the caller keeps its current highlight.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let position = scroll_y + config::ACTIVE_SECTION_LOOKAHEAD;
    sections
        .iter()
        .filter(|s| position >= s.top && position < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

/// Inline styles for the three burger bars.
pub fn burger_bar_styles(open: bool) -> [&'static str; 3] {
    if open {
        [
            "transform: rotate(45deg) translateY(8px);",
            "opacity: 0;",
            "transform: rotate(-45deg) translateY(-8px);",
        ]
    } else {
        ["transform: none;", "opacity: 1;", "transform: none;"]
    }
}

fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let target = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        debug!("No section with id {:?}", id);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(target.offset_top()));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let active = use_state(|| None::<String>);
    let (_, scroll_y) = use_window_scroll();

    {
        let active = active.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let sections = measure_sections();
                if let Some(id) = active_section(&sections, *scroll_y) {
                    if active.as_deref() != Some(id) {
                        active.set(Some(id.to_string()));
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let bars = burger_bar_styles(*menu_open);

    html! {
        <nav class={classes!("navbar", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{"NovaRegis"}</a>
                <button
                    class="mobile-menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span style={bars[0]}></span>
                    <span style={bars[1]}></span>
                    <span style={bars[2]}></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|link| {
                        let href = link.href;
                        let is_active = anchor_target(href).is_some()
                            && active.as_deref() == anchor_target(href);
                        let onclick = {
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                menu_open.set(false);
                                if let Some(id) = anchor_target(href) {
                                    e.prevent_default();
                                    scroll_to_section(id);
                                }
                            })
                        };
                        html! {
                            <li>
                                <a
                                    href={href}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    {onclick}
                                >
                                    { link.label }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
