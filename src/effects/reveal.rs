use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use super::observer::watch_intersections;
use crate::config;

pub const REVEAL_SELECTOR: &str = "[data-aos]";
pub const REVEALED_CLASS: &str = "aos-animate";

/// Adds `aos-animate` to every `[data-aos]` element once it scrolls into view.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let guard = window().and_then(|w| w.document()).and_then(|document| {
                let guard = watch_intersections(
                    config::REVEAL_THRESHOLD,
                    Some(config::REVEAL_ROOT_MARGIN),
                    |target, _| {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                    },
                )
                .map_err(|e| warn!("Reveal observer unavailable: {:?}", e))
                .ok()?;

                let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
                for i in 0..nodes.length() {
                    if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        guard.observe(&el);
                    }
                }
                Some(guard)
            });

            move || drop(guard)
        },
        (),
    );
}
