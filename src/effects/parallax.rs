use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config;

/// Vertical shift for the hero background, or `None` once the hero has
/// scrolled out of view and the last transform should stay put.
pub fn parallax_offset(scrolled: f64, viewport_height: f64) -> Option<f64> {
    (scrolled < viewport_height).then(|| scrolled * config::PARALLAX_FACTOR)
}

/// Moves the referenced element at half the scroll speed.
#[hook]
pub fn use_parallax(target: NodeRef) {
    use_effect_with_deps(
        move |target| {
            let target = target.clone();
            let window = window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let Some(background) = target.cast::<HtmlElement>() else {
                        return;
                    };
                    let scrolled = window.page_y_offset().unwrap_or(0.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if let Some(offset) = parallax_offset(scrolled, height) {
                        let _ = background
                            .style()
                            .set_property("transform", &format!("translateY({}px)", offset));
                    }
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let _ = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        target,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_at_half_speed_inside_hero() {
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(200.0, 800.0), Some(100.0));
        assert_eq!(parallax_offset(799.0, 800.0), Some(399.5));
    }

    #[test]
    fn stops_once_hero_is_gone() {
        assert_eq!(parallax_offset(800.0, 800.0), None);
        assert_eq!(parallax_offset(1500.0, 800.0), None);
    }
}
