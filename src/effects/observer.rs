use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Keeps an `IntersectionObserver` and its callback alive. Dropping it
/// disconnects the observer.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverGuard {
    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` with every observed element as it starts intersecting
/// the viewport.
pub fn watch_intersections<F>(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: F,
) -> Result<ObserverGuard, JsValue>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_enter(entry.target(), &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}
