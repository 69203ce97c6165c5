//! Viewport intersection watching for reveal-on-scroll.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Whether the runtime exposes `IntersectionObserver`.
#[must_use]
pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
}

/// Watch `element` until it is at least `threshold` visible, then call
/// `on_visible` once and stop watching.
///
/// Returns `false` when no watch could be registered; the caller should
/// reveal the element immediately in that case.
pub fn watch_first_intersection(element: &web_sys::Element, threshold: f64, on_visible: impl Fn() + 'static) -> bool {
    if !intersection_observer_supported() {
        return false;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return false;
    };
    observer.observe(element);
    // The observer keeps calling back into this closure for the page lifetime.
    callback.forget();
    true
}
