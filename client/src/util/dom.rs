//! Small document-level side effects.
//!
//! Every helper is safe to call during server rendering and tests; browser
//! work only happens in hydrate builds, and missing elements are ignored.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(class, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, enabled);
    }
}

/// Calendar year from the browser clock. `None` outside the browser.
#[must_use]
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
