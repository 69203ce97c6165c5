//! Smooth scrolling for same-page anchor links.
//!
//! A single delegated click listener on the window catches every
//! `a[href^="#"]` on the page. When the target exists the default jump is
//! cancelled, the target scrolls into view smoothly, and it receives focus so
//! keyboard and screen-reader users land where sighted users do.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Selector for links the handler intercepts.
pub const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id referenced by an in-page `href`, or `None` for `#` alone and
/// for links that leave the page.
#[must_use]
pub fn in_page_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// `href` of the in-page link that contains the event target, if any.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn clicked_in_page_link(ev: &web_sys::Event) -> Option<String> {
    use wasm_bindgen::JsCast;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let link = target.closest(IN_PAGE_LINK_SELECTOR).ok().flatten()?;
    link.get_attribute("href")
}

/// Install the delegated click handler. No-op outside the browser.
pub fn install_smooth_scroll() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::window_event_listener;

        // The listener stays attached for the page lifetime.
        let _handle = window_event_listener(leptos::ev::click, |ev| {
            let Some(href) = clicked_in_page_link(&ev) else {
                return;
            };
            let Some(id) = in_page_target(&href) else {
                return;
            };
            let Some(target) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(id))
            else {
                return;
            };
            ev.prevent_default();
            scroll_and_focus(&target);
        });
    }
}

#[cfg(feature = "hydrate")]
fn scroll_and_focus(target: &web_sys::Element) {
    use wasm_bindgen::JsCast;

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    let _ = target.set_attribute("tabindex", "-1");
    if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
        let focus = web_sys::FocusOptions::new();
        focus.set_prevent_scroll(true);
        let _ = el.focus_with_options(&focus);
    }
}
