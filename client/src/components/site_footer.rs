//! Page footer with the current year.

use leptos::prelude::*;

use crate::util::dom;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = RwSignal::new(None::<u32>);

    Effect::new(move || {
        if let Some(now) = dom::current_year() {
            year.set(Some(now));
        }
    });

    view! {
        <footer class="site-footer">
            <p>
                "© "
                <span id="year">{move || year.get().map(|y| y.to_string()).unwrap_or_default()}</span>
                " Green Felt Billiards · 214 Cushion Row · Open daily 2pm–2am"
            </p>
        </footer>
    }
}
