//! Section wrapper that fades in the first time it scrolls into view.

use leptos::prelude::*;

use crate::state::reveal::RevealState;

#[component]
pub fn Reveal(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let reveal = RwSignal::new(RevealState::default());
    let node_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::reveal::REVEAL_THRESHOLD;
        use crate::util::viewport::watch_first_intersection;

        Effect::new(move || {
            let Some(section) = node_ref.get() else {
                return;
            };
            if reveal.with_untracked(|r| r.is_visible()) {
                return;
            }
            let watching = watch_first_intersection(&section, REVEAL_THRESHOLD, move || {
                reveal.update(|r| {
                    r.observe(true);
                });
            });
            if !watching {
                log::debug!("intersection observer unavailable; revealing immediately");
                reveal.update(RevealState::force_visible);
            }
        });
    }

    view! {
        <section
            id=id
            class=format!("reveal {class}")
            class:in-view=move || reveal.get().is_visible()
            node_ref=node_ref
        >
            {children()}
        </section>
    }
}
