//! Newsletter signup.

use leptos::prelude::*;

use crate::state::form_status::FormStatus;
use crate::state::newsletter::{next_value, submit_newsletter};

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(None::<FormStatus>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = email.with_untracked(|value| submit_newsletter(value));
        status.set(Some(result));
        if result.is_error() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
        }
        email.update(|value| *value = next_value(value, result));
    };

    view! {
        <form id="newsletterForm" class="newsletter-form" novalidate on:submit=on_submit>
            <label for="newsletterEmail" class="visually-hidden">"Email address"</label>
            <input
                id="newsletterEmail"
                name="email"
                type="email"
                placeholder="you@example.com"
                node_ref=input_ref
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button class="btn" type="submit">"Subscribe"</button>
            <p
                id="newsletterStatus"
                class="form-status"
                role="status"
                style=move || status.get().map(|s| s.style())
            >
                {move || status.get().map(|s| s.message).unwrap_or_default()}
            </p>
        </form>
    }
}
