//! Non-exclusive accordion.

use leptos::prelude::*;

use crate::content::AccordionItem;
use crate::state::accordion::AccordionState;

#[component]
pub fn Accordion(items: &'static [AccordionItem]) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(items.len()));

    view! {
        <div class="accordion">
            {items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let panel_id = format!("acc-{}", item.id);
                    view! {
                        <div class="acc-item">
                            <button
                                class="acc-btn"
                                aria-controls=panel_id.clone()
                                aria-expanded=move || state.with(|s| s.aria_expanded(i))
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.toggle(i);
                                    });
                                }
                            >
                                {item.title}
                            </button>
                            <div
                                id=panel_id
                                class="acc-panel"
                                class:open=move || state.with(|s| s.is_expanded(i))
                                hidden=move || !state.with(|s| s.is_expanded(i))
                            >
                                <p>{item.body}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
