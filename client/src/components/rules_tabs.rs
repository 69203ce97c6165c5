//! Rules & Tips tab strip.

use leptos::prelude::*;

use crate::components::accordion::Accordion;
use crate::content::{RULE_TABS, TabBody};
use crate::state::tabs::TabsState;

#[component]
pub fn RulesTabs() -> impl IntoView {
    let tabs = RwSignal::new(TabsState::new(RULE_TABS.len()));

    view! {
        <div class="tabs" role="tablist" aria-label="Rules and tips">
            {RULE_TABS
                .iter()
                .enumerate()
                .map(|(i, tab)| {
                    view! {
                        <button
                            class="tab"
                            role="tab"
                            id=format!("tab-{}", tab.id)
                            aria-controls=format!("panel-{}", tab.id)
                            class:is-active=move || tabs.get().is_active(i)
                            aria-selected=move || tabs.get().aria_selected(i)
                            on:click=move |_| tabs.update(|t| t.select(i))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                let key = ev.key();
                                tabs.update(|t| {
                                    t.handle_key(i, &key);
                                });
                            }
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        {RULE_TABS
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let body = match tab.body {
                    TabBody::Rules(items) => view! { <Accordion items=items/> }.into_any(),
                    TabBody::Tips(lines) => {
                        view! { <ul class="tips">{lines.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}</ul> }
                            .into_any()
                    }
                };
                view! {
                    <div
                        class="tab-panel"
                        role="tabpanel"
                        id=format!("panel-{}", tab.id)
                        aria-labelledby=format!("tab-{}", tab.id)
                        class:is-active=move || tabs.get().is_active(i)
                        hidden=move || !tabs.get().is_active(i)
                    >
                        {body}
                    </div>
                }
            })
            .collect_view()}
    }
}
