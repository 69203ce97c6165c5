//! Header with the collapsible mobile navigation.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::state::nav::NavState;
use crate::util::dom;

/// Body class present while the mobile menu is open.
const NAV_OPEN_BODY_CLASS: &str = "nav-open";

#[component]
pub fn SiteNav() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    Effect::new(move || {
        dom::set_body_class(NAV_OPEN_BODY_CLASS, nav.get().open);
    });

    let on_toggle = move |_| {
        nav.update(|n| {
            n.toggle();
        });
    };

    // Following an in-page link collapses the menu; scrolling is handled by
    // the page-wide smooth scroll listener.
    let on_nav_click = move |ev: leptos::ev::MouseEvent| {
        if !nav.get_untracked().open {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if crate::util::scroll::clicked_in_page_link(&ev).is_some() {
                nav.update(|n| {
                    n.close_for_link();
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <header class="site-header">
            <a class="brand" href="#top">"Green Felt Billiards"</a>
            <button
                id="navToggle"
                class="nav-toggle"
                aria-controls="siteNav"
                aria-label="Toggle navigation"
                aria-expanded=move || nav.get().aria_expanded()
                on:click=on_toggle
            >
                <span class="nav-toggle__bar"></span>
                <span class="nav-toggle__bar"></span>
                <span class="nav-toggle__bar"></span>
            </button>
            <nav id="siteNav" class="site-nav" class:open=move || nav.get().open on:click=on_nav_click>
                <ul>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
