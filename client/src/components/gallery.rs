//! Thumbnail gallery and its lightbox overlay.
//!
//! ARCHITECTURE
//! ============
//! Thumbnails only write the lightbox state. A single effect reacts to the
//! open/closed transition: on open it focuses the close control and attaches
//! the Escape listener, on close it detaches that listener. Keeping the
//! detach in the effect means the key handler never removes itself while it
//! is running.

use leptos::prelude::*;

use crate::content::GALLERY;
use crate::state::lightbox::LightboxState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = RwSignal::new(LightboxState::default());
    let close_ref = NodeRef::<leptos::html::Button>::new();

    #[cfg(feature = "hydrate")]
    {
        let escape = Rc::new(RefCell::new(None::<WindowListenerHandle>));
        Effect::new(move || {
            let open = lightbox.with(LightboxState::is_open);
            if open {
                if let Some(button) = close_ref.get() {
                    let _ = button.focus();
                }
                if escape.borrow().is_none() {
                    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
                        let key = ev.key();
                        lightbox.update(|l| {
                            l.handle_key(&key);
                        });
                    });
                    *escape.borrow_mut() = Some(handle);
                    log::debug!("lightbox opened");
                }
            } else if let Some(handle) = escape.borrow_mut().take() {
                handle.remove();
                log::debug!("lightbox closed");
            }
        });
    }

    let on_backdrop_click = move |ev: leptos::ev::MouseEvent| {
        let on_backdrop = ev.target().is_some() && ev.target() == ev.current_target();
        lightbox.update(|l| {
            l.handle_click(on_backdrop);
        });
    };

    view! {
        <div class="gallery">
            {GALLERY
                .iter()
                .map(|image| {
                    view! {
                        <a
                            class="gallery__item"
                            href=image.full
                            data-lightbox=""
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                lightbox.update(|l| l.open(image.full, image.alt));
                            }
                        >
                            <img src=image.thumb alt=image.alt loading="lazy"/>
                        </a>
                    }
                })
                .collect_view()}
        </div>
        <div
            id="lightbox"
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label="Image viewer"
            hidden=move || !lightbox.with(LightboxState::is_open)
            on:click=on_backdrop_click
        >
            <button
                id="lightboxClose"
                class="lightbox__close"
                aria-label="Close image"
                node_ref=close_ref
                on:click=move |_| {
                    lightbox.update(|l| {
                        l.close();
                    });
                }
            >
                "×"
            </button>
            <img
                id="lightboxImg"
                class="lightbox__img"
                src=move || lightbox.with(|l| l.src().map(str::to_owned))
                alt=move || lightbox.with(|l| l.alt().map(str::to_owned))
            />
        </div>
    }
}
