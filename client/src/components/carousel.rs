//! Auto-advancing testimonial carousel.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::state::carousel::{CarouselState, TimerToken};

#[cfg(feature = "hydrate")]
use crate::state::carousel::AUTO_ADVANCE_MS;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

/// Owns the browser interval backing the carousel's current timer token.
///
/// The interval sits in local (non-`Send`) reactive storage so the handle is
/// `Copy` and can be released from `on_cleanup`.
#[derive(Clone, Copy)]
struct AutoAdvance {
    carousel: RwSignal<CarouselState>,
    #[cfg(feature = "hydrate")]
    interval: StoredValue<Option<Interval>, LocalStorage>,
}

impl AutoAdvance {
    fn new(carousel: RwSignal<CarouselState>) -> Self {
        Self {
            carousel,
            #[cfg(feature = "hydrate")]
            interval: StoredValue::new_local(None),
        }
    }

    /// Drop the live interval, which cancels it.
    #[cfg(feature = "hydrate")]
    fn release(&self) {
        let _ = self.interval.try_update_value(Option::take);
    }

    fn start(&self) {
        if let Some(token) = self.carousel.try_update(CarouselState::start_auto) {
            self.arm(token);
        }
    }

    /// Prev/next: move by `delta` and restart the timer.
    fn navigate(&self, delta: isize) {
        if let Some(token) = self.carousel.try_update(|c| c.navigate(delta)) {
            self.arm(token);
            #[cfg(feature = "hydrate")]
            log::debug!("carousel timer restarted after manual navigation");
        }
    }

    fn arm(&self, token: TimerToken) {
        #[cfg(feature = "hydrate")]
        {
            let carousel = self.carousel;
            let interval = Interval::new(AUTO_ADVANCE_MS, move || {
                carousel.update(|c| {
                    c.tick(token);
                });
            });
            // Replacing the previous interval drops it, which cancels it.
            let _ = self.interval.try_update_value(|slot| *slot = Some(interval));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn stop(&self) {
        #[cfg(feature = "hydrate")]
        self.release();
        self.carousel.update(CarouselState::stop_auto);
    }
}

#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(TESTIMONIALS.len()));
    let auto = AutoAdvance::new(carousel);
    auto.start();

    #[cfg(feature = "hydrate")]
    on_cleanup(move || auto.release());

    let on_prev = move |_| auto.navigate(-1);
    let on_next = move |_| auto.navigate(1);
    let on_pointer_down = move |_| auto.stop();
    let on_pointer_up = move |_| auto.start();

    view! {
        <div class="carousel">
            <div class="carousel__viewport">
                <div
                    id="carouselTrack"
                    class="carousel__track"
                    style:transform=move || carousel.with(CarouselState::transform)
                    on:pointerdown=on_pointer_down
                    on:pointerup=on_pointer_up
                >
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="testimonial">
                                    <blockquote>{t.quote}</blockquote>
                                    <figcaption>{t.author}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="carousel__controls">
                <button id="prevSlide" class="carousel__btn" aria-label="Previous testimonial" on:click=on_prev>
                    "‹"
                </button>
                <button id="nextSlide" class="carousel__btn" aria-label="Next testimonial" on:click=on_next>
                    "›"
                </button>
            </div>
        </div>
    }
}
