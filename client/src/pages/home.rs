//! The single venue page.

use leptos::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::carousel::TestimonialCarousel;
use crate::components::gallery::Gallery;
use crate::components::newsletter_form::NewsletterForm;
use crate::components::reveal::Reveal;
use crate::components::rules_tabs::RulesTabs;
use crate::components::scoreboard::ScoreboardWidget;
use crate::components::site_footer::SiteFooter;
use crate::components::site_nav::SiteNav;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteNav/>
        <main id="top">
            <section class="hero">
                <h1>"Green Felt Billiards"</h1>
                <p class="hero__tagline">"Twelve tournament tables, cold drinks, and a rack waiting for you."</p>
                <a class="btn btn--primary" href="#booking">"Book a table"</a>
            </section>

            <Reveal id="rules">
                <h2>"Rules & Tips"</h2>
                <RulesTabs/>
            </Reveal>

            <Reveal id="scoreboard">
                <h2>"Keep Score"</h2>
                <ScoreboardWidget/>
            </Reveal>

            <Reveal id="gallery">
                <h2>"Gallery"</h2>
                <Gallery/>
            </Reveal>

            <Reveal id="testimonials">
                <h2>"What Players Say"</h2>
                <TestimonialCarousel/>
            </Reveal>

            <Reveal id="booking">
                <h2>"Book a Table"</h2>
                <BookingForm/>
            </Reveal>

            <Reveal id="newsletter" class="newsletter">
                <h2>"Join the Club"</h2>
                <p>"Tournament dates and league news, once a month."</p>
                <NewsletterForm/>
            </Reveal>
        </main>
        <SiteFooter/>
    }
}
