//! Landing page: hero, search widget, features, destinations, and a call to
//! action pointing at the stories page.

use catalog::data::{DESTINATIONS, FEATURES, HERO_IMAGE};
use leptos::prelude::*;

use crate::components::search_section::SearchSection;
use crate::util::format::destination_counts;

#[component]
pub fn HomePage() -> impl IntoView {
    let hero_style = format!("background-image: url({HERO_IMAGE})");

    let features = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="feature">
                    <div class="feature__icon" aria-hidden="true">{feature.icon}</div>
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    let destinations = DESTINATIONS
        .iter()
        .map(|destination| {
            view! {
                <div class="destination">
                    <img class="destination__image" src=destination.image alt=destination.name loading="lazy"/>
                    <div class="destination__overlay">
                        <h3>{destination.name}</h3>
                        <span>"📍 " {destination_counts(destination)}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <section class="hero" style=hero_style>
                <div class="hero__shade"></div>
                <div class="hero__content">
                    <h1>"Discover" <span class="hero__accent">" Kenya"</span></h1>
                    <p>"From the savanna to the coast, find your perfect stay and dining experience"</p>
                    <div class="hero__actions">
                        <a class="btn btn--primary btn--large" href="/hotels">"Find Hotels"</a>
                        <a class="btn btn--outline btn--large" href="/restaurants">"Discover Restaurants"</a>
                    </div>
                </div>
            </section>

            <SearchSection/>

            <section class="section">
                <div class="section__header">
                    <h2>"Why Choose KenyaStay?"</h2>
                    <p>
                        "We connect you with the authentic heart of Kenya through carefully curated accommodations and dining experiences"
                    </p>
                </div>
                <div class="section__grid">{features}</div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2>"Popular Destinations"</h2>
                    <p>"Explore Kenya's most beloved locations for unforgettable experiences"</p>
                </div>
                <div class="section__grid">{destinations}</div>
            </section>

            <section class="cta">
                <h2>"Ready to Explore Kenya?"</h2>
                <p>"Join thousands of travelers who have discovered the magic of Kenya through our platform"</p>
                <a class="btn btn--light btn--large" href="/stories">"Read Their Stories →"</a>
            </section>
        </div>
    }
}
