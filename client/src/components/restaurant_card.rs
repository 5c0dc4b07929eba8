//! Restaurant listing card with favorite toggle and reservation action.

use catalog::data::{RESTAURANT_CARD_SPECIALTIES, card_labels};
use catalog::Restaurant;
use leptos::prelude::*;

use crate::util::format::rating_label;

#[component]
pub fn RestaurantCard(
    restaurant: &'static Restaurant,
    #[prop(into)] favorite: Signal<bool>,
    on_toggle_favorite: Callback<u32>,
    on_book: Callback<u32>,
) -> impl IntoView {
    let id = restaurant.id;
    let specialties = card_labels(restaurant.specialties, RESTAURANT_CARD_SPECIALTIES)
        .iter()
        .map(|dish| view! { <span class="listing-card__chip">{*dish}</span> })
        .collect_view();

    view! {
        <article class="listing-card">
            <div class="listing-card__media">
                <img class="listing-card__image" src=restaurant.image alt=restaurant.name loading="lazy"/>
                <Show when=move || restaurant.featured>
                    <span class="listing-card__badge">"Featured"</span>
                </Show>
                <button
                    class="listing-card__favorite"
                    class:listing-card__favorite--on=move || favorite.get()
                    aria-label="Toggle favorite"
                    on:click=move |_| on_toggle_favorite.run(id)
                >
                    {move || if favorite.get() { "♥" } else { "♡" }}
                </button>
            </div>
            <div class="listing-card__body">
                <div class="listing-card__heading">
                    <h3 class="listing-card__name">{restaurant.name}</h3>
                    <span class="listing-card__rating">"★ " {rating_label(restaurant.rating)}</span>
                </div>
                <p class="listing-card__location">"📍 " {restaurant.location}</p>
                <div class="listing-card__meta">
                    <span class="listing-card__cuisine">{restaurant.cuisine}</span>
                    <span class="listing-card__price-level" title=restaurant.price_range>
                        {restaurant.price_level()}
                    </span>
                </div>
                <p class="listing-card__description">{restaurant.description}</p>
                <p class="listing-card__hours">"🕒 " {restaurant.open_hours}</p>
                <div class="listing-card__chips">{specialties}</div>
                <div class="listing-card__footer">
                    <button class="btn btn--primary btn--block" on:click=move |_| on_book.run(id)>
                        "Make Reservation"
                    </button>
                </div>
            </div>
        </article>
    }
}
