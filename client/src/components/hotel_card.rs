//! Hotel listing card with favorite toggle and booking action.

use catalog::data::{HOTEL_CARD_AMENITIES, card_labels};
use catalog::models::amenity_icon;
use catalog::Hotel;
use leptos::prelude::*;

use crate::util::format::{dollars, rating_label};

#[component]
pub fn HotelCard(
    hotel: &'static Hotel,
    #[prop(into)] favorite: Signal<bool>,
    on_toggle_favorite: Callback<u32>,
    on_book: Callback<u32>,
) -> impl IntoView {
    let id = hotel.id;
    let amenities = card_labels(hotel.amenities, HOTEL_CARD_AMENITIES)
        .iter()
        .map(|amenity| {
            view! {
                <span class="listing-card__chip">
                    {amenity_icon(amenity).map(|icon| view! { <span aria-hidden="true">{icon}</span> })}
                    {*amenity}
                </span>
            }
        })
        .collect_view();

    view! {
        <article class="listing-card">
            <div class="listing-card__media">
                <img class="listing-card__image" src=hotel.image alt=hotel.name loading="lazy"/>
                <Show when=move || hotel.featured>
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
                    <h3 class="listing-card__name">{hotel.name}</h3>
                    <span class="listing-card__rating">"★ " {rating_label(hotel.rating)}</span>
                </div>
                <p class="listing-card__location">"📍 " {hotel.location}</p>
                <p class="listing-card__description">{hotel.description}</p>
                <div class="listing-card__chips">{amenities}</div>
                <div class="listing-card__footer">
                    <span class="listing-card__price">
                        <strong>{dollars(hotel.price)}</strong>
                        <span class="listing-card__unit">"/night"</span>
                    </span>
                    <button class="btn btn--primary" on:click=move |_| on_book.run(id)>
                        "Book Now"
                    </button>
                </div>
            </div>
        </article>
    }
}
