//! Restaurants listing page. Mirrors the hotels page over `RESTAURANTS`.

use catalog::data::RESTAURANTS;
use catalog::{BookedItem, CatalogFilter, Restaurant, RestaurantFilter};
use leptos::prelude::*;

use crate::components::booking_modal::BookingModal;
use crate::components::filter_bar::{FilterBar, filter_options};
use crate::components::restaurant_card::RestaurantCard;
use crate::state::listing::ListingState;

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let listing = RwSignal::new(ListingState::<RestaurantFilter>::default());
    let filter = Memo::new(move |_| listing.with(|s| s.filter));
    let selected = Memo::new(move |_| listing.with(|s| s.selected));

    let on_select_filter = Callback::new(move |key: &'static str| {
        if let Some(next) = RestaurantFilter::from_key(key) {
            listing.update(|s| s.set_filter(next));
        }
    });
    let on_toggle_favorite = Callback::new(move |id: u32| {
        listing.update(|s| {
            s.toggle_favorite(id, RESTAURANTS);
        });
    });
    let on_book = Callback::new(move |id: u32| {
        listing.update(|s| {
            s.select(id, RESTAURANTS);
        });
    });
    let on_close = Callback::new(move |()| listing.update(ListingState::close_dialog));

    let grid = move || {
        filter.track();
        listing
            .with_untracked(|s| s.visible(RESTAURANTS))
            .into_iter()
            .map(|restaurant: &'static Restaurant| {
                let favorite = Signal::derive(move || listing.with(|s| s.is_favorite(restaurant.id)));
                view! {
                    <RestaurantCard
                        restaurant=restaurant
                        favorite=favorite
                        on_toggle_favorite=on_toggle_favorite
                        on_book=on_book
                    />
                }
            })
            .collect_view()
    };

    let dialog = move || {
        selected.track();
        listing
            .with_untracked(|s| s.selected_item(RESTAURANTS))
            .map(|restaurant| view! { <BookingModal item=BookedItem::from(restaurant) on_close=on_close/> })
    };

    view! {
        <div class="listing-page">
            <div class="listing-page__header">
                <h1>"Taste the Flavors of Kenya"</h1>
                <p>
                    "From traditional Kenyan cuisine to international delicacies, discover the best dining experiences across Kenya"
                </p>
            </div>
            <FilterBar
                options={filter_options::<Restaurant, RestaurantFilter>()}
                active=Signal::derive(move || filter.get().key())
                on_select=on_select_filter
            />
            <div class="listing-page__grid">{grid}</div>
            {dialog}
        </div>
    }
}
