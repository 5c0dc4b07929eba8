//! Hotels listing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `ListingState<HotelFilter>` for as long as the route is mounted.
//! The grid re-renders on filter changes only; favorite toggles update their
//! card in place, and the dialog tracks the selected id alone so its draft
//! survives unrelated state changes.

use catalog::data::HOTELS;
use catalog::{BookedItem, CatalogFilter, Hotel, HotelFilter};
use leptos::prelude::*;

use crate::components::booking_modal::BookingModal;
use crate::components::filter_bar::{FilterBar, filter_options};
use crate::components::hotel_card::HotelCard;
use crate::state::listing::ListingState;

#[component]
pub fn HotelsPage() -> impl IntoView {
    let listing = RwSignal::new(ListingState::<HotelFilter>::default());
    let filter = Memo::new(move |_| listing.with(|s| s.filter));
    let selected = Memo::new(move |_| listing.with(|s| s.selected));

    let on_select_filter = Callback::new(move |key: &'static str| {
        if let Some(next) = HotelFilter::from_key(key) {
            listing.update(|s| s.set_filter(next));
        }
    });
    let on_toggle_favorite = Callback::new(move |id: u32| {
        listing.update(|s| {
            s.toggle_favorite(id, HOTELS);
        });
    });
    let on_book = Callback::new(move |id: u32| {
        listing.update(|s| {
            s.select(id, HOTELS);
        });
    });
    let on_close = Callback::new(move |()| listing.update(ListingState::close_dialog));

    let grid = move || {
        filter.track();
        listing
            .with_untracked(|s| s.visible(HOTELS))
            .into_iter()
            .map(|hotel: &'static Hotel| {
                let favorite = Signal::derive(move || listing.with(|s| s.is_favorite(hotel.id)));
                view! {
                    <HotelCard
                        hotel=hotel
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
            .with_untracked(|s| s.selected_item(HOTELS))
            .map(|hotel| view! { <BookingModal item=BookedItem::from(hotel) on_close=on_close/> })
    };

    view! {
        <div class="listing-page">
            <div class="listing-page__header">
                <h1>"Discover Kenya's Finest Hotels"</h1>
                <p>
                    "From luxury safari lodges to beachfront resorts, find your perfect accommodation across Kenya"
                </p>
            </div>
            <FilterBar
                options={filter_options::<Hotel, HotelFilter>()}
                active=Signal::derive(move || filter.get().key())
                on_select=on_select_filter
            />
            <div class="listing-page__grid">{grid}</div>
            {dialog}
        </div>
    }
}
