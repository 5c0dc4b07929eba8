//! Catalog domain model and derivation helpers for the KenyaStay site.
//!
//! This crate is UI-framework agnostic so the `client` crate can consume it
//! directly for rendering listing pages, the booking dialog, and the search
//! widget. Everything here is synchronous and allocation-light: the catalog
//! is compile-time data and every operation is a pure function over it.

pub mod booking;
pub mod data;
pub mod filter;
pub mod models;
pub mod search;

pub use booking::{
    BookedItem, BookingConfirmation, BookingDraft, BookingError, BookingSummary, HotelBooking, PartySize,
    RestaurantBooking,
};
pub use filter::{CatalogFilter, HotelFilter, RestaurantFilter};
pub use models::{Destination, Feature, Hotel, Listing, Restaurant, Story, StoryCategory};
pub use search::{SearchCriteria, SearchKind};
