//! Listing-page filter predicates.
//!
//! DESIGN
//! ======
//! Filters are closed enums whose predicates are case-insensitive substring
//! tests over free-text record fields (hotel location, restaurant cuisine).
//! The `All` variant accepts everything, so every filter is total and the
//! filtered view never needs an error path. Results keep catalog order.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::Serialize;

use crate::models::{Hotel, Restaurant};

/// Hotels at or above this nightly price count as luxury.
pub const LUXURY_MIN_PRICE: u32 = 200;

/// Hotels strictly below this nightly price count as budget.
pub const BUDGET_MAX_PRICE: u32 = 120;

/// A filter selection for a catalog of `T`.
pub trait CatalogFilter<T>: Copy + PartialEq + Default + 'static {
    /// Every selectable option, in the order the filter bar shows them.
    const OPTIONS: &'static [Self];

    /// Stable machine key (`"all"`, `"luxury"`, ...).
    fn key(self) -> &'static str;

    /// Button label.
    fn label(self) -> &'static str;

    fn matches(self, item: &T) -> bool;

    fn from_key(key: &str) -> Option<Self> {
        Self::OPTIONS.iter().copied().find(|f| f.key() == key)
    }
}

/// Entries of `catalog` accepted by `filter`, in catalog order.
pub fn apply<'a, T, F: CatalogFilter<T>>(catalog: &'a [T], filter: F) -> Vec<&'a T> {
    catalog.iter().filter(|item| filter.matches(item)).collect()
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelFilter {
    #[default]
    All,
    Luxury,
    Budget,
    Safari,
}

impl CatalogFilter<Hotel> for HotelFilter {
    const OPTIONS: &'static [Self] = &[Self::All, Self::Luxury, Self::Budget, Self::Safari];

    fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Luxury => "luxury",
            Self::Budget => "budget",
            Self::Safari => "safari",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Hotels",
            Self::Luxury => "Luxury ($200+)",
            Self::Budget => "Budget (Under $120)",
            Self::Safari => "Safari Lodges",
        }
    }

    fn matches(self, hotel: &Hotel) -> bool {
        match self {
            Self::All => true,
            Self::Luxury => hotel.price >= LUXURY_MIN_PRICE,
            Self::Budget => hotel.price < BUDGET_MAX_PRICE,
            Self::Safari => contains_any(hotel.location, &["mara", "samburu"]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantFilter {
    #[default]
    All,
    Kenyan,
    International,
    Seafood,
}

impl CatalogFilter<Restaurant> for RestaurantFilter {
    const OPTIONS: &'static [Self] = &[Self::All, Self::Kenyan, Self::International, Self::Seafood];

    fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Kenyan => "kenyan",
            Self::International => "international",
            Self::Seafood => "seafood",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Restaurants",
            Self::Kenyan => "Kenyan Cuisine",
            Self::International => "International",
            Self::Seafood => "Seafood",
        }
    }

    fn matches(self, restaurant: &Restaurant) -> bool {
        match self {
            Self::All => true,
            Self::Kenyan => contains_any(restaurant.cuisine, &["kenyan", "traditional"]),
            Self::International => contains_any(restaurant.cuisine, &["international", "fusion"]),
            Self::Seafood => contains_any(restaurant.cuisine, &["seafood"]),
        }
    }
}
