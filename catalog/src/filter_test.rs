use super::*;
use crate::data::{HOTELS, RESTAURANTS};

fn hotel_ids(filter: HotelFilter) -> Vec<u32> {
    apply(HOTELS, filter).iter().map(|h| h.id).collect()
}

fn restaurant_ids(filter: RestaurantFilter) -> Vec<u32> {
    apply(RESTAURANTS, filter).iter().map(|r| r.id).collect()
}

// =============================================================
// Hotels
// =============================================================

#[test]
fn hotel_filter_defaults_to_all() {
    assert_eq!(HotelFilter::default(), HotelFilter::All);
    assert_eq!(hotel_ids(HotelFilter::All), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn hotel_filters_are_exact_over_catalog() {
    for &filter in HotelFilter::OPTIONS {
        let kept = apply(HOTELS, filter);
        for hotel in HOTELS {
            let expected = match filter {
                HotelFilter::All => true,
                HotelFilter::Luxury => hotel.price >= 200,
                HotelFilter::Budget => hotel.price < 120,
                HotelFilter::Safari => {
                    let loc = hotel.location.to_lowercase();
                    loc.contains("mara") || loc.contains("samburu")
                }
            };
            let included = kept.iter().any(|h| h.id == hotel.id);
            assert_eq!(included, expected, "{filter:?} on {}", hotel.name);
        }
    }
}

#[test]
fn luxury_includes_price_at_threshold() {
    assert_eq!(hotel_ids(HotelFilter::Luxury), vec![1, 4]);
}

#[test]
fn budget_excludes_price_at_threshold() {
    // Nairobi Hilton is exactly 120 and must not count as budget.
    assert_eq!(hotel_ids(HotelFilter::Budget), vec![6]);
}

#[test]
fn safari_matches_location_substrings_case_insensitively() {
    assert_eq!(hotel_ids(HotelFilter::Safari), vec![1, 5]);

    let mut hotel = HOTELS[2];
    hotel.location = "SAMBURU east";
    assert!(HotelFilter::Safari.matches(&hotel));
    hotel.location = "Amara Heights";
    assert!(HotelFilter::Safari.matches(&hotel));
}

// =============================================================
// Restaurants
// =============================================================

#[test]
fn seafood_returns_both_seafood_entries_in_catalog_order() {
    assert_eq!(RESTAURANTS.len(), 6);
    assert_eq!(restaurant_ids(RestaurantFilter::Seafood), vec![2, 5]);
}

#[test]
fn kenyan_matches_kenyan_or_traditional() {
    assert_eq!(restaurant_ids(RestaurantFilter::Kenyan), vec![1, 3]);
}

#[test]
fn international_matches_international_or_fusion() {
    assert_eq!(restaurant_ids(RestaurantFilter::International), vec![4, 6]);

    let mut restaurant = RESTAURANTS[0];
    restaurant.cuisine = "Asian Fusion";
    assert!(RestaurantFilter::International.matches(&restaurant));
}

#[test]
fn restaurant_all_keeps_everything() {
    assert_eq!(restaurant_ids(RestaurantFilter::All), vec![1, 2, 3, 4, 5, 6]);
}

// =============================================================
// Keys and labels
// =============================================================

#[test]
fn from_key_round_trips_every_option() {
    for &filter in HotelFilter::OPTIONS {
        assert_eq!(<HotelFilter as CatalogFilter<Hotel>>::from_key(filter.key()), Some(filter));
    }
    for &filter in RestaurantFilter::OPTIONS {
        assert_eq!(
            <RestaurantFilter as CatalogFilter<Restaurant>>::from_key(filter.key()),
            Some(filter)
        );
    }
}

#[test]
fn from_key_rejects_unknown_key() {
    assert_eq!(<HotelFilter as CatalogFilter<Hotel>>::from_key("cheap"), None);
    assert_eq!(<RestaurantFilter as CatalogFilter<Restaurant>>::from_key(""), None);
}

#[test]
fn option_labels_match_filter_bar_copy() {
    let labels: Vec<&str> = HotelFilter::OPTIONS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, vec!["All Hotels", "Luxury ($200+)", "Budget (Under $120)", "Safari Lodges"]);

    let labels: Vec<&str> = RestaurantFilter::OPTIONS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, vec!["All Restaurants", "Kenyan Cuisine", "International", "Seafood"]);
}
