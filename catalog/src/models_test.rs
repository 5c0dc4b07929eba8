use super::*;
use crate::data::{HOTELS, RESTAURANTS, STORIES};

#[test]
fn price_level_repeats_glyph_per_tier_symbol() {
    let tamarind = RESTAURANTS.iter().find(|r| r.name == "Tamarind Dhow").unwrap();
    assert_eq!(tamarind.price_range, "$$$$");
    assert_eq!(tamarind.price_level(), "💰💰💰💰");
}

#[test]
fn price_level_empty_tier_is_empty() {
    let mut r = RESTAURANTS[0];
    r.price_range = "";
    assert_eq!(r.price_level(), "");
}

#[test]
fn formatted_date_uses_long_month_and_unpadded_day() {
    let story = STORIES.iter().find(|s| s.id == 1).unwrap();
    assert_eq!(story.formatted_date(), "November 15, 2024");

    let story = STORIES.iter().find(|s| s.id == 3).unwrap();
    assert_eq!(story.formatted_date(), "December 2, 2024");
}

#[test]
fn story_category_labels_are_capitalized() {
    assert_eq!(StoryCategory::Safari.label(), "Safari");
    assert_eq!(StoryCategory::Beach.label(), "Beach");
    assert_eq!(StoryCategory::Culture.label(), "Culture");
    assert_eq!(StoryCategory::Food.label(), "Food");
}

#[test]
fn story_category_serializes_lowercase() {
    let json = serde_json::to_value(StoryCategory::Culture).unwrap();
    assert_eq!(json, serde_json::json!("culture"));
}

#[test]
fn amenity_icon_is_case_insensitive() {
    assert_eq!(amenity_icon("WiFi"), Some("📶"));
    assert_eq!(amenity_icon("Beach Access"), Some("🌊"));
    assert_eq!(amenity_icon("Parking"), Some("🚗"));
    assert_eq!(amenity_icon("Restaurant"), Some("🍽"));
}

#[test]
fn amenity_icon_unknown_label_has_no_icon() {
    assert_eq!(amenity_icon("Spa"), None);
    assert_eq!(amenity_icon("Game Drives"), None);
}

#[test]
fn listing_id_matches_record_id() {
    assert_eq!(Listing::id(&HOTELS[2]), HOTELS[2].id);
    assert_eq!(Listing::id(&RESTAURANTS[4]), RESTAURANTS[4].id);
    assert_eq!(Listing::id(&STORIES[5]), STORIES[5].id);
}
