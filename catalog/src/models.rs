//! Catalog record types.
//!
//! DESIGN
//! ======
//! Records are `'static` constants defined in [`crate::data`]. They are never
//! mutated, so every field borrows from the binary instead of owning heap
//! strings, and pages can hand `&'static` references straight to components.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde::Serialize;
use time::Date;
use time::macros::format_description;

/// Anything shown on a listing page: carries a collection-unique identifier.
pub trait Listing {
    fn id(&self) -> u32;
}

/// A bookable hotel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hotel {
    pub id: u32,
    pub name: &'static str,
    /// Free-text location; the safari filter matches substrings of it.
    pub location: &'static str,
    pub image: &'static str,
    /// Guest rating on a 0–5 scale.
    pub rating: f32,
    /// Nightly price in US dollars.
    pub price: u32,
    pub description: &'static str,
    pub amenities: &'static [&'static str],
    pub featured: bool,
}

impl Listing for Hotel {
    fn id(&self) -> u32 {
        self.id
    }
}

/// A restaurant that accepts reservations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rating: f32,
    /// Ordinal price tier written as repeated `$` symbols.
    pub price_range: &'static str,
    /// Free-text cuisine label; the cuisine filters match substrings of it.
    pub cuisine: &'static str,
    pub description: &'static str,
    pub specialties: &'static [&'static str],
    pub open_hours: &'static str,
    pub featured: bool,
}

impl Restaurant {
    /// One money glyph per price-tier symbol.
    #[must_use]
    pub fn price_level(&self) -> String {
        "💰".repeat(self.price_range.chars().count())
    }
}

impl Listing for Restaurant {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Story category shown as a colored badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    Safari,
    Beach,
    Culture,
    Food,
}

impl StoryCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Safari => "Safari",
            Self::Beach => "Beach",
            Self::Culture => "Culture",
            Self::Food => "Food",
        }
    }

    /// CSS modifier for the badge color.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Safari => "story-badge--safari",
            Self::Beach => "story-badge--beach",
            Self::Culture => "story-badge--culture",
            Self::Food => "story-badge--food",
        }
    }
}

/// A traveler story. Read-only display content.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Story {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub location: &'static str,
    pub date: Date,
    pub image: &'static str,
    /// Whole-star rating out of 5.
    pub rating: u8,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub category: StoryCategory,
}

impl Story {
    /// Publish date as `Month D, YYYY`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        let format = format_description!("[month repr:long] [day padding:none], [year]");
        self.date
            .format(&format)
            .unwrap_or_else(|_| self.date.to_string())
    }
}

impl Listing for Story {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Home-page destination tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub name: &'static str,
    pub image: &'static str,
    pub hotels: u32,
    pub restaurants: u32,
}

/// Home-page "why choose us" blurb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Glyph for well-known amenity labels; `None` for anything else.
#[must_use]
pub fn amenity_icon(amenity: &str) -> Option<&'static str> {
    match amenity.to_lowercase().as_str() {
        "wifi" => Some("📶"),
        "parking" => Some("🚗"),
        "restaurant" => Some("🍽"),
        "beach access" => Some("🌊"),
        _ => None,
    }
}
