//! Display formatting for prices, ratings, and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use catalog::Destination;

/// Whole-dollar amount, e.g. `$250`.
pub fn dollars(amount: impl Into<u64>) -> String {
    format!("${}", amount.into())
}

/// `3 nights`. The summary always uses the plural form.
pub fn nights_label(nights: u32) -> String {
    format!("{nights} nights")
}

/// One decimal place, e.g. `4.8`.
pub fn rating_label(rating: f32) -> String {
    format!("{rating:.1}")
}

/// `4/5` for story ratings.
pub fn story_rating_label(rating: u8) -> String {
    format!("{rating}/5")
}

/// `145 hotels, 230 restaurants`.
pub fn destination_counts(destination: &Destination) -> String {
    format!("{} hotels, {} restaurants", destination.hotels, destination.restaurants)
}
