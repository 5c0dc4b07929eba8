//! Home-page search widget criteria.
//!
//! The search action only records what the visitor entered. There is no
//! result set, no navigation, and no effect on the listing pages.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use serde::Serialize;

use crate::booking::PartySize;

/// Cities offered in the location dropdown, in display order.
pub const KENYAN_CITIES: &[&str] = &[
    "Nairobi",
    "Mombasa",
    "Kisumu",
    "Nakuru",
    "Eldoret",
    "Meru",
    "Thika",
    "Malindi",
    "Diani Beach",
    "Maasai Mara",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Hotels,
    Restaurants,
}

impl SearchKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hotels => "Hotels",
            Self::Restaurants => "Restaurants",
        }
    }

    #[must_use]
    pub fn party_label(self) -> &'static str {
        match self {
            Self::Hotels => "Guests",
            Self::Restaurants => "Party Size",
        }
    }
}

/// Inputs collected by the search widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    pub kind: SearchKind,
    pub location: Option<&'static str>,
    /// Check-in date for hotels, date and time for restaurants.
    pub check_in: String,
    /// Check-out date; only meaningful for hotels.
    pub check_out: String,
    pub guests: PartySize,
}

impl SearchCriteria {
    /// Select a city from [`KENYAN_CITIES`]; anything else (including the
    /// empty placeholder option) clears the selection.
    pub fn set_location(&mut self, raw: &str) {
        self.location = KENYAN_CITIES.iter().copied().find(|city| *city == raw);
    }

    /// The single observable effect of pressing Search: a log line.
    #[must_use]
    pub fn record(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => format!("Searching for: {json}"),
            Err(e) => format!("Searching for: <unserializable criteria: {e}>"),
        }
    }
}
