//! Booking dialog model: the booked item, the draft form, and derived totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog is opened for exactly one catalog entry. It keeps a transient
//! [`BookingDraft`] while open and discards it on close or submit. Submission
//! never leaves the process: it checks field presence and yields a
//! [`BookingConfirmation`] for the page to acknowledge.
//!
//! TRADE-OFFS
//! ==========
//! Dates stay as raw form strings in the draft and are parsed on demand, so a
//! half-typed value simply hides the summary instead of surfacing an error.
//! A check-out earlier than check-in also hides the summary, but does not
//! block submission.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::fmt;

use serde::Serialize;
use time::PrimitiveDateTime;
use time::macros::format_description;

use crate::models::{Hotel, Restaurant};

const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// BOOKED ITEM
// =============================================================================

/// Hotel fields the booking dialog needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HotelBooking {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub nightly_price: u32,
}

/// Restaurant fields the booking dialog needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RestaurantBooking {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub cuisine: &'static str,
    pub open_hours: &'static str,
}

/// The entry a booking dialog is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookedItem {
    Hotel(HotelBooking),
    Restaurant(RestaurantBooking),
}

impl From<&Hotel> for BookedItem {
    fn from(hotel: &Hotel) -> Self {
        Self::Hotel(HotelBooking {
            id: hotel.id,
            name: hotel.name,
            location: hotel.location,
            nightly_price: hotel.price,
        })
    }
}

impl From<&Restaurant> for BookedItem {
    fn from(restaurant: &Restaurant) -> Self {
        Self::Restaurant(RestaurantBooking {
            id: restaurant.id,
            name: restaurant.name,
            location: restaurant.location,
            cuisine: restaurant.cuisine,
            open_hours: restaurant.open_hours,
        })
    }
}

impl BookedItem {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hotel(h) => h.name,
            Self::Restaurant(r) => r.name,
        }
    }

    #[must_use]
    pub fn location(&self) -> &'static str {
        match self {
            Self::Hotel(h) => h.location,
            Self::Restaurant(r) => r.location,
        }
    }

    /// Hotel stays need a check-out date; restaurant reservations do not.
    #[must_use]
    pub fn requires_end_date(&self) -> bool {
        matches!(self, Self::Hotel(_))
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Hotel(_) => "Book Your Stay",
            Self::Restaurant(_) => "Make a Reservation",
        }
    }

    #[must_use]
    pub fn start_label(&self) -> &'static str {
        match self {
            Self::Hotel(_) => "Check-in Date",
            Self::Restaurant(_) => "Reservation Date",
        }
    }

    /// HTML input type for the start field.
    #[must_use]
    pub fn start_input_type(&self) -> &'static str {
        match self {
            Self::Hotel(_) => "date",
            Self::Restaurant(_) => "datetime-local",
        }
    }

    #[must_use]
    pub fn party_label(&self) -> &'static str {
        match self {
            Self::Hotel(_) => "Guests",
            Self::Restaurant(_) => "Party Size",
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Hotel(_) => "Confirm Booking",
            Self::Restaurant(_) => "Confirm Reservation",
        }
    }

    #[must_use]
    pub fn request_placeholder(&self) -> &'static str {
        match self {
            Self::Hotel(_) => "Any special requirements for your stay (e.g., room preference, dietary needs)...",
            Self::Restaurant(_) => {
                "Any special requirements for your dining experience (e.g., dietary restrictions, seating preference)..."
            }
        }
    }

    fn kind_label(&self) -> &'static str {
        match self {
            Self::Hotel(_) => "Hotel",
            Self::Restaurant(_) => "Restaurant",
        }
    }
}

// =============================================================================
// PARTY SIZE
// =============================================================================

/// Number of guests, bounded to `1..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PartySize(u8);

impl PartySize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    #[must_use]
    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    /// Parse a `<select>` option value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<u8>() {
            Ok(n) => Self::new(n),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// `1 person`, `2 people`, ...
    #[must_use]
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 person".to_owned()
        } else {
            format!("{} people", self.0)
        }
    }

    /// Every selectable size in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self(2)
    }
}

// =============================================================================
// DATES AND SUMMARY
// =============================================================================

/// Parse a form date value: `YYYY-MM-DD` (date input) or
/// `YYYY-MM-DDTHH:MM[:SS]` (datetime-local input). Dates map to midnight.
#[must_use]
pub fn parse_form_date(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    let date_only = format_description!("[year]-[month]-[day]");
    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

    if let Ok(date) = time::Date::parse(raw, &date_only) {
        return Some(date.with_time(time::Time::MIDNIGHT));
    }
    if let Ok(dt) = PrimitiveDateTime::parse(raw, &minutes) {
        return Some(dt);
    }
    match PrimitiveDateTime::parse(raw, &seconds) {
        Ok(dt) => Some(dt),
        Err(_) => None,
    }
}

/// Ceiling of `end - start` measured in whole days. Negative spans round
/// toward zero, which is the mathematical ceiling for them.
#[must_use]
pub fn nights_between(start: PrimitiveDateTime, end: PrimitiveDateTime) -> i64 {
    let secs = (end - start).whole_seconds();
    let days = secs / SECONDS_PER_DAY;
    if secs % SECONDS_PER_DAY > 0 { days + 1 } else { days }
}

/// Derived price summary for a hotel stay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub nights: u32,
    pub nightly_rate: u32,
    pub total: u64,
}

impl BookingSummary {
    /// `None` when `end` precedes `start`.
    #[must_use]
    pub fn compute(start: PrimitiveDateTime, end: PrimitiveDateTime, nightly_rate: u32) -> Option<Self> {
        if end < start {
            return None;
        }
        let Ok(nights) = u32::try_from(nights_between(start, end)) else {
            return None;
        };
        Some(Self {
            nights,
            nightly_rate,
            total: u64::from(nights) * u64::from(nightly_rate),
        })
    }
}

// =============================================================================
// DRAFT AND SUBMISSION
// =============================================================================

/// A field the dialog marks as required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DraftField {
    Name,
    Email,
    Phone,
    Start,
    End,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "full name",
            Self::Email => "email address",
            Self::Phone => "phone number",
            Self::Start => "start date",
            Self::End => "end date",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("{0} is required")]
    MissingField(DraftField),
}

/// Transient form state for one open dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Check-in date or reservation date/time, as typed.
    pub start: String,
    /// Check-out date, as typed. Ignored for restaurants.
    pub end: String,
    pub party_size: PartySize,
    pub special_request: String,
}

impl BookingDraft {
    /// Price summary for hotel drafts with both dates filled in.
    #[must_use]
    pub fn summary(&self, item: &BookedItem) -> Option<BookingSummary> {
        let BookedItem::Hotel(hotel) = item else {
            return None;
        };
        let start = parse_form_date(&self.start)?;
        let end = parse_form_date(&self.end)?;
        BookingSummary::compute(start, end, hotel.nightly_price)
    }

    /// Required fields left empty, in form order. Any non-empty value counts
    /// as present, whitespace included.
    #[must_use]
    pub fn missing_fields(&self, item: &BookedItem) -> Vec<DraftField> {
        let mut checks = vec![
            (DraftField::Name, &self.name),
            (DraftField::Email, &self.email),
            (DraftField::Phone, &self.phone),
            (DraftField::Start, &self.start),
        ];
        if item.requires_end_date() {
            checks.push((DraftField::End, &self.end));
        }
        checks
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Confirm the booking.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::MissingField`] for the first required field
    /// that is empty. Field contents are otherwise never inspected.
    pub fn submit(&self, item: &BookedItem) -> Result<BookingConfirmation, BookingError> {
        if let Some(field) = self.missing_fields(item).into_iter().next() {
            return Err(BookingError::MissingField(field));
        }
        Ok(BookingConfirmation {
            item: *item,
            party_size: self.party_size,
            message: format!(
                "{} booking confirmed! We'll send you a confirmation email shortly.",
                item.kind_label()
            ),
        })
    }
}

/// Acknowledgement shown after a successful submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub item: BookedItem,
    pub party_size: PartySize,
    pub message: String,
}
