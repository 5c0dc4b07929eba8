use time::macros::datetime;

use super::*;
use crate::data::{HOTELS, RESTAURANTS};

fn hotel_item(price: u32) -> BookedItem {
    BookedItem::Hotel(HotelBooking { id: 99, name: "Test Lodge", location: "Nowhere", nightly_price: price })
}

fn restaurant_item() -> BookedItem {
    BookedItem::from(&RESTAURANTS[1])
}

fn filled_draft() -> BookingDraft {
    BookingDraft {
        name: "Amina Wanjiru".to_owned(),
        email: "amina@example.com".to_owned(),
        phone: "+254 700 123 456".to_owned(),
        start: "2025-01-10".to_owned(),
        end: "2025-01-13".to_owned(),
        ..BookingDraft::default()
    }
}

// =============================================================
// BookedItem
// =============================================================

#[test]
fn booked_item_from_hotel_carries_nightly_price() {
    let item = BookedItem::from(&HOTELS[0]);
    let BookedItem::Hotel(hotel) = item else {
        panic!("expected hotel variant");
    };
    assert_eq!(hotel.id, 1);
    assert_eq!(hotel.nightly_price, 250);
    assert_eq!(item.name(), "Maasai Mara Safari Lodge");
    assert!(item.requires_end_date());
}

#[test]
fn booked_item_from_restaurant_carries_cuisine() {
    let item = restaurant_item();
    let BookedItem::Restaurant(restaurant) = item else {
        panic!("expected restaurant variant");
    };
    assert_eq!(restaurant.cuisine, "Seafood");
    assert_eq!(item.location(), "Mombasa Creek");
    assert!(!item.requires_end_date());
}

#[test]
fn dialog_copy_differs_per_variant() {
    let hotel = hotel_item(100);
    let restaurant = restaurant_item();
    assert_eq!(hotel.title(), "Book Your Stay");
    assert_eq!(restaurant.title(), "Make a Reservation");
    assert_eq!(hotel.start_input_type(), "date");
    assert_eq!(restaurant.start_input_type(), "datetime-local");
    assert_eq!(hotel.submit_label(), "Confirm Booking");
    assert_eq!(restaurant.submit_label(), "Confirm Reservation");
    assert_eq!(hotel.party_label(), "Guests");
    assert_eq!(restaurant.party_label(), "Party Size");
}

#[test]
fn booked_item_serializes_with_type_tag() {
    let json = serde_json::to_value(hotel_item(100)).unwrap();
    assert_eq!(json["type"], "hotel");
    assert_eq!(json["nightly_price"], 100);
}

// =============================================================
// PartySize
// =============================================================

#[test]
fn party_size_defaults_to_two() {
    assert_eq!(PartySize::default().get(), 2);
    assert_eq!(BookingDraft::default().party_size.get(), 2);
}

#[test]
fn party_size_is_bounded_one_to_eight() {
    assert!(PartySize::new(0).is_none());
    assert!(PartySize::new(9).is_none());
    assert_eq!(PartySize::new(1).map(PartySize::get), Some(1));
    assert_eq!(PartySize::new(8).map(PartySize::get), Some(8));
    assert_eq!(PartySize::all().count(), 8);
}

#[test]
fn party_size_parse_reads_select_values() {
    assert_eq!(PartySize::parse("5"), PartySize::new(5));
    assert_eq!(PartySize::parse("12"), None);
    assert_eq!(PartySize::parse("two"), None);
}

#[test]
fn party_size_labels_pluralize() {
    assert_eq!(PartySize::new(1).map(PartySize::label).as_deref(), Some("1 person"));
    assert_eq!(PartySize::new(4).map(PartySize::label).as_deref(), Some("4 people"));
}

// =============================================================
// Dates
// =============================================================

#[test]
fn parse_form_date_accepts_date_and_datetime_local() {
    assert_eq!(parse_form_date("2025-01-10"), Some(datetime!(2025-01-10 0:00)));
    assert_eq!(parse_form_date("2025-01-10T19:30"), Some(datetime!(2025-01-10 19:30)));
    assert_eq!(parse_form_date("2025-01-10T19:30:15"), Some(datetime!(2025-01-10 19:30:15)));
}

#[test]
fn parse_form_date_rejects_partial_input() {
    assert_eq!(parse_form_date(""), None);
    assert_eq!(parse_form_date("2025-01"), None);
    assert_eq!(parse_form_date("10/01/2025"), None);
}

#[test]
fn nights_between_rounds_partial_days_up() {
    assert_eq!(nights_between(datetime!(2025-01-10 0:00), datetime!(2025-01-13 0:00)), 3);
    assert_eq!(nights_between(datetime!(2025-01-10 12:00), datetime!(2025-01-11 0:00)), 1);
    assert_eq!(nights_between(datetime!(2025-01-10 0:00), datetime!(2025-01-11 0:01)), 2);
}

#[test]
fn nights_between_same_instant_is_zero() {
    assert_eq!(nights_between(datetime!(2025-01-10 0:00), datetime!(2025-01-10 0:00)), 0);
}

#[test]
fn nights_between_negative_span_takes_ceiling() {
    // -1.5 days rounds up to -1, -12 hours rounds up to 0.
    assert_eq!(nights_between(datetime!(2025-01-13 0:00), datetime!(2025-01-11 12:00)), -1);
    assert_eq!(nights_between(datetime!(2025-01-10 12:00), datetime!(2025-01-10 0:00)), 0);
}

// =============================================================
// Summary
// =============================================================

#[test]
fn summary_three_nights_at_one_hundred() {
    let mut draft = filled_draft();
    draft.start = "2025-01-10".to_owned();
    draft.end = "2025-01-13".to_owned();
    let summary = draft.summary(&hotel_item(100)).unwrap();
    assert_eq!(summary, BookingSummary { nights: 3, nightly_rate: 100, total: 300 });
}

#[test]
fn summary_same_day_is_zero_nights_zero_total() {
    let mut draft = filled_draft();
    draft.end = draft.start.clone();
    let summary = draft.summary(&hotel_item(100)).unwrap();
    assert_eq!(summary.nights, 0);
    assert_eq!(summary.total, 0);
}

#[test]
fn summary_is_withheld_when_end_precedes_start() {
    // Chosen behavior for reversed dates: no summary rather than a negative
    // total. Submission stays allowed (see submit test below).
    let mut draft = filled_draft();
    draft.start = "2025-01-13".to_owned();
    draft.end = "2025-01-10".to_owned();
    assert_eq!(draft.summary(&hotel_item(100)), None);
}

#[test]
fn summary_needs_both_dates() {
    let mut draft = filled_draft();
    draft.end.clear();
    assert_eq!(draft.summary(&hotel_item(100)), None);
}

#[test]
fn summary_is_never_computed_for_restaurants() {
    assert_eq!(filled_draft().summary(&restaurant_item()), None);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_with_required_fields_confirms_hotel() {
    let confirmation = filled_draft().submit(&hotel_item(100)).unwrap();
    assert_eq!(
        confirmation.message,
        "Hotel booking confirmed! We'll send you a confirmation email shortly."
    );
    assert_eq!(confirmation.party_size, PartySize::default());
}

#[test]
fn submit_restaurant_does_not_require_end_date() {
    let mut draft = filled_draft();
    draft.start = "2025-01-10T19:30".to_owned();
    draft.end.clear();
    let confirmation = draft.submit(&restaurant_item()).unwrap();
    assert!(confirmation.message.starts_with("Restaurant booking confirmed!"));
}

#[test]
fn submit_hotel_without_end_date_reports_missing_field() {
    let mut draft = filled_draft();
    draft.end.clear();
    assert_eq!(
        draft.submit(&hotel_item(100)),
        Err(BookingError::MissingField(DraftField::End))
    );
}

#[test]
fn submit_reports_first_missing_field_in_form_order() {
    let draft = BookingDraft::default();
    assert_eq!(
        draft.missing_fields(&hotel_item(100)),
        vec![DraftField::Name, DraftField::Email, DraftField::Phone, DraftField::Start, DraftField::End]
    );
    let err = draft.submit(&hotel_item(100)).unwrap_err();
    assert_eq!(err.to_string(), "full name is required");
}

#[test]
fn submit_never_rejects_on_content() {
    let mut draft = filled_draft();
    draft.email = "not-an-email".to_owned();
    draft.phone = " ".to_owned();
    draft.start = "2025-01-13".to_owned();
    draft.end = "2025-01-10".to_owned();
    assert!(draft.submit(&hotel_item(100)).is_ok());
}
