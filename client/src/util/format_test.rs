use catalog::data::DESTINATIONS;

use super::*;

#[test]
fn dollars_prefixes_currency_symbol() {
    assert_eq!(dollars(250_u32), "$250");
    assert_eq!(dollars(0_u64), "$0");
}

#[test]
fn nights_label_is_plural_even_for_zero() {
    assert_eq!(nights_label(3), "3 nights");
    assert_eq!(nights_label(0), "0 nights");
}

#[test]
fn rating_label_keeps_one_decimal() {
    assert_eq!(rating_label(4.8), "4.8");
    assert_eq!(rating_label(5.0), "5.0");
}

#[test]
fn story_rating_label_is_out_of_five() {
    assert_eq!(story_rating_label(4), "4/5");
}

#[test]
fn destination_counts_lists_hotels_then_restaurants() {
    assert_eq!(destination_counts(&DESTINATIONS[0]), "145 hotels, 230 restaurants");
}
