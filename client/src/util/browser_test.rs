use super::*;

#[test]
fn date_part_strips_time_component() {
    assert_eq!(date_part("2025-01-10T08:30:00.000Z"), Some("2025-01-10".to_owned()));
}

#[test]
fn date_part_accepts_bare_date() {
    assert_eq!(date_part("2025-01-10"), Some("2025-01-10".to_owned()));
}

#[test]
fn date_part_rejects_malformed_input() {
    assert_eq!(date_part(""), None);
    assert_eq!(date_part("yesterday"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn today_iso_is_unknown_outside_browser() {
    assert_eq!(today_iso(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn alert_and_log_are_noops_outside_browser() {
    alert("Hotel booking confirmed!");
    log_info("Searching for: {}");
}
