//! Browser glue: alerts, console logging, and the local date.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize csr-only `web-sys`/`js-sys` calls so components
//! stay free of cfg noise. Outside a browser build they degrade to no-ops.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Show a blocking acknowledgement dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Write an info-level line to the browser console.
pub fn log_info(message: &str) {
    #[cfg(feature = "csr")]
    {
        log::info!("{message}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Today's date as `YYYY-MM-DD` (UTC), for date-input `min` bounds.
pub fn today_iso() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        date_part(&iso)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// `2025-01-10T08:30:00.000Z` -> `2025-01-10`.
pub(crate) fn date_part(iso: &str) -> Option<String> {
    let date = iso.split('T').next()?;
    (date.len() == 10).then(|| date.to_owned())
}
