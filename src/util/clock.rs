//! Wall-clock readings for form validation and row timestamps.

/// Current local date as `YYYY-MM-DD`.
#[cfg(feature = "csr")]
pub fn today_iso_date() -> String {
    let now = js_sys::Date::new_0();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        let year = now.get_full_year() as u32;
        let month = now.get_month() as u32 + 1;
        let day = now.get_date() as u32;
        format!("{year:04}-{month:02}-{day:02}")
    }
}

#[cfg(not(feature = "csr"))]
pub fn today_iso_date() -> String {
    String::new()
}

/// Current instant as an ISO-8601 timestamp, written into `updated_at`
/// columns on edits.
#[cfg(feature = "csr")]
pub fn now_iso_timestamp() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(feature = "csr"))]
pub fn now_iso_timestamp() -> String {
    String::new()
}
