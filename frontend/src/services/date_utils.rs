use chrono::NaiveDate;
use js_sys::Date;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Milliseconds since the epoch, used to bust the booking endpoint's cache
pub fn now_millis() -> u64 {
    Date::now() as u64
}

/// Width of the page's `.container`, or 0 before layout
pub fn container_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(".container").ok().flatten())
        .map(|element| element.client_width().max(0) as u32)
        .unwrap_or(0)
}
