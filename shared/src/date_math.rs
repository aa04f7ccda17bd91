//! Date helpers for the booking matrix.
//!
//! All dates are plain calendar days (`NaiveDate`) rendered as `YYYY-MM-DD`.
//! Months are zero-based (`0` = January) wherever a bare month index is used,
//! matching [`crate::ViewMonth`]. Anything that depends on "today" takes it as
//! a parameter so the caller decides where the clock comes from.

use chrono::{Datelike, Days, NaiveDate, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun",
    "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Format a date as `YYYY-MM-DD`, zero padded
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a `YYYY-MM-DD` string. Returns `None` for anything that isn't a real day.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let mut parts = date_str.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Number of days in a zero-based month.
///
/// Computed as "day zero of the following month", i.e. the day before the
/// first of next month, so leap years fall out of the calendar itself.
/// Month indexes outside `0..=11` roll over into neighbouring years.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let next = year * 12 + month0 as i32 + 1;
    let (next_year, next_month) = (next.div_euclid(12), next.rem_euclid(12) as u32 + 1);

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last_day| last_day.day())
        .unwrap_or(0)
}

/// Add whole days to a date, saturating at the end of chrono's range
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True when the date lies strictly before `today`. Unparseable input is never "past".
pub fn is_past_date(date_str: &str, today: NaiveDate) -> bool {
    parse_date(date_str).map(|date| date < today).unwrap_or(false)
}

/// Long month name for a zero-based month index
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("Bulan Tidak Valid")
}

fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Min",
        Weekday::Mon => "Sen",
        Weekday::Tue => "Sel",
        Weekday::Wed => "Rab",
        Weekday::Thu => "Kam",
        Weekday::Fri => "Jum",
        Weekday::Sat => "Sab",
    }
}

/// Human readable date for the reservation form and hand-off message,
/// e.g. `"Sel, 5 Mar 2024"`. Falls back to the raw string when it doesn't parse.
pub fn format_full_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => format!(
            "{}, {} {} {}",
            weekday_short_name(date.weekday()),
            date.day(),
            MONTH_SHORT_NAMES[date.month0() as usize],
            date.year()
        ),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 29); // leap February
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);

        let expected_2025 = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month0, expected) in expected_2025.iter().enumerate() {
            assert_eq!(days_in_month(2025, month0 as u32), *expected, "month index {}", month0);
        }
    }

    #[test]
    fn test_days_in_month_rolls_over_years() {
        // Index 12 is January of the following year
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2023, 13), 29);
    }

    #[test]
    fn test_format_parse_round_trip() {
        assert_eq!(parse_date("2024-03-05"), Some(ymd(2024, 3, 5)));
        assert_eq!(format_date(parse_date("2024-03-05").unwrap()), "2024-03-05");
        assert_eq!(format_date(ymd(987, 1, 9)), "0987-01-09");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("2024-06"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_weekend_and_today() {
        assert!(is_weekend(ymd(2024, 6, 8))); // Saturday
        assert!(is_weekend(ymd(2024, 6, 9))); // Sunday
        assert!(!is_weekend(ymd(2024, 6, 10)));

        let today = ymd(2024, 6, 10);
        assert!(is_today(ymd(2024, 6, 10), today));
        assert!(!is_today(ymd(2023, 6, 10), today));
    }

    #[test]
    fn test_is_past_date() {
        let today = ymd(2024, 6, 10);
        assert!(is_past_date("2024-06-09", today));
        assert!(!is_past_date("2024-06-10", today));
        assert!(!is_past_date("2024-06-11", today));
        assert!(!is_past_date("garbage", today));
    }

    #[test]
    fn test_add_days_crosses_month_end() {
        assert_eq!(add_days(ymd(2024, 2, 29), 1), ymd(2024, 3, 1));
        assert_eq!(add_days(ymd(2024, 12, 31), 1), ymd(2025, 1, 1));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(0), "Januari");
        assert_eq!(month_name(5), "Juni");
        assert_eq!(month_name(11), "Desember");
        assert_eq!(month_name(12), "Bulan Tidak Valid");
    }

    #[test]
    fn test_format_full_date() {
        assert_eq!(format_full_date("2024-03-05"), "Sel, 5 Mar 2024");
        assert_eq!(format_full_date("2024-08-17"), "Sab, 17 Agu 2024");
        assert_eq!(format_full_date("invalid-date"), "invalid-date");
    }
}
