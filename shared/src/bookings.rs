//! Booking state for one month, as served by the spreadsheet backend.
//!
//! The backend answers
//! `GET <endpoint>?action=getBookings&month=<1-12>&year=<YYYY>&t=<cache-bust>` with
//! `{ "success": bool, "message": "...", "data": { "<unit>_<YYYY-MM-DD>": {..} | null } }`.
//! A slot without an entry is implicitly available.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::filters::STATUS_AVAILABLE;
use crate::view_month::ViewMonth;

pub const DEFAULT_REJECTION_MESSAGE: &str = "Format data tidak valid";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingLoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Gagal memuat data")]
    HttpStatus(u16),
    #[error("Format data tidak valid: {0}")]
    Parse(String),
    /// The backend answered but reported `success: false`
    #[error("{0}")]
    Rejected(String),
}

/// Normalized booking for one unit on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub date: String,
    pub unit: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingsResponse {
    /// Any truthy value counts as success
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: HashMap<String, Value>,
}

impl BookingsResponse {
    pub fn from_json(json: &str) -> Result<Self, BookingLoadError> {
        serde_json::from_str(json).map_err(|e| BookingLoadError::Parse(e.to_string()))
    }
}

/// Lookup table keyed by [`booking_key`]
pub type BookingIndex = HashMap<String, BookingRecord>;

/// Store key for a unit's raw name and a `YYYY-MM-DD` date
pub fn booking_key(unit: &str, date_str: &str) -> String {
    format!("{}_{}", unit, date_str)
}

/// Query URL for one month. `cache_bust` is any value unique per request
/// (the client uses the current epoch millis).
pub fn bookings_url(endpoint: &str, view: ViewMonth, cache_bust: u64) -> String {
    format!(
        "{}?action=getBookings&month={}&year={}&t={}",
        endpoint,
        view.query_month(),
        view.year,
        cache_bust
    )
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Text of a spreadsheet cell. Numbers and booleans are stringified; a
/// missing or falsy field yields `None`.
fn field_text(entry: &Value, field: &str) -> Option<String> {
    let value = entry.get(field)?;
    if is_falsy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn normalize_record(entry: &Value) -> BookingRecord {
    BookingRecord {
        date: field_text(entry, "date").unwrap_or_default(),
        unit: field_text(entry, "unit").unwrap_or_default(),
        description: field_text(entry, "description").unwrap_or_default(),
        status: field_text(entry, "status").unwrap_or_else(|| STATUS_AVAILABLE.to_string()),
    }
}

/// Turn a successful payload into a fresh index, or the payload's own error
pub fn build_index(response: BookingsResponse) -> Result<BookingIndex, BookingLoadError> {
    if is_falsy(&response.success) {
        let message = response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        return Err(BookingLoadError::Rejected(message));
    }

    let index: BookingIndex = response
        .data
        .into_iter()
        .filter(|(_, entry)| !is_falsy(entry))
        .map(|(key, entry)| (key, normalize_record(&entry)))
        .collect();
    Ok(index)
}

/// Bookings of the most recently loaded month. A load replaces the whole index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStore {
    index: BookingIndex,
    loaded_month: Option<ViewMonth>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store with the bookings of `view`. On error the previous
    /// contents are left untouched.
    pub fn load_month(
        &mut self,
        view: ViewMonth,
        response: BookingsResponse,
    ) -> Result<usize, BookingLoadError> {
        let index = build_index(response)?;
        log::info!(
            "📅 BOOKINGS: Loaded {} records for {}/{}",
            index.len(),
            view.query_month(),
            view.year
        );

        self.index = index;
        self.loaded_month = Some(view);
        Ok(self.index.len())
    }

    pub fn get(&self, unit: &str, date_str: &str) -> Option<&BookingRecord> {
        self.index.get(&booking_key(unit, date_str))
    }

    pub fn index(&self) -> &BookingIndex {
        &self.index
    }

    pub fn loaded_month(&self) -> Option<ViewMonth> {
        self.loaded_month
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUNE_2024: ViewMonth = ViewMonth { month: 5, year: 2024 };

    fn parse(json: &str) -> BookingsResponse {
        BookingsResponse::from_json(json).unwrap()
    }

    #[test]
    fn test_bookings_url() {
        assert_eq!(
            bookings_url("https://example.test/exec", JUNE_2024, 1718000000000),
            "https://example.test/exec?action=getBookings&month=6&year=2024&t=1718000000000"
        );
    }

    #[test]
    fn test_load_month_normalizes_records() {
        let mut store = BookingStore::new();
        let count = store
            .load_month(
                JUNE_2024,
                parse(
                    r#"{
                        "success": true,
                        "data": {
                            "Tent_2024-06-10": {"date": "2024-06-10", "unit": "Tent", "status": "booked", "description": "Pak Budi"},
                            "Tent_2024-06-11": {"date": "2024-06-11", "unit": "Tent"},
                            "Chair_2024-06-12": {"date": "2024-06-12", "unit": "Chair", "status": ""},
                            "Chair_2024-06-13": null
                        }
                    }"#,
                ),
            )
            .unwrap();

        assert_eq!(count, 3);
        assert_eq!(store.loaded_month(), Some(JUNE_2024));

        let booked = store.get("Tent", "2024-06-10").unwrap();
        assert_eq!(booked.status, "booked");
        assert_eq!(booked.description, "Pak Budi");

        let bare = store.get("Tent", "2024-06-11").unwrap();
        assert_eq!(bare.status, "available");
        assert_eq!(bare.description, "");

        assert_eq!(store.get("Chair", "2024-06-12").unwrap().status, "available");
        assert!(store.get("Chair", "2024-06-13").is_none());
    }

    #[test]
    fn test_numeric_spreadsheet_cells_are_kept() {
        let index = build_index(parse(
            r#"{
                "success": true,
                "data": {
                    "Tent_2024-06-10": {"date": "2024-06-10", "unit": "Tent", "status": "booked", "description": 81234},
                    "101_2024-06-11": {"date": "2024-06-11", "unit": 101, "status": "booked", "description": true},
                    "101_2024-06-12": {"unit": 101, "description": 0, "status": 0}
                }
            }"#,
        ))
        .unwrap();

        assert_eq!(index.len(), 3);

        let tent = &index["Tent_2024-06-10"];
        assert_eq!(tent.status, "booked");
        assert_eq!(tent.description, "81234");

        let room = &index["101_2024-06-11"];
        assert_eq!(room.unit, "101");
        assert_eq!(room.status, "booked");
        assert_eq!(room.description, "true");

        let zeroed = &index["101_2024-06-12"];
        assert_eq!(zeroed.description, "");
        assert_eq!(zeroed.status, "available");
        assert_eq!(zeroed.date, "");
    }

    #[test]
    fn test_truthy_non_object_entry_is_an_open_record() {
        let index = build_index(parse(r#"{"success": true, "data": {"Tent_2024-06-10": "x"}}"#)).unwrap();
        let record = &index["Tent_2024-06-10"];
        assert_eq!(record.status, "available");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_truthy_success_flags_are_accepted() {
        for flag in ["1", r#""true""#, "true"] {
            let json = format!(r#"{{"success": {}, "data": {{"Tent_2024-06-10": {{"status": "booked"}}}}}}"#, flag);
            assert_eq!(build_index(parse(&json)).unwrap().len(), 1, "success = {}", flag);
        }
        for flag in ["0", r#""""#, "false", "null"] {
            let json = format!(r#"{{"success": {}}}"#, flag);
            assert!(matches!(build_index(parse(&json)), Err(BookingLoadError::Rejected(_))), "success = {}", flag);
        }
    }

    #[test]
    fn test_falsy_entries_are_skipped() {
        let index = build_index(parse(
            r#"{"success": true, "data": {"a_2024-06-01": false, "b_2024-06-01": 0, "c_2024-06-01": ""}}"#,
        ))
        .unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_rejected_payload_uses_backend_message() {
        let result = build_index(parse(r#"{"success": false, "message": "Sheet not found"}"#));
        assert_eq!(result, Err(BookingLoadError::Rejected("Sheet not found".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "Sheet not found");
    }

    #[test]
    fn test_rejected_payload_without_message_uses_default() {
        let result = build_index(parse(r#"{"data": {}}"#));
        assert_eq!(result.unwrap_err().to_string(), "Format data tidak valid");
    }

    #[test]
    fn test_failed_load_keeps_previous_index() {
        let mut store = BookingStore::new();
        store
            .load_month(
                JUNE_2024,
                parse(r#"{"success": true, "data": {"Tent_2024-06-10": {"status": "booked"}}}"#),
            )
            .unwrap();

        let result = store.load_month(JUNE_2024.next(), parse(r#"{"success": false}"#));
        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.loaded_month(), Some(JUNE_2024));
    }

    #[test]
    fn test_reload_replaces_instead_of_merging() {
        let mut store = BookingStore::new();
        store
            .load_month(
                JUNE_2024,
                parse(r#"{"success": true, "data": {"Tent_2024-06-10": {"status": "booked"}}}"#),
            )
            .unwrap();
        store
            .load_month(
                JUNE_2024,
                parse(r#"{"success": true, "data": {"Chair_2024-06-11": {"status": "booked"}}}"#),
            )
            .unwrap();

        assert!(store.get("Tent", "2024-06-10").is_none());
        assert!(store.get("Chair", "2024-06-11").is_some());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            BookingsResponse::from_json("<html>quota exceeded</html>"),
            Err(BookingLoadError::Parse(_))
        ));
    }
}
