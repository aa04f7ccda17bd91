//! Application configuration.
//!
//! Every field has a default so a deployment only needs to override what
//! differs, e.g. `{"booking_endpoint": "https://example.test/exec"}`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BOOKING_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbx8Ys03XP2VU_Jc-hrkg2tqx6ARzXsV5LndosC4zLvVYq7FteoihxLKIVauYFSc-HAz/exec";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Spreadsheet-backed endpoint answering `action=getBookings`
    pub booking_endpoint: String,
    /// Static unit/category catalog
    pub catalog_path: String,
    /// Messaging deep-link base, the recipient is appended as a path segment
    pub handoff_base_url: String,
    pub handoff_recipient: String,
    /// Quiet period before a window resize re-renders the matrix
    pub resize_debounce_ms: u32,
    pub default_pickup_time: String,
    pub default_return_time: String,
    /// Minimum number of guarantee documents a reservation must list
    pub required_documents: usize,
    pub unit_column_width: u32,
    pub min_cell_width: u32,
    pub cell_width_gutter: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            booking_endpoint: DEFAULT_BOOKING_ENDPOINT.to_string(),
            catalog_path: "units.json".to_string(),
            handoff_base_url: "https://wa.me".to_string(),
            handoff_recipient: "628999240196".to_string(),
            resize_debounce_ms: 500,
            default_pickup_time: "08:00".to_string(),
            default_return_time: "17:00".to_string(),
            required_documents: 3,
            unit_column_width: 100,
            min_cell_width: 40,
            cell_width_gutter: 20,
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"booking_endpoint": "https://example.test/exec", "required_documents": 2}"#).unwrap();

        assert_eq!(config.booking_endpoint, "https://example.test/exec");
        assert_eq!(config.required_documents, 2);
        assert_eq!(config.catalog_path, "units.json");
        assert_eq!(config.resize_debounce_ms, 500);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(AppConfig::from_json("{\"min_cell_width\": \"wide\"}").is_err());
    }
}
