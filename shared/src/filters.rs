//! Active filter selections for the booking matrix.
//!
//! Setters are plain assignments. A selection that no longer exists in the
//! catalog simply matches nothing.

use serde::{Deserialize, Serialize};

use crate::catalog::Unit;

/// Category value that admits every unit
pub const ALL_CATEGORIES: &str = "Semua";
/// Unit / status value that admits everything
pub const ALL: &str = "all";

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_BOOKED: &str = "booked";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: String,
    /// Display name of the selected unit, or `"all"`
    pub unit: String,
    pub status: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            unit: ALL.to_string(),
            status: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Row filter: category and unit. Status never hides a row.
    pub fn admits_unit(&self, unit: &Unit) -> bool {
        let category_ok = self.category == ALL_CATEGORIES || unit.category == self.category;
        let unit_ok = self.unit == ALL || unit.display_name == self.unit;
        category_ok && unit_ok
    }

    /// Cell filter for a slot whose status is `status`
    pub fn admits_status(&self, status: &str) -> bool {
        self.status == ALL || self.status == status
    }
}

/// Status filter drop-down entries as `(value, label)`
pub fn status_options() -> Vec<(&'static str, &'static str)> {
    vec![
        (ALL, "Semua Status"),
        (STATUS_AVAILABLE, "Tersedia"),
        (STATUS_BOOKED, "Dipesan"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_unit(display_name: &str, category: &str) -> Unit {
        Unit {
            original_name: display_name.to_string(),
            display_name: display_name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_default_admits_everything() {
        let filters = FilterState::default();
        assert!(filters.admits_unit(&create_test_unit("Tent", "Camping")));
        assert!(filters.admits_status("booked"));
        assert!(filters.admits_status("maintenance"));
    }

    #[test]
    fn test_category_and_unit_filters() {
        let mut filters = FilterState::default();
        filters.set_category("Camping");
        assert!(filters.admits_unit(&create_test_unit("Tent", "Camping")));
        assert!(!filters.admits_unit(&create_test_unit("Chair", "Furniture")));

        filters.set_unit("Tent (2)");
        assert!(!filters.admits_unit(&create_test_unit("Tent (1)", "Camping")));
        assert!(filters.admits_unit(&create_test_unit("Tent (2)", "Camping")));
    }

    #[test]
    fn test_stale_selection_matches_nothing() {
        let mut filters = FilterState::default();
        filters.set_category("Removed Category");
        assert!(!filters.admits_unit(&create_test_unit("Tent", "Camping")));
    }

    #[test]
    fn test_status_filter() {
        let mut filters = FilterState::default();
        filters.set_status(STATUS_BOOKED);
        assert!(filters.admits_status("booked"));
        assert!(!filters.admits_status("available"));
    }
}
