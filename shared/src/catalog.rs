//! Unit/category catalog.
//!
//! The catalog arrives as `{ "units": [{ "name", "category" }], "categories": [..] }`.
//! Raw unit names are not unique (a shop may own three identical tents), so each
//! unit also gets a display name. Bookings stay keyed by the raw name.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

use crate::filters::{ALL, ALL_CATEGORIES};

/// Label of the "every unit" entry in the unit filter
pub const ALL_UNITS_LABEL: &str = "Semua Barang";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogLoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to load units.json")]
    HttpStatus(u16),
    #[error("Failed to parse units.json: {0}")]
    Parse(String),
}

/// Catalog entry as stored in the static file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUnit {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub units: Vec<RawUnit>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Name used by the booking backend
    pub original_name: String,
    /// Name shown to the user, unique within a loaded catalog
    pub display_name: String,
    pub category: String,
}

/// One entry of the unit filter drop-down.
///
/// `display_name` is what the unit filter matches on; `value` is the raw name
/// and repeats across duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOption {
    pub value: String,
    pub display_name: String,
    pub label: String,
}

/// Processed catalog. Replaced wholesale on every load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub units: Vec<Unit>,
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogLoadError::Parse(e.to_string()))?;
        Ok(Self::from_file(file))
    }

    pub fn from_file(file: CatalogFile) -> Self {
        let units = assign_display_names(&file.units);
        log::info!("📦 CATALOG: Loaded {} units in {} categories", units.len(), file.categories.len());

        Self {
            units,
            categories: file.categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units belonging to `category`, or every unit for the "Semua" category
    pub fn units_in_category(&self, category: &str) -> Vec<&Unit> {
        self.units
            .iter()
            .filter(|unit| category == ALL_CATEGORIES || unit.category == category)
            .collect()
    }

    /// Category drop-down entries: "Semua" first, then catalog order
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// Unit drop-down entries for the selected category, sorted by display name
    pub fn unit_options(&self, category: &str) -> Vec<UnitOption> {
        let mut units = self.units_in_category(category);
        units.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));

        let mut options = Vec::with_capacity(units.len() + 1);
        options.push(UnitOption {
            value: ALL.to_string(),
            display_name: ALL.to_string(),
            label: ALL_UNITS_LABEL.to_string(),
        });
        options.extend(units.into_iter().map(|unit| UnitOption {
            value: unit.original_name.clone(),
            display_name: unit.display_name.clone(),
            label: unit.display_name.clone(),
        }));
        options
    }
}

/// Give every instance of a repeated raw name a running `" (n)"` suffix in
/// catalog order, starting at 1 and including the first instance. Names that
/// occur once keep the bare name.
pub fn assign_display_names(raw_units: &[RawUnit]) -> Vec<Unit> {
    let mut name_count: HashMap<&str, usize> = HashMap::new();
    for unit in raw_units {
        *name_count.entry(unit.name.as_str()).or_insert(0) += 1;
    }

    let mut name_index: HashMap<&str, usize> = HashMap::new();
    raw_units
        .iter()
        .map(|unit| {
            let display_name = if name_count[unit.name.as_str()] > 1 {
                let index = name_index.entry(unit.name.as_str()).or_insert(0);
                *index += 1;
                format!("{} ({})", unit.name, index)
            } else {
                unit.name.clone()
            };

            Unit {
                original_name: unit.name.clone(),
                display_name,
                category: unit.category.clone(),
            }
        })
        .collect()
}

/// Ordering used wherever units are listed: case-insensitive first, then exact
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_raw_unit(name: &str, category: &str) -> RawUnit {
        RawUnit {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    fn create_test_catalog() -> Catalog {
        Catalog::from_file(CatalogFile {
            units: vec![
                create_test_raw_unit("Tent", "Camping"),
                create_test_raw_unit("Tent", "Camping"),
                create_test_raw_unit("Chair", "Furniture"),
                create_test_raw_unit("carrier 60L", "Camping"),
            ],
            categories: vec!["Camping".to_string(), "Furniture".to_string()],
        })
    }

    #[test]
    fn test_duplicate_names_are_all_suffixed() {
        let units = assign_display_names(&[
            create_test_raw_unit("Tent", "Camping"),
            create_test_raw_unit("Tent", "Camping"),
            create_test_raw_unit("Chair", "Furniture"),
        ]);

        let display_names: Vec<&str> = units.iter().map(|u| u.display_name.as_str()).collect();
        assert_eq!(display_names, vec!["Tent (1)", "Tent (2)", "Chair"]);
        assert!(units.iter().take(2).all(|u| u.original_name == "Tent"));
    }

    #[test]
    fn test_suffix_follows_catalog_order_across_interleaving() {
        let units = assign_display_names(&[
            create_test_raw_unit("Tent", "Camping"),
            create_test_raw_unit("Chair", "Furniture"),
            create_test_raw_unit("Tent", "Camping"),
            create_test_raw_unit("Chair", "Furniture"),
            create_test_raw_unit("Tent", "Camping"),
        ]);

        let display_names: Vec<&str> = units.iter().map(|u| u.display_name.as_str()).collect();
        assert_eq!(display_names, vec!["Tent (1)", "Chair (1)", "Tent (2)", "Chair (2)", "Tent (3)"]);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"{"units": [{"name": "Tent", "category": "Camping"}], "categories": ["Camping"]}"#,
        )
        .unwrap();

        assert_eq!(catalog.units.len(), 1);
        assert_eq!(catalog.units[0].display_name, "Tent");
        assert_eq!(catalog.categories, vec!["Camping"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_payload() {
        let result = Catalog::from_json(r#"{"units": "nope"}"#);
        assert!(matches!(result, Err(CatalogLoadError::Parse(_))));
    }

    #[test]
    fn test_category_options() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.category_options(), vec!["Semua", "Camping", "Furniture"]);
    }

    #[test]
    fn test_unit_options_sorted_and_filtered() {
        let catalog = create_test_catalog();

        let options = catalog.unit_options("Camping");
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Semua Barang", "carrier 60L", "Tent (1)", "Tent (2)"]);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].display_name, "all");
        assert_eq!(options[2].value, "Tent");
        assert_eq!(options[2].display_name, "Tent (1)");

        assert_eq!(catalog.unit_options("Semua").len(), 5);
        assert_eq!(catalog.unit_options("Unknown").len(), 1);
    }

    #[test]
    fn test_compare_display_names() {
        assert_eq!(compare_display_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_display_names("Tent (2)", "Tent (10)"), Ordering::Greater);
        assert_eq!(compare_display_names("Tent", "Tent"), Ordering::Equal);
    }

    #[test]
    fn test_load_error_messages() {
        assert_eq!(CatalogLoadError::HttpStatus(404).to_string(), "Failed to load units.json");
    }
}
