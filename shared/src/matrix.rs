//! Booking matrix view-model.
//!
//! [`render`] is a pure function of catalog, bookings, filters, the viewed
//! month and today's date. The UI only turns the resulting [`RenderModel`]
//! into markup; every status and interactivity decision is made here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bookings::{booking_key, BookingIndex};
use crate::catalog::{compare_display_names, Catalog, Unit};
use crate::config::AppConfig;
use crate::date_math::{format_date, is_past_date, is_today, is_weekend};
use crate::filters::{FilterState, ALL, STATUS_AVAILABLE};
use crate::view_month::ViewMonth;

pub const LOADING_MESSAGE: &str = "Memuat data...";
pub const INIT_FAILED_MESSAGE: &str = "Gagal menginisialisasi aplikasi";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateHeader {
    pub day: u32,
    pub date: String,
    pub is_weekend: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub day: u32,
    pub date: String,
    /// `None` when the filter hides this slot
    pub status: Option<String>,
    pub description: Option<String>,
    pub is_weekend: bool,
    pub is_today: bool,
    /// Open, present or future slot that may start a reservation
    pub interactive: bool,
}

impl MatrixCell {
    pub fn css_class(&self) -> String {
        let mut classes = vec!["date-cell"];
        if self.is_weekend {
            classes.push("weekend");
        }
        if self.is_today {
            classes.push("today");
        }
        if let Some(status) = self.status.as_deref() {
            classes.push(status);
        }
        if self.interactive {
            classes.push("clickable");
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub display_name: String,
    pub original_name: String,
    pub cells: Vec<MatrixCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub title: String,
    pub view: ViewMonth,
    pub headers: Vec<DateHeader>,
    pub rows: Vec<MatrixRow>,
}

/// What goes in the matrix body
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixBody {
    Loading,
    Error(String),
    Grid(RenderModel),
}

impl MatrixBody {
    /// Single-line replacement text for the non-grid states
    pub fn message(&self) -> Option<String> {
        match self {
            MatrixBody::Loading => Some(LOADING_MESSAGE.to_string()),
            MatrixBody::Error(message) => Some(format!("Error: {}", message)),
            MatrixBody::Grid(_) => None,
        }
    }

    pub fn has_rows(&self) -> bool {
        matches!(self, MatrixBody::Grid(model) if !model.rows.is_empty())
    }
}

/// Width of one day column for a container of `container_width` pixels
pub fn cell_width(container_width: u32, days: u32, config: &AppConfig) -> u32 {
    if days == 0 {
        return config.min_cell_width;
    }
    let available = container_width
        .saturating_sub(config.unit_column_width)
        .saturating_sub(config.cell_width_gutter);
    config.min_cell_width.max(available / days)
}

pub fn date_headers(view: ViewMonth, today: NaiveDate) -> Vec<DateHeader> {
    (1..=view.days())
        .filter_map(|day| view.date(day).map(|date| (day, date)))
        .map(|(day, date)| DateHeader {
            day,
            date: format_date(date),
            is_weekend: is_weekend(date),
            is_today: is_today(date, today),
        })
        .collect()
}

/// Units that survive the category/unit filters, sorted by display name
pub fn visible_units<'a>(catalog: &'a Catalog, filters: &FilterState) -> Vec<&'a Unit> {
    let mut units: Vec<&Unit> = catalog
        .units
        .iter()
        .filter(|unit| filters.admits_unit(unit))
        .collect();
    units.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));
    units
}

fn render_cell(
    unit: &Unit,
    header: &DateHeader,
    bookings: &BookingIndex,
    filters: &FilterState,
    today: NaiveDate,
) -> MatrixCell {
    let booking = bookings.get(&booking_key(&unit.original_name, &header.date));

    let (status, description) = match booking {
        Some(record) if filters.admits_status(&record.status) => {
            let description = Some(record.description.clone()).filter(|d| !d.is_empty());
            (Some(record.status.clone()), description)
        }
        // No record means an open slot; there is never a description to show
        None if filters.status == ALL || filters.status == STATUS_AVAILABLE => {
            (Some(STATUS_AVAILABLE.to_string()), None)
        }
        _ => (None, None),
    };

    let interactive =
        status.as_deref() == Some(STATUS_AVAILABLE) && !is_past_date(&header.date, today);

    MatrixCell {
        day: header.day,
        date: header.date.clone(),
        status,
        description,
        is_weekend: header.is_weekend,
        is_today: header.is_today,
        interactive,
    }
}

pub fn render(
    catalog: &Catalog,
    bookings: &BookingIndex,
    filters: &FilterState,
    view: ViewMonth,
    today: NaiveDate,
) -> RenderModel {
    let headers = date_headers(view, today);

    let rows: Vec<MatrixRow> = visible_units(catalog, filters)
        .into_iter()
        .map(|unit| MatrixRow {
            display_name: unit.display_name.clone(),
            original_name: unit.original_name.clone(),
            cells: headers
                .iter()
                .map(|header| render_cell(unit, header, bookings, filters, today))
                .collect(),
        })
        .collect();

    log::debug!(
        "🗓️ MATRIX: Rendered {} rows x {} days for {}",
        rows.len(),
        headers.len(),
        view.title()
    );

    RenderModel {
        title: view.title(),
        view,
        headers,
        rows,
    }
}
