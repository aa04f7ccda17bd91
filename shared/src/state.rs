//! # Application State
//!
//! Everything the booking calendar knows lives in [`AppState`]: the catalog,
//! the loaded bookings, the filter selections, the viewed month and what the
//! matrix body currently shows. UI code owns one instance and feeds fetch
//! results back into it; rendering reads it without mutating anything.
//!
//! ## Stale responses
//! Every booking fetch is issued a ticket from [`RequestTracker`]. When a
//! response arrives with a ticket older than the newest one issued, it is
//! dropped, so a slow answer for a month the user already navigated away from
//! can no longer overwrite the matrix.

use chrono::NaiveDate;

use crate::bookings::{BookingLoadError, BookingStore, BookingsResponse};
use crate::catalog::{Catalog, CatalogLoadError, UnitOption};
use crate::filters::{FilterState, ALL, ALL_CATEGORIES};
use crate::matrix::{render, MatrixBody, RenderModel};
use crate::view_month::ViewMonth;

/// Identifies one booking request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub generation: u64,
    pub view: ViewMonth,
}

/// Monotonic request generation counter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self, view: ViewMonth) -> RequestTicket {
        self.latest += 1;
        RequestTicket {
            generation: self.latest,
            view,
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// Outcome of feeding a booking response into the state
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The store was replaced and the matrix rebuilt
    Applied { records: usize },
    /// The response lost the race against a newer request
    Stale,
    /// The load failed; the matrix body now shows the error
    Failed(BookingLoadError),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub bookings: BookingStore,
    pub filters: FilterState,
    pub view: ViewMonth,
    pub body: MatrixBody,
    requests: RequestTracker,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            catalog: Catalog::default(),
            bookings: BookingStore::new(),
            filters: FilterState::default(),
            view: ViewMonth::current(today),
            body: MatrixBody::Loading,
            requests: RequestTracker::default(),
        }
    }

    /// Replace the catalog after a load. On failure the old catalog is kept
    /// and the error is shown in place of the matrix.
    pub fn apply_catalog(&mut self, result: Result<Catalog, CatalogLoadError>) -> Result<(), CatalogLoadError> {
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                // Both drop-downs are rebuilt, which drops the old selections
                self.filters.set_category(ALL_CATEGORIES);
                self.filters.set_unit(ALL);
                Ok(())
            }
            Err(e) => {
                log::error!("📦 CATALOG: Error loading units: {}", e);
                self.body = MatrixBody::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Ticket for a fetch of the current month; the body switches to loading
    pub fn refresh(&mut self) -> RequestTicket {
        self.body = MatrixBody::Loading;
        self.requests.issue(self.view)
    }

    pub fn go_previous(&mut self) -> RequestTicket {
        self.view = self.view.previous();
        self.refresh()
    }

    pub fn go_next(&mut self) -> RequestTicket {
        self.view = self.view.next();
        self.refresh()
    }

    /// Feed the result of the fetch identified by `ticket` into the state
    pub fn apply_bookings(
        &mut self,
        ticket: RequestTicket,
        result: Result<BookingsResponse, BookingLoadError>,
        today: NaiveDate,
    ) -> ApplyOutcome {
        if !self.requests.is_current(&ticket) {
            log::debug!(
                "📅 BOOKINGS: Dropping response #{} for {}, latest is #{}",
                ticket.generation,
                ticket.view.title(),
                self.requests.latest()
            );
            return ApplyOutcome::Stale;
        }

        match result.and_then(|response| self.bookings.load_month(ticket.view, response)) {
            Ok(records) => {
                self.rerender(today);
                ApplyOutcome::Applied { records }
            }
            Err(e) => {
                log::error!("📅 BOOKINGS: Error loading {}: {}", ticket.view.title(), e);
                self.body = MatrixBody::Error(e.to_string());
                ApplyOutcome::Failed(e)
            }
        }
    }

    /// Changing the category rebuilds the unit options, resetting the unit
    pub fn set_category(&mut self, category: impl Into<String>, today: NaiveDate) {
        self.filters.set_category(category);
        self.filters.set_unit(ALL);
        self.rerender(today);
    }

    pub fn set_unit(&mut self, unit: impl Into<String>, today: NaiveDate) {
        self.filters.set_unit(unit);
        self.rerender(today);
    }

    pub fn set_status(&mut self, status: impl Into<String>, today: NaiveDate) {
        self.filters.set_status(status);
        self.rerender(today);
    }

    pub fn unit_options(&self) -> Vec<UnitOption> {
        self.catalog.unit_options(&self.filters.category)
    }

    pub fn render_model(&self, today: NaiveDate) -> RenderModel {
        render(&self.catalog, self.bookings.index(), &self.filters, self.view, today)
    }

    /// Rebuild the grid from current state. A loading or error body stays as
    /// is until a load finishes; only a displayed grid is refreshed.
    pub fn rerender(&mut self, today: NaiveDate) {
        if self.bookings.loaded_month() == Some(self.view) {
            self.body = MatrixBody::Grid(self.render_model(today));
        }
    }

    /// Mark initialization as failed
    pub fn fail_init(&mut self) {
        self.body = MatrixBody::Error(crate::matrix::INIT_FAILED_MESSAGE.to_string());
    }
}
