//! Shared domain logic for the rental booking calendar.
//!
//! Everything here is plain data and pure functions so it can be unit tested
//! natively and reused by the browser frontend. Network access, timers and
//! DOM work live in the frontend crate.

pub mod bookings;
pub mod catalog;
pub mod config;
pub mod date_math;
pub mod filters;
pub mod handoff;
pub mod matrix;
pub mod state;
pub mod view_month;

pub use bookings::{booking_key, bookings_url, BookingIndex, BookingLoadError, BookingRecord, BookingStore, BookingsResponse};
pub use catalog::{Catalog, CatalogFile, CatalogLoadError, RawUnit, Unit, UnitOption};
pub use config::AppConfig;
pub use filters::{FilterState, ALL, ALL_CATEGORIES, STATUS_AVAILABLE, STATUS_BOOKED};
pub use handoff::{submit, Handoff, OpenError, ReservationDraft, ValidationError, DOCUMENT_CHOICES};
pub use matrix::{cell_width, render, DateHeader, MatrixBody, MatrixCell, MatrixRow, RenderModel};
pub use state::{AppState, ApplyOutcome, RequestTicket, RequestTracker};
pub use view_month::ViewMonth;
