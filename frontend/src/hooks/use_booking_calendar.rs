use std::cell::RefCell;
use std::rc::Rc;

use shared::{AppState, ApplyOutcome, FilterState, MatrixBody, RequestTicket, UnitOption, ViewMonth};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

/// Snapshot of the calendar state for rendering
#[derive(Clone, PartialEq)]
pub struct BookingCalendarState {
    pub view: ViewMonth,
    pub body: MatrixBody,
    pub filters: FilterState,
    pub category_options: Vec<String>,
    pub unit_options: Vec<UnitOption>,
}

pub struct UseBookingCalendarResult {
    pub state: BookingCalendarState,
    pub actions: UseBookingCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBookingCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    /// Reload catalog and bookings
    pub refresh: Callback<()>,
    pub set_category: Callback<String>,
    pub set_unit: Callback<String>,
    pub set_status: Callback<String>,
    /// Rebuild the grid, but only if one is showing
    pub rerender: Callback<()>,
}

fn snapshot(state: &AppState) -> BookingCalendarState {
    BookingCalendarState {
        view: state.view,
        body: state.body.clone(),
        filters: state.filters.clone(),
        category_options: state.catalog.category_options(),
        unit_options: state.unit_options(),
    }
}

#[hook]
pub fn use_booking_calendar(api_client: &ApiClient) -> UseBookingCalendarResult {
    let app_state: Rc<RefCell<AppState>> = use_mut_ref(|| AppState::new(today()));
    let force_update = use_force_update();

    // Fetch the month named by the ticket and feed the answer back
    let load_bookings = {
        let api_client = api_client.clone();
        let app_state = app_state.clone();
        let force_update = force_update.clone();

        use_callback((), move |ticket: RequestTicket, _| {
            let api_client = api_client.clone();
            let app_state = app_state.clone();
            let force_update = force_update.clone();
            force_update.force_update();

            spawn_local(async move {
                let result = api_client.get_bookings(ticket.view).await;
                let outcome = app_state.borrow_mut().apply_bookings(ticket, result, today());
                if outcome != ApplyOutcome::Stale {
                    force_update.force_update();
                }
            });
        })
    };

    // Catalog first, then the current month. `initial` picks the error text
    // shown when the catalog cannot be loaded.
    let reload = {
        let api_client = api_client.clone();
        let app_state = app_state.clone();
        let force_update = force_update.clone();
        let load_bookings = load_bookings.clone();

        use_callback((), move |initial: bool, _| {
            let api_client = api_client.clone();
            let app_state = app_state.clone();
            let force_update = force_update.clone();
            let load_bookings = load_bookings.clone();

            spawn_local(async move {
                let catalog = api_client.get_catalog().await;
                let loaded = app_state.borrow_mut().apply_catalog(catalog);

                match loaded {
                    Ok(()) => {
                        let ticket = app_state.borrow_mut().refresh();
                        load_bookings.emit(ticket);
                    }
                    Err(e) => {
                        if initial {
                            Logger::error_with_component("booking-calendar", &format!("Initialization error: {}", e));
                            app_state.borrow_mut().fail_init();
                        }
                        force_update.force_update();
                    }
                }
            });
        })
    };

    let prev_month = {
        let app_state = app_state.clone();
        let load_bookings = load_bookings.clone();
        use_callback((), move |_: MouseEvent, _| {
            let ticket = app_state.borrow_mut().go_previous();
            load_bookings.emit(ticket);
        })
    };

    let next_month = {
        let app_state = app_state.clone();
        let load_bookings = load_bookings.clone();
        use_callback((), move |_: MouseEvent, _| {
            let ticket = app_state.borrow_mut().go_next();
            load_bookings.emit(ticket);
        })
    };

    let refresh = {
        let reload = reload.clone();
        use_callback((), move |_: (), _| reload.emit(false))
    };

    let set_category = {
        let app_state = app_state.clone();
        let force_update = force_update.clone();
        use_callback((), move |category: String, _| {
            app_state.borrow_mut().set_category(category, today());
            force_update.force_update();
        })
    };

    let set_unit = {
        let app_state = app_state.clone();
        let force_update = force_update.clone();
        use_callback((), move |unit: String, _| {
            app_state.borrow_mut().set_unit(unit, today());
            force_update.force_update();
        })
    };

    let set_status = {
        let app_state = app_state.clone();
        let force_update = force_update.clone();
        use_callback((), move |status: String, _| {
            app_state.borrow_mut().set_status(status, today());
            force_update.force_update();
        })
    };

    let rerender = {
        let app_state = app_state.clone();
        let force_update = force_update.clone();
        use_callback((), move |_: (), _| {
            if !app_state.borrow().body.has_rows() {
                return;
            }
            app_state.borrow_mut().rerender(today());
            force_update.force_update();
        })
    };

    // Initial load
    use_effect_with((), {
        let reload = reload.clone();
        move |_| {
            reload.emit(true);
            || ()
        }
    });

    let state = snapshot(&app_state.borrow());

    let actions = UseBookingCalendarActions {
        prev_month,
        next_month,
        refresh,
        set_category,
        set_unit,
        set_status,
        rerender,
    };

    UseBookingCalendarResult { state, actions }
}
