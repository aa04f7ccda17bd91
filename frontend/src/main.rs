use log::LevelFilter;
use shared::{cell_width, AppConfig, ReservationDraft};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::booking_matrix::BookingMatrix;
use components::booking_modal::BookingModal;
use components::filter_panel::FilterPanel;
use components::header::Header;
use hooks::use_booking_calendar::use_booking_calendar;
use hooks::use_debounced_resize::use_debounced_resize;
use services::api::ApiClient;
use services::date_utils::{container_width, today};
use services::logging::Logger;
use services::scroll_lock;

/// Keeps the page pinned while any overlay is open
#[hook]
fn use_scroll_lock(locked: bool) {
    use_effect_with(locked, |locked| {
        let restore = locked.then(scroll_lock::lock);
        move || {
            if let Some(scroll_y) = restore {
                scroll_lock::unlock(scroll_y);
            }
        }
    });
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::default());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::new(&config)
    });

    let calendar = use_booking_calendar(&api_client);
    let filters_open = use_state(|| false);
    let draft = use_state(|| Option::<ReservationDraft>::None);
    let width = use_state(|| 0u32);

    // Measure once the container has been laid out
    use_effect_with((), {
        let width = width.clone();
        move |_| {
            width.set(container_width());
            || ()
        }
    });

    let on_resize = {
        let width = width.clone();
        let rerender = calendar.actions.rerender.clone();
        Callback::from(move |new_width: u32| {
            Logger::debug_with_component("app", &format!("Container resized to {}px", new_width));
            width.set(new_width);
            rerender.emit(());
        })
    };
    use_debounced_resize(config.resize_debounce_ms, on_resize);

    use_scroll_lock(*filters_open || draft.is_some());

    let on_toggle_filters = {
        let filters_open = filters_open.clone();
        Callback::from(move |_: ()| filters_open.set(!*filters_open))
    };

    let on_close_filters = {
        let filters_open = filters_open.clone();
        Callback::from(move |_: ()| filters_open.set(false))
    };

    let on_cell_click = {
        let draft = draft.clone();
        let config = config.clone();
        Callback::from(move |(unit, date): (String, String)| {
            match ReservationDraft::for_cell(&unit, &date, today(), &config) {
                Ok(new_draft) => draft.set(Some(new_draft)),
                Err(e) => {
                    Logger::warn_with_component("app", &format!("Cannot open {} on {}: {}", unit, date, e));
                    gloo::dialogs::alert(&e.to_string());
                }
            }
        })
    };

    let on_close_modal = {
        let draft = draft.clone();
        Callback::from(move |_: ()| draft.set(None))
    };

    let state = &calendar.state;
    let column_width = cell_width(*width, state.view.days(), &config);

    html! {
        <div class="container">
            <Header
                title={state.view.title()}
                on_prev_month={calendar.actions.prev_month.clone()}
                on_next_month={calendar.actions.next_month.clone()}
                on_refresh={calendar.actions.refresh.clone()}
                on_toggle_filters={on_toggle_filters}
            />

            <FilterPanel
                is_open={*filters_open}
                filters={state.filters.clone()}
                category_options={state.category_options.clone()}
                unit_options={state.unit_options.clone()}
                on_category_change={calendar.actions.set_category.clone()}
                on_unit_change={calendar.actions.set_unit.clone()}
                on_status_change={calendar.actions.set_status.clone()}
                on_close={on_close_filters}
            />

            <BookingMatrix
                body={state.body.clone()}
                cell_width={column_width}
                on_cell_click={on_cell_click}
            />

            {if let Some(current) = (*draft).clone() {
                html! {
                    <BookingModal
                        draft={current}
                        config={(*config).clone()}
                        on_close={on_close_modal}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn main() {
    Logger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
