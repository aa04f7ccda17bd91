use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use shared::{MatrixBody, MatrixCell, MatrixRow, RenderModel};
use wasm_bindgen::JsCast;
use web_sys::{Element, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingMatrixProps {
    pub body: MatrixBody,
    pub cell_width: u32,
    /// `(unit original name, YYYY-MM-DD)` of an open cell
    pub on_cell_click: Callback<(String, String)>,
}

/// Horizontal scroll for a swipe from `start` to `current`, or `None` when
/// the gesture is mostly vertical and should scroll the page instead.
pub fn swipe_scroll_delta(start: (i32, i32), current: (i32, i32)) -> Option<i32> {
    let delta_x = start.0 - current.0;
    let delta_y = start.1 - current.1;
    (delta_x.abs() > delta_y.abs()).then_some(delta_x)
}

fn first_touch(event: &Event) -> Option<(i32, i32)> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some((touch.client_x(), touch.client_y()))
}

/// Touch listeners on the table container. `touchmove` must be able to
/// cancel vertical scrolling, so it is registered as non-passive.
#[hook]
fn use_swipe_scroll(container: NodeRef) {
    use_effect_with(container, |container| {
        let start = Rc::new(Cell::new((0, 0)));
        let listeners = container.cast::<Element>().map(|element| {
            let on_start = {
                let start = start.clone();
                EventListener::new(&element, "touchstart", move |event| {
                    if let Some(point) = first_touch(event) {
                        start.set(point);
                    }
                })
            };

            let on_move = {
                let scroller = element.clone();
                EventListener::new_with_options(
                    &element,
                    "touchmove",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(point) = first_touch(event) else {
                            return;
                        };
                        if let Some(delta_x) = swipe_scroll_delta(start.get(), point) {
                            event.prevent_default();
                            scroller.set_scroll_left(scroller.scroll_left() + delta_x);
                            start.set(point);
                        }
                    },
                )
            };

            (on_start, on_move)
        });

        move || drop(listeners)
    });
}

fn render_cell(row: &MatrixRow, cell: &MatrixCell, cell_width: u32, on_cell_click: &Callback<(String, String)>) -> Html {
    let style = format!("min-width: {}px; cursor: {}", cell_width, if cell.interactive { "pointer" } else { "default" });

    let onclick = cell.interactive.then(|| {
        let on_cell_click = on_cell_click.clone();
        let unit = row.original_name.clone();
        let date = cell.date.clone();
        Callback::from(move |_: MouseEvent| on_cell_click.emit((unit.clone(), date.clone())))
    });

    html! {
        <td class={cell.css_class()} style={style} data-unit={row.original_name.clone()} data-date={cell.date.clone()} {onclick}>
            {if let Some(description) = cell.description.as_ref() {
                html! { <div class="description" title={description.clone()}>{description}</div> }
            } else {
                html! {}
            }}
        </td>
    }
}

fn render_grid(model: &RenderModel, cell_width: u32, on_cell_click: &Callback<(String, String)>) -> Html {
    html! {
        <>
            <thead>
                <tr id="dateHeaderRow">
                    <th class="unit-header">{"Barang"}</th>
                    {for model.headers.iter().map(|header| {
                        let mut classes = vec!["date-header"];
                        if header.is_weekend {
                            classes.push("weekend");
                        }
                        if header.is_today {
                            classes.push("today");
                        }
                        html! {
                            <th class={classes.join(" ")} data-date={header.date.clone()} style={format!("min-width: {}px", cell_width)}>
                                {header.day}
                            </th>
                        }
                    })}
                </tr>
            </thead>
            <tbody id="matrixBody">
                {for model.rows.iter().map(|row| html! {
                    <tr>
                        <td class="unit-cell">{&row.display_name}</td>
                        {for row.cells.iter().map(|cell| render_cell(row, cell, cell_width, on_cell_click))}
                    </tr>
                })}
            </tbody>
        </>
    }
}

#[function_component(BookingMatrix)]
pub fn booking_matrix(props: &BookingMatrixProps) -> Html {
    let container = use_node_ref();
    use_swipe_scroll(container.clone());

    let content = match &props.body {
        MatrixBody::Grid(model) => render_grid(model, props.cell_width, &props.on_cell_click),
        other => html! {
            <tbody id="matrixBody">
                <tr><td colspan="100%">{other.message().unwrap_or_default()}</td></tr>
            </tbody>
        },
    };

    html! {
        <div class="table-container" ref={container}>
            <table class="booking-matrix" id="bookingMatrix">
                {content}
            </table>
        </div>
    }
}
