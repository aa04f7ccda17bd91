use shared::filters::status_options;
use shared::{FilterState, UnitOption};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub is_open: bool,
    pub filters: FilterState,
    pub category_options: Vec<String>,
    pub unit_options: Vec<UnitOption>,
    pub on_category_change: Callback<String>,
    pub on_unit_change: Callback<String>,
    pub on_status_change: Callback<String>,
    pub on_close: Callback<()>,
}

fn select_value(callback: Callback<String>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        callback.emit(select.value());
    })
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let panel_class = if props.is_open { "filter-panel open" } else { "filter-panel" };

    html! {
        <aside class={panel_class} id="filterPanel">
            <div class="filter-panel-header">
                <h3>{"Filter"}</h3>
                <button class="btn-close" id="closeFilterBtn" onclick={on_close}>{"×"}</button>
            </div>

            <div class="form-group">
                <label for="filterCategory">{"Kategori"}</label>
                <select id="filterCategory" onchange={select_value(props.on_category_change.clone())}>
                    {for props.category_options.iter().map(|category| html! {
                        <option value={category.clone()} selected={*category == props.filters.category}>
                            {category}
                        </option>
                    })}
                </select>
            </div>

            // Options carry the display name: raw names repeat across duplicates
            <div class="form-group">
                <label for="filterUnit">{"Barang"}</label>
                <select id="filterUnit" onchange={select_value(props.on_unit_change.clone())}>
                    {for props.unit_options.iter().map(|option| html! {
                        <option
                            value={option.display_name.clone()}
                            data-unit={option.value.clone()}
                            selected={option.display_name == props.filters.unit}
                        >
                            {&option.label}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="filterStatus">{"Status"}</label>
                <select id="filterStatus" onchange={select_value(props.on_status_change.clone())}>
                    {for status_options().into_iter().map(|(value, label)| html! {
                        <option value={value} selected={value == props.filters.status}>{label}</option>
                    })}
                </select>
            </div>
        </aside>
    }
}
