use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_refresh: Callback<()>,
    pub on_toggle_filters: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let on_toggle_filters = {
        let on_toggle_filters = props.on_toggle_filters.clone();
        Callback::from(move |_: MouseEvent| on_toggle_filters.emit(()))
    };

    html! {
        <header class="header">
            <div class="header-content">
                <div class="calendar-header">
                    <button class="calendar-nav-btn" id="prevMonth" onclick={props.on_prev_month.clone()}>{"‹"}</button>
                    <h2 class="calendar-title" id="monthYearDisplay">{&props.title}</h2>
                    <button class="calendar-nav-btn" id="nextMonth" onclick={props.on_next_month.clone()}>{"›"}</button>
                </div>
                <div class="header-actions">
                    <button class="btn btn-secondary" id="refreshBtn" onclick={on_refresh} title="Muat ulang data">
                        {"⟳ Refresh"}
                    </button>
                    <button class="btn btn-secondary" id="filterBtn" onclick={on_toggle_filters} title="Filter">
                        {"Filter"}
                    </button>
                </div>
            </div>
        </header>
    }
}
