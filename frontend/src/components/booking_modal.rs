use shared::date_math::format_full_date;
use shared::{submit, AppConfig, ReservationDraft, DOCUMENT_CHOICES};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::messaging::open_handoff;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub draft: ReservationDraft,
    pub config: AppConfig,
    pub on_close: Callback<()>,
}

fn input_updater(
    draft: &UseStateHandle<ReservationDraft>,
    apply: fn(&mut ReservationDraft, String),
) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let draft = use_state(|| props.draft.clone());
    let documents_error = use_state(|| Option::<String>::None);

    // A new cell was picked while the modal is mounted
    use_effect_with(props.draft.clone(), {
        let draft = draft.clone();
        let documents_error = documents_error.clone();
        move |new_draft| {
            draft.set(new_draft.clone());
            documents_error.set(None);
            || ()
        }
    });

    let on_return_date_change = input_updater(&draft, |d, v| d.return_date = v);
    let on_pickup_time_change = input_updater(&draft, |d, v| d.pickup_time = v);
    let on_return_time_change = input_updater(&draft, |d, v| d.return_time = v);
    let on_name_change = input_updater(&draft, |d, v| d.name = v);
    let on_phone_change = input_updater(&draft, |d, v| d.phone = v);

    let on_address_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.address = textarea.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let documents_error = documents_error.clone();
        let config = props.config.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match submit(&draft, &config) {
                Ok(handoff) => {
                    match open_handoff(&handoff.link) {
                        Ok(()) => Logger::info_with_component(
                            "booking-modal",
                            &format!("Opened hand-off for {} on {}", draft.unit, draft.date),
                        ),
                        Err(e) => Logger::error_with_component("booking-modal", &e),
                    }
                    on_close.emit(());
                }
                Err(e) => {
                    Logger::warn_with_component("booking-modal", &format!("Rejected reservation: {}", e.code()));
                    documents_error.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="booking-modal-backdrop" onclick={on_backdrop_click}>
            <div class="booking-modal" id="bookingModal" onclick={on_modal_click}>
                <div class="booking-modal-content">
                    <h3 class="booking-modal-title">{"Form Penyewaan"}</h3>

                    <div class="booking-summary">
                        <div><strong>{"Barang: "}</strong><span id="displayUnit">{&draft.unit}</span></div>
                        <div><strong>{"Tanggal: "}</strong><span id="displayDate">{format_full_date(&draft.date)}</span></div>
                    </div>

                    <form class="booking-form" id="bookingForm" onsubmit={on_submit}>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="pickupTime">{"Jam Ambil"}</label>
                                <input id="pickupTime" type="time" required=true
                                    value={draft.pickup_time.clone()} onchange={on_pickup_time_change} />
                            </div>
                            <div class="form-group">
                                <label for="returnDate">{"Tanggal Kembali"}</label>
                                <input id="returnDate" type="date" required=true min={draft.date.clone()}
                                    value={draft.return_date.clone()} onchange={on_return_date_change} />
                            </div>
                            <div class="form-group">
                                <label for="returnTime">{"Jam Kembali"}</label>
                                <input id="returnTime" type="time" required=true
                                    value={draft.return_time.clone()} onchange={on_return_time_change} />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="customerName">{"Nama"}</label>
                            <input id="customerName" type="text" required=true
                                value={draft.name.clone()} onchange={on_name_change} />
                        </div>
                        <div class="form-group">
                            <label for="customerPhone">{"Telepon"}</label>
                            <input id="customerPhone" type="tel" required=true
                                value={draft.phone.clone()} onchange={on_phone_change} />
                        </div>
                        <div class="form-group">
                            <label for="customerAddress">{"Alamat"}</label>
                            <textarea id="customerAddress" required=true
                                value={draft.address.clone()} onchange={on_address_change} />
                        </div>

                        <fieldset class="form-group documents">
                            <legend>{format!("Dokumen Jaminan (minimal {})", props.config.required_documents)}</legend>
                            {for DOCUMENT_CHOICES.into_iter().map(|document| {
                                let checked = draft.documents.iter().any(|d| d == document);
                                let onchange = {
                                    let draft = draft.clone();
                                    let documents_error = documents_error.clone();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*draft).clone();
                                        next.toggle_document(document);
                                        draft.set(next);
                                        documents_error.set(None);
                                    })
                                };
                                html! {
                                    <label class="document-option">
                                        <input type="checkbox" name="documents" value={document} {checked} {onchange} />
                                        {document}
                                    </label>
                                }
                            })}
                            {if let Some(error) = (*documents_error).clone() {
                                html! { <div class="form-message error" id="documentsError">{error}</div> }
                            } else {
                                html! {}
                            }}
                        </fieldset>

                        <div class="booking-modal-buttons">
                            <button type="submit" class="btn btn-primary">{"Kirim via WhatsApp"}</button>
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Batal"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
