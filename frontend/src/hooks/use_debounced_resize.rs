use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::services::date_utils::container_width;

/// Calls `on_resize` with the new container width once the window has
/// stopped resizing for `delay_ms`.
#[hook]
pub fn use_debounced_resize(delay_ms: u32, on_resize: Callback<u32>) {
    use_effect_with(delay_ms, move |delay_ms| {
        let delay_ms = *delay_ms;
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "resize", move |_| {
                let on_resize = on_resize.clone();
                let timeout = Timeout::new(delay_ms, move || on_resize.emit(container_width()));
                // Dropping the previous timeout cancels it
                pending.borrow_mut().replace(timeout);
            })
        });

        move || drop(listener)
    });
}
