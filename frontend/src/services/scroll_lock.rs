//! Freezes the page behind an open modal or filter panel and restores the
//! scroll position afterwards.

use web_sys::HtmlElement;

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Pin the body at the current scroll offset. Returns the offset to restore.
pub fn lock() -> f64 {
    let scroll_y = web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0);

    if let Some(body) = body() {
        let style = body.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{}px", scroll_y));
        let _ = style.set_property("width", "100%");
    }
    scroll_y
}

pub fn unlock(scroll_y: f64) {
    if let Some(body) = body() {
        let style = body.style();
        for property in ["position", "top", "width"] {
            let _ = style.remove_property(property);
        }
    }
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, scroll_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_lock_pins_body_and_unlock_restores() {
        let offset = lock();
        let style = body().unwrap().style();
        assert_eq!(style.get_property_value("position").unwrap(), "fixed");
        assert_eq!(style.get_property_value("width").unwrap(), "100%");

        unlock(offset);
        assert_eq!(style.get_property_value("position").unwrap(), "");
        assert_eq!(style.get_property_value("top").unwrap(), "");
    }
}
