//! Browser helpers for the survey generator.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen, in milliseconds.
const TOAST_MILLIS: u32 = 3000;

/// Shows a short notification at the bottom of the page.
///
/// Used to confirm that a generated survey was copied into the form. The toast
/// removes itself after [`TOAST_MILLIS`].
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Seed for option ids of one mapping pass, taken from the wall clock.
pub fn option_id_seed() -> u64 {
    js_sys::Date::now() as u64
}
