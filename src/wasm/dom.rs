//! Lookup and event-wiring helpers shared by the page modules.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, MouseEvent, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// First element matching `selector`, if any.
pub fn select(selector: &str) -> Result<Option<Element>, JsValue> {
    document()?.query_selector(selector)
}

/// All elements matching `selector`; non-element nodes are skipped.
pub fn select_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document()?.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

/// Attach a click handler for the lifetime of the page.
pub fn on_click<T>(target: &T, f: impl FnMut() + 'static) -> Result<(), JsValue>
where
    T: AsRef<EventTarget>,
{
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    target
        .as_ref()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`on_click`], for handlers that need the mouse event itself.
pub fn on_click_event<T>(target: &T, f: impl FnMut(MouseEvent) + 'static) -> Result<(), JsValue>
where
    T: AsRef<EventTarget>,
{
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(MouseEvent)>);
    target
        .as_ref()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// One-shot timer; the callback frees itself after firing.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
}
