use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a click handler to an element found by CSS selector; silently does
/// nothing when the element is absent.
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a listener to the window for the given event type.
pub fn add_window_listener<E>(event_type: &str, mut handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Run a one-shot callback after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// Size the canvas backing store to the full window and report the result.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let Some(window) = web::window() else {
        return Viewport::default();
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);
    Viewport::new(width, height)
}

pub fn local_storage_get(key: &str) -> Option<String> {
    web::window()?.local_storage().ok()??.get_item(key).ok()?
}

pub fn local_storage_set(key: &str, value: &str) {
    if let Some(Ok(Some(storage))) = web::window().map(|w| w.local_storage()) {
        let _ = storage.set_item(key, value);
    }
}
