use crate::core::constants::{LIGHTBOX_FADE_MS, LIGHTBOX_SHOW_DELAY_MS};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the image lightbox: slide click opens the overlay on that image and
/// pauses the slider animation; the close control, a click on the overlay
/// background, and Escape (see events::keyboard) all close it. Disables
/// itself when the slider or overlay markup is absent.
pub fn wire(document: &web::Document) {
    let has_track = matches!(document.query_selector(".slider-track"), Ok(Some(_)));
    let Some(lightbox) = overlay_element(document) else {
        return;
    };
    if !has_track {
        return;
    }

    if let Ok(slides) = document.query_selector_all(".slide img") {
        for i in 0..slides.length() {
            let Some(img) = slides
                .get(i)
                .and_then(|n| n.dyn_into::<web::HtmlImageElement>().ok())
            else {
                continue;
            };
            let doc = document.clone();
            let img_for_closure = img.clone();
            let closure = Closure::wrap(Box::new(move || {
                open(&doc, &img_for_closure.src());
            }) as Box<dyn FnMut()>);
            _ = img.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    {
        let doc = document.clone();
        dom::add_click_listener(document, ".close-btn", move || close(&doc));
    }

    // Clicking the dimmed background (the overlay itself, not its children)
    // also closes.
    let doc = document.clone();
    let lightbox_for_closure = lightbox.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_background = ev
            .target()
            .map(|t| js_sys::Object::is(t.as_ref(), lightbox_for_closure.as_ref()))
            .unwrap_or(false);
        if on_background {
            close(&doc);
        }
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = lightbox.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn is_open(document: &web::Document) -> bool {
    overlay_element(document)
        .map(|el| el.style().get_property_value("display").ok() == Some("flex".to_string()))
        .unwrap_or(false)
}

fn open(document: &web::Document, src: &str) {
    set_slider_play_state(document, "paused");
    if let Some(img) = document
        .get_element_by_id("lightbox-img")
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    {
        img.set_src(src);
    }
    if let Some(el) = overlay_element(document) {
        _ = el.style().set_property("display", "flex");
        // Flip the class one tick later so the CSS fade actually runs.
        let el2 = el.clone();
        dom::set_timeout(LIGHTBOX_SHOW_DELAY_MS, move || {
            _ = el2.class_list().add_1("show");
        });
        log::info!("[lightbox] open {}", src);
    }
}

pub fn close(document: &web::Document) {
    let Some(el) = overlay_element(document) else {
        return;
    };
    _ = el.class_list().remove_1("show");
    let doc = document.clone();
    dom::set_timeout(LIGHTBOX_FADE_MS, move || {
        _ = el.style().set_property("display", "none");
        set_slider_play_state(&doc, "running");
    });
}

fn overlay_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id("lightbox")?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

fn set_slider_play_state(document: &web::Document, state: &str) {
    if let Some(track) = document
        .query_selector(".slider-track")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = track.style().set_property("animation-play-state", state);
    }
}
