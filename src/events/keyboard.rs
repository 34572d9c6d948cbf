use crate::dom;
use crate::lightbox;
use web_sys as web;

/// Global keydown handling: Escape dismisses the lightbox when it is open.
pub fn wire_global_keydown(document: &web::Document) {
    let doc = document.clone();
    dom::add_window_listener("keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" && lightbox::is_open(&doc) {
            lightbox::close(&doc);
        }
    });
}
