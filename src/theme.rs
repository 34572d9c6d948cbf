use crate::core::constants::ICON_SWAP_DELAY_MS;
use crate::core::{ParticleField, Theme, Viewport};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STORAGE_KEY: &str = "theme";
const BODY_CLASS: &str = "dark-mode";

/// Read the persisted theme choice; a missing or unrecognized value means
/// light.
pub fn load_initial() -> Theme {
    Theme::from_storage(dom::local_storage_get(STORAGE_KEY).as_deref())
}

/// Reflect a theme on the page: body class, toggle switch position, icon.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        if theme.is_dark() {
            _ = cl.add_1(BODY_CLASS);
        } else {
            _ = cl.remove_1(BODY_CLASS);
        }
    }
    if let Some(input) = toggle_input(document) {
        input.set_checked(theme.is_dark());
    }
    update_icon(document, theme);
}

/// Wire the toggle switch: on change, flip and persist the theme, restyle the
/// page, and reseed the particle field so new particles pick up the new
/// palette (existing particles are never recolored in place).
pub fn wire_toggle(
    document: &web::Document,
    theme: Rc<Cell<Theme>>,
    field: Rc<RefCell<ParticleField>>,
    viewport: Rc<Cell<Viewport>>,
) {
    let Some(input) = toggle_input(document) else {
        return;
    };
    let doc = document.clone();
    let input_for_closure = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let next = if input_for_closure.checked() {
            Theme::Dark
        } else {
            Theme::Light
        };
        theme.set(next);
        dom::local_storage_set(STORAGE_KEY, next.storage_value());
        apply(&doc, next);
        field.borrow_mut().reinitialize(viewport.get(), next);
        log::info!("[theme] switched to {}", next.storage_value());
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn toggle_input(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .query_selector(".theme-switch input[type=\"checkbox\"]")
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlInputElement>()
        .ok()
}

/// Swap the sun/moon glyph with a short fade-and-rotate transition.
fn update_icon(document: &web::Document, theme: Theme) {
    let Some(icon) = document
        .query_selector(".theme-icon")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    let style = icon.style();
    _ = style.set_property("opacity", "0");
    _ = style.set_property("transform", "rotate(180deg) scale(0.5)");

    dom::set_timeout(ICON_SWAP_DELAY_MS, move || {
        let cl = icon.class_list();
        if theme.is_dark() {
            _ = cl.remove_1("fa-sun");
            _ = cl.add_1("fa-moon");
        } else {
            _ = cl.remove_1("fa-moon");
            _ = cl.add_1("fa-sun");
        }
        let style = icon.style();
        _ = style.set_property("opacity", "1");
        _ = style.set_property("transform", "rotate(0deg) scale(1)");
    });
}
