use crate::core::anim::hero_shift;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    wire_smooth_anchors(document);
    wire_hero_parallax(document);
}

/// Intercept fragment-anchor clicks and glide to the target section instead
/// of jumping.
fn wire_smooth_anchors(document: &web::Document) {
    let Ok(anchors) = document.query_selector_all("a[href^=\"#\"]") else {
        return;
    };
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Slide the split hero panels apart and fade them as the page scrolls away
/// from the top. Inert once the hero has scrolled out of range.
fn wire_hero_parallax(document: &web::Document) {
    let hero_left = hero_panel(document, ".hero-left");
    let hero_right = hero_panel(document, ".hero-right");
    if hero_left.is_none() && hero_right.is_none() {
        return;
    }

    dom::add_window_listener("scroll", move |_: web::Event| {
        let scroll_y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let Some((shift, opacity)) = hero_shift(scroll_y) else {
            return;
        };
        if let Some(left) = &hero_left {
            let style = left.style();
            _ = style.set_property("transform", &format!("translateX(-{shift}px)"));
            _ = style.set_property("opacity", &opacity.to_string());
        }
        if let Some(right) = &hero_right {
            let style = right.style();
            _ = style.set_property("transform", &format!("translateX({shift}px)"));
            _ = style.set_property("opacity", &opacity.to_string());
        }
    });
}

fn hero_panel(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlElement>()
        .ok()
}
