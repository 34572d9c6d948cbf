use crate::core::anim::{counter_done, counter_value};
use crate::core::constants::{EXP_COUNT_MS, REVEAL_THRESHOLD, SKILL_COUNT_MS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe reveal-marked elements and fire their one-shot animations the
/// first time each enters the viewport: add the `active` class, widen any
/// progress bar to its `data-width`, and run count-ups toward `data-target`.
/// Each element is unobserved after it fires.
pub fn wire(document: &web::Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                _ = target.class_list().add_1("active");
                fill_progress_bar(&target);
                start_skill_counters(&target);
                start_experience_counter(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        return;
    };
    callback.forget();

    if let Ok(nodes) = document.query_selector_all(".reveal, .experience-minimal") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                observer.observe(&el);
            }
        }
    }
}

fn fill_progress_bar(container: &web::Element) {
    let Ok(Some(bar)) = container.query_selector(".progress-bar-fill") else {
        return;
    };
    let Some(width) = bar.get_attribute("data-width") else {
        return;
    };
    if let Ok(bar) = bar.dyn_into::<web::HtmlElement>() {
        _ = bar.style().set_property("width", &width);
    }
}

fn start_skill_counters(container: &web::Element) {
    let Ok(counters) = container.query_selector_all(".skill-perc, .percentage") else {
        return;
    };
    for i in 0..counters.length() {
        let Some(el) = counters.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if let Some(target) = claim_counter(&el) {
            start_count_up(el, target, SKILL_COUNT_MS, "%");
        }
    }
}

fn start_experience_counter(container: &web::Element) {
    let Ok(Some(el)) = container.query_selector(".exp-count") else {
        return;
    };
    if let Some(target) = claim_counter(&el) {
        start_count_up(el, target, EXP_COUNT_MS, "");
    }
}

/// Mark an element as counted and return its target value, or `None` when it
/// already ran (count-ups are strictly one-shot) or carries no usable target.
fn claim_counter(el: &web::Element) -> Option<f64> {
    let cl = el.class_list();
    if cl.contains("counted") {
        return None;
    }
    _ = cl.add_1("counted");
    el.get_attribute("data-target")?.trim().parse::<f64>().ok()
}

/// Animate an element's text from 0 to `target` over `duration_ms`, eased
/// ease-out-quart. The rAF task stops rescheduling itself once the duration
/// has elapsed, after writing the exact target.
fn start_count_up(el: web::Element, target: f64, duration_ms: f64, suffix: &'static str) {
    let start = Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        let value = counter_value(target, elapsed_ms, duration_ms);
        el.set_text_content(Some(&format!("{}{}", value as i64, suffix)));
        if !counter_done(elapsed_ms, duration_ms) {
            if let Some(w) = web::window() {
                _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
