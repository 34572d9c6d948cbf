#![cfg(target_arch = "wasm32")]
use crate::core::{ParticleField, Theme, Viewport};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod lightbox;
mod reveal;
mod scroll;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Shared page state. Each handle is cloned into the closures that need
    // it; all mutation happens on the single event-dispatch thread.
    let theme = Rc::new(Cell::new(theme::load_initial()));
    let viewport = Rc::new(Cell::new(Viewport::default()));
    let pointer: Rc<RefCell<Option<Vec2>>> = Rc::new(RefCell::new(None));
    let field = Rc::new(RefCell::new(ParticleField::new(js_sys::Date::now() as u64)));

    theme::apply(&document, theme.get());
    theme::wire_toggle(&document, theme.clone(), field.clone(), viewport.clone());

    // Each remaining controller presence-tests its own DOM elements and
    // silently stands down when they are missing.
    wire_particle_background(&document, &theme, &viewport, &pointer, &field);
    reveal::wire(&document);
    scroll::wire(&document);
    lightbox::wire(&document);
    events::wire_global_keydown(&document);

    log::info!("folio-web wired");
    Ok(())
}

/// Stand up the canvas particle background: size the canvas to the window,
/// seed the field, track resizes and pointer motion, and start the render
/// loop. Skipped entirely when the page has no background canvas.
fn wire_particle_background(
    document: &web::Document,
    theme: &Rc<Cell<Theme>>,
    viewport: &Rc<Cell<Viewport>>,
    pointer: &Rc<RefCell<Option<Vec2>>>,
    field: &Rc<RefCell<ParticleField>>,
) {
    let Some(canvas) = document
        .get_element_by_id("bg-canvas")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return;
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    viewport.set(dom::sync_canvas_to_viewport(&canvas));
    field
        .borrow_mut()
        .reinitialize(viewport.get(), theme.get());
    log::info!("[particles] seeded {} particles", field.borrow().len());

    wire_canvas_resize(&canvas, theme.clone(), viewport.clone(), field.clone());
    events::wire_pointermove(pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ctx,
        field: field.clone(),
        theme: theme.clone(),
        viewport: viewport.clone(),
        pointer: pointer.clone(),
    }));
    frame::start_loop(frame_ctx);
}

/// Keep the canvas backing size in sync with the window and reseed the field
/// so the particle count tracks the new width.
fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    theme: Rc<Cell<Theme>>,
    viewport: Rc<Cell<Viewport>>,
    field: Rc<RefCell<ParticleField>>,
) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        viewport.set(dom::sync_canvas_to_viewport(&canvas_resize));
        field.borrow_mut().reinitialize(viewport.get(), theme.get());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
