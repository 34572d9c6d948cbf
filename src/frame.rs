use crate::core::constants::{LINK_DISTANCE, LINK_LINE_WIDTH};
use crate::core::{link_color, ParticleField, Theme, Viewport};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared context read by the render loop each frame. The field handle is
/// also held by the theme controller and the resize handler, which reseed it
/// out from under the loop.
pub struct FrameContext {
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<ParticleField>>,
    pub theme: Rc<Cell<Theme>>,
    pub viewport: Rc<Cell<Viewport>>,
    pub pointer: Rc<RefCell<Option<Vec2>>>,
}

impl FrameContext {
    /// One frame tick: clear, advance and draw every particle, then stroke
    /// the short-range connecting lines.
    pub fn frame(&mut self) {
        let viewport = self.viewport.get();
        let theme = self.theme.get();
        let pointer = *self.pointer.borrow();

        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

        let mut field = self.field.borrow_mut();
        field.advance_all(viewport, pointer);

        for p in &field.particles {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.radius as f64,
                0.0,
                PI * 2.0,
            );
            self.ctx.set_fill_style_str(&p.color.css());
            self.ctx.fill();
        }

        // Pairwise pass is O(n^2); fine at <=120 particles, anything beyond a
        // few hundred would need spatial partitioning. The inner range starts
        // at i, so each particle also pairs with itself; that zero-length
        // segment never produces a visible stroke.
        self.ctx.set_line_width(LINK_LINE_WIDTH);
        let particles = &field.particles;
        for i in 0..particles.len() {
            for j in i..particles.len() {
                let dist = particles[i].pos.distance(particles[j].pos);
                if dist < LINK_DISTANCE {
                    self.ctx.begin_path();
                    self.ctx.set_stroke_style_str(&link_color(theme, dist).css());
                    self.ctx
                        .move_to(particles[i].pos.x as f64, particles[i].pos.y as f64);
                    self.ctx
                        .line_to(particles[j].pos.x as f64, particles[j].pos.y as f64);
                    self.ctx.stroke();
                }
            }
        }
    }
}

/// Drive the frame callback at display refresh cadence, rescheduling itself
/// at the end of every tick. Runs for the life of the page; there is no
/// cancellation handle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
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
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
