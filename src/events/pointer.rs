use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the last known cursor position. The cell stays `None` until the
/// first move, which is what lets particle repulsion skip cleanly before the
/// user has touched the page.
pub fn wire_pointermove(pointer: Rc<RefCell<Option<Vec2>>>) {
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        *pointer.borrow_mut() = Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    });
}
