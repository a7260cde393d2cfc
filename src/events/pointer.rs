use crate::core::pointer_to_ndc;
use crate::dom::EventListener;
use crate::frame::FrameContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer tilt is scoped to the helix container. Leaving it eases the helix
/// back to neutral.
pub fn wire_pointer(container: &web::Element, ctx: &Rc<RefCell<FrameContext>>) -> Vec<EventListener> {
    let el = container.clone();
    let ctx_move = ctx.clone();
    let on_move = EventListener::new(container, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let pointer = pointer_to_ndc(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        );
        if let Some(p) = pointer {
            ctx_move.borrow_mut().driver.set_pointer(p);
        }
    });

    let ctx_leave = ctx.clone();
    let on_leave = EventListener::new(container, "pointerleave", move |_| {
        ctx_leave.borrow_mut().driver.clear_pointer();
    });

    vec![on_move, on_leave]
}
