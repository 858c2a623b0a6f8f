use crate::dom::EventSubscription;
use crate::frame::FrameContext;
use crate::input;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep `pointer` at the latest pointer position in canvas pixels.
///
/// Last write wins; positions between two frames are simply overwritten.
pub fn wire_pointer_feed(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    pointer: std::rc::Rc<Cell<Option<Vec2>>>,
) -> anyhow::Result<EventSubscription> {
    EventSubscription::listen(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(pos) = input::pointer_surface_px(ev, &canvas) {
            pointer.set(Some(pos));
        }
    })
}

/// Resize the canvas and rebuild the population whenever the window resizes.
pub fn wire_viewport_resize(
    window: &web::Window,
    frame_ctx: Weak<RefCell<FrameContext>>,
) -> anyhow::Result<EventSubscription> {
    EventSubscription::listen(window, "resize", move |_ev: web::Event| {
        if let Some(ctx) = frame_ctx.upgrade() {
            ctx.borrow_mut().resize_to_viewport();
        }
    })
}
