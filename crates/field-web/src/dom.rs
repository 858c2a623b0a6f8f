use crate::input;
use field_core::{Dimensions, Subscription};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Size the canvas backing store to the viewport and return the new size.
pub fn sync_canvas_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> Option<Dimensions> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    let (w_px, h_px) = input::viewport_px(w, h)?;
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    Some(Dimensions::new(w_px as f32, h_px as f32))
}

/// An event listener that is removed again when released.
pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure =
            Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {event} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }
}

impl Subscription for EventSubscription {
    fn release(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
            log::debug!("[dom] released {} listener", self.event);
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
