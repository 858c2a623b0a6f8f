use crate::dom;
use crate::surface::CanvasSurface;
use field_core::{Dimensions, FrameHandle, FrameScheduler, FrameStats, ParticleField};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` over one shared tick closure.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            tick: Rc::new(RefCell::new(None)),
        }
    }

    /// Drop the tick closure; later requests schedule nothing.
    fn release(&mut self) {
        self.tick.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

pub struct FrameContext {
    pub field: ParticleField<StdRng>,
    pub surface: CanvasSurface,
    pub scheduler: RafScheduler,
    pub pointer: Rc<Cell<Option<Vec2>>>,
    pub stats: FrameStats,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        field: ParticleField<StdRng>,
        surface: CanvasSurface,
        window: web::Window,
        pointer: Rc<Cell<Option<Vec2>>>,
    ) -> Self {
        Self {
            field,
            surface,
            scheduler: RafScheduler::new(window),
            pointer,
            stats: FrameStats::default(),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let outcome =
            self.field
                .on_frame(self.pointer.get(), &mut self.surface, &mut self.scheduler);
        if let Some(r) = self.stats.record(outcome, dt) {
            log::debug!(
                "[frame] drawn={} skipped={} avg={:.2}ms",
                r.frames_drawn,
                r.frames_skipped,
                r.avg_frame_ms
            );
        }
    }

    /// Match the canvas to the viewport and rebuild the population if it changed.
    pub fn resize_to_viewport(&mut self) {
        let Some(dims) = dom::sync_canvas_to_viewport(&self.scheduler.window, self.surface.canvas())
        else {
            return;
        };
        if self.field.resize(dims) {
            log::debug!("[resize] viewport now {}x{}", dims.width, dims.height);
        }
    }

    pub fn teardown(&mut self) {
        self.field.teardown(&mut self.scheduler);
        self.scheduler.release();
    }
}

/// Install the tick closure and start the field against `dims`.
pub fn start_loop(frame_ctx: &Rc<RefCell<FrameContext>>, dims: Dimensions) -> anyhow::Result<()> {
    let weak = Rc::downgrade(frame_ctx);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(ctx) = weak.upgrade() {
            ctx.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>);

    let mut ctx = frame_ctx.borrow_mut();
    *ctx.scheduler.tick.borrow_mut() = Some(closure);
    let FrameContext {
        field, scheduler, ..
    } = &mut *ctx;
    field.start(dims, scheduler)?;
    Ok(())
}

pub fn stop_loop(frame_ctx: &Rc<RefCell<FrameContext>>) {
    frame_ctx.borrow_mut().teardown();
}
