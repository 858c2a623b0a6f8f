#![cfg(target_arch = "wasm32")]
use field_core::{FieldConfig, ParticleField};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod surface;

use frame::FrameContext;
use surface::CanvasSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web loaded");
    Ok(())
}

/// A running particle background bound to one canvas.
///
/// Dropping the handle (or calling `destroy`) stops the animation and removes
/// every listener it installed.
#[wasm_bindgen]
pub struct ParticleBackground {
    ctx: Option<Rc<RefCell<FrameContext>>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Start a field on `canvas`. `options` is a plain object of overrides,
    /// or `undefined` for the defaults.
    pub fn mount(canvas: web::HtmlCanvasElement, options: JsValue) -> Result<ParticleBackground, JsValue> {
        match mount(canvas, &options) {
            Ok(ctx) => Ok(ParticleBackground { ctx: Some(ctx) }),
            Err(e) => {
                log::error!("mount error: {:?}", e);
                Err(JsValue::from_str(&format!("{e:#}")))
            }
        }
    }

    pub fn destroy(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            frame::stop_loop(&ctx);
        }
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.ctx
            .as_ref()
            .map_or(0, |ctx| ctx.borrow().field.particles().len())
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.ctx
            .as_ref()
            .is_some_and(|ctx| ctx.borrow().field.is_running())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn parse_options(options: &JsValue) -> anyhow::Result<FieldConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(FieldConfig::default());
    }
    let json: String = js_sys::JSON::stringify(options)
        .map_err(|e| anyhow::anyhow!("options are not serialisable: {:?}", e))?
        .into();
    let config: FieldConfig = serde_json::from_str(&json)?;
    config.validate()?;
    Ok(config)
}

fn mount(canvas: web::HtmlCanvasElement, options: &JsValue) -> anyhow::Result<Rc<RefCell<FrameContext>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let config = parse_options(options)?;

    let surface = CanvasSurface::new(canvas.clone())?;
    let dims = dom::sync_canvas_to_viewport(&window, &canvas)
        .ok_or_else(|| anyhow::anyhow!("viewport has no area"))?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let field = ParticleField::new(config, rng);
    let pointer: Rc<Cell<Option<Vec2>>> = Rc::new(Cell::new(None));

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        field,
        surface,
        window.clone(),
        pointer.clone(),
    )));

    {
        let resize = events::wire_viewport_resize(&window, Rc::downgrade(&frame_ctx))?;
        frame_ctx.borrow_mut().field.attach(Box::new(resize));
    }
    {
        let feed = events::wire_pointer_feed(&window, canvas, pointer)?;
        frame_ctx.borrow_mut().field.attach(Box::new(feed));
    }

    frame::start_loop(&frame_ctx, dims)?;
    log::debug!("[mount] listeners attached, loop started");
    Ok(frame_ctx)
}
