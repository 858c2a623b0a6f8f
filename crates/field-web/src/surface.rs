use field_core::{Dimensions, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D context as the field's drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn disc(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
    }
}

impl Surface for CanvasSurface {
    fn dimensions(&self) -> Option<Dimensions> {
        // Detached canvases keep their size but nothing they draw is visible.
        if !self.canvas.is_connected() {
            return None;
        }
        Some(Dimensions::new(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        ))
    }

    fn clear(&mut self, dims: Dimensions) {
        self.ctx
            .clear_rect(0.0, 0.0, dims.width as f64, dims.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32) {
        if self.disc(center, radius) {
            self.ctx.set_fill_style_str(&color.to_css(alpha));
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, alpha: f32, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css(alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius as f64) {
            Ok(g) => g,
            Err(e) => {
                log::trace!("[surface] radial gradient error: {:?}", e);
                return;
            }
        };
        let _ = gradient.add_color_stop(0.0, &color.to_css(1.0));
        let _ = gradient.add_color_stop(1.0, &color.to_css(0.0));
        if self.disc(center, radius) {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }
}
