use glam::Vec2;
use web_sys as web;

/// Map a client-space point into the canvas backing store.
///
/// `rect_origin`/`rect_size` are the canvas' CSS box; `backing` is its pixel
/// size. Returns `None` while the canvas has no laid-out area.
#[inline]
pub fn client_to_surface(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((client - rect_origin) / rect_size * backing)
}

#[inline]
pub fn pointer_surface_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Whole-pixel viewport size; `None` for a collapsed or unreadable viewport.
#[inline]
pub fn viewport_px(inner_width: f64, inner_height: f64) -> Option<(u32, u32)> {
    if !(inner_width.is_finite() && inner_height.is_finite()) {
        return None;
    }
    let w = inner_width.max(0.0).floor() as u32;
    let h = inner_height.max(0.0).floor() as u32;
    (w > 0 && h > 0).then_some((w, h))
}
