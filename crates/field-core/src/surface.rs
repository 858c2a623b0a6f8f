use crate::color::Rgba;
use crate::particle::Dimensions;
use glam::Vec2;

/// Immediate-mode 2D raster target the field draws into once per frame.
///
/// Drawing calls never fail from the caller's point of view; an implementation
/// that hits a host error drops that primitive and carries on.
pub trait Surface {
    /// Current drawable size, or `None` while the surface is not available.
    fn dimensions(&self) -> Option<Dimensions>;

    fn clear(&mut self, dims: Dimensions);

    /// Filled circle in `color`, its alpha scaled by `alpha`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, alpha: f32, width: f32);

    /// Radial gradient disc: `color` at the center, fully transparent at `radius`.
    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, color: Rgba);
}
