//! Distance-thresholded connection lines and the pointer glow.
//!
//! Edges are collected first and drawn second so the selection rules can be
//! checked without a surface. The pair scan is exhaustive; populations are
//! tens of particles, so O(n^2) per frame is fine.

use crate::config::FieldConfig;
use crate::constants::{
    GLOW_RADIUS, LINE_ALPHA_MAX, LINE_WIDTH, POINTER_LINE_ALPHA_MAX, POINTER_LINE_WIDTH,
};
use crate::particle::Particle;
use crate::surface::Surface;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Particle,
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
    pub kind: EdgeKind,
}

/// Linear fade: `max_alpha` at zero distance, 0 at `threshold`, `None` at or beyond it.
#[inline]
pub fn fade_alpha(distance: f32, threshold: f32, max_alpha: f32) -> Option<f32> {
    (distance < threshold).then(|| (1.0 - distance / threshold) * max_alpha)
}

/// Fill `out` with every visible edge for this frame, particle pairs first.
pub fn collect_edges(
    particles: &[Particle],
    pointer: Option<Vec2>,
    config: &FieldConfig,
    out: &mut Vec<Edge>,
) {
    out.clear();
    let threshold = config.connection_distance;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.position.distance(b.position);
            if let Some(alpha) = fade_alpha(distance, threshold, LINE_ALPHA_MAX) {
                out.push(Edge {
                    from: a.position,
                    to: b.position,
                    alpha,
                    kind: EdgeKind::Particle,
                });
            }
        }
    }

    let Some(pointer) = active_pointer(pointer, config) else {
        return;
    };
    let reach = config.pointer_reach();
    for p in particles {
        let distance = p.position.distance(pointer);
        if let Some(alpha) = fade_alpha(distance, reach, POINTER_LINE_ALPHA_MAX) {
            out.push(Edge {
                from: p.position,
                to: pointer,
                alpha,
                kind: EdgeKind::Pointer,
            });
        }
    }
}

/// Draw collected edges, then the pointer glow on top of them.
pub fn draw_connections<S: Surface + ?Sized>(
    surface: &mut S,
    edges: &[Edge],
    pointer: Option<Vec2>,
    config: &FieldConfig,
) {
    for edge in edges {
        let (color, width) = match edge.kind {
            EdgeKind::Particle => (config.line_color, LINE_WIDTH),
            EdgeKind::Pointer => (config.pointer_line_color, POINTER_LINE_WIDTH),
        };
        surface.stroke_line(edge.from, edge.to, color, edge.alpha, width);
    }
    if let Some(pointer) = active_pointer(pointer, config) {
        // Opaque at the center; the surface fades it out toward the edge.
        surface.fill_radial_glow(pointer, GLOW_RADIUS, config.glow_color.with_alpha(1.0));
    }
}

#[inline]
fn active_pointer(pointer: Option<Vec2>, config: &FieldConfig) -> Option<Vec2> {
    pointer.filter(|_| config.interactive)
}
