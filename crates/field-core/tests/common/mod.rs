// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]

use field_core::{Dimensions, FrameHandle, FrameScheduler, Particle, Rgba, Subscription, Surface};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Dimensions),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        alpha: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        alpha: f32,
        width: f32,
    },
    Glow {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

/// Surface that records every primitive instead of rasterizing it.
#[derive(Default)]
pub struct RecordingSurface {
    pub dims: Option<Dimensions>,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            dims: Some(Dimensions::new(width, height)),
            calls: Vec::new(),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> Option<Dimensions> {
        self.dims
    }

    fn clear(&mut self, dims: Dimensions) {
        self.calls.push(DrawCall::Clear(dims));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, alpha: f32, width: f32) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            alpha,
            width,
        });
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Glow {
            center,
            radius,
            color,
        });
    }
}

/// Scheduler whose frames only "fire" when a test says so.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: i32,
    pub pending: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
    pub requests: u32,
}

impl ManualScheduler {
    /// Pop the oldest pending frame, as the host would when it repaints.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        (!self.pending.is_empty()).then(|| self.pending.remove(0))
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.requests += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

/// Subscription that counts how often it was released.
pub struct CountingSubscription(pub Rc<Cell<u32>>);

impl Subscription for CountingSubscription {
    fn release(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

pub fn particle_at(position: Vec2, origin: Vec2, velocity: Vec2) -> Particle {
    Particle {
        position,
        velocity,
        origin,
        radius: 1.0,
        opacity: 1.0,
        age: 0.0,
        max_age: 100.0,
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
