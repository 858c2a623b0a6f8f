//! Per-frame particle physics.
//!
//! The integration is a fixed unit step per frame: forces are raw velocity
//! increments tuned for a display-rate cadence, not scaled by elapsed time.

use crate::constants::{
    AGE_STEP, BOUNCE_DAMPING, FRICTION, INTERACTION_RADIUS, INTERACTION_STRENGTH, RETURN_FORCE,
};
use crate::particle::{random_opacity, Dimensions, Particle};
use glam::Vec2;
use rand::Rng;

/// Force parameters for [`step`]. Defaults match the tuned visual behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub interactive: bool,
    pub interaction_radius: f32,
    pub interaction_strength: f32,
    pub return_force: f32,
    pub friction: f32,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            interactive: true,
            interaction_radius: INTERACTION_RADIUS,
            interaction_strength: INTERACTION_STRENGTH,
            return_force: RETURN_FORCE,
            friction: FRICTION,
        }
    }
}

/// Advance one particle by one frame.
///
/// Order matters: repulsion, homing, friction, integration, wall bounce, aging.
/// The RNG is only drawn from when the life cycle wraps.
pub fn step<R: Rng + ?Sized>(
    p: &mut Particle,
    pointer: Option<Vec2>,
    bounds: Dimensions,
    params: &StepParams,
    rng: &mut R,
) {
    if params.interactive {
        if let Some(pointer) = pointer {
            p.velocity -= repulsion(p.position, pointer, params);
        }
    }

    p.velocity += (p.origin - p.position) * params.return_force;
    p.velocity *= params.friction;
    p.position += p.velocity;

    bounce_axis(&mut p.position.x, &mut p.velocity.x, bounds.width);
    bounce_axis(&mut p.position.y, &mut p.velocity.y, bounds.height);

    p.age += AGE_STEP;
    if p.age >= p.max_age {
        p.age = 0.0;
        p.opacity = random_opacity(rng);
    }
}

/// Velocity change pushing `position` away from `pointer`.
///
/// Zero outside the interaction radius. Coincident points resolve through
/// `atan2(0, 0) == 0` rather than dividing by the distance.
pub fn repulsion(position: Vec2, pointer: Vec2, params: &StepParams) -> Vec2 {
    let delta = pointer - position;
    let distance = delta.length();
    if distance >= params.interaction_radius {
        return Vec2::ZERO;
    }
    let force = (params.interaction_radius - distance) / params.interaction_radius;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin()) * force * params.interaction_strength
}

#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    let extent = extent.max(0.0);
    if *pos < 0.0 || *pos > extent {
        *vel = -*vel * BOUNCE_DAMPING;
        *pos = pos.clamp(0.0, extent);
    }
}
