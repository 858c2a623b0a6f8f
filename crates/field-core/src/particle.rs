use crate::config::FieldConfig;
use crate::constants::{
    BREATHE_BASE, BREATHE_DEPTH, BREATHE_RATE, MAX_AGE, MIN_RADIUS, OPACITY_MAX, OPACITY_MIN,
};
use glam::Vec2;
use rand::Rng;

/// Width and height of the drawing surface in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface with no drawable area, including non-finite sizes.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }
}

/// One simulated point. Plain data; the per-frame rules live in [`crate::sim`].
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Anchor the homing spring pulls toward. Fixed at creation.
    pub origin: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub age: f32,
    pub max_age: f32,
}

impl Particle {
    /// Spawn a particle at a random spot inside `dims`, anchored where it starts.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, dims: Dimensions, config: &FieldConfig) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * dims.width, rng.gen::<f32>() * dims.height);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.speed,
            (rng.gen::<f32>() - 0.5) * config.speed,
        );
        Self {
            position,
            velocity,
            origin: position,
            radius: rng.gen::<f32>() * config.particle_size + MIN_RADIUS,
            opacity: random_opacity(rng),
            // Random phase so the population does not breathe in lockstep.
            age: rng.gen::<f32>() * MAX_AGE,
            max_age: MAX_AGE,
        }
    }

    /// Opacity multiplier in \[0.4, 1.0\] derived from the current age.
    #[inline]
    pub fn breathe(&self) -> f32 {
        (self.age * BREATHE_RATE).sin() * BREATHE_DEPTH + BREATHE_BASE
    }

    /// Alpha the particle is drawn with this frame.
    #[inline]
    pub fn draw_alpha(&self) -> f32 {
        self.opacity * self.breathe()
    }
}

#[inline]
pub fn random_opacity<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    OPACITY_MIN + rng.gen::<f32>() * (OPACITY_MAX - OPACITY_MIN)
}

pub fn spawn_population<R: Rng + ?Sized>(
    rng: &mut R,
    dims: Dimensions,
    config: &FieldConfig,
) -> Vec<Particle> {
    (0..config.particle_count)
        .map(|_| Particle::spawn(rng, dims, config))
        .collect()
}
