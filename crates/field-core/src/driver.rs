use crate::config::FieldConfig;
use crate::connections::{collect_edges, draw_connections, Edge};
use crate::particle::Particle;
use crate::sim::{step, StepParams};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    SurfaceUnavailable,
    EmptySurface,
}

/// What a single frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn { particles: usize, edges: usize },
    /// The surface could not be drawn this frame; the loop keeps going.
    Skipped(SkipReason),
    /// The field is not running; nothing was touched and nothing rescheduled.
    Inactive,
}

/// One simulate-and-render cycle over a particle population.
#[derive(Debug, Default)]
pub struct FrameDriver {
    params: StepParams,
    edges: Vec<Edge>,
}

impl FrameDriver {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            params: StepParams {
                interactive: config.interactive,
                ..StepParams::default()
            },
            edges: Vec::new(),
        }
    }

    /// Edges drawn by the most recent frame.
    pub fn last_edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn frame<S, R>(
        &mut self,
        particles: &mut [Particle],
        pointer: Option<Vec2>,
        config: &FieldConfig,
        surface: &mut S,
        rng: &mut R,
    ) -> FrameOutcome
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let dims = match surface.dimensions() {
            Some(d) if d.is_empty() => {
                log::trace!("[driver] skip: empty surface {}x{}", d.width, d.height);
                return FrameOutcome::Skipped(SkipReason::EmptySurface);
            }
            Some(d) => d,
            None => {
                log::trace!("[driver] skip: surface unavailable");
                return FrameOutcome::Skipped(SkipReason::SurfaceUnavailable);
            }
        };

        surface.clear(dims);
        for p in particles.iter_mut() {
            step(p, pointer, dims, &self.params, rng);
            surface.fill_circle(p.position, p.radius, config.particle_color, p.draw_alpha());
        }

        collect_edges(particles, pointer, config, &mut self.edges);
        draw_connections(surface, &self.edges, pointer, config);

        FrameOutcome::Drawn {
            particles: particles.len(),
            edges: self.edges.len(),
        }
    }
}
