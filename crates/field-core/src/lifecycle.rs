//! Population ownership and the start/resize/teardown state machine.
//!
//! A [`ParticleField`] is created per view instance. The host drives it with
//! three callbacks: [`ParticleField::start`] once the viewport size is known,
//! [`ParticleField::resize`] on every dimension change and
//! [`ParticleField::on_frame`] from its frame scheduler. After
//! [`ParticleField::teardown`] no frame body runs again, even if the host
//! fires a callback it failed to cancel.

use crate::config::FieldConfig;
use crate::driver::{FrameDriver, FrameOutcome};
use crate::error::{FieldError, Result};
use crate::particle::{spawn_population, Dimensions, Particle};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Opaque id of a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// "Run the frame callback once before the next repaint", plus cancellation.
pub trait FrameScheduler {
    /// Schedule the next frame. `None` when the host could not schedule one.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A host-side registration (event listener, observer) released on teardown.
pub trait Subscription {
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldState {
    Uninitialized,
    Ready { dims: Dimensions },
    TornDown,
}

pub struct ParticleField<R: Rng> {
    config: FieldConfig,
    state: FieldState,
    particles: Vec<Particle>,
    driver: FrameDriver,
    rng: R,
    pending: Option<FrameHandle>,
    subscriptions: Vec<Box<dyn Subscription>>,
    generation: u64,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: FieldConfig, rng: R) -> Self {
        let driver = FrameDriver::new(&config);
        Self {
            config,
            state: FieldState::Uninitialized,
            particles: Vec::new(),
            driver,
            rng,
            pending: None,
            subscriptions: Vec::new(),
            generation: 0,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    /// Incremented every time the population is rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, FieldState::Ready { .. })
    }

    /// Build the first population and request the first frame.
    pub fn start<F: FrameScheduler + ?Sized>(
        &mut self,
        dims: Dimensions,
        scheduler: &mut F,
    ) -> Result<()> {
        match self.state {
            FieldState::TornDown => Err(FieldError::TornDown),
            FieldState::Ready { .. } => {
                self.resize(dims);
                Ok(())
            }
            FieldState::Uninitialized => {
                self.rebuild(dims);
                self.state = FieldState::Ready { dims };
                self.pending = scheduler.request_frame();
                log::info!(
                    "[field] started: {} particles on {}x{}",
                    self.particles.len(),
                    dims.width,
                    dims.height
                );
                Ok(())
            }
        }
    }

    /// Replace the whole population when the viewport size changes.
    ///
    /// Returns whether a rebuild happened. Same-size notifications and calls
    /// outside the running state are ignored.
    pub fn resize(&mut self, dims: Dimensions) -> bool {
        match self.state {
            FieldState::Ready { dims: current } if current != dims => {
                self.rebuild(dims);
                self.state = FieldState::Ready { dims };
                true
            }
            _ => false,
        }
    }

    /// Frame callback body. Reschedules itself while running.
    pub fn on_frame<S, F>(
        &mut self,
        pointer: Option<Vec2>,
        surface: &mut S,
        scheduler: &mut F,
    ) -> FrameOutcome
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if !self.is_running() {
            return FrameOutcome::Inactive;
        }
        self.pending = None;
        let outcome = self.driver.frame(
            &mut self.particles,
            pointer,
            &self.config,
            surface,
            &mut self.rng,
        );
        self.pending = scheduler.request_frame();
        outcome
    }

    pub fn attach(&mut self, mut subscription: Box<dyn Subscription>) {
        if self.state == FieldState::TornDown {
            subscription.release();
            return;
        }
        self.subscriptions.push(subscription);
    }

    /// Cancel the pending frame, release host subscriptions, drop the population.
    pub fn teardown<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if self.state == FieldState::TornDown {
            return;
        }
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        for mut sub in self.subscriptions.drain(..) {
            sub.release();
        }
        self.particles = Vec::new();
        self.state = FieldState::TornDown;
        log::info!("[field] torn down");
    }

    fn rebuild(&mut self, dims: Dimensions) {
        self.particles = spawn_population(&mut self.rng, dims, &self.config);
        self.generation += 1;
        log::debug!(
            "[field] population #{} rebuilt: {} particles for {}x{}",
            self.generation,
            self.particles.len(),
            dims.width,
            dims.height
        );
    }
}
