use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::gesture::{GestureMailbox, GestureSignal, GestureSmoother};
use crate::shapes::ShapeId;
use crate::state::FieldTransform;
use glam::Vec3;
use rand::prelude::*;

/// The engine boundary hosts talk to.
///
/// Gesture producers post into the mailbox at their own cadence; the host's
/// animation loop calls [`tick`](ParticleEngine::tick) once per displayed
/// frame and then reads [`render_positions`](ParticleEngine::render_positions).
pub struct ParticleEngine<R = StdRng> {
    field: ParticleField<R>,
    smoother: GestureSmoother,
    mailbox: GestureMailbox,
    transform: FieldTransform,
    frames: u64,
}

impl ParticleEngine<StdRng> {
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleEngine<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let smoother = GestureSmoother::new(config.smoothing_factor);
        log::info!(
            "[engine] {} particles, shape={}, smoothing={}, morph={}",
            config.particle_count,
            config.initial_shape,
            smoother.factor(),
            config.field.morph_speed
        );
        let field = ParticleField::new(
            config.particle_count,
            config.initial_shape,
            config.field,
            rng,
        );
        Ok(Self {
            field,
            smoother,
            mailbox: GestureMailbox::default(),
            transform: FieldTransform::default(),
            frames: 0,
        })
    }

    pub fn set_shape(&mut self, shape: ShapeId) {
        self.field.set_shape(shape);
    }

    pub fn set_shape_index(&mut self, index: u32) {
        self.field.set_shape_index(index);
    }

    pub fn set_particle_count(&mut self, count: usize) {
        self.field.set_particle_count(count);
    }

    /// Morph every particle onto the origin, as an unknown shape selector
    /// does. [`shape`](ParticleEngine::shape) reports `None` afterwards.
    pub fn collapse_to_origin(&mut self) {
        self.field.collapse_to_origin();
    }
}

impl<R> ParticleEngine<R> {
    /// Post a new raw reading. Values are clamped, never rejected.
    pub fn set_gesture(&self, openness: f32, x: f32, y: f32) {
        self.mailbox.post(GestureSignal::new(openness, x, y));
    }

    /// Handle for producers living outside the render loop.
    pub fn gesture_mailbox(&self) -> GestureMailbox {
        self.mailbox.clone()
    }

    /// Advance one frame. `elapsed` is seconds since the host started
    /// animating and only drives noise and the cosmetic spin.
    pub fn tick(&mut self, elapsed: f32) {
        let raw = self.mailbox.latest();
        let smoothed = self.smoother.update(raw);
        self.field.step(smoothed, elapsed);
        let params = self.field.params();
        self.transform =
            FieldTransform::new(elapsed, smoothed.x, params.spin_rate, params.tilt_factor);
        self.frames += 1;
    }

    pub fn render_positions(&self) -> &[Vec3] {
        self.field.render()
    }

    /// Render positions as `N * 3` packed scalars, ready for a vertex buffer.
    pub fn render_positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(self.field.render())
    }

    pub fn transform(&self) -> FieldTransform {
        self.transform
    }

    pub fn smoothed_gesture(&self) -> GestureSignal {
        self.smoother.current()
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn shape(&self) -> Option<ShapeId> {
        self.field.shape()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn set_scatter_magnitude(&mut self, magnitude: f32) {
        self.field.set_scatter_magnitude(magnitude);
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }
}
