//! Particle Field: owns the per-particle buffers and advances them once per
//! frame.
//!
//! All buffers always share one length. The only way to change it is
//! [`ParticleField::set_particle_count`], which rebuilds every buffer in one
//! call, so index `i` refers to the same particle in each of them.

use crate::config::FieldParams;
use crate::constants::{MAX_PARTICLE_COUNT, NOISE_AXIS_PHASE};
use crate::gesture::GestureSignal;
use crate::shapes::{self, ShapeId};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

pub struct ParticleField<R = StdRng> {
    params: FieldParams,
    // None after an unknown selector: targets sit at the origin
    shape: Option<ShapeId>,
    targets: Vec<Vec3>,
    logical: Vec<Vec3>,
    render: Vec<Vec3>,
    scatter: Vec<Vec3>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(count: usize, shape: ShapeId, params: FieldParams, mut rng: R) -> Self {
        let count = clamp_count(count);
        let targets = shapes::generate(count, shape, &mut rng);
        let scatter = scatter_vectors(count, &mut rng);
        Self {
            params,
            shape: Some(shape),
            // seeded equal to the targets so the first frame does not snap
            logical: targets.clone(),
            render: targets.clone(),
            targets,
            scatter,
            rng,
        }
    }

    /// Regenerate targets for `shape`. Logical positions are left alone so
    /// the morph animates the transition.
    pub fn set_shape(&mut self, shape: ShapeId) {
        shapes::fill(&mut self.targets, shape, &mut self.rng);
        self.shape = Some(shape);
        log::debug!("[field] targets regenerated for {shape} ({} particles)", self.len());
    }

    /// Select a shape by host-side index; unknown indices morph the cloud
    /// onto the origin.
    pub fn set_shape_index(&mut self, index: u32) {
        match ShapeId::from_index(index) {
            Some(shape) => self.set_shape(shape),
            None => {
                log::warn!("[field] unknown shape index {index}; collapsing to origin");
                self.collapse_to_origin();
            }
        }
    }

    pub fn collapse_to_origin(&mut self) {
        self.targets.fill(Vec3::ZERO);
        self.shape = None;
    }

    /// Rebuild every buffer for `count` particles. Counts above
    /// [`MAX_PARTICLE_COUNT`] are clamped.
    pub fn set_particle_count(&mut self, count: usize) {
        let clamped = clamp_count(count);
        if clamped != count {
            log::warn!("[field] particle count {count} clamped to {clamped}");
        }
        if clamped == self.len() {
            return;
        }
        let targets = shapes::generate_or_origin(clamped, self.shape, &mut self.rng);
        self.scatter = scatter_vectors(clamped, &mut self.rng);
        self.logical = targets.clone();
        self.render = targets.clone();
        self.targets = targets;
        log::info!("[field] rebuilt buffers for {clamped} particles");
    }
}

impl<R> ParticleField<R> {
    /// Advance one frame: morph logical positions toward the targets, then
    /// compose render positions from scale, hand offset, scatter and noise.
    pub fn step(&mut self, gesture: GestureSignal, elapsed: f32) {
        let p = &self.params;
        let morph = p.morph_speed;
        let scale = p.scale_for(gesture.openness);
        let offset = p.world_offset(gesture.x, gesture.y);
        let amplitude = p.noise_amplitude(gesture.openness);
        let scatter_amount = gesture.openness * p.scatter_magnitude;
        let base_phase = p.noise_frequency * elapsed;
        let phase_step = p.noise_phase_offset;

        let particles = self
            .logical
            .iter_mut()
            .zip(&self.targets)
            .zip(self.render.iter_mut().zip(&self.scatter));
        for (i, ((logical, target), (render, scatter))) in particles.enumerate() {
            *logical += (*target - *logical) * morph;

            let phase = base_phase + i as f32 * phase_step;
            let noise = Vec3::new(
                (phase + NOISE_AXIS_PHASE[0]).sin(),
                (phase + NOISE_AXIS_PHASE[1]).sin(),
                (phase + NOISE_AXIS_PHASE[2]).sin(),
            ) * amplitude;

            *render = *logical * scale + offset + *scatter * scatter_amount + noise;
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn shape(&self) -> Option<ShapeId> {
        self.shape
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn logical(&self) -> &[Vec3] {
        &self.logical
    }

    /// Read-only view of the positions composed by the last [`step`].
    ///
    /// [`step`]: ParticleField::step
    pub fn render(&self) -> &[Vec3] {
        &self.render
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn set_scatter_magnitude(&mut self, magnitude: f32) {
        self.params.scatter_magnitude = if magnitude.is_finite() {
            magnitude.max(0.0)
        } else {
            0.0
        };
    }
}

#[inline]
fn clamp_count(count: usize) -> usize {
    count.min(MAX_PARTICLE_COUNT)
}

fn scatter_vectors<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect()
}
