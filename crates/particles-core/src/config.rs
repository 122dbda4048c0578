use crate::constants::*;
use crate::error::ConfigError;
use crate::shapes::ShapeId;
use glam::Vec3;

/// Per-frame mapping from smoothed gesture and time to render positions.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub morph_speed: f32,
    pub base_scale: f32,
    pub expansion_range: f32,
    pub span_x: f32,
    pub span_y: f32,
    pub noise_frequency: f32,
    pub noise_phase_offset: f32,
    pub noise_base_amplitude: f32,
    pub noise_open_amplitude: f32,
    pub scatter_magnitude: f32,
    pub spin_rate: f32,
    pub tilt_factor: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            morph_speed: MORPH_SPEED,
            base_scale: BASE_SCALE,
            expansion_range: EXPANSION_RANGE,
            span_x: SPAN_X,
            span_y: SPAN_Y,
            noise_frequency: NOISE_FREQUENCY,
            noise_phase_offset: NOISE_PHASE_OFFSET,
            noise_base_amplitude: NOISE_BASE_AMPLITUDE,
            noise_open_amplitude: NOISE_OPEN_AMPLITUDE,
            scatter_magnitude: SCATTER_MAGNITUDE,
            spin_rate: SPIN_RATE,
            tilt_factor: TILT_FACTOR,
        }
    }
}

impl FieldParams {
    /// Closed hand shrinks the cloud toward a point, open hand expands it.
    #[inline]
    pub fn scale_for(&self, openness: f32) -> f32 {
        self.base_scale + openness * self.expansion_range
    }

    #[inline]
    pub fn world_offset(&self, x: f32, y: f32) -> Vec3 {
        Vec3::new(x * self.span_x, y * self.span_y, 0.0)
    }

    #[inline]
    pub fn noise_amplitude(&self, openness: f32) -> f32 {
        self.noise_base_amplitude + openness * self.noise_open_amplitude
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.morph_speed.is_finite() && self.morph_speed > 0.0 && self.morph_speed <= 1.0) {
            return Err(ConfigError::MorphSpeed(self.morph_speed));
        }
        let non_negative = [
            ("base_scale", self.base_scale),
            ("expansion_range", self.expansion_range),
            ("span_x", self.span_x),
            ("span_y", self.span_y),
            ("noise_frequency", self.noise_frequency),
            ("noise_phase_offset", self.noise_phase_offset),
            ("noise_base_amplitude", self.noise_base_amplitude),
            ("noise_open_amplitude", self.noise_open_amplitude),
            ("scatter_magnitude", self.scatter_magnitude),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeOrNonFinite { name, value });
            }
        }
        // Spin and tilt may be negative (direction), only finiteness matters.
        for (name, value) in [("spin_rate", self.spin_rate), ("tilt_factor", self.tilt_factor)] {
            if !value.is_finite() {
                return Err(ConfigError::NegativeOrNonFinite { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub particle_count: usize,
    pub smoothing_factor: f32,
    pub initial_shape: ShapeId,
    pub field: FieldParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            smoothing_factor: SMOOTHING_FACTOR,
            initial_shape: ShapeId::Heart,
            field: FieldParams::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_shape(mut self, shape: ShapeId) -> Self {
        self.initial_shape = shape;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.smoothing_factor;
        if !(k.is_finite() && k > 0.0 && k <= 1.0) {
            return Err(ConfigError::SmoothingFactor(k));
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::ParticleCount {
                count: self.particle_count,
                max: MAX_PARTICLE_COUNT,
            });
        }
        self.field.validate()
    }
}
