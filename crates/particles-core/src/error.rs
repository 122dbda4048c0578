use thiserror::Error;

/// Rejected engine configuration.
///
/// Only constants supplied by the host at construction time can fail.
/// Per-frame inputs (gestures, counts, shape selectors) are clamped or fall
/// back instead of erroring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("smoothing factor must be finite and in (0, 1], got {0}")]
    SmoothingFactor(f32),
    #[error("morph speed must be finite and in (0, 1], got {0}")]
    MorphSpeed(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeOrNonFinite { name: &'static str, value: f32 },
    #[error("particle count {count} exceeds the maximum of {max}")]
    ParticleCount { count: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape name {0:?}")]
pub struct ParseShapeError(pub String);
