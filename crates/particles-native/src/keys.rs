use particles_core::ShapeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Shape(ShapeId),
    NextShape,
    NextColor,
    MoreParticles,
    FewerParticles,
    ToggleFullscreen,
    ToggleScatter,
    ToggleBreathing,
    Quit,
}

#[inline]
pub fn shape_for_digit(key: &str) -> Option<ShapeId> {
    match key {
        "1" => Some(ShapeId::Heart),
        "2" => Some(ShapeId::Flower),
        "3" => Some(ShapeId::Saturn),
        "4" => Some(ShapeId::Mandala),
        "5" => Some(ShapeId::Fireworks),
        _ => None,
    }
}

/// Map a printable key (as winit reports it) to an action.
pub fn action_for_key(key: &str) -> Option<Action> {
    if let Some(shape) = shape_for_digit(key) {
        return Some(Action::Shape(shape));
    }
    match key {
        "c" | "C" => Some(Action::NextColor),
        "+" | "=" => Some(Action::MoreParticles),
        "-" | "_" => Some(Action::FewerParticles),
        "f" | "F" => Some(Action::ToggleFullscreen),
        "s" | "S" => Some(Action::ToggleScatter),
        "b" | "B" => Some(Action::ToggleBreathing),
        "q" | "Q" => Some(Action::Quit),
        _ => None,
    }
}

pub const MIN_PARTICLES: usize = 500;

/// Double or halve the particle count, staying within `[MIN_PARTICLES, max]`.
#[inline]
pub fn step_particle_count(current: usize, more: bool, max: usize) -> usize {
    let next = if more {
        current.saturating_mul(2)
    } else {
        current / 2
    };
    next.clamp(MIN_PARTICLES.min(max), max)
}
