pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod field;
pub mod gesture;
pub mod shapes;
pub mod state;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use gesture::*;
pub use shapes::{ShapeId, FIREWORKS_RADIUS, SATURN_RING_MAX, SATURN_RING_MIN, SATURN_SPHERE_RADIUS};
pub use state::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
