use glam::Vec3;

// Tuning constants shared by the native and web frontends.

// Particle budget
pub const DEFAULT_PARTICLE_COUNT: usize = 6000; // host default
pub const MAX_PARTICLE_COUNT: usize = 100_000; // set_particle_count clamps to this

// Per-frame blend factors (fixed fractions, not dt-scaled)
pub const SMOOTHING_FACTOR: f32 = 0.1; // gesture channels follow raw input
pub const MORPH_SPEED: f32 = 0.08; // logical positions follow shape targets

// Openness -> scale
pub const BASE_SCALE: f32 = 0.2; // closed hand
pub const EXPANSION_RANGE: f32 = 2.0; // added at fully open

// Hand position -> world translation
pub const SPAN_X: f32 = 12.0;
pub const SPAN_Y: f32 = 6.0;

// Breathing noise
pub const NOISE_FREQUENCY: f32 = 2.0; // rad/s
pub const NOISE_PHASE_OFFSET: f32 = 1.0; // per particle index
pub const NOISE_BASE_AMPLITUDE: f32 = 0.05;
pub const NOISE_OPEN_AMPLITUDE: f32 = 0.2; // extra amplitude at fully open
pub const NOISE_AXIS_PHASE: [f32; 3] = [0.0, 2.1, 4.2]; // decorrelates x/y/z

// Outward scatter at full openness, off by default
pub const SCATTER_MAGNITUDE: f32 = 0.0;
pub const SCATTER_PRESET: f32 = 6.0; // value hosts use when enabling it

// Whole-field transform
pub const SPIN_RATE: f32 = 0.1; // yaw radians per second of elapsed time
pub const TILT_FACTOR: f32 = 0.2; // roll radians per unit smoothed x

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 20.0];
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Point sprites
pub const POINT_SIZE: f32 = 0.12; // world units
pub const DEFAULT_COLOR_RGB: [f32; 3] = [1.0, 0.0, 0.4]; // #ff0066

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}
