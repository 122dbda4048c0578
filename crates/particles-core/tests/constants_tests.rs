// Host-side tests for tuning constants and their relationships.

use particles_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_factors_are_fractions() {
    assert!(SMOOTHING_FACTOR > 0.0 && SMOOTHING_FACTOR <= 1.0);
    assert!(MORPH_SPEED > 0.0 && MORPH_SPEED <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mapping_constants_are_positive() {
    assert!(BASE_SCALE > 0.0);
    assert!(EXPANSION_RANGE > 0.0);
    assert!(SPAN_X > 0.0 && SPAN_Y > 0.0);
    assert!(NOISE_BASE_AMPLITUDE > 0.0);
    assert!(NOISE_OPEN_AMPLITUDE >= 0.0);
    assert!(POINT_SIZE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // noise must stay small next to the smallest cloud
    assert!(NOISE_BASE_AMPLITUDE + NOISE_OPEN_AMPLITUDE < BASE_SCALE + EXPANSION_RANGE);
    // wider horizontally, like a landscape camera frame
    assert!(SPAN_X > SPAN_Y);
    assert!(DEFAULT_PARTICLE_COUNT <= MAX_PARTICLE_COUNT);
    assert!(CAMERA_ZFAR > CAMERA_EYE[2] + FIREWORKS_RADIUS * (BASE_SCALE + EXPANSION_RANGE));
    assert!(SCATTER_MAGNITUDE == 0.0, "scatter is opt-in");
}

#[test]
fn default_camera_frames_origin() {
    let camera = Camera::with_aspect(16.0 / 9.0);
    let clip = camera.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn identity_transform_leaves_points_alone() {
    let t = FieldTransform::default();
    let p = glam::Vec3::new(1.0, 2.0, 3.0);
    assert!(t.model_matrix().transform_point3(p).distance(p) < 1e-6);

    let spun = FieldTransform::new(std::f32::consts::PI * 10.0, 0.0, SPIN_RATE, TILT_FACTOR);
    // 10 pi seconds at 0.1 rad/s is a half turn about +Y
    let q = spun.model_matrix().transform_point3(glam::Vec3::X);
    assert!(q.distance(-glam::Vec3::X) < 1e-4, "{q:?}");
}

#[test]
fn frame_clock_advances() {
    let mut clock = FrameClock::new();
    let a = clock.frame();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let b = clock.frame();
    assert!(b.elapsed >= a.elapsed);
    assert!(b.dt > 0.0);
    assert!(clock.fps() >= 0.0);
}
