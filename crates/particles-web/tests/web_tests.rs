// Host-side checks of the browser wrapper. Only paths that never touch a
// JS value are exercised here.

use particles_core::MAX_PARTICLE_COUNT;
use particles_web::WebParticles;

#[test]
fn seeded_wrapper_starts_on_heart_with_requested_count() {
    let Ok(particles) = WebParticles::new(Some(1200), Some(7)) else {
        panic!("valid config rejected");
    };
    assert_eq!(particles.particle_count(), 1200);
    assert_eq!(particles.shape_name().as_deref(), Some("Heart"));
}

#[test]
fn oversized_initial_count_is_clamped_not_rejected() {
    let Ok(particles) = WebParticles::new(Some(MAX_PARTICLE_COUNT as u32 + 1), Some(1)) else {
        panic!("oversized count rejected instead of clamped");
    };
    assert_eq!(particles.particle_count() as usize, MAX_PARTICLE_COUNT);
}

#[test]
fn shape_names_parse_case_insensitively() {
    let Ok(mut particles) = WebParticles::new(Some(500), Some(1)) else {
        panic!("valid config rejected");
    };
    particles.set_shape("saturn");
    assert_eq!(particles.shape_name().as_deref(), Some("Saturn"));
    particles.set_shape_index(4);
    assert_eq!(particles.shape_name().as_deref(), Some("Fireworks"));
}

#[test]
fn unknown_shape_name_falls_back_to_origin() {
    let Ok(mut particles) = WebParticles::new(Some(500), Some(1)) else {
        panic!("valid config rejected");
    };
    particles.set_shape("Dodecahedron");
    assert_eq!(particles.shape_name(), None);
    assert_eq!(particles.particle_count(), 500);
}

#[test]
fn ticks_follow_posted_gesture() {
    let Ok(mut particles) = WebParticles::new(Some(300), Some(3)) else {
        panic!("valid config rejected");
    };
    particles.set_gesture(1.0, 1.0, 0.0);
    for frame in 0..120 {
        particles.tick(frame as f32 / 60.0);
    }
    assert!(particles.openness() > 0.99);
    // rotation_z tracks the smoothed x reading
    assert!(particles.rotation_z() > 0.0);

    particles.set_particle_count(900);
    assert_eq!(particles.particle_count(), 900);
}
