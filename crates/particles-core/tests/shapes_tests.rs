// Host-side tests for the shape generators.

use particles_core::shapes::{self, generate, generate_or_origin, sample_point};
use particles_core::{ShapeId, FIREWORKS_RADIUS, SATURN_SPHERE_RADIUS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn generate_returns_exactly_count_points_for_every_shape() {
    let mut rng = rng();
    for shape in ShapeId::ALL {
        for count in [0usize, 1, 17, 1000] {
            let points = generate(count, shape, &mut rng);
            assert_eq!(points.len(), count, "{shape} with count {count}");
        }
    }
}

#[test]
fn generate_zero_is_empty() {
    assert!(generate(0, ShapeId::Saturn, &mut rng()).is_empty());
}

#[test]
fn unknown_index_collapses_to_origin() {
    let points = generate_or_origin(50, ShapeId::from_index(99), &mut rng());
    assert_eq!(points.len(), 50);
    assert!(points.iter().all(|p| *p == glam::Vec3::ZERO));

    let known = generate_or_origin(50, ShapeId::from_index(1), &mut rng());
    assert!(known.iter().any(|p| *p != glam::Vec3::ZERO));
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = generate(200, ShapeId::Mandala, &mut StdRng::seed_from_u64(3));
    let b = generate(200, ShapeId::Mandala, &mut StdRng::seed_from_u64(3));
    assert_eq!(a, b);
    let c = generate(200, ShapeId::Mandala, &mut StdRng::seed_from_u64(4));
    assert_ne!(a, c);
}

#[test]
fn heart_stays_on_scaled_curve_with_thin_depth() {
    let mut rng = rng();
    for _ in 0..2000 {
        let p = sample_point(ShapeId::Heart, &mut rng);
        // 16 sin^3 t spans [-16, 16]; scaled by 0.3
        assert!(p.x.abs() <= 16.0 * 0.3 + 1e-4, "x out of range: {p:?}");
        assert!(p.y.abs() <= 17.0 * 0.3 + 1e-4, "y out of range: {p:?}");
        assert!(p.z >= -1.0 && p.z < 1.0, "z out of range: {p:?}");
    }
}

#[test]
fn flower_radius_follows_rose_curve() {
    let mut rng = rng();
    for _ in 0..2000 {
        let p = sample_point(ShapeId::Flower, &mut rng);
        let r = (p.x * p.x + p.y * p.y).sqrt();
        // |8 cos(4 theta) + 2| <= 10
        assert!(r <= 10.0 + 1e-4, "flower radius {r} too large");
        assert!(p.z >= -1.0 && p.z < 1.0);
    }
}

#[test]
fn saturn_splits_roughly_thirty_seventy_between_sphere_and_ring() {
    let mut rng = rng();
    let n = 20_000;
    let points = generate(n, ShapeId::Saturn, &mut rng);
    let sphere = points.iter().filter(|p| p.length() <= 4.5).count();
    let ring = points
        .iter()
        .filter(|p| {
            let d = p.length();
            (6.0 - 1e-3..=12.0 + 0.3).contains(&d)
        })
        .count();
    let sphere_frac = sphere as f32 / n as f32;
    let ring_frac = ring as f32 / n as f32;
    assert!((sphere_frac - 0.3).abs() < 0.02, "sphere fraction {sphere_frac}");
    assert!((ring_frac - 0.7).abs() < 0.02, "ring fraction {ring_frac}");
    assert_eq!(sphere + ring, n, "every point is either planet or ring");
}

#[test]
fn saturn_sphere_points_sit_on_radius_four() {
    let mut rng = rng();
    let points = generate(5000, ShapeId::Saturn, &mut rng);
    for p in points.iter().filter(|p| p.length() < 5.0) {
        assert!((p.length() - SATURN_SPHERE_RADIUS).abs() < 1e-3, "{p:?}");
    }
}

#[test]
fn saturn_ring_is_tilted_about_x() {
    let mut rng = rng();
    let points = generate(5000, ShapeId::Saturn, &mut rng);
    // An untilted ring would keep |y| <= 0.25; the 0.4 rad tilt lifts far points.
    let max_y = points
        .iter()
        .filter(|p| p.length() > 6.0)
        .map(|p| p.y.abs())
        .fold(0.0_f32, f32::max);
    assert!(max_y > 2.0, "ring does not look tilted, max |y| = {max_y}");
}

#[test]
fn mandala_matches_torus_knot_bounds() {
    let mut rng = rng();
    for _ in 0..2000 {
        let p = sample_point(ShapeId::Mandala, &mut rng);
        let planar = (p.x * p.x + p.y * p.y).sqrt();
        assert!((3.5 - 1e-3..=8.5 + 1e-3).contains(&planar), "planar radius {planar}");
        assert!(p.z.abs() <= 1.5 + 1e-4);
    }
}

#[test]
fn fireworks_stay_inside_radius() {
    let mut rng = rng();
    let points = generate(5000, ShapeId::Fireworks, &mut rng);
    assert!(points.iter().all(|p| p.length() <= FIREWORKS_RADIUS + 1e-3));
    // uniform radius puts about half the points inside r = 7.5
    let inner = points.iter().filter(|p| p.length() < 7.5).count() as f32 / 5000.0;
    assert!((inner - 0.5).abs() < 0.05, "inner fraction {inner}");
}

#[test]
fn fill_keeps_length_and_replaces_contents() {
    let mut rng = rng();
    let mut targets = generate(64, ShapeId::Heart, &mut rng);
    let before = targets.clone();
    shapes::fill(&mut targets, ShapeId::Fireworks, &mut rng);
    assert_eq!(targets.len(), 64);
    assert_ne!(targets, before);
}

#[test]
fn shape_names_round_trip_and_cycle() {
    for shape in ShapeId::ALL {
        assert_eq!(shape.to_string().parse::<ShapeId>(), Ok(shape));
        assert_eq!(ShapeId::from_index(shape.index()), Some(shape));
    }
    assert_eq!("  saturn ".parse::<ShapeId>(), Ok(ShapeId::Saturn));
    assert!("Buddha".parse::<ShapeId>().is_err());
    assert_eq!(ShapeId::from_index(5), None);
    assert_eq!(ShapeId::Fireworks.next(), ShapeId::Heart);
    assert_eq!(ShapeId::Heart.next(), ShapeId::Flower);
}
