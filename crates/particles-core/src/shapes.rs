//! Parametric point distributions used as morph targets.
//!
//! Every generator draws from the caller's [`Rng`], so a seeded generator
//! gives a reproducible buffer while the default host seeds from entropy.

use crate::error::ParseShapeError;
use glam::{Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Heart,
    Flower,
    Saturn,
    Mandala,
    Fireworks,
}

impl ShapeId {
    pub const ALL: [ShapeId; 5] = [
        ShapeId::Heart,
        ShapeId::Flower,
        ShapeId::Saturn,
        ShapeId::Mandala,
        ShapeId::Fireworks,
    ];

    /// Shape for a host-side numeric selector; `None` for anything unknown.
    pub fn from_index(index: u32) -> Option<ShapeId> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Heart => "Heart",
            ShapeId::Flower => "Flower",
            ShapeId::Saturn => "Saturn",
            ShapeId::Mandala => "Mandala",
            ShapeId::Fireworks => "Fireworks",
        }
    }

    /// Next shape in declaration order, wrapping around.
    pub fn next(self) -> ShapeId {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseShapeError(s.to_string()))
    }
}

// ---------------- Generators ----------------

const HEART_SCALE: f32 = 0.3;

const SATURN_SPHERE_PROBABILITY: f32 = 0.3;
pub const SATURN_SPHERE_RADIUS: f32 = 4.0;
pub const SATURN_RING_MIN: f32 = 6.0;
pub const SATURN_RING_MAX: f32 = 12.0;
const SATURN_RING_HALF_HEIGHT: f32 = 0.25;
const SATURN_RING_TILT: f32 = 0.4; // radians about +X

const FLOWER_PETALS: f32 = 4.0;
const FLOWER_AMPLITUDE: f32 = 8.0;
const FLOWER_OFFSET: f32 = 2.0;

// (2,3) torus knot
const MANDALA_P: f32 = 2.0;
const MANDALA_Q: f32 = 3.0;
const MANDALA_TUBE: f32 = 1.5;
const MANDALA_RADIUS_MIN: f32 = 5.0;
const MANDALA_RADIUS_MAX: f32 = 7.0;

pub const FIREWORKS_RADIUS: f32 = 15.0;

/// Sample `count` target points for `shape`.
pub fn generate<R: Rng + ?Sized>(count: usize, shape: ShapeId, rng: &mut R) -> Vec<Vec3> {
    (0..count).map(|_| sample_point(shape, rng)).collect()
}

/// Sample targets for an optional shape. `None` (an unknown selector)
/// collapses every particle onto the origin.
pub fn generate_or_origin<R: Rng + ?Sized>(
    count: usize,
    shape: Option<ShapeId>,
    rng: &mut R,
) -> Vec<Vec3> {
    match shape {
        Some(shape) => generate(count, shape, rng),
        None => vec![Vec3::ZERO; count],
    }
}

/// Refill an existing buffer in place, keeping its length.
pub fn fill<R: Rng + ?Sized>(targets: &mut [Vec3], shape: ShapeId, rng: &mut R) {
    for t in targets.iter_mut() {
        *t = sample_point(shape, rng);
    }
}

pub fn sample_point<R: Rng + ?Sized>(shape: ShapeId, rng: &mut R) -> Vec3 {
    match shape {
        ShapeId::Heart => heart(rng),
        ShapeId::Flower => flower(rng),
        ShapeId::Saturn => saturn(rng),
        ShapeId::Mandala => mandala(rng),
        ShapeId::Fireworks => fireworks(rng),
    }
}

fn heart<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec3::new(x * HEART_SCALE, y * HEART_SCALE, rng.gen_range(-1.0..1.0))
}

fn flower<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let r = FLOWER_AMPLITUDE * (FLOWER_PETALS * theta).cos() + FLOWER_OFFSET;
    Vec3::new(r * theta.cos(), r * theta.sin(), rng.gen_range(-1.0..1.0))
}

fn saturn<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    if rng.gen::<f32>() < SATURN_SPHERE_PROBABILITY {
        return on_sphere(SATURN_SPHERE_RADIUS, rng);
    }
    let angle = rng.gen_range(0.0..TAU);
    let dist = rng.gen_range(SATURN_RING_MIN..SATURN_RING_MAX);
    let height = rng.gen_range(-SATURN_RING_HALF_HEIGHT..SATURN_RING_HALF_HEIGHT);
    let ring = Vec3::new(angle.cos() * dist, height, angle.sin() * dist);
    Quat::from_rotation_x(SATURN_RING_TILT) * ring
}

fn mandala<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    let r = rng.gen_range(MANDALA_RADIUS_MIN..MANDALA_RADIUS_MAX);
    let ring = r + MANDALA_TUBE * (MANDALA_Q * t).cos();
    Vec3::new(
        ring * (MANDALA_P * t).cos(),
        ring * (MANDALA_P * t).sin(),
        MANDALA_TUBE * (MANDALA_Q * t).sin(),
    )
}

// Radius is uniform, not volume-uniform: denser toward the center.
fn fireworks<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r = rng.gen_range(0.0..FIREWORKS_RADIUS);
    on_sphere(r, rng)
}

/// Uniform direction via theta ~ U(0, 2pi), phi = acos(2u - 1), y up.
fn on_sphere<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let sin_phi = phi.sin();
    Vec3::new(
        radius * sin_phi * theta.sin(),
        radius * phi.cos(),
        radius * sin_phi * theta.cos(),
    )
}
