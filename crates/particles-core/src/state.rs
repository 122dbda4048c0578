//! Visual-side state shared with the frontends.
//!
//! These types avoid platform-specific APIs. Hosts use them to build the
//! camera matrices and the whole-cloud object transform.

use crate::constants::*;
use glam::{Mat4, Quat, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Default framing for a cloud centered at the origin.
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Cosmetic whole-cloud rotation, applied to the drawn object rather than to
/// each particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldTransform {
    /// Yaw about +Y, growing with elapsed time.
    pub rotation_y: f32,
    /// Roll about +Z, following the smoothed hand x.
    pub rotation_z: f32,
}

impl FieldTransform {
    pub fn new(elapsed: f32, smoothed_x: f32, spin_rate: f32, tilt_factor: f32) -> Self {
        Self {
            rotation_y: elapsed * spin_rate,
            rotation_z: smoothed_x * tilt_factor,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_rotation_y(self.rotation_y) * Quat::from_rotation_z(self.rotation_z))
    }
}
