//! View-side types shared by the web and native frontends.
//!
//! Nothing here touches a platform API; the renderers only turn these into
//! uniform buffers.

use glam::{EulerRot, Mat4, Vec2, Vec3};

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};

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
    /// Camera on the +Z axis looking at the origin.
    pub fn for_viewport(aspect: f32, camera_z: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, camera_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
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
}

/// Model matrix for the particle cloud from a `(pitch, yaw)` rotation.
pub fn model_matrix(rotation: Vec2) -> Mat4 {
    Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = Camera::for_viewport(16.0 / 9.0, 2.8);
        let clip = cam.projection_matrix() * cam.view_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(model_matrix(Vec2::ZERO), Mat4::IDENTITY);
    }
}
