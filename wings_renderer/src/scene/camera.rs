/// PerspectiveCamera - view and projection for the scene subpass

use glam::{Mat4, Vec3};
use crate::renderer::Extent2D;

/// A perspective camera looking at the scene origin.
///
/// Input handling and free-camera controls live in the framework; the
/// sample only needs the matrices.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    fov_y: f32,
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
    position: Vec3,
}

impl PerspectiveCamera {
    /// Create a camera with the aspect ratio of the given surface extent
    pub fn new(extent: Extent2D) -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_3,
            aspect_ratio: extent.width as f32 / extent.height.max(1) as f32,
            z_near: 0.1,
            z_far: 1000.0,
            position: Vec3::new(0.0, 0.0, 5.0),
        }
    }

    /// Vertical field of view in radians
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Update the aspect ratio after a surface resize
    pub fn set_aspect_ratio(&mut self, extent: Extent2D) {
        self.aspect_ratio = extent.width as f32 / extent.height.max(1) as f32;
    }

    /// Camera position in world space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// View matrix (camera looking at the origin)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// Combined view-projection matrix (projection * view)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
