use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::systems::picking::Ray;

/// Perspective camera for 3D rendering.
/// Right-handed, Y-up, depth in [0, 1] (WebGPU convention).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

/// GPU-side uniform data for the camera.
/// Wire format: 16 floats view-projection (column-major) + 4 floats eye (w = 1).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_deg.to_radians(),
            aspect,
            near,
            far,
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
        }
    }

    /// Place the camera and aim it.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: self.eye.extend(1.0).to_array(),
        }
    }

    /// Update the aspect ratio after a viewport resize.
    /// Degenerate sizes (minimized tab) are ignored.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width > 0.0 && viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let on_near_plane = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        Ray::new(self.eye, on_near_plane - self.eye)
    }
}

/// Convert viewport pixels (origin top-left, Y down) to NDC (Y up).
pub fn pixels_to_ndc(pos: Vec2, viewport_width: f32, viewport_height: f32) -> Vec2 {
    Vec2::new(
        (pos.x / viewport_width) * 2.0 - 1.0,
        -(pos.y / viewport_height) * 2.0 + 1.0,
    )
}
