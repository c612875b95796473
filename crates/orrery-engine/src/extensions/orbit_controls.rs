// extensions/orbit_controls.rs
//
// Orbit camera controller: keeps the camera on a sphere around a target.
// Drag rotates, wheel dollies, distance is clamped to [min, max].
// Works on a PerspectiveCamera passed in at update time; owns no camera.
//
// Usage:
//   let mut controls = OrbitControls::new(&camera);
//   controls.rotate_by_pixels(dx, dy, viewport_height);
//   controls.update(&mut camera);  // once per frame

use std::f32::consts::{PI, TAU};
use glam::Vec3;
use crate::renderer::camera::PerspectiveCamera;

/// Keeps the polar angle away from the poles, where look-at degenerates.
const POLAR_EPS: f32 = 1e-6;

/// Residual rotation below this is dropped so damping settles.
const SETTLE_EPS: f32 = 1e-6;

/// Spherical coordinates around the target, Y-up.
/// `theta` is the azimuth from +Z toward +X, `phi` the polar angle from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius < f32::EPSILON {
            return Self { radius: 0.0, theta: 0.0, phi: PI / 2.0 };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

/// Camera pose captured by `save_state`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedPose {
    target: Vec3,
    eye: Vec3,
}

/// Orbit controller with optional damping.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_damping: bool,
    /// Fraction of the pending rotation applied per update (default 0.05).
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    saved: SavedPose,
}

impl OrbitControls {
    /// Create controls for a camera's current pose.
    pub fn new(camera: &PerspectiveCamera) -> Self {
        Self {
            target: camera.target,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            saved: SavedPose {
                target: camera.target,
                eye: camera.eye,
            },
        }
    }

    pub fn with_distance_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels.
    /// A drag across the full viewport height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.delta_theta -= TAU * dx / viewport_height * self.rotate_speed;
        self.delta_phi -= TAU * dy / viewport_height * self.rotate_speed;
    }

    /// Queue a dolly step. Negative `wheel_delta` moves toward the target.
    pub fn dolly(&mut self, wheel_delta: f32) {
        let step = 0.95_f32.powf(self.zoom_speed);
        if wheel_delta < 0.0 {
            self.scale *= step;
        } else if wheel_delta > 0.0 {
            self.scale /= step;
        }
    }

    /// Apply pending input and the distance bounds to the camera.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let mut s = Spherical::from_offset(camera.eye - self.target);
        if s.radius == 0.0 {
            s.radius = self.min_distance.max(1.0);
        }

        if self.enable_damping {
            s.theta += self.delta_theta * self.damping_factor;
            s.phi += self.delta_phi * self.damping_factor;
        } else {
            s.theta += self.delta_theta;
            s.phi += self.delta_phi;
        }
        s.phi = s.phi.clamp(POLAR_EPS, PI - POLAR_EPS);
        s.radius = (s.radius * self.scale).clamp(self.min_distance, self.max_distance);

        camera.look_at(self.target + s.to_offset(), self.target);

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
            if self.delta_theta.abs() < SETTLE_EPS {
                self.delta_theta = 0.0;
            }
            if self.delta_phi.abs() < SETTLE_EPS {
                self.delta_phi = 0.0;
            }
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;
    }

    /// Whether rotation is still easing out.
    pub fn is_moving(&self) -> bool {
        self.delta_theta != 0.0 || self.delta_phi != 0.0
    }

    /// Remember the camera pose for a later `reset`.
    pub fn save_state(&mut self, camera: &PerspectiveCamera) {
        self.saved = SavedPose {
            target: self.target,
            eye: camera.eye,
        };
    }

    /// Restore the saved pose and drop any pending motion.
    pub fn reset(&mut self, camera: &mut PerspectiveCamera) {
        self.target = self.saved.target;
        camera.look_at(self.saved.eye, self.saved.target);
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
    }
}
