//! Ray picking against sphere meshes.

use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// A half-line in world space. `dir` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Distance along the ray to the first intersection with a sphere,
    /// or `None` if the sphere is missed or entirely behind the origin.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t_near = -b - sqrt_d;
        if t_near >= 0.0 {
            return Some(t_near);
        }
        // Origin inside the sphere
        let t_far = -b + sqrt_d;
        (t_far >= 0.0).then_some(t_far)
    }
}

/// A picking result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: EntityId,
    pub distance: f32,
}

/// Nearest candidate hit by the ray. Candidates without a mesh are skipped.
pub fn pick<'a>(ray: &Ray, candidates: impl Iterator<Item = &'a Entity>) -> Option<Hit> {
    candidates
        .filter_map(|e| {
            let radius = e.radius()?;
            let distance = ray.intersect_sphere(e.pos, radius)?;
            Some(Hit { id: e.id, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
