//! Background starfield: random points in a spherical shell around the origin.

use glam::Vec3;

use super::rng::Rng;

/// Static star positions, generated once at init.
/// Wire format: 3 floats (x, y, z) per star.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    positions: Vec<[f32; 3]>,
}

impl Starfield {
    /// Scatter `count` stars at radii in `[min_radius, max_radius)`.
    ///
    /// Angles are drawn uniformly (not area-uniform), so stars bunch slightly
    /// toward the poles. This matches the look the scene was tuned for.
    pub fn generate(rng: &mut Rng, count: usize, min_radius: f32, max_radius: f32) -> Self {
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            let r = rng.range_f32(min_radius, max_radius);
            let phi = rng.range_f32(0.0, std::f32::consts::TAU);
            let theta = rng.range_f32(0.0, std::f32::consts::PI);
            let p = Vec3::new(
                r * theta.sin() * phi.cos(),
                r * theta.sin() * phi.sin(),
                r * theta.cos(),
            );
            positions.push(p.to_array());
        }
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr() as *const f32
    }
}
