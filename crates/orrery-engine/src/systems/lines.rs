//! Line strips (orbit trails, guides) for the host's line pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One line vertex: position + RGBA.
/// 7 floats = 28 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 7;
}

/// Range of vertices forming one connected strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStrip {
    pub start: u32,
    pub count: u32,
}

/// Flat vertex storage plus strip ranges.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    vertices: Vec<LineVertex>,
    strips: Vec<LineStrip>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strip through `points` with a single color.
    pub fn push_strip(&mut self, points: &[Vec3], color: [f32; 4]) {
        if points.len() < 2 {
            return;
        }
        let start = self.vertices.len() as u32;
        self.vertices.extend(points.iter().map(|p| LineVertex {
            x: p.x,
            y: p.y,
            z: p.z,
            r: color[0],
            g: color[1],
            b: color[2],
            a: color[3],
        }));
        self.strips.push(LineStrip {
            start,
            count: points.len() as u32,
        });
    }

    /// Closed circle of `radius` around `center` in the XZ plane.
    /// Produces `segments + 1` points so the strip closes on itself.
    pub fn push_circle_xz(&mut self, center: Vec3, radius: f32, segments: usize, color: [f32; 4]) {
        let points: Vec<Vec3> = (0..=segments)
            .map(|i| {
                let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
                center + Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
            })
            .collect();
        self.push_strip(&points, color);
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.strips.clear();
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn strips(&self) -> &[LineStrip] {
        &self.strips
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn strip_count(&self) -> u32 {
        self.strips.len() as u32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    /// Strip ranges as `[start, count]` pairs of u32.
    pub fn strips_ptr(&self) -> *const u32 {
        self.strips.as_ptr() as *const u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_closes_on_itself() {
        let mut lines = LineBuffer::new();
        lines.push_circle_xz(Vec3::ZERO, 20.0, 128, [1.0, 1.0, 1.0, 0.3]);
        assert_eq!(lines.vertex_count(), 129);
        assert_eq!(lines.strips(), &[LineStrip { start: 0, count: 129 }]);
        let first = lines.vertices()[0];
        let last = lines.vertices()[128];
        assert!((first.x - last.x).abs() < 1e-3);
        assert!((first.z - last.z).abs() < 1e-3);
    }

    #[test]
    fn strips_are_contiguous() {
        let mut lines = LineBuffer::new();
        lines.push_circle_xz(Vec3::ZERO, 10.0, 8, [1.0; 4]);
        lines.push_circle_xz(Vec3::ZERO, 15.0, 8, [1.0; 4]);
        assert_eq!(lines.strips()[1].start, 9);
        assert_eq!(lines.strip_count(), 2);
    }

    #[test]
    fn degenerate_strip_is_ignored() {
        let mut lines = LineBuffer::new();
        lines.push_strip(&[Vec3::ZERO], [1.0; 4]);
        assert_eq!(lines.strip_count(), 0);
    }
}
