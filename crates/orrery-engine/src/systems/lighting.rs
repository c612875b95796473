//! Scene lighting: ambient term, one directional light, point lights.
//!
//! Lights are set up once in `init` and stay for the whole session. Each
//! frame the runner packs them for the renderer's lighting pass.

use glam::Vec3;

/// A point light with position, color, intensity and falloff range.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Distance at which the light reaches zero. 0 = infinite.
    pub range: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            range,
        }
    }

    pub fn as_floats(&self) -> [f32; Self::FLOATS] {
        [self.x, self.y, self.z, self.r, self.g, self.b, self.intensity, self.range]
    }
}

/// Parallel light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector the light travels along.
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// Manages active lights and the ambient term for the scene.
///
/// With no lights and white ambient the scene renders unlit.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    directional: Option<DirectionalLight>,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: [1.0, 1.0, 1.0],
            directional: None,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of point lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient color scaled by an intensity.
    pub fn set_ambient(&mut self, color: [f32; 3], intensity: f32) {
        self.ambient = [color[0] * intensity, color[1] * intensity, color[2] * intensity];
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    pub fn set_directional(&mut self, light: DirectionalLight) {
        self.directional = Some(light);
    }

    pub fn directional(&self) -> Option<&DirectionalLight> {
        self.directional.as_ref()
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), PointLight::FLOATS * 4);
    }

    #[test]
    fn point_light_wire_order() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), [0.5, 0.6, 0.7], 2.5, 1200.0);
        assert_eq!(light.as_floats(), [1.0, 2.0, 3.0, 0.5, 0.6, 0.7, 2.5, 1200.0]);
    }

    #[test]
    fn add_keeps_order() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 2.5, 1200.0));
        state.add(PointLight::new(Vec3::X, [1.0; 3], 1.0, 0.0));
        assert_eq!(state.count(), 2);
        assert_eq!(state.iter().nth(1).unwrap().x, 1.0);
    }

    #[test]
    fn ambient_scales_by_intensity() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), [1.0, 1.0, 1.0]);
        state.set_ambient([1.0, 1.0, 1.0], 0.4);
        assert_eq!(state.ambient(), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn directional_points_at_origin() {
        let light = DirectionalLight {
            position: Vec3::new(0.0, 20.0, 0.0),
            color: [1.0; 3],
            intensity: 2.0,
        };
        assert_eq!(light.direction(), Vec3::NEG_Y);
    }
}
