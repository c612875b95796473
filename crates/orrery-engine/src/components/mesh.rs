/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Flat annulus drawn around a sphere, tilted about the local X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingComponent {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Tilt in radians about the X axis.
    pub tilt: f32,
}

/// Sphere mesh with Phong material parameters.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub radius: f32,
    pub color: Color,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// Glow multiplier (default: 0.0, the sun uses > 1).
    pub emissive: f32,
    /// Optional ring system.
    pub rings: Option<RingComponent>,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: Color::default(),
            shininess: 32.0,
            emissive: 0.0,
            rings: None,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, color: Color) -> Self {
        Self {
            radius,
            color,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_rings(mut self, rings: RingComponent) -> Self {
        self.rings = Some(rings);
        self
    }
}
