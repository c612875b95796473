//! Procedural moon surface: a grey base with randomly placed craters.
//!
//! RGBA8, row-major, `size × size`. Generated once at init and read by the
//! host through `get_moon_texture_ptr`.

use orrery_engine::Rng;

const BASE_GREY_MIN: u32 = 100;
const BASE_GREY_SPREAD: u32 = 50;
const CRATERS_MIN: u32 = 25;
const CRATERS_SPREAD: u32 = 25;
/// Crater tint varies by ±this around the base grey.
const CRATER_TINT: f32 = 30.0;
/// Highlight/shadow discs are offset by this fraction of the crater radius.
const EDGE_OFFSET: f32 = 0.3;
const EDGE_TINT: f32 = 20.0;
const HIGHLIGHT_ALPHA: f32 = 0.5;
const SHADOW_ALPHA: f32 = 0.3;

#[derive(Debug, Clone, Default)]
pub struct MoonTexture {
    size: u32,
    pixels: Vec<u8>,
}

impl MoonTexture {
    /// Flat texture of one grey level.
    pub fn filled(size: u32, grey: u8) -> Self {
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for _ in 0..size * size {
            pixels.extend_from_slice(&[grey, grey, grey, 255]);
        }
        Self { size, pixels }
    }

    pub fn generate(rng: &mut Rng, size: u32) -> Self {
        let base = (BASE_GREY_MIN + rng.next_int(BASE_GREY_SPREAD)) as f32;
        let mut tex = Self::filled(size, base as u8);

        let extent = size as f32;
        let craters = CRATERS_MIN + rng.next_int(CRATERS_SPREAD);
        for _ in 0..craters {
            let x = rng.range_f32(0.0, extent);
            let y = rng.range_f32(0.0, extent);
            let radius = rng.range_f32(0.0, extent / 10.0) + extent / 20.0;
            let grey = base + rng.range_f32(-CRATER_TINT, CRATER_TINT);

            tex.fill_disc(x, y, radius, grey, 1.0);
            let off = radius * EDGE_OFFSET;
            tex.fill_disc(x - off, y - off, radius, (grey + EDGE_TINT).min(255.0), HIGHLIGHT_ALPHA);
            tex.fill_disc(x + off, y + off, radius, (grey - EDGE_TINT).max(0.0), SHADOW_ALPHA);
        }
        tex
    }

    /// Blend a grey disc over the texture. Pixels whose centers fall
    /// inside the disc are painted; the rest is clipped.
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, grey: f32, alpha: f32) {
        if self.size == 0 || radius <= 0.0 {
            return;
        }
        let max = self.size as i64 - 1;
        let x0 = ((cx - radius).floor() as i64).clamp(0, max);
        let x1 = ((cx + radius).ceil() as i64).clamp(0, max);
        let y0 = ((cy - radius).floor() as i64).clamp(0, max);
        let y1 = ((cy + radius).ceil() as i64).clamp(0, max);
        let r2 = radius * radius;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let at = ((py as u32 * self.size + px as u32) * 4) as usize;
                let dst = self.pixels[at] as f32;
                let v = (grey * alpha + dst * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8;
                self.pixels[at..at + 3].fill(v);
            }
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }
}

#[cfg(test)]
impl MoonTexture {
    /// Grey level at (x, y), or None outside the texture.
    pub fn grey_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.pixels[((y * self.size + x) * 4) as usize])
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
