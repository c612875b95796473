use glam::Vec3;
use orrery_engine::{EngineError, EngineResult, GameConfig};
use serde::{Deserialize, Serialize};

/// Largest moon texture edge. Keeps `size * size * 4` well inside `u32`.
pub const MAX_MOON_TEXTURE_SIZE: u32 = 4096;

/// Tunables for the solar-system scene. Every field has a default, so the
/// host may pass any subset as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    /// Engine camera and buffer settings.
    pub engine: GameConfig,
    /// `+`/`-` multiply or divide the time scale by this.
    pub time_scale_step: f64,
    /// Lowest time scale `-` can reach.
    pub time_scale_min: f64,
    pub overview_min_distance: f32,
    pub overview_max_distance: f32,
    /// Focused zoom bounds, as multiples of the body radius.
    pub focus_min_factor: f32,
    pub focus_max_factor: f32,
    /// Where the camera starts, looking at the origin.
    pub camera_position: [f32; 3],
    pub damping_factor: f32,
    pub star_count: usize,
    pub star_min_radius: f32,
    pub star_max_radius: f32,
    pub trail_segments: usize,
    pub trail_alpha: f32,
    /// Pointer travel in pixels past which a press becomes a camera drag.
    pub drag_threshold_px: f32,
    /// Edge length of the procedural moon texture.
    pub moon_texture_size: u32,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            engine: GameConfig::default(),
            time_scale_step: 1.2,
            time_scale_min: 0.1,
            overview_min_distance: 5.0,
            overview_max_distance: 500.0,
            focus_min_factor: 1.5,
            focus_max_factor: 10.0,
            camera_position: [0.0, 50.0, 120.0],
            damping_factor: 0.05,
            star_count: 10_000,
            star_min_radius: 700.0,
            star_max_radius: 1000.0,
            trail_segments: 128,
            trail_alpha: 0.3,
            drag_threshold_px: 5.0,
            moon_texture_size: 256,
        }
    }
}

impl SolarConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.engine.validate()?;
        if config.trail_segments == 0 {
            return Err(EngineError::ZeroCapacity("trail_segments"));
        }
        if config.moon_texture_size == 0 {
            return Err(EngineError::ZeroCapacity("moon_texture_size"));
        }
        config.check_ranges()?;
        Ok(config)
    }

    /// Reject values the camera and time controls cannot work with. The
    /// comparisons are written so NaN fails them too.
    fn check_ranges(&self) -> EngineResult<()> {
        if !(self.time_scale_step > 1.0) {
            return Err(EngineError::InvalidRange("time_scale_step"));
        }
        if !(self.time_scale_min > 0.0) {
            return Err(EngineError::InvalidRange("time_scale_min"));
        }
        if !(self.overview_min_distance >= 0.0
            && self.overview_min_distance <= self.overview_max_distance)
        {
            return Err(EngineError::InvalidRange("overview_min_distance/overview_max_distance"));
        }
        if !(self.focus_min_factor >= 0.0 && self.focus_min_factor <= self.focus_max_factor) {
            return Err(EngineError::InvalidRange("focus_min_factor/focus_max_factor"));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return Err(EngineError::InvalidRange("damping_factor"));
        }
        if !(self.star_min_radius <= self.star_max_radius) {
            return Err(EngineError::InvalidRange("star_min_radius/star_max_radius"));
        }
        if self.moon_texture_size > MAX_MOON_TEXTURE_SIZE {
            return Err(EngineError::InvalidRange("moon_texture_size"));
        }
        Ok(())
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }
}
