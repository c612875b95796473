use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::error::{EngineError, EngineResult};
use crate::input::queue::InputQueue;
use crate::renderer::camera::{pixels_to_ndc, PerspectiveCamera};
use crate::systems::lighting::LightState;
use crate::systems::lines::LineBuffer;
use crate::systems::picking;
use crate::systems::rng::Rng;
use crate::systems::starfield::Starfield;

/// Custom input kind the host sends when the viewport changes size.
/// Payload: `a` = width px, `b` = height px.
pub const CUSTOM_RESIZE: u32 = 99;

/// Configuration for the engine, provided by the game.
/// Every field has a default, so partial JSON overrides are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov_deg: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Initial viewport width in pixels, until the host reports a resize.
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Maximum number of body instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// RNG seed. The web bridge replaces it with a random one at init.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_instances: 64,
            max_events: 32,
            max_lights: 8,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string and check its capacities.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.max_instances == 0 {
            return Err(EngineError::ZeroCapacity("max_instances"));
        }
        if self.max_events == 0 {
            return Err(EngineError::ZeroCapacity("max_events"));
        }
        if self.max_lights == 0 {
            return Err(EngineError::ZeroCapacity("max_lights"));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(EngineError::InvalidRange("near/far"));
        }
        Ok(())
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply a host-supplied JSON config. Called before `config` and `init`.
    fn load_config(&mut self, _json: &str) -> EngineResult<()> {
        Ok(())
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. Called once per display refresh.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub lights: LightState,
    pub stars: Starfield,
    pub lines: LineBuffer,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    viewport: Vec2,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let aspect = config.viewport_width / config.viewport_height.max(1.0);
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::new(config.fov_deg, aspect, config.near, config.far),
            lights: LightState::with_capacity(config.max_lights),
            stars: Starfield::default(),
            lines: LineBuffer::new(),
            rng: Rng::new(config.seed),
            events: Vec::with_capacity(config.max_events),
            viewport: Vec2::new(config.viewport_width, config.viewport_height),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full, dropping kind {}", event.kind);
        }
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Record a new viewport size and update the camera aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.camera.resize(width, height);
    }

    /// Nearest pickable entity under a viewport pixel.
    pub fn pick_at(&self, pixel: Vec2) -> Option<EntityId> {
        let ndc = pixels_to_ndc(pixel, self.viewport.x, self.viewport.y);
        let ray = self.camera.ray_from_ndc(ndc);
        picking::pick(&ray, self.scene.pickable()).map(|hit| hit.id)
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
