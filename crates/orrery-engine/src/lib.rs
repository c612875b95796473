pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod extensions;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, CUSTOM_RESIZE};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, RingComponent};
pub use crate::core::scene::Scene;
pub use renderer::camera::{PerspectiveCamera, CameraUniform, pixels_to_ndc};
pub use renderer::instance::{BodyInstance, InstanceBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use input::keys;
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{PointLight, DirectionalLight, LightState};
pub use systems::lines::{LineBuffer, LineStrip, LineVertex};
pub use systems::picking::{Ray, Hit};
pub use systems::render::build_instance_buffer;
pub use systems::rng::Rng;
pub use systems::starfield::Starfield;
pub use error::{EngineError, EngineResult};

// Extensions: decoupled optional systems
pub use extensions::OrbitControls;
