/// Shared buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 20 floats]
/// [Instances: max_instances × 16 floats]
/// [Events: max_events × 4 floats]
/// [Lights: max_lights × 8 floats]
/// ```
///
/// Stars and orbit trails are static and read once through their own
/// pointers, so they are not part of the per-frame buffer.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::BodyInstance;
use crate::systems::lighting::PointLight;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_MAX_LIGHTS: usize = 7;
pub const HEADER_LIGHT_COUNT: usize = 8;
pub const HEADER_AMBIENT_R: usize = 9;
pub const HEADER_AMBIENT_G: usize = 10;
pub const HEADER_AMBIENT_B: usize = 11;
/// Directional light travel direction (unit vector) and intensity.
/// Intensity 0 means no directional light.
pub const HEADER_DIR_X: usize = 12;
pub const HEADER_DIR_Y: usize = 13;
pub const HEADER_DIR_Z: usize = 14;
pub const HEADER_DIR_INTENSITY: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,
    pub max_lights: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize, max_lights: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CameraUniform::FLOATS;
        let event_data_offset = instance_data_offset + max_instances * BodyInstance::FLOATS;
        let light_data_offset = event_data_offset + max_events * GameEvent::FLOATS;
        let buffer_total_floats = light_data_offset + max_lights * PointLight::FLOATS;

        Self {
            max_instances,
            max_events,
            max_lights,
            camera_offset,
            instance_data_offset,
            event_data_offset,
            light_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events, config.max_lights)
    }
}
