use orrery_engine::bridge::protocol::{
    HEADER_AMBIENT_B, HEADER_AMBIENT_G, HEADER_AMBIENT_R, HEADER_DIR_INTENSITY, HEADER_DIR_X,
    HEADER_DIR_Y, HEADER_DIR_Z, HEADER_EVENT_COUNT,
    HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_LIGHT_COUNT, HEADER_MAX_EVENTS,
    HEADER_MAX_INSTANCES, HEADER_MAX_LIGHTS, HEADER_PROTOCOL_VERSION, PROTOCOL_VERSION,
};
use orrery_engine::{
    build_instance_buffer, EngineContext, Game, GameConfig, InputEvent, InputQueue,
    InstanceBuffer, PointLight, ProtocolLayout, CUSTOM_RESIZE,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    instances: InstanceBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame_counter: u32,
    /// Flat per-frame buffer laid out per `ProtocolLayout`.
    frame: Vec<f32>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self::with_config(game, config)
    }

    /// Build a runner with an explicit config (overrides `Game::config`).
    pub fn with_config(game: G, config: GameConfig) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            instances: InstanceBuffer::with_capacity(config.max_instances),
            frame: vec![0.0; layout.buffer_total_floats],
            game,
            layout,
            config,
            initialized: false,
            frame_counter: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.pack_frame();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game once, rebuild the instance buffer,
    /// then pack the shared frame buffer.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        for event in self.input.iter() {
            if let InputEvent::Custom { kind: CUSTOM_RESIZE, a, b, .. } = *event {
                self.ctx.set_viewport(a, b);
            }
        }

        self.game.update(&mut self.ctx, &self.input);

        self.input.clear();

        build_instance_buffer(self.ctx.scene.iter(), &mut self.instances);
        self.pack_frame();
    }

    /// Write header, camera, instances, events and lights into `frame`.
    fn pack_frame(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        let layout = &self.layout;
        let frame = &mut self.frame;
        frame.fill(0.0);

        let instances = self.instances.as_slice();
        let events = &self.ctx.events[..self.ctx.events.len().min(layout.max_events)];
        let lights: Vec<_> = self.ctx.lights.iter().take(layout.max_lights).copied().collect();
        let ambient = self.ctx.lights.ambient();

        frame[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        frame[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        frame[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        frame[HEADER_INSTANCE_COUNT] = self.instances.instance_count() as f32;
        frame[HEADER_MAX_EVENTS] = layout.max_events as f32;
        frame[HEADER_EVENT_COUNT] = events.len() as f32;
        frame[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        frame[HEADER_LIGHT_COUNT] = lights.len() as f32;
        frame[HEADER_AMBIENT_R] = ambient[0];
        frame[HEADER_AMBIENT_G] = ambient[1];
        frame[HEADER_AMBIENT_B] = ambient[2];
        if let Some(dir) = self.ctx.lights.directional() {
            let d = dir.direction();
            frame[HEADER_DIR_X] = d.x;
            frame[HEADER_DIR_Y] = d.y;
            frame[HEADER_DIR_Z] = d.z;
            frame[HEADER_DIR_INTENSITY] = dir.intensity;
        }

        let camera = self.ctx.camera.uniform();
        write_section(frame, layout.camera_offset, bytemuck::cast_slice(std::slice::from_ref(&camera)));
        write_section(frame, layout.instance_data_offset, bytemuck::cast_slice(instances));
        write_section(frame, layout.event_data_offset, bytemuck::cast_slice(events));
        for (i, light) in lights.iter().enumerate() {
            let at = layout.light_data_offset + i * PointLight::FLOATS;
            frame[at..at + PointLight::FLOATS].copy_from_slice(&light.as_floats());
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.positions_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.len() as u32
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.ctx.lines.vertices_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.ctx.lines.vertex_count()
    }

    pub fn line_strips_ptr(&self) -> *const u32 {
        self.ctx.lines.strips_ptr()
    }

    pub fn line_strip_count(&self) -> u32 {
        self.ctx.lines.strip_count()
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Copy `floats` into `frame` starting at float offset `at`.
fn write_section(frame: &mut [f32], at: usize, floats: &[f32]) {
    frame[at..at + floats.len()].copy_from_slice(floats);
}
