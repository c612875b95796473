/// Solar System: sun, eight planets and a moon on circular orbits.
///
/// Drag orbits the camera, wheel zooms, click a planet to focus it and open
/// its info panel. Space pauses, +/- change the time scale, Escape returns
/// to the overview.

use glam::{Vec2, Vec3};
use orrery_engine::input::keys;
use orrery_engine::{
    Color, DirectionalLight, EngineContext, EngineResult, Entity, EntityId, Game, GameConfig,
    GameEvent, InputEvent, InputQueue, MeshComponent, PerspectiveCamera, PointLight, Starfield,
};

use crate::bodies;
use crate::config::SolarConfig;
use crate::controls::CameraFocus;
use crate::panel::InfoPanel;
use crate::registry::BodyRegistry;
use crate::texture::MoonTexture;

// ── Custom event kinds from the host ─────────────────────────────────

/// The panel's close control was pressed.
pub const CUSTOM_CLOSE_PANEL: u32 = 1;

// ── Game event kinds to the host ─────────────────────────────────────

/// a = time scale, b = 1 when paused.
pub const EVENT_TIME_INFO: f32 = 1.0;
/// a = selected body index or -1, b = 1 when the camera is focused.
pub const EVENT_SELECTION: f32 = 2.0;

// ── Lighting ─────────────────────────────────────────────────────────

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const AMBIENT_INTENSITY: f32 = 0.4;
const DIRECTIONAL_POS: Vec3 = Vec3::new(0.0, 20.0, 10.0);
const DIRECTIONAL_INTENSITY: f32 = 2.0;
const SUN_LIGHT_INTENSITY: f32 = 2.5;
const SUN_LIGHT_RANGE: f32 = 1200.0;

/// Press in progress.
#[derive(Debug, Clone, Copy)]
struct Press {
    start: Vec2,
    last: Vec2,
    dragging: bool,
}

pub struct SolarSystem {
    config: SolarConfig,
    registry: BodyRegistry,
    focus: CameraFocus,
    panel: InfoPanel,
    moon_texture: MoonTexture,
    time_scale: f64,
    paused: bool,
    selected: Option<usize>,
    sun_id: Option<EntityId>,
    sun_spin: f64,
    press: Option<Press>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_config(SolarConfig::default())
    }

    pub fn with_config(config: SolarConfig) -> Self {
        let mut camera = PerspectiveCamera::new(
            config.engine.fov_deg,
            config.engine.viewport_width / config.engine.viewport_height.max(1.0),
            config.engine.near,
            config.engine.far,
        );
        camera.look_at(config.camera_position(), Vec3::ZERO);
        Self {
            focus: CameraFocus::new(&camera, &config),
            config,
            registry: BodyRegistry::from_tables(),
            panel: InfoPanel::new(),
            moon_texture: MoonTexture::default(),
            time_scale: 1.0,
            paused: false,
            selected: None,
            sun_id: None,
            sun_spin: 0.0,
            press: None,
        }
    }

    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    pub fn moon_texture(&self) -> &MoonTexture {
        &self.moon_texture
    }

    /// Time scale actually applied this frame.
    fn effective_scale(&self) -> f64 {
        if self.paused {
            0.0
        } else {
            self.time_scale
        }
    }

    // ── Selection ──────────────────────────────────────────────────

    fn handle_click(&mut self, ctx: &mut EngineContext, pixel: Vec2) {
        let hit = ctx.pick_at(pixel).and_then(|id| self.registry.index_of_entity(id));
        match hit {
            Some(index) if self.selected == Some(index) => {}
            Some(index) => self.select(ctx, index),
            None => {
                if self.focus.is_focused() {
                    self.deselect(ctx);
                }
            }
        }
    }

    fn select(&mut self, ctx: &mut EngineContext, index: usize) {
        let Some(body) = self.registry.get(index) else {
            log::warn!("no body at index {index}");
            self.panel.hide();
            return;
        };
        self.focus.focus(index, body.pos, body.radius, &ctx.camera);
        self.panel.show(Some(body));
        self.selected = Some(index);
        log::info!("focused {}", body.name);
    }

    /// Leave focus (if any), clear the selection and close the panel.
    fn deselect(&mut self, ctx: &mut EngineContext) {
        self.focus.reset(&mut ctx.camera);
        self.selected = None;
        self.panel.hide();
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_key(&mut self, ctx: &mut EngineContext, key_code: u32) {
        match key_code {
            keys::SPACE => self.paused = !self.paused,
            keys::ESCAPE => {
                if self.focus.is_focused() {
                    self.deselect(ctx);
                }
            }
            k if keys::is_plus(k) => self.time_scale *= self.config.time_scale_step,
            k if keys::is_minus(k) => {
                self.time_scale = (self.time_scale / self.config.time_scale_step)
                    .max(self.config.time_scale_min);
            }
            _ => {}
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let threshold = self.config.drag_threshold_px;
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    let at = Vec2::new(x, y);
                    self.press = Some(Press { start: at, last: at, dragging: false });
                }
                InputEvent::PointerMove { x, y } => {
                    let Some(press) = self.press.as_mut() else {
                        continue;
                    };
                    let at = Vec2::new(x, y);
                    if at.distance(press.start) > threshold {
                        press.dragging = true;
                    }
                    if press.dragging {
                        let delta = at - press.last;
                        self.focus.rotate(delta.x, delta.y, ctx.viewport().y);
                    }
                    press.last = at;
                }
                InputEvent::PointerUp { x, y } => {
                    let at = Vec2::new(x, y);
                    if let Some(press) = self.press.take() {
                        if !press.dragging && at.distance(press.start) <= threshold {
                            self.handle_click(ctx, at);
                        }
                    }
                }
                InputEvent::Wheel { delta } => self.focus.dolly(delta),
                InputEvent::KeyDown { key_code } => self.handle_key(ctx, key_code),
                InputEvent::Custom { kind: CUSTOM_CLOSE_PANEL, .. } => self.deselect(ctx),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
impl SolarSystem {
    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        self.config.engine.clone()
    }

    fn load_config(&mut self, json: &str) -> EngineResult<()> {
        let config = SolarConfig::from_json(json)?;
        self.focus.apply_config(&config);
        self.config = config;
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.camera.look_at(self.config.camera_position(), Vec3::ZERO);
        self.focus = CameraFocus::new(&ctx.camera, &self.config);

        // ── Lights ───────────────────────────────────────────────────
        ctx.lights.set_ambient(WHITE, AMBIENT_INTENSITY);
        ctx.lights.set_directional(DirectionalLight {
            position: DIRECTIONAL_POS,
            color: WHITE,
            intensity: DIRECTIONAL_INTENSITY,
        });
        ctx.lights.add(PointLight::new(Vec3::ZERO, WHITE, SUN_LIGHT_INTENSITY, SUN_LIGHT_RANGE));

        // ── Sun ──────────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        self.sun_id = Some(ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag("sun")
                .with_mesh(
                    MeshComponent::sphere(bodies::SUN_RADIUS, Color::from_hex(bodies::SUN_COLOR))
                        .with_emissive(bodies::SUN_EMISSIVE),
                ),
        ));

        // ── Planets and moon ─────────────────────────────────────────
        self.registry = BodyRegistry::from_tables();
        self.registry.scatter(&mut ctx.rng);
        self.registry.spawn(ctx);
        self.registry.push_trails(&mut ctx.lines, self.config.trail_segments, self.config.trail_alpha);

        // ── Backdrop and textures ────────────────────────────────────
        ctx.stars = Starfield::generate(
            &mut ctx.rng,
            self.config.star_count,
            self.config.star_min_radius,
            self.config.star_max_radius,
        );
        self.moon_texture = MoonTexture::generate(&mut ctx.rng, self.config.moon_texture_size);

        log::info!(
            "solar system: {} bodies, {} stars, {} trails",
            self.registry.len() + 1,
            ctx.stars.len(),
            ctx.lines.strip_count(),
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        // ── Advance orbits ───────────────────────────────────────────
        let scale = self.effective_scale();
        self.registry.update_orbits(scale);
        self.sun_spin = (self.sun_spin + bodies::SUN_SPIN * scale).rem_euclid(std::f64::consts::TAU);

        self.registry.sync(&mut ctx.scene);
        if let Some(sun) = self.sun_id.and_then(|id| ctx.scene.get_mut(id)) {
            sun.spin = self.sun_spin as f32;
        }

        self.focus.update(&mut ctx.camera);

        // ── Emit game events ─────────────────────────────────────────
        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_INFO,
            a: self.time_scale as f32,
            b: if self.paused { 1.0 } else { 0.0 },
            c: 0.0,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_SELECTION,
            a: self.selected.map(|i| i as f32).unwrap_or(-1.0),
            b: if self.focus.is_focused() { 1.0 } else { 0.0 },
            c: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, JUPITER, PLANET_COUNT, SATURN};
    use crate::controls::FocusState;

    fn small_config() -> SolarConfig {
        SolarConfig {
            star_count: 100,
            moon_texture_size: 32,
            ..SolarConfig::default()
        }
    }

    /// Initialized game with every planet parked on the +X axis and time
    /// paused, so screen positions stay put between ticks.
    fn setup() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::with_config(small_config());
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        for i in 0..PLANET_COUNT {
            game.registry.get_mut(i).unwrap().angle = 0.0;
        }
        game.registry.update_orbits(0.0);
        game.registry.sync(&mut ctx.scene);
        game.paused = true;
        (game, ctx)
    }

    fn tick(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for e in events {
            input.push(*e);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input);
    }

    /// Viewport pixel where a world point lands.
    fn pixel_of(ctx: &EngineContext, world: Vec3) -> Vec2 {
        let ndc = ctx.camera.view_projection().project_point3(world);
        let vp = ctx.viewport();
        Vec2::new((ndc.x + 1.0) * 0.5 * vp.x, (1.0 - ndc.y) * 0.5 * vp.y)
    }

    fn click(at: Vec2) -> [InputEvent; 2] {
        [
            InputEvent::PointerDown { x: at.x, y: at.y },
            InputEvent::PointerUp { x: at.x, y: at.y },
        ]
    }

    fn body_pixel(game: &SolarSystem, ctx: &EngineContext, index: usize) -> Vec2 {
        pixel_of(ctx, game.registry.get(index).unwrap().pos)
    }

    #[test]
    fn init_builds_scene() {
        let (game, ctx) = setup();
        assert_eq!(ctx.scene.len(), PLANET_COUNT + 2);
        assert_eq!(ctx.stars.len(), 100);
        assert_eq!(ctx.lines.strip_count(), PLANET_COUNT as u32);
        assert_eq!(ctx.lights.count(), 1);
        assert_eq!(ctx.lights.ambient(), [0.4, 0.4, 0.4]);
        assert_eq!(game.moon_texture().size(), 32);
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert!(!sun.pickable);
        assert_eq!(ctx.camera.eye, Vec3::new(0.0, 50.0, 120.0));
    }

    #[test]
    fn click_planet_selects_and_focuses() {
        let (mut game, mut ctx) = setup();
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        assert_eq!(game.selected(), Some(JUPITER));
        assert_eq!(game.focus.state(), FocusState::Focused(JUPITER));
        assert_eq!(game.focus.target(), game.registry.get(JUPITER).unwrap().pos);
        assert_eq!(game.focus.bounds(), (3.5 * 1.5, 3.5 * 10.0));
        assert!(game.panel().is_visible());
        assert_eq!(game.panel().title(), "Jupiter");
    }

    #[test]
    fn click_selected_planet_again_changes_nothing() {
        let (mut game, mut ctx) = setup();
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        let target = game.focus.target();
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        assert_eq!(game.selected(), Some(JUPITER));
        assert_eq!(game.focus.target(), target);
        assert!(game.panel().is_visible());
    }

    #[test]
    fn click_other_planet_while_focused_retargets() {
        let (mut game, mut ctx) = setup();
        let jupiter = body_pixel(&game, &ctx, JUPITER);
        let saturn = body_pixel(&game, &ctx, SATURN);
        // Both clicks in one frame, before the camera moves in on Jupiter.
        let mut events = click(jupiter).to_vec();
        events.extend(click(saturn));
        tick(&mut game, &mut ctx, &events);
        assert_eq!(game.selected(), Some(SATURN));
        assert_eq!(game.focus.target(), game.registry.get(SATURN).unwrap().pos);
        assert_eq!(game.focus.bounds(), (3.0 * 1.5, 3.0 * 10.0));
        assert_eq!(game.panel().title(), "Saturn");
    }

    #[test]
    fn click_empty_space_returns_to_overview() {
        let (mut game, mut ctx) = setup();
        let eye = ctx.camera.eye;
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        tick(&mut game, &mut ctx, &click(Vec2::new(2.0, 2.0)));
        assert_eq!(game.selected(), None);
        assert_eq!(game.focus.state(), FocusState::Overview);
        assert_eq!(game.focus.bounds(), (5.0, 500.0));
        assert_eq!(game.focus.target(), Vec3::ZERO);
        assert!(!game.panel().is_visible());
        assert!((ctx.camera.eye - eye).length() < 1e-3);
    }

    #[test]
    fn click_empty_space_in_overview_is_ignored() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &click(Vec2::new(2.0, 2.0)));
        assert_eq!(game.selected(), None);
        assert_eq!(game.focus.state(), FocusState::Overview);
    }

    #[test]
    fn drag_never_selects() {
        let (mut game, mut ctx) = setup();
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(
            &mut game,
            &mut ctx,
            &[
                InputEvent::PointerDown { x: at.x, y: at.y },
                InputEvent::PointerMove { x: at.x + 40.0, y: at.y },
                InputEvent::PointerUp { x: at.x, y: at.y },
            ],
        );
        assert_eq!(game.selected(), None);
        assert!(!game.panel().is_visible());
    }

    #[test]
    fn drag_rotates_camera() {
        let (mut game, mut ctx) = setup();
        let eye = ctx.camera.eye;
        tick(
            &mut game,
            &mut ctx,
            &[
                InputEvent::PointerDown { x: 600.0, y: 300.0 },
                InputEvent::PointerMove { x: 700.0, y: 300.0 },
                InputEvent::PointerUp { x: 700.0, y: 300.0 },
            ],
        );
        assert!((ctx.camera.eye - eye).length() > 1e-3);
        // Orbiting keeps the distance to the target.
        assert!((ctx.camera.eye.length() - eye.length()).abs() < 1e-2);
    }

    #[test]
    fn escape_while_focused_deselects() {
        let (mut game, mut ctx) = setup();
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        tick(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: keys::ESCAPE }]);
        assert_eq!(game.selected(), None);
        assert!(!game.focus.is_focused());
        assert!(!game.panel().is_visible());
    }

    #[test]
    fn close_panel_resets_focus() {
        let (mut game, mut ctx) = setup();
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        tick(
            &mut game,
            &mut ctx,
            &[InputEvent::Custom { kind: CUSTOM_CLOSE_PANEL, a: 0.0, b: 0.0, c: 0.0 }],
        );
        assert_eq!(game.selected(), None);
        assert_eq!(game.focus.bounds(), (5.0, 500.0));
        assert!(!game.panel().is_visible());
    }

    #[test]
    fn space_toggles_pause() {
        let (mut game, mut ctx) = setup();
        assert!(game.is_paused());
        tick(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: keys::SPACE }]);
        assert!(!game.is_paused());
        tick(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: keys::SPACE }]);
        assert!(game.is_paused());
    }

    #[test]
    fn plus_and_minus_scale_time_with_floor() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: keys::EQUAL }]);
        assert!((game.time_scale() - 1.2).abs() < 1e-12);
        tick(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: keys::MINUS }]);
        assert!((game.time_scale() - 1.0).abs() < 1e-12);

        let presses = vec![InputEvent::KeyDown { key_code: keys::NUMPAD_SUBTRACT }; 40];
        tick(&mut game, &mut ctx, &presses);
        assert_eq!(game.time_scale(), 0.1);
    }

    #[test]
    fn paused_angles_do_not_move() {
        let (mut game, mut ctx) = setup();
        let before: Vec<(f64, f64)> = game.registry().iter().map(|b| (b.angle, b.spin)).collect();
        let sun_spin = game.sun_spin;
        for _ in 0..50 {
            tick(&mut game, &mut ctx, &[]);
        }
        let after: Vec<(f64, f64)> = game.registry().iter().map(|b| (b.angle, b.spin)).collect();
        assert_eq!(before, after);
        assert_eq!(game.sun_spin, sun_spin);
    }

    #[test]
    fn running_advances_by_time_scale() {
        let (mut game, mut ctx) = setup();
        game.paused = false;
        game.time_scale = 2.0;
        for _ in 0..10 {
            tick(&mut game, &mut ctx, &[]);
        }
        let earth = game.registry().get(EARTH).unwrap();
        assert!((earth.angle - 10.0 * 0.010 * 2.0).abs() < 1e-9);
        let entity = ctx.scene.get(earth.entity.unwrap()).unwrap();
        assert_eq!(entity.pos, earth.pos);
        assert!((game.sun_spin - 10.0 * bodies::SUN_SPIN * 2.0).abs() < 1e-12);
    }

    #[test]
    fn events_report_time_and_selection() {
        let (mut game, mut ctx) = setup();
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        assert_eq!(ctx.events.len(), 2);
        assert_eq!(ctx.events[0].kind, EVENT_TIME_INFO);
        assert_eq!(ctx.events[0].a, 1.0);
        assert_eq!(ctx.events[0].b, 1.0);
        assert_eq!(ctx.events[1].kind, EVENT_SELECTION);
        assert_eq!(ctx.events[1].a, JUPITER as f32);
        assert_eq!(ctx.events[1].b, 1.0);
    }

    #[test]
    fn bad_config_keeps_previous() {
        let mut game = SolarSystem::new();
        assert!(game.load_config(r#"{ "time_scale_step": "fast" }"#).is_err());
        assert_eq!(game.config, SolarConfig::default());
        game.load_config(r#"{ "time_scale_step": 2.0 }"#).unwrap();
        assert_eq!(game.config.time_scale_step, 2.0);
    }

    #[test]
    fn inverted_bounds_rejected_and_frames_keep_running() {
        let (mut game, mut ctx) = setup();
        let before = game.config.clone();
        let err = game.load_config(r#"{ "overview_min_distance": 600.0 }"#).unwrap_err();
        assert!(matches!(err, orrery_engine::EngineError::InvalidRange(_)));
        assert!(game.load_config(r#"{ "focus_min_factor": 50.0 }"#).is_err());
        assert_eq!(game.config, before);

        tick(&mut game, &mut ctx, &[]);
        let at = body_pixel(&game, &ctx, JUPITER);
        tick(&mut game, &mut ctx, &click(at));
        assert_eq!(game.focus.bounds(), (3.5 * 1.5, 3.5 * 10.0));
    }
}
