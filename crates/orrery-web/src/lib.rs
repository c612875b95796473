pub mod dom;
pub mod runner;

pub use dom::WebError;
pub use runner::GameRunner;

// Re-exported so `export_game!` expands without the caller naming the engine.
pub use orrery_engine;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper, which logs and returns `None` before init
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type needs a `new()` constructor. The calling crate must depend on
/// `wasm-bindgen`, `log`, `console_log` and `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::orrery_engine::{Game as _, InputEvent};

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::warn!("{}: not initialized, call game_init() first", $game_name);
                        None
                    }
                }
            })
        }

        /// Mount the game. Fails if the container element is missing.
        #[wasm_bindgen]
        pub fn game_init(container_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            if let Err(err) = $crate::dom::find_container(container_id) {
                log::error!("{}: {}", $game_name, err);
                return Err(JsValue::from_str(&err.to_string()));
            }

            let mut game = <$game_type>::new();
            if let Some(json) = config_json {
                if let Err(err) = game.load_config(&json) {
                    log::error!("{}: {}, keeping defaults", $game_name, err);
                }
            }
            let mut config = game.config();
            config.seed = $crate::dom::host_seed();
            let runner = $crate::GameRunner::with_config(game, config);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        /// Reload the game config from JSON. A bad config is logged and the
        /// current one stays.
        #[wasm_bindgen]
        pub fn game_load_config(json: &str) {
            with_runner(|r| {
                if let Err(err) = r.game_mut().load_config(json) {
                    log::error!("{}: {}", $game_name, err);
                }
            });
        }

        #[wasm_bindgen]
        pub fn game_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| {
                r.push_input(InputEvent::Custom {
                    kind: $crate::orrery_engine::CUSTOM_RESIZE,
                    a: width,
                    b: height,
                    c: 0.0,
                })
            });
        }

        // ---- Per-frame buffer ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len()).unwrap_or(0)
        }

        // ---- Static geometry ----

        #[wasm_bindgen]
        pub fn get_stars_ptr() -> *const f32 {
            with_runner(|r| r.stars_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_line_vertices_ptr() -> *const f32 {
            with_runner(|r| r.line_vertices_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_line_vertex_count() -> u32 {
            with_runner(|r| r.line_vertex_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_line_strips_ptr() -> *const u32 {
            with_runner(|r| r.line_strips_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_line_strip_count() -> u32 {
            with_runner(|r| r.line_strip_count()).unwrap_or(0)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights()).unwrap_or(0)
        }
    };
}
