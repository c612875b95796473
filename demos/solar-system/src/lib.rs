use wasm_bindgen::prelude::*;

mod bodies;
mod config;
mod controls;
mod game;
mod panel;
mod registry;
mod texture;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

// ── Info panel ───────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn get_panel_visible() -> bool {
    with_runner(|r| r.game().panel().is_visible()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_panel_title() -> String {
    with_runner(|r| r.game().panel().title().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_panel_description() -> String {
    with_runner(|r| r.game().panel().description().to_string()).unwrap_or_default()
}

/// The panel's close control. Handled on the next tick.
#[wasm_bindgen]
pub fn game_close_panel() {
    with_runner(|r| {
        r.push_input(orrery_engine::InputEvent::Custom {
            kind: game::CUSTOM_CLOSE_PANEL,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        })
    });
}

// ── Moon texture (RGBA8, size × size) ────────────────────────────────

#[wasm_bindgen]
pub fn get_moon_texture_ptr() -> *const u8 {
    with_runner(|r| r.game().moon_texture().pixels_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_moon_texture_size() -> u32 {
    with_runner(|r| r.game().moon_texture().size()).unwrap_or(0)
}
