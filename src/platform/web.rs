//! Browser bindings
//!
//! The page owns the canvas and the animation loop. Each frame it calls
//! `frame(dt)` and draws from `snapshot_json()` or `instances()`; key and
//! focus events are forwarded as they arrive.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::persistence::LocalStorage;
use crate::render::RectInstance;
use crate::sim::GamePhase;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Split Runner starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorage>,
}

#[wasm_bindgen]
impl WebGame {
    /// `tuning_json` may be empty to use the default balance
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> WebGame {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).unwrap_or_else(|e| {
                log::warn!("Ignoring bad tuning: {}", e);
                Tuning::default()
            })
        };
        let seed = super::fresh_seed();
        log::info!("New session with seed: {}", seed);
        WebGame {
            game: Game::with_tuning(seed, tuning, LocalStorage::new()),
        }
    }

    pub fn start(&mut self) -> bool {
        self.game.start()
    }

    pub fn start_demo(&mut self) -> bool {
        self.game.start_demo()
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.game.toggle_pause()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn key_down(&mut self, code: &str) {
        self.game.key_down(code);
    }

    pub fn key_up(&mut self, code: &str) {
        self.game.key_up(code);
    }

    /// Window blur or tab hidden
    pub fn blur(&mut self) {
        self.game.blur();
    }

    /// Advance by the frame delta in seconds; returns ticks run
    pub fn frame(&mut self, dt: f32) -> u32 {
        self.game.update(dt)
    }

    pub fn phase(&self) -> String {
        match self.game.phase() {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
        .to_string()
    }

    pub fn score(&self) -> f64 {
        self.game.state.score as f64
    }

    pub fn high_score(&self) -> f64 {
        self.game.high_score.best as f64
    }

    pub fn show_fps(&self) -> bool {
        self.game.settings.show_fps
    }

    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(self.game.snapshot().to_json()?)
    }

    /// Flat rectangles, `instance_stride()` floats each
    pub fn instances(&self) -> Vec<f32> {
        bytemuck::cast_slice(&self.game.instances()).to_vec()
    }

    pub fn instance_stride() -> usize {
        RectInstance::FLOATS
    }
}
