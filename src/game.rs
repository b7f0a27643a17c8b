//! Game driver
//!
//! Owns the session, the key latch and the high score. The host feeds it key
//! events, phase actions and frame deltas; it runs fixed-timestep ticks while
//! playing and records the high score when a run ends.

use crate::consts::*;
use crate::highscores::HighScore;
use crate::input::{Action, InputLatch};
use crate::persistence::KeyValueStore;
use crate::render::{RectInstance, Snapshot, build_instances};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, demo_input, tick};
use crate::tuning::Tuning;

pub struct Game<S: KeyValueStore> {
    pub state: GameState,
    pub high_score: HighScore,
    pub settings: Settings,
    pub input: InputLatch,
    /// Attract mode: the autopilot plays and records nothing
    pub demo: bool,
    store: S,
    accumulator: f32,
}

impl<S: KeyValueStore> Game<S> {
    pub fn new(seed: u64, store: S) -> Self {
        Self::with_tuning(seed, Tuning::default(), store)
    }

    pub fn with_tuning(seed: u64, tuning: Tuning, store: S) -> Self {
        let settings = Settings::load(&store);
        Self {
            state: GameState::with_tuning(seed, tuning),
            high_score: HighScore::load(&store),
            input: InputLatch::new(settings.keymap()),
            settings,
            demo: false,
            store,
            accumulator: 0.0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Start a fresh run from the start screen or after game over.
    /// A running demo is abandoned.
    pub fn start(&mut self) -> bool {
        if self.demo {
            self.demo = false;
            self.state.reset();
        }
        self.begin()
    }

    fn begin(&mut self) -> bool {
        if !self.state.start() {
            return false;
        }
        self.input.clear();
        self.accumulator = 0.0;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.accumulator = 0.0;
        self.state.toggle_pause()
    }

    /// Back to the start screen
    pub fn reset(&mut self) {
        self.input.clear();
        self.accumulator = 0.0;
        self.demo = false;
        self.state.reset();
    }

    /// Run the autopilot on a fresh run (attract screen)
    pub fn start_demo(&mut self) -> bool {
        self.demo = true;
        self.state.reset();
        self.begin()
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.input.keymap = settings.keymap();
        settings.save(&mut self.store);
        self.settings = settings;
    }

    pub fn key_down(&mut self, key: &str) {
        if self.input.key_down(key) == Some(Action::Pause) {
            self.toggle_pause();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Window lost focus: drop held keys, optionally pause
    pub fn blur(&mut self) {
        self.input.clear();
        if self.settings.pause_on_blur && self.state.phase == GamePhase::Playing {
            self.toggle_pause();
            log::info!("Auto-paused (window blur)");
        }
    }

    /// Run exactly one tick with the latched (or autopilot) input
    pub fn step(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        let input = if self.demo {
            demo_input(&self.state)
        } else {
            self.input.take_tick_input()
        };
        tick(&mut self.state, &input, SIM_DT);

        if self.state.phase == GamePhase::GameOver {
            self.on_game_over();
        }
    }

    fn on_game_over(&mut self) {
        if self.demo {
            return;
        }
        self.high_score.record(self.state.score, &mut self.store);
    }

    /// Advance by a frame's wall-clock delta (seconds). Returns ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        if self.state.phase != GamePhase::Playing {
            self.accumulator = 0.0;
            return 0;
        }

        self.accumulator += frame_dt.clamp(0.0, 0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT
            && substeps < MAX_SUBSTEPS
            && self.state.phase == GamePhase::Playing
        {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if self.state.phase != GamePhase::Playing {
            self.accumulator = 0.0;
        }
        substeps
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::capture(&self.state, self.high_score.best)
    }

    pub fn instances(&self) -> Vec<RectInstance> {
        build_instances(&self.state)
    }
}
