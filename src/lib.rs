//! Split Runner - two arcade runners on one clock
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (spawning, physics, collisions, phases)
//! - `input`: Key latch turning key events into per-tick input
//! - `game`: Session owner driving ticks and the high score
//! - `render`: Snapshot and flat rectangle buffer for the host renderer
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Width shared by both viewports
    pub const GAME_WIDTH: f32 = 800.0;
    /// Top viewport height (lane runner)
    pub const TOP_HEIGHT: f32 = 300.0;
    /// Bottom viewport height (ground runner)
    pub const BOTTOM_HEIGHT: f32 = 300.0;
    /// Ground surface in the bottom viewport
    pub const GROUND_LINE: f32 = 250.0;

    /// Number of lanes in the top viewport
    pub const LANES: usize = 5;
    pub const LANE_WIDTH: f32 = GAME_WIDTH / LANES as f32;

    /// Both runners are nominally a square this size
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Resting center y of the bottom runner
    pub const GROUND_Y: f32 = GROUND_LINE - PLAYER_SIZE / 2.0;
    /// Fixed center y of the top runner
    pub const TOP_PLAYER_Y: f32 = TOP_HEIGHT - 50.0;
    /// Fixed center x of the bottom runner
    pub const BOTTOM_PLAYER_X: f32 = 100.0;
    /// Crawling keeps only the lower part of the box
    pub const CRAWL_HEIGHT: f32 = PLAYER_SIZE / 2.0;

    /// Lane barrier size (top stream)
    pub const BARRIER_WIDTH: f32 = LANE_WIDTH * 0.6;
    pub const BARRIER_HEIGHT: f32 = 30.0;
}

/// Horizontal center of a lane
#[inline]
pub fn lane_center(lane: usize) -> f32 {
    use consts::LANE_WIDTH;
    lane as f32 * LANE_WIDTH + LANE_WIDTH / 2.0
}
