//! Data-driven game balance
//!
//! Speeds are in pixels per tick, accelerations in pixels per tick squared,
//! durations in milliseconds of simulation time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Bottom stream scroll speed at session start
    pub bottom_start_speed: f32,
    /// Bottom stream speed gained every tick
    pub bottom_speed_step: f32,
    pub bottom_speed_cap: f32,

    /// Top stream fall speed at session start
    pub top_start_speed: f32,
    pub top_speed_step: f32,
    pub top_speed_cap: f32,

    /// Per-tick chance of attempting a bottom spawn
    pub bottom_spawn_chance: f64,
    /// Distance the bottom stream must scroll between spawns
    pub min_bottom_spacing: f32,

    /// Per-tick chance of attempting a top spawn
    pub top_spawn_chance: f64,
    /// Minimum time between top batches
    pub top_spawn_cooldown_ms: f64,

    /// Initial vertical velocity of a jump (negative is up)
    pub jump_velocity: f32,
    pub gravity: f32,
    /// How long a crawl lasts before reverting to running
    pub crawl_duration_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bottom_start_speed: 5.0,
            bottom_speed_step: 0.002,
            bottom_speed_cap: 12.0,

            top_start_speed: 3.0,
            top_speed_step: 0.001,
            top_speed_cap: 8.0,

            bottom_spawn_chance: 0.015,
            min_bottom_spacing: 300.0,

            top_spawn_chance: 0.015,
            top_spawn_cooldown_ms: 2000.0,

            jump_velocity: -12.0,
            gravity: 0.6,
            crawl_duration_ms: 550.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning overlay; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Balance with both streams frozen at their start speeds and no spawning
    pub fn still() -> Self {
        Self {
            bottom_speed_step: 0.0,
            top_speed_step: 0.0,
            bottom_spawn_chance: 0.0,
            top_spawn_chance: 0.0,
            ..Self::default()
        }
    }
}
