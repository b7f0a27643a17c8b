//! Per-frame view of the session

use glam::Vec2;
use serde::Serialize;

use crate::consts::PLAYER_SIZE;
use crate::sim::{Aabb, GamePhase, GameState, Motion, Obstacle};

#[derive(Debug, Clone, Serialize)]
pub struct RunnerView {
    /// Center position
    pub pos: Vec2,
    /// Nominal size
    pub size: Vec2,
    pub hitbox: Aabb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<Motion>,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub top: RunnerView,
    pub bottom: RunnerView,
    pub top_obstacles: &'a [Obstacle],
    pub bottom_obstacles: &'a [Obstacle],
}

impl<'a> Snapshot<'a> {
    pub fn capture(state: &'a GameState, high_score: u64) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            high_score,
            top: RunnerView {
                pos: state.top.pos,
                size: Vec2::splat(PLAYER_SIZE),
                hitbox: state.top.hitbox(),
                lane: Some(state.top.lane),
                motion: None,
            },
            bottom: RunnerView {
                pos: state.bottom.pos,
                size: Vec2::splat(PLAYER_SIZE),
                hitbox: state.bottom.hitbox(),
                lane: None,
                motion: Some(state.bottom.motion),
            },
            top_obstacles: &state.top_obstacles,
            bottom_obstacles: &state.bottom_obstacles,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
