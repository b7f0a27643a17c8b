//! Rectangle instances for batched drawing

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::{GameState, Motion, Obstacle, ObstacleKind};

/// Which viewport a rectangle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Viewport {
    Top = 0,
    Bottom = 1,
}

/// One axis-aligned rectangle: top-left, size and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub rect: [f32; 4],
    pub color: [f32; 4],
    pub viewport: u32,
    pub _pad: [u32; 3],
}

impl RectInstance {
    pub fn new(viewport: Viewport, pos: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            rect: [pos.x, pos.y, size.x, size.y],
            color,
            viewport: viewport as u32,
            _pad: [0; 3],
        }
    }

    /// Floats per instance when viewed as a flat `f32` buffer
    pub const FLOATS: usize = std::mem::size_of::<RectInstance>() / 4;
}

/// Colors for game elements
pub mod colors {
    pub const TOP_RUNNER: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const BOTTOM_RUNNER: [f32; 4] = [0.3, 0.6, 1.0, 1.0];
    pub const BOTTOM_RUNNER_CRAWL: [f32; 4] = [0.2, 0.4, 0.8, 1.0];
    pub const BARRIER: [f32; 4] = [0.9, 0.3, 0.3, 1.0];
    pub const PIT: [f32; 4] = [0.1, 0.05, 0.0, 1.0];
    pub const GROUND_BOX: [f32; 4] = [0.7, 0.5, 0.2, 1.0];
    pub const AIR_BRANCH: [f32; 4] = [0.3, 0.6, 0.2, 1.0];
}

fn obstacle_color(kind: ObstacleKind) -> [f32; 4] {
    match kind {
        ObstacleKind::LaneBarrier { .. } => colors::BARRIER,
        ObstacleKind::Pit => colors::PIT,
        ObstacleKind::GroundBox => colors::GROUND_BOX,
        ObstacleKind::AirBranch => colors::AIR_BRANCH,
    }
}

fn obstacle_instance(viewport: Viewport, obstacle: &Obstacle) -> RectInstance {
    RectInstance::new(viewport, obstacle.pos, obstacle.size, obstacle_color(obstacle.kind))
}

/// Obstacles first, runners last so they draw on top
pub fn build_instances(state: &GameState) -> Vec<RectInstance> {
    let mut out =
        Vec::with_capacity(state.top_obstacles.len() + state.bottom_obstacles.len() + 2);

    out.extend(
        state
            .top_obstacles
            .iter()
            .map(|o| obstacle_instance(Viewport::Top, o)),
    );
    out.extend(
        state
            .bottom_obstacles
            .iter()
            .map(|o| obstacle_instance(Viewport::Bottom, o)),
    );

    let top = state.top.hitbox();
    out.push(RectInstance::new(Viewport::Top, top.min, top.size(), colors::TOP_RUNNER));

    // Draw the bottom runner as its hitbox so the crawl profile is visible
    let bottom = state.bottom.hitbox();
    let color = match state.bottom.motion {
        Motion::Crawling { .. } => colors::BOTTOM_RUNNER_CRAWL,
        _ => colors::BOTTOM_RUNNER,
    };
    out.push(RectInstance::new(Viewport::Bottom, bottom.min, bottom.size(), color));

    out
}
