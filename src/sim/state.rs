//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; the host only
//! touches it through the phase actions and [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lane_center;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Frozen, resumable without reset
    Paused,
    /// Run ended by a collision
    GameOver,
}

/// The two independent obstacle streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    /// Lane runner, obstacles fall downward
    Top,
    /// Ground runner, obstacles scroll leftward
    Bottom,
}

/// Bottom runner motion state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    Running,
    Jumping,
    /// Lowered profile until the sim clock reaches `until_ms`
    Crawling { until_ms: f64 },
}

/// Things that happened during the last tick (for audio/effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    CrawlStarted,
    CrawlEnded,
    LaneChanged { lane: usize },
    Spawned { stream: Stream, count: usize },
    Collision { stream: Stream },
}

/// The lane runner in the top viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopRunner {
    pub pos: Vec2,
    pub lane: usize,
}

impl Default for TopRunner {
    fn default() -> Self {
        Self::in_lane(LANES / 2)
    }
}

impl TopRunner {
    pub fn in_lane(lane: usize) -> Self {
        let lane = lane.min(LANES - 1);
        Self {
            pos: Vec2::new(lane_center(lane), TOP_PLAYER_Y),
            lane,
        }
    }

    /// Shift by one lane (negative is left). Returns false at the edges.
    pub fn shift(&mut self, dir: i32) -> bool {
        let target = (self.lane as i32 + dir.signum()).clamp(0, LANES as i32 - 1) as usize;
        if target == self.lane {
            return false;
        }
        self.lane = target;
        self.pos.x = lane_center(target);
        true
    }
}

/// The jumping/crawling runner in the bottom viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BottomRunner {
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick (negative is up)
    pub vy: f32,
    pub motion: Motion,
}

impl Default for BottomRunner {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BOTTOM_PLAYER_X, GROUND_Y),
            vy: 0.0,
            motion: Motion::Running,
        }
    }
}

impl BottomRunner {
    pub fn on_ground(&self) -> bool {
        (self.pos.y - GROUND_Y).abs() < 0.5
    }

    pub fn is_crawling(&self) -> bool {
        matches!(self.motion, Motion::Crawling { .. })
    }

    /// Start a jump if running on the ground
    pub fn start_jump(&mut self, velocity: f32) -> bool {
        if self.motion != Motion::Running || !self.on_ground() {
            return false;
        }
        self.motion = Motion::Jumping;
        self.vy = velocity;
        true
    }

    /// Start a crawl lasting until `until_ms` if running
    pub fn start_crawl(&mut self, until_ms: f64) -> bool {
        if self.motion != Motion::Running {
            return false;
        }
        self.motion = Motion::Crawling { until_ms };
        true
    }

    /// Revert an expired crawl. Returns true if it ended.
    pub fn expire_crawl(&mut self, now_ms: f64) -> bool {
        match self.motion {
            Motion::Crawling { until_ms } if now_ms >= until_ms => {
                self.motion = Motion::Running;
                true
            }
            _ => false,
        }
    }

    /// Integrate one tick of jump physics. Returns true on landing.
    pub fn integrate(&mut self, gravity: f32) -> bool {
        if self.motion != Motion::Jumping {
            return false;
        }
        self.pos.y += self.vy;
        self.vy += gravity;
        if self.pos.y >= GROUND_Y {
            self.pos.y = GROUND_Y;
            self.vy = 0.0;
            self.motion = Motion::Running;
            return true;
        }
        false
    }
}

/// Obstacle types; each fixes the obstacle's extent at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Top stream barrier occupying one lane
    LaneBarrier { lane: usize },
    /// Wide and shallow, jump over it
    Pit,
    /// Tall, jump over it
    GroundBox,
    /// Elevated, crawl under it
    AirBranch,
}

impl ObstacleKind {
    pub const BOTTOM_KINDS: [ObstacleKind; 3] =
        [ObstacleKind::Pit, ObstacleKind::GroundBox, ObstacleKind::AirBranch];

    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::LaneBarrier { .. } => Vec2::new(BARRIER_WIDTH, BARRIER_HEIGHT),
            ObstacleKind::Pit => Vec2::new(70.0, 20.0),
            ObstacleKind::GroundBox => Vec2::new(30.0, 50.0),
            ObstacleKind::AirBranch => Vec2::new(80.0, 30.0),
        }
    }

    /// Gap between the ground line and the obstacle's bottom edge
    pub fn ground_offset(&self) -> f32 {
        match self {
            // Clears the crawl hitbox by 2px, still hits a standing runner
            ObstacleKind::AirBranch => CRAWL_HEIGHT + 2.0,
            _ => 0.0,
        }
    }

    pub fn stream(&self) -> Stream {
        match self {
            ObstacleKind::LaneBarrier { .. } => Stream::Top,
            _ => Stream::Bottom,
        }
    }
}

/// An obstacle entity; `pos` is the top-left corner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// A bottom-stream obstacle entering at the right edge
    pub fn bottom(id: u32, kind: ObstacleKind) -> Self {
        let size = kind.size();
        Self {
            id,
            kind,
            pos: Vec2::new(GAME_WIDTH, GROUND_LINE - kind.ground_offset() - size.y),
            size,
        }
    }

    /// A lane barrier just above the top edge, centered on its lane
    pub fn lane_barrier(id: u32, lane: usize) -> Self {
        let kind = ObstacleKind::LaneBarrier { lane };
        let size = kind.size();
        Self {
            id,
            kind,
            pos: Vec2::new(lane_center(lane) - size.x / 2.0, -size.y),
            size,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation clock; stops while paused
    pub time_ms: f64,
    pub top: TopRunner,
    pub bottom: BottomRunner,
    /// Top stream obstacles in spawn order
    pub top_obstacles: Vec<Obstacle>,
    /// Bottom stream obstacles in spawn order
    pub bottom_obstacles: Vec<Obstacle>,
    pub top_speed: f32,
    pub bottom_speed: f32,
    /// Sim clock at the last top batch
    pub last_top_spawn_ms: Option<f64>,
    /// Distance scrolled since the last bottom spawn
    pub bottom_scroll_since_spawn: f32,
    pub tuning: Tuning,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle session with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            time_ms: 0.0,
            top: TopRunner::default(),
            bottom: BottomRunner::default(),
            top_obstacles: Vec::new(),
            bottom_obstacles: Vec::new(),
            top_speed: tuning.top_start_speed,
            bottom_speed: tuning.bottom_start_speed,
            last_top_spawn_ms: None,
            bottom_scroll_since_spawn: f32::INFINITY,
            tuning,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put every per-run value back to its initial state.
    /// Tuning and the RNG stream carry over.
    fn clear_run(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.time_ms = 0.0;
        self.top = TopRunner::default();
        self.bottom = BottomRunner::default();
        self.top_obstacles.clear();
        self.bottom_obstacles.clear();
        self.top_speed = self.tuning.top_start_speed;
        self.bottom_speed = self.tuning.bottom_start_speed;
        self.last_top_spawn_ms = None;
        self.bottom_scroll_since_spawn = f32::INFINITY;
        self.events.clear();
        self.next_id = 1;
    }

    /// Start (or restart after game over) with a fresh run.
    /// Returns false if already playing or paused.
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                self.clear_run();
                self.phase = GamePhase::Playing;
                log::info!("Run started");
                true
            }
            GamePhase::Playing | GamePhase::Paused => false,
        }
    }

    /// Playing <-> Paused; other phases ignore it
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            _ => return false,
        };
        log::info!("Phase -> {:?}", self.phase);
        true
    }

    /// Back to the start screen from anywhere
    pub fn reset(&mut self) {
        self.clear_run();
        self.phase = GamePhase::Idle;
    }

    /// Collision ends the run; the session is frozen from here on
    pub fn end_run(&mut self, stream: Stream) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::Collision { stream });
        log::info!("Game over ({:?} stream) at score {}", stream, self.score);
    }
}
