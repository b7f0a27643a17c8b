//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only
//! - RNG owned by the session
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::demo_input;
pub use collision::{Aabb, check_collisions, first_hit};
pub use spawn::{bottom_kind_for_roll, generate_top_batch, maybe_spawn_bottom, maybe_spawn_top};
pub use state::{
    BottomRunner, GameEvent, GamePhase, GameState, Motion, Obstacle, ObstacleKind, Stream,
    TopRunner,
};
pub use tick::{TickInput, tick};
