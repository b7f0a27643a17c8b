//! Obstacle generation for both streams
//!
//! Spawning is probabilistic per tick and gated by spacing: the bottom
//! stream by how far it has scrolled since the last obstacle, the top stream
//! by a cooldown on the simulation clock.

use rand::Rng;
use rand::seq::index;

use super::state::{GameEvent, GameState, Obstacle, ObstacleKind, Stream};
use crate::consts::LANES;

/// Pick a bottom obstacle kind from one uniform draw split into thirds
pub fn bottom_kind_for_roll(roll: f64) -> ObstacleKind {
    let kinds = ObstacleKind::BOTTOM_KINDS;
    let slot = (roll * kinds.len() as f64) as usize;
    kinds[slot.min(kinds.len() - 1)]
}

/// Lanes for one top batch: 1..LANES-1 distinct lanes, so one is always open
pub fn generate_top_batch<R: Rng + ?Sized>(rng: &mut R) -> Vec<usize> {
    let count = rng.random_range(1..LANES);
    let mut lanes = index::sample(rng, LANES, count).into_vec();
    lanes.sort_unstable();
    lanes
}

/// Maybe add one obstacle to the bottom stream
pub fn maybe_spawn_bottom(state: &mut GameState) -> bool {
    if state.rng.random::<f64>() >= state.tuning.bottom_spawn_chance {
        return false;
    }
    if state.bottom_scroll_since_spawn <= state.tuning.min_bottom_spacing {
        return false;
    }

    let kind = bottom_kind_for_roll(state.rng.random::<f64>());
    let id = state.next_entity_id();
    state.bottom_obstacles.push(Obstacle::bottom(id, kind));
    state.bottom_scroll_since_spawn = 0.0;
    state.events.push(GameEvent::Spawned {
        stream: Stream::Bottom,
        count: 1,
    });
    log::debug!("Spawned {:?} (id {})", kind, id);
    true
}

/// Maybe drop a batch of lane barriers into the top stream
pub fn maybe_spawn_top(state: &mut GameState) -> bool {
    if state.rng.random::<f64>() >= state.tuning.top_spawn_chance {
        return false;
    }
    if let Some(last) = state.last_top_spawn_ms
        && state.time_ms - last < state.tuning.top_spawn_cooldown_ms
    {
        return false;
    }

    let lanes = generate_top_batch(&mut state.rng);
    for &lane in &lanes {
        let id = state.next_entity_id();
        state.top_obstacles.push(Obstacle::lane_barrier(id, lane));
    }
    state.last_top_spawn_ms = Some(state.time_ms);
    state.events.push(GameEvent::Spawned {
        stream: Stream::Top,
        count: lanes.len(),
    });
    log::debug!("Spawned barriers in lanes {:?}", lanes);
    true
}
