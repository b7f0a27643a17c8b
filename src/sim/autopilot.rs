//! Demo mode: a simple look-ahead bot for the attract screen and the
//! headless runner. It reads the session and produces the same input a
//! player would.

use super::state::{GameState, ObstacleKind};
use super::tick::TickInput;
use crate::consts::*;

/// How far above the top runner a barrier counts as incoming
const TOP_LOOKAHEAD: f32 = 160.0;
/// Ticks of warning before reacting to a bottom obstacle
const JUMP_LEAD_TICKS: f32 = 6.0;
const CRAWL_LEAD_TICKS: f32 = 4.0;

/// Lanes with a barrier about to reach the top runner
fn threatened_lanes(state: &GameState) -> [bool; LANES] {
    let mut threatened = [false; LANES];
    let runner_top = TOP_PLAYER_Y - PLAYER_SIZE / 2.0;
    let runner_bottom = TOP_PLAYER_Y + PLAYER_SIZE / 2.0;
    for obstacle in &state.top_obstacles {
        if let ObstacleKind::LaneBarrier { lane } = obstacle.kind {
            let bottom_edge = obstacle.pos.y + obstacle.size.y;
            if bottom_edge > runner_top - TOP_LOOKAHEAD && obstacle.pos.y < runner_bottom {
                threatened[lane] = true;
            }
        }
    }
    threatened
}

/// Nearest open lane by distance; ties go left
fn nearest_open_lane(threatened: &[bool; LANES], from: usize) -> Option<usize> {
    (0..LANES)
        .filter(|&lane| !threatened[lane])
        .min_by_key(|&lane| lane.abs_diff(from))
}

/// Produce this tick's input for the session
pub fn demo_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    let threatened = threatened_lanes(state);
    let lane = state.top.lane;
    if threatened[lane] {
        if let Some(target) = nearest_open_lane(&threatened, lane) {
            input.move_left = target < lane;
            input.move_right = target > lane;
        }
    }

    let runner_front = state.bottom.pos.x + PLAYER_SIZE / 2.0;
    let next = state
        .bottom_obstacles
        .iter()
        .filter(|o| o.pos.x + o.size.x > state.bottom.pos.x - PLAYER_SIZE / 2.0)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    if let Some(obstacle) = next {
        let gap = obstacle.pos.x - runner_front;
        match obstacle.kind {
            ObstacleKind::AirBranch => {
                input.crawl = gap < state.bottom_speed * CRAWL_LEAD_TICKS;
            }
            _ => {
                input.jump = gap < state.bottom_speed * JUMP_LEAD_TICKS;
            }
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, GamePhase, Obstacle, TopRunner};
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    #[test]
    fn test_dodges_incoming_barrier() {
        let mut state = GameState::with_tuning(9, Tuning::still());
        state.start();
        state.top = TopRunner::in_lane(2);
        let mut barrier = Obstacle::lane_barrier(1, 2);
        barrier.pos.y = TOP_PLAYER_Y - 100.0;
        state.top_obstacles.push(barrier);

        let input = demo_input(&state);
        assert!(input.move_left, "ties go to the left lane");
        assert!(!input.move_right);
    }

    #[test]
    fn test_crawls_for_branch_jumps_for_box() {
        let mut state = GameState::with_tuning(9, Tuning::still());
        state.start();
        let mut branch = Obstacle::bottom(1, ObstacleKind::AirBranch);
        branch.pos.x = BOTTOM_PLAYER_X + PLAYER_SIZE / 2.0 + 5.0;
        state.bottom_obstacles.push(branch);
        let input = demo_input(&state);
        assert!(input.crawl && !input.jump);

        state.bottom_obstacles[0] = Obstacle::bottom(2, ObstacleKind::GroundBox);
        state.bottom_obstacles[0].pos.x = BOTTOM_PLAYER_X + PLAYER_SIZE / 2.0 + 5.0;
        let input = demo_input(&state);
        assert!(input.jump && !input.crawl);
    }

    #[test]
    fn test_clears_box_then_branch() {
        let mut state = GameState::with_tuning(2024, Tuning::still());
        state.start();
        let speed = state.bottom_speed;
        state
            .bottom_obstacles
            .push(Obstacle::bottom(1, ObstacleKind::GroundBox));
        let mut branch = Obstacle::bottom(2, ObstacleKind::AirBranch);
        // Arrives well after the jump over the box has landed
        branch.pos.x += speed * 60.0;
        state.bottom_obstacles.push(branch);

        let mut jumped = false;
        let mut crawled = false;
        for _ in 0..400 {
            let input = demo_input(&state);
            tick(&mut state, &input, SIM_DT);
            jumped |= state.events.contains(&GameEvent::Jumped);
            crawled |= state.events.contains(&GameEvent::CrawlStarted);
            assert_eq!(state.phase, GamePhase::Playing);
        }
        assert!(jumped, "box needs a jump");
        assert!(crawled, "branch needs a crawl");
        assert!(state.bottom_obstacles.is_empty());
    }
}
