//! Fixed timestep simulation tick
//!
//! One call advances the whole session by one step. Nothing else mutates a
//! playing session, so every read inside a tick sees a consistent snapshot.

use super::collision::check_collisions;
use super::spawn::{maybe_spawn_bottom, maybe_spawn_top};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// One lane left (edge-triggered, already consumed by the latch)
    pub move_left: bool,
    /// One lane right (edge-triggered)
    pub move_right: bool,
    /// Jump key held
    pub jump: bool,
    /// Crawl key held
    pub crawl: bool,
}

/// Advance the game state by one fixed timestep (`dt` in seconds)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Paused and finished sessions are frozen
    if state.phase != GamePhase::Playing {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;
    state.time_ms += f64::from(dt) * 1000.0;

    advance_obstacles(state);
    apply_runner_input(state, input);

    if state.bottom.integrate(state.tuning.gravity) {
        state.events.push(GameEvent::Landed);
    }

    apply_lane_change(state, input);

    maybe_spawn_bottom(state);
    maybe_spawn_top(state);

    state.score += 1;

    let t = &state.tuning;
    state.bottom_speed = (state.bottom_speed + t.bottom_speed_step).min(t.bottom_speed_cap);
    state.top_speed = (state.top_speed + t.top_speed_step).min(t.top_speed_cap);

    if let Some(stream) = check_collisions(state) {
        state.end_run(stream);
    }
}

/// Scroll both streams and drop whatever has left the viewport
fn advance_obstacles(state: &mut GameState) {
    let bottom_speed = state.bottom_speed;
    for obstacle in &mut state.bottom_obstacles {
        obstacle.pos.x -= bottom_speed;
    }
    state
        .bottom_obstacles
        .retain(|o| o.pos.x + o.size.x > 0.0);
    state.bottom_scroll_since_spawn += bottom_speed;

    let top_speed = state.top_speed;
    for obstacle in &mut state.top_obstacles {
        obstacle.pos.y += top_speed;
    }
    state.top_obstacles.retain(|o| o.pos.y < TOP_HEIGHT);
}

/// Crawl expiry, then jump/crawl starts from held keys
fn apply_runner_input(state: &mut GameState, input: &TickInput) {
    let now = state.time_ms;
    if state.bottom.expire_crawl(now) {
        state.events.push(GameEvent::CrawlEnded);
    }

    if input.jump && state.bottom.start_jump(state.tuning.jump_velocity) {
        state.events.push(GameEvent::Jumped);
    } else if input.crawl
        && state
            .bottom
            .start_crawl(now + state.tuning.crawl_duration_ms)
    {
        state.events.push(GameEvent::CrawlStarted);
    }
}

fn apply_lane_change(state: &mut GameState, input: &TickInput) {
    let dir = i32::from(input.move_right) - i32::from(input.move_left);
    if dir != 0 && state.top.shift(dir) {
        state.events.push(GameEvent::LaneChanged {
            lane: state.top.lane,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane_center;
    use crate::sim::state::{Motion, Obstacle, ObstacleKind, Stream, TopRunner};
    use crate::tuning::Tuning;

    fn playing(tuning: Tuning) -> GameState {
        let mut state = GameState::with_tuning(12345, tuning);
        state.start();
        state
    }

    #[test]
    fn test_idle_does_not_tick() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_score_increments_once_per_tick() {
        let mut state = playing(Tuning::still());
        for expected in 1..=120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert_eq!(state.score, expected);
        }
    }

    #[test]
    fn test_paused_session_is_frozen() {
        let mut state = playing(Tuning::default());
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        state.toggle_pause();
        let score = state.score;
        let clock = state.time_ms;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.score, score);
        assert_eq!(state.time_ms, clock);

        state.toggle_pause();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, score + 1);
    }

    #[test]
    fn test_jump_returns_exactly_to_ground() {
        let mut state = playing(Tuning::still());
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, SIM_DT);
        assert_eq!(state.bottom.motion, Motion::Jumping);
        assert!(state.events.contains(&GameEvent::Jumped));
        let v0 = state.tuning.jump_velocity;
        assert_eq!(state.bottom.pos.y, GROUND_Y + v0);
        assert_eq!(state.bottom.vy, v0 + state.tuning.gravity);

        let mut ticks = 1;
        let mut apex = state.bottom.pos.y;
        while state.bottom.motion == Motion::Jumping {
            tick(&mut state, &TickInput::default(), SIM_DT);
            apex = apex.min(state.bottom.pos.y);
            assert!(state.bottom.pos.y <= GROUND_Y);
            ticks += 1;
            assert!(ticks < 100, "jump never landed");
        }
        assert!(apex < GROUND_Y - 100.0);
        assert_eq!(state.bottom.pos.y, GROUND_Y);
        assert_eq!(state.bottom.vy, 0.0);
        assert_eq!(state.bottom.motion, Motion::Running);
    }

    #[test]
    fn test_holding_jump_does_not_double_jump() {
        let mut state = playing(Tuning::still());
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, SIM_DT);
        tick(&mut state, &jump, SIM_DT);
        let jumps = state.events.iter().filter(|e| **e == GameEvent::Jumped).count();
        assert_eq!(jumps, 0);
        assert!(state.bottom.vy > state.tuning.jump_velocity);
    }

    #[test]
    fn test_crawl_reverts_without_input() {
        let mut state = playing(Tuning::still());
        let crawl = TickInput {
            crawl: true,
            ..Default::default()
        };
        tick(&mut state, &crawl, SIM_DT);
        assert!(state.bottom.is_crawling());

        let duration_ticks = (state.tuning.crawl_duration_ms / (f64::from(SIM_DT) * 1000.0)).ceil() as u32;
        for _ in 0..duration_ticks - 1 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert!(state.bottom.is_crawling());
        }
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.bottom.motion, Motion::Running);
        assert!(state.events.contains(&GameEvent::CrawlEnded));
    }

    #[test]
    fn test_crawl_deadline_survives_pause() {
        let mut state = playing(Tuning::still());
        let crawl = TickInput {
            crawl: true,
            ..Default::default()
        };
        tick(&mut state, &crawl, SIM_DT);
        state.toggle_pause();
        for _ in 0..1000 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.bottom.is_crawling());
    }

    #[test]
    fn test_lane_change_moves_one_lane() {
        let mut state = playing(Tuning::still());
        state.top = TopRunner::in_lane(2);
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &left, SIM_DT);
        assert_eq!(state.top.lane, 1);
        assert_eq!(state.top.pos.x, lane_center(1));
        assert!(state.events.contains(&GameEvent::LaneChanged { lane: 1 }));

        // Both directions cancel
        let both = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &both, SIM_DT);
        assert_eq!(state.top.lane, 1);

        tick(&mut state, &left, SIM_DT);
        tick(&mut state, &left, SIM_DT);
        assert_eq!(state.top.lane, 0);
    }

    #[test]
    fn test_bottom_obstacle_leaves_after_expected_ticks() {
        let mut state = playing(Tuning::still());
        let mut pit = Obstacle::bottom(99, ObstacleKind::Pit);
        // Out of the runner's way
        pit.pos.y = -500.0;
        let width = pit.size.x;
        state.bottom_obstacles.push(pit);

        let expected = ((GAME_WIDTH + width) / state.bottom_speed).ceil() as u32;
        for _ in 0..expected - 1 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert_eq!(state.bottom_obstacles.len(), 1);
        }
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.bottom_obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_top_obstacle_falls_and_leaves() {
        let mut state = playing(Tuning::still());
        let lane = (state.top.lane + 1) % crate::consts::LANES;
        state.top_obstacles.push(Obstacle::lane_barrier(1, lane));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.top_obstacles[0].pos.y, -BARRIER_HEIGHT + state.top_speed);

        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.top_obstacles.is_empty());
    }

    #[test]
    fn test_speeds_ramp_to_caps() {
        let tuning = Tuning {
            bottom_spawn_chance: 0.0,
            top_spawn_chance: 0.0,
            bottom_speed_step: 1.0,
            top_speed_step: 0.5,
            ..Tuning::default()
        };
        let mut state = playing(tuning);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.bottom_speed, state.tuning.bottom_start_speed + 1.0);
        assert_eq!(state.top_speed, state.tuning.top_start_speed + 0.5);
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.bottom_speed, state.tuning.bottom_speed_cap);
        assert_eq!(state.top_speed, state.tuning.top_speed_cap);
    }

    #[test]
    fn test_collision_ends_run_and_freezes() {
        let mut state = playing(Tuning::still());
        let mut crate_box = Obstacle::bottom(7, ObstacleKind::GroundBox);
        crate_box.pos.x = BOTTOM_PLAYER_X + state.bottom_speed;
        state.bottom_obstacles.push(crate_box);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::Collision {
            stream: Stream::Bottom
        }));

        let score = state.score;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_crawl_passes_under_branch() {
        let mut state = playing(Tuning::still());
        let mut branch = Obstacle::bottom(7, ObstacleKind::AirBranch);
        branch.pos.x = BOTTOM_PLAYER_X + state.bottom_speed;
        state.bottom_obstacles.push(branch);

        let crawl = TickInput {
            crawl: true,
            ..Default::default()
        };
        tick(&mut state, &crawl, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_default_tuning_eventually_spawns_both_streams() {
        let mut state = playing(Tuning::default());
        let mut top = false;
        let mut bottom = false;
        for _ in 0..5000 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            for event in &state.events {
                match event {
                    GameEvent::Spawned { stream: Stream::Top, .. } => top = true,
                    GameEvent::Spawned { stream: Stream::Bottom, .. } => bottom = true,
                    _ => {}
                }
            }
            if state.phase == GamePhase::GameOver {
                state.start();
            }
        }
        assert!(top && bottom);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(Tuning::default());
        let mut state2 = playing(Tuning::default());
        let inputs = [
            TickInput::default(),
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput {
                move_right: true,
                ..Default::default()
            },
        ];
        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.top_obstacles.len(), state2.top_obstacles.len());
        assert_eq!(state1.bottom_obstacles.len(), state2.bottom_obstacles.len());
    }
}
