//! Split Runner entry point
//!
//! The playable build is the wasm library driven by the host page. Natively
//! this runs a headless autopilot session and reports how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use split_runner::consts::SIM_DT;
    use split_runner::persistence::MemoryStore;
    use split_runner::platform::fresh_seed;
    use split_runner::sim::{GameEvent, GamePhase, Stream};
    use split_runner::{Game, Tuning};

    env_logger::init();
    log::info!("Split Runner (native) starting...");
    log::info!("Native mode runs the autopilot headless - serve the wasm build to play");

    let tuning = load_tuning();
    let seed = fresh_seed();
    let mut game = Game::with_tuning(seed, tuning, MemoryStore::new());
    game.start_demo();

    // Two simulated minutes at most
    let max_ticks = (120.0 / SIM_DT) as u64;
    let mut jumps = 0u32;
    let mut crawls = 0u32;
    let mut crashed_in = None;
    while game.phase() == GamePhase::Playing && game.state.time_ticks < max_ticks {
        game.step();
        for event in &game.state.events {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::CrawlStarted => crawls += 1,
                GameEvent::Collision { stream } => crashed_in = Some(*stream),
                _ => {}
            }
        }
    }

    let ended = match crashed_in {
        Some(Stream::Top) => "hit a lane barrier",
        Some(Stream::Bottom) => "hit a ground obstacle",
        None => "survived",
    };
    println!(
        "seed {}: {} after {} ticks, score {} ({} jumps, {} crawls)",
        seed, ended, game.state.time_ticks, game.state.score, jumps, crawls
    );
}

/// Tuning overlay from the file named by `SPLIT_RUNNER_TUNING`, if any
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> split_runner::Tuning {
    use split_runner::Tuning;

    let Ok(path) = std::env::var("SPLIT_RUNNER_TUNING") else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring bad tuning in {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Cannot read {}: {}", path, e);
            Tuning::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
