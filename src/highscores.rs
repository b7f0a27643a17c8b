//! High score
//!
//! A single best score, persisted through a [`KeyValueStore`]. Missing or
//! unreadable values count as zero.

use crate::persistence::KeyValueStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "split_runner_highscore";

    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would set a new record
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Load the stored best, falling back to zero
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = match store.get(Self::STORAGE_KEY) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(best) => {
                    log::info!("Loaded high score {}", best);
                    best
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable high score {:?}: {}", raw, e);
                    0
                }
            },
            None => {
                log::info!("No high score found, starting fresh");
                0
            }
        };
        Self { best }
    }

    /// Record a finished run. Persists and returns true only on a new record.
    pub fn record(&mut self, score: u64, store: &mut dyn KeyValueStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        store.set(Self::STORAGE_KEY, &score.to_string());
        log::info!("New high score: {}", score);
        true
    }
}
