//! Keyboard latch
//!
//! Key events arrive between ticks. Lane changes are edge-triggered (one move
//! per press, auto-repeat ignored) and consumed by the next tick; jump and
//! crawl are level-triggered from whatever is held when the tick runs.

use std::collections::HashSet;

use crate::sim::TickInput;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Crawl,
    Pause,
}

/// Key identifier to action mapping. Accepts both `KeyboardEvent.code`
/// ("ArrowLeft", "KeyA") and `KeyboardEvent.key` ("a", " ") spellings.
#[derive(Debug, Clone, Copy)]
pub struct KeyMap {
    /// Accept WASD as synonyms for the arrows
    pub wasd: bool,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self { wasd: true }
    }
}

impl KeyMap {
    pub fn action(&self, key: &str) -> Option<Action> {
        let action = match key {
            "ArrowLeft" | "Left" => Action::MoveLeft,
            "ArrowRight" | "Right" => Action::MoveRight,
            "ArrowUp" | "Up" | "Space" | " " => Action::Jump,
            "ArrowDown" | "Down" => Action::Crawl,
            "Escape" | "Esc" | "KeyP" | "p" | "P" => Action::Pause,
            _ if self.wasd => match key {
                "KeyA" | "a" | "A" => Action::MoveLeft,
                "KeyD" | "d" | "D" => Action::MoveRight,
                "KeyW" | "w" | "W" => Action::Jump,
                "KeyS" | "s" | "S" => Action::Crawl,
                _ => return None,
            },
            _ => return None,
        };
        Some(action)
    }
}

/// Letter keys are held under one spelling whatever Shift did in between
fn normalize(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

/// Held keys plus pending one-shot lane moves
#[derive(Debug, Default)]
pub struct InputLatch {
    pub keymap: KeyMap,
    held: HashSet<String>,
    pending_left: bool,
    pending_right: bool,
}

impl InputLatch {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            ..Default::default()
        }
    }

    /// Record a key press. Returns the action only on a fresh press
    /// (not on auto-repeat of a key already held).
    pub fn key_down(&mut self, key: &str) -> Option<Action> {
        let action = self.keymap.action(key)?;
        if !self.held.insert(normalize(key)) {
            return None;
        }
        match action {
            Action::MoveLeft => self.pending_left = true,
            Action::MoveRight => self.pending_right = true,
            _ => {}
        }
        Some(action)
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&normalize(key));
    }

    /// Whether any held key maps to `action`
    pub fn is_held(&self, action: Action) -> bool {
        self.held
            .iter()
            .any(|key| self.keymap.action(key) == Some(action))
    }

    /// Build the next tick's input, consuming the lane moves
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            move_left: self.pending_left,
            move_right: self.pending_right,
            jump: self.is_held(Action::Jump),
            crawl: self.is_held(Action::Crawl),
        };
        self.pending_left = false;
        self.pending_right = false;
        input
    }

    /// Forget everything (focus lost, new run)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pending_left = false;
        self.pending_right = false;
    }
}
