//! Platform abstraction layer
//!
//! The browser build exposes the game to the host page through
//! `wasm-bindgen`; the page draws and forwards input. Natively the crate is
//! driven directly through [`crate::Game`].

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a new session
pub fn fresh_seed() -> u64 {
    rand::random()
}
