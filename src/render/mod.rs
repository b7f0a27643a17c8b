//! Render output for the host page
//!
//! The crate does not draw. Each frame it hands out either a serializable
//! [`Snapshot`] or a flat buffer of colored rectangles; both carry everything
//! needed to draw the scene without re-deriving simulation logic.

pub mod instance;
pub mod snapshot;

pub use instance::{RectInstance, Viewport, build_instances};
pub use snapshot::{RunnerView, Snapshot};
