//! Explicit editing state for interactive callers
//!
//! Holds what a front end keeps between renders: the loaded image, the
//! palette, the chosen style and a bounded undo/redo history.

/// Session state and render entry point
pub mod context;
/// Bounded undo/redo stack of outputs
pub mod history;

pub use context::Session;
pub use history::History;
