//! Mathematical utilities for color matching

/// Euclidean color distance
pub mod distance;
