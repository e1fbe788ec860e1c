//! Color resolution, compositing and the render pass

/// Nearest-unused palette matching
pub mod colorizer;
/// Canvas allocation and shape filling
pub mod compositor;
/// Tile, colorize and composite in one call
pub mod executor;
/// Caller-owned candidate colors
pub mod palette;
/// Bitset of palette entries consumed in a pass
pub mod used_colors;

pub use executor::{RenderStats, render, render_with_stats};
pub use palette::Palette;
