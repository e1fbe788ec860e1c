//! Stylized pixelation of raster images
//!
//! The image plane is tiled into circles, squares, rectangles, triangles or
//! Voronoi regions. Each cell is filled with the color of one representative
//! source pixel, optionally replaced by the nearest unused color of a palette.

#![forbid(unsafe_code)]

/// Color resolution, compositing and the render pass
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color distance utilities
pub mod math;
/// Caller-owned state with undo/redo history
pub mod session;
/// Cell geometry and tiling of the image plane
pub mod spatial;

pub use algorithm::{Palette, RenderStats, render, render_with_stats};
pub use io::error::{PixelationError, Result};
pub use session::{History, Session};
pub use spatial::{Cell, CellShape, Style, TileParams, Tiles, Vertex, tile};
