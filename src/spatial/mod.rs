//! Geometric partitioning of the image plane
//!
//! This module contains spatial-related functionality including:
//! - Cell shapes and representative pixels
//! - Row-major grid tiling for the raster styles
//! - Voronoi region extraction

/// Cell geometry produced by tiling
pub mod cell;
/// Style selection and lazy tiling
pub mod tiler;
/// Voronoi seed generation and region filtering
pub mod voronoi;

pub use cell::{Cell, CellShape, Vertex};
pub use tiler::{Style, TileParams, Tiles, tile};
