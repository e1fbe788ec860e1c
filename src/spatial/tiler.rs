//! Partitioning of the image plane into cells
//!
//! Raster styles walk a fixed-step grid in row-major order starting at the
//! top-left pixel. The last cell of a row or column may extend past the image;
//! drawing is clipped by the compositor, not here.

use crate::io::configuration::{
    DEFAULT_RECT_HEIGHT, DEFAULT_RECT_WIDTH, DEFAULT_SHAPE_SIZE, DEFAULT_VORONOI_POINTS,
    MIN_SHAPE_SIZE,
};
use crate::io::error::{PixelationError, Result, invalid_parameter};
use crate::spatial::cell::Cell;
use crate::spatial::voronoi::{random_seeds, voronoi_cells};
use clap::ValueEnum;

/// Cell shape used to partition the image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Style {
    /// Disks on a grid of `2 × size` steps
    #[default]
    Circle,
    /// Squares of side `size`
    Square,
    /// Rectangles of `width × height`
    Rectangle,
    /// Downward-pointing triangles of side `size`, not tessellated
    Triangle,
    /// Regions of a random Voronoi diagram with `points` seeds
    Voronoi,
}

/// Numeric tiling parameters
///
/// Each style reads only the fields it needs; unused fields are not validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileParams {
    /// Circle radius, square side or triangle side in pixels
    pub size: u32,
    /// Rectangle width in pixels
    pub width: u32,
    /// Rectangle height in pixels
    pub height: u32,
    /// Number of Voronoi seed points
    pub points: u32,
    /// Seed for reproducible Voronoi diagrams
    pub seed: Option<u64>,
}

impl Default for TileParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SHAPE_SIZE,
            width: DEFAULT_RECT_WIDTH,
            height: DEFAULT_RECT_HEIGHT,
            points: DEFAULT_VORONOI_POINTS,
            seed: None,
        }
    }
}

/// Lazy, one-shot sequence of cells
#[derive(Clone, Debug)]
pub enum Tiles {
    /// Row-major walk over a regular grid
    Grid(GridWalk),
    /// Precomputed Voronoi regions in site order
    Voronoi(std::vec::IntoIter<Cell>),
}

impl Iterator for Tiles {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        match self {
            Self::Grid(walk) => walk.next(),
            Self::Voronoi(cells) => cells.next(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum GridShape {
    Circle { radius: u32 },
    Square { side: u32 },
    Rectangle { width: u32, height: u32 },
    Triangle { size: u32 },
}

impl GridShape {
    // Horizontal and vertical distance between consecutive origins
    const fn step(self) -> [u32; 2] {
        match self {
            Self::Circle { radius } => {
                let diameter = radius.saturating_mul(2);
                [diameter, diameter]
            }
            Self::Square { side } => [side, side],
            Self::Rectangle { width, height } => [width, height],
            Self::Triangle { size } => [size, size],
        }
    }

    fn cell_at(self, origin: [u32; 2]) -> Cell {
        match self {
            Self::Circle { radius } => Cell::circle(origin, radius),
            Self::Square { side } => Cell::square(origin, side),
            Self::Rectangle { width, height } => Cell::rectangle(origin, width, height),
            Self::Triangle { size } => Cell::triangle(origin, size),
        }
    }
}

/// Row-major iterator over grid-aligned cells
///
/// Every origin lies inside the image, so every representative pixel can be sampled.
#[derive(Clone, Debug)]
pub struct GridWalk {
    bounds: [u32; 2],
    step: [u32; 2],
    next_origin: Option<[u32; 2]>,
    shape: GridShape,
}

impl GridWalk {
    fn new(dimensions: (u32, u32), shape: GridShape) -> Self {
        let (width, height) = dimensions;
        Self {
            bounds: [width, height],
            step: shape.step(),
            next_origin: (width > 0 && height > 0).then_some([0, 0]),
            shape,
        }
    }

    /// Number of origins along x and y: `ceil(width / step_x)`, `ceil(height / step_y)`
    pub const fn origins_per_axis(&self) -> [u32; 2] {
        [
            self.bounds[0].div_ceil(self.step[0]),
            self.bounds[1].div_ceil(self.step[1]),
        ]
    }
}

impl Iterator for GridWalk {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let origin = self.next_origin?;
        let [x, y] = origin;

        self.next_origin = match x.checked_add(self.step[0]) {
            Some(next_x) if next_x < self.bounds[0] => Some([next_x, y]),
            _ => y
                .checked_add(self.step[1])
                .filter(|&next_y| next_y < self.bounds[1])
                .map(|next_y| [0, next_y]),
        };

        Some(self.shape.cell_at(origin))
    }
}

fn require_positive(parameter: &'static str, value: u32) -> Result<u32> {
    if value < MIN_SHAPE_SIZE {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be at least {MIN_SHAPE_SIZE}"),
        ));
    }
    Ok(value)
}

/// Partition an image of the given `(width, height)` into cells
///
/// Raster styles yield cells lazily in row-major order. Voronoi computes the
/// diagram up front and yields its accepted regions in site order.
///
/// # Errors
///
/// Returns an error if:
/// - Either dimension is zero
/// - A parameter used by `style` is zero
/// - The Voronoi triangulation rejects a seed point
pub fn tile(dimensions: (u32, u32), style: Style, params: &TileParams) -> Result<Tiles> {
    let (width, height) = dimensions;
    if width == 0 || height == 0 {
        return Err(PixelationError::EmptyImage { width, height });
    }

    let shape = match style {
        Style::Circle => GridShape::Circle {
            radius: require_positive("size", params.size)?,
        },
        Style::Square => GridShape::Square {
            side: require_positive("size", params.size)?,
        },
        Style::Rectangle => GridShape::Rectangle {
            width: require_positive("width", params.width)?,
            height: require_positive("height", params.height)?,
        },
        Style::Triangle => GridShape::Triangle {
            size: require_positive("size", params.size)?,
        },
        Style::Voronoi => {
            let points = require_positive("points", params.points)?;
            let seeds = random_seeds(dimensions, points, params.seed);
            return Ok(Tiles::Voronoi(voronoi_cells(dimensions, &seeds)?.into_iter()));
        }
    };

    Ok(Tiles::Grid(GridWalk::new(dimensions, shape)))
}
