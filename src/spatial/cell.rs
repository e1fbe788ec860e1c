//! Geometric cells produced by the tiler
//!
//! A cell carries no color. It pairs a shape in image-plane coordinates with
//! the single source pixel sampled to color it.

/// Point in image-plane coordinates with sub-pixel precision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Vertex {
    /// Create a vertex from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Nearest integer pixel as signed coordinates
    pub fn rounded(self) -> [i32; 2] {
        [self.x.round() as i32, self.y.round() as i32]
    }
}

/// Region covered by a single cell
#[derive(Clone, Debug, PartialEq)]
pub enum CellShape {
    /// Disk inscribed in the square `center ± radius`
    Circle {
        /// Center pixel `[x, y]`
        center: [u32; 2],
        /// Radius in pixels
        radius: u32,
    },
    /// Axis-aligned square anchored at its top-left corner
    Square {
        /// Top-left pixel `[x, y]`
        origin: [u32; 2],
        /// Side length in pixels
        side: u32,
    },
    /// Axis-aligned rectangle anchored at its top-left corner
    Rectangle {
        /// Top-left pixel `[x, y]`
        origin: [u32; 2],
        /// Extent along x in pixels
        width: u32,
        /// Extent along y in pixels
        height: u32,
    },
    /// Triangle given by its three corners
    Triangle {
        /// Corners in drawing order
        vertices: [Vertex; 3],
    },
    /// Closed polygon given by its ordered corners (Voronoi regions)
    Polygon {
        /// Corners in drawing order, without a repeated closing vertex
        vertices: Vec<Vertex>,
    },
}

/// Tiler output: a shape and the source pixel that determines its color
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Geometry to fill
    pub shape: CellShape,
    /// Source pixel `[x, y]` sampled for the base color
    pub representative: [u32; 2],
}

impl Cell {
    /// Circle whose bounding square starts at `origin`
    pub const fn circle(origin: [u32; 2], radius: u32) -> Self {
        let [x, y] = origin;
        Self {
            shape: CellShape::Circle {
                center: [x.saturating_add(radius), y.saturating_add(radius)],
                radius,
            },
            representative: origin,
        }
    }

    /// Square with its top-left corner at `origin`
    pub const fn square(origin: [u32; 2], side: u32) -> Self {
        Self {
            shape: CellShape::Square { origin, side },
            representative: origin,
        }
    }

    /// Rectangle with its top-left corner at `origin`
    pub const fn rectangle(origin: [u32; 2], width: u32, height: u32) -> Self {
        Self {
            shape: CellShape::Rectangle {
                origin,
                width,
                height,
            },
            representative: origin,
        }
    }

    /// Downward-pointing triangle spanning `size` pixels from `origin`
    ///
    /// Corners are `(x, y)`, `(x + size, y)` and `(x + size / 2, y + size)`.
    pub fn triangle(origin: [u32; 2], size: u32) -> Self {
        let x = f64::from(origin[0]);
        let y = f64::from(origin[1]);
        let size = f64::from(size);
        Self {
            shape: CellShape::Triangle {
                vertices: [
                    Vertex::new(x, y),
                    Vertex::new(x + size, y),
                    Vertex::new(x + size / 2.0, y + size),
                ],
            },
            representative: origin,
        }
    }

    /// Polygon sampled at its first vertex
    ///
    /// Returns `None` for an empty vertex list or when the first vertex rounds
    /// to a negative pixel.
    pub fn polygon(vertices: Vec<Vertex>) -> Option<Self> {
        let [x, y] = vertices.first()?.rounded();
        let representative = [u32::try_from(x).ok()?, u32::try_from(y).ok()?];
        Some(Self {
            shape: CellShape::Polygon { vertices },
            representative,
        })
    }
}
