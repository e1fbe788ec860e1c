//! Voronoi regions over random seed points
//!
//! Regions come from the dual of a Delaunay triangulation. Only regions that
//! are fully bounded and lie entirely inside the image become cells; nothing is
//! clipped, so regions along the image border are dropped.

use crate::io::error::{Result, computation_error};
use crate::spatial::cell::{Cell, Vertex};
use rand::{Rng, SeedableRng, rngs::StdRng};
use spade::{DelaunayTriangulation, Point2, Triangulation};

/// Draw `count` integer seed points in `[0, width] × [0, height]`
///
/// Both ends of each range are inclusive. A fixed `seed` makes the points
/// reproducible; `None` seeds the generator from the operating system.
pub fn random_seeds(dimensions: (u32, u32), count: u32, seed: Option<u64>) -> Vec<Vertex> {
    let (width, height) = dimensions;
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    (0..count)
        .map(|_| {
            let x = rng.random_range(0..=width);
            let y = rng.random_range(0..=height);
            Vertex::new(f64::from(x), f64::from(y))
        })
        .collect()
}

/// Build one cell per bounded Voronoi region that fits inside the image
///
/// Duplicate seeds collapse into a single site. Regions are rejected when they
/// are empty, have a vertex at infinity, or have any vertex outside
/// `[0, width) × [0, height)`.
///
/// # Errors
///
/// Returns an error if a seed cannot be inserted into the triangulation
/// (non-finite or out-of-range coordinates)
pub fn voronoi_cells(dimensions: (u32, u32), seeds: &[Vertex]) -> Result<Vec<Cell>> {
    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    for seed in seeds {
        triangulation
            .insert(Point2::new(seed.x, seed.y))
            .map_err(|e| computation_error("voronoi triangulation", &format!("{e:?}")))?;
    }

    let mut cells = Vec::new();
    let mut rejected = 0_usize;

    for face in triangulation.voronoi_faces() {
        let region = face
            .adjacent_edges()
            .map(|edge| {
                edge.from()
                    .position()
                    .map(|position| Vertex::new(position.x, position.y))
            })
            .collect::<Option<Vec<_>>>();

        match region.and_then(|vertices| fitted_cell(dimensions, vertices)) {
            Some(cell) => cells.push(cell),
            None => rejected += 1,
        }
    }

    log::debug!(
        "voronoi: {} sites, {} regions kept, {rejected} rejected",
        triangulation.num_vertices(),
        cells.len()
    );

    Ok(cells)
}

// Unclipped containment: every vertex and the sampled pixel must be on the image
fn fitted_cell(dimensions: (u32, u32), vertices: Vec<Vertex>) -> Option<Cell> {
    let (width, height) = dimensions;
    let (max_x, max_y) = (f64::from(width), f64::from(height));

    let inside = vertices
        .iter()
        .all(|v| (0.0..max_x).contains(&v.x) && (0.0..max_y).contains(&v.y));
    if !inside {
        return None;
    }

    let cell = Cell::polygon(vertices)?;
    let [x, y] = cell.representative;
    (x < width && y < height).then_some(cell)
}
