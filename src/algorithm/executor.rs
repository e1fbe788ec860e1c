//! Render pass: tile, colorize and composite

use crate::algorithm::colorizer::Colorizer;
use crate::algorithm::compositor::composite;
use crate::algorithm::palette::Palette;
use crate::io::error::{PixelationError, Result};
use crate::spatial::tiler::{Style, TileParams, tile};
use image::RgbImage;

/// Counters gathered during one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Cells produced by the tiler
    pub cells: usize,
    /// Cells skipped because their representative pixel is off the image
    pub skipped: usize,
    /// Cells that received a distinct palette color
    pub palette_assigned: usize,
    /// Cells that reused the first palette entry after exhaustion
    pub palette_fallbacks: usize,
}

/// Render `source` in `style`, returning the new image and pass statistics
///
/// The used-color set starts empty for every call. Nothing is produced on error.
///
/// # Errors
///
/// Returns an error if:
/// - `source` has zero width or height
/// - A parameter used by `style` is zero
/// - The Voronoi triangulation fails
pub fn render_with_stats(
    source: &RgbImage,
    style: Style,
    params: &TileParams,
    palette: &Palette,
) -> Result<(RgbImage, RenderStats)> {
    let dimensions = source.dimensions();
    if dimensions.0 == 0 || dimensions.1 == 0 {
        return Err(PixelationError::EmptyImage {
            width: dimensions.0,
            height: dimensions.1,
        });
    }

    let tiles = tile(dimensions, style, params)?;
    let mut colorizer = Colorizer::new(palette);
    let mut stats = RenderStats::default();

    let mut painted = Vec::new();
    for cell in tiles {
        stats.cells += 1;
        let [x, y] = cell.representative;
        let Some(&sampled) = source.get_pixel_checked(x, y) else {
            stats.skipped += 1;
            continue;
        };
        let color = colorizer.resolve(sampled);
        painted.push((cell, color));
    }

    stats.palette_assigned = colorizer.assigned();
    stats.palette_fallbacks = colorizer.fallbacks();

    log::debug!(
        "rendered {style:?} {}x{}: {} cells, {} skipped, {} palette colors, {} fallbacks",
        dimensions.0,
        dimensions.1,
        stats.cells,
        stats.skipped,
        stats.palette_assigned,
        stats.palette_fallbacks
    );

    Ok((composite(dimensions, painted), stats))
}

/// Render `source` in `style` with optional palette matching
///
/// # Errors
///
/// Returns an error under the same conditions as [`render_with_stats`]
pub fn render(
    source: &RgbImage,
    style: Style,
    params: &TileParams,
    palette: &Palette,
) -> Result<RgbImage> {
    render_with_stats(source, style, params, palette).map(|(image, _)| image)
}
