//! Caller-owned editing state around the render pass

use crate::algorithm::executor::render;
use crate::algorithm::palette::Palette;
use crate::io::error::{PixelationError, Result};
use crate::io::image::{load_rgb_image, save_rgb_image};
use crate::session::history::History;
use crate::spatial::tiler::{Style, TileParams};
use image::RgbImage;
use std::path::Path;

/// Loaded source image, palette, render settings and output history
///
/// Renders always start from the source image, never from a previous output.
#[derive(Clone, Debug, Default)]
pub struct Session {
    source: Option<RgbImage>,
    palette: Palette,
    style: Style,
    params: TileParams,
    history: History,
}

impl Session {
    /// Create a session with default settings and an empty history
    ///
    /// # Errors
    ///
    /// Returns an error if `history_capacity` is zero
    pub fn new(history_capacity: usize) -> Result<Self> {
        Ok(Self {
            source: None,
            palette: Palette::new(),
            style: Style::default(),
            params: TileParams::default(),
            history: History::new(history_capacity)?,
        })
    }

    /// Replace the source image; history is kept
    pub fn set_source(&mut self, image: RgbImage) {
        log::debug!("session source set to {}x{}", image.width(), image.height());
        self.source = Some(image);
    }

    /// Decode `path` and make it the source image
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let image = load_rgb_image(path)?;
        self.set_source(image);
        Ok(())
    }

    /// Source image, if loaded
    pub const fn source(&self) -> Option<&RgbImage> {
        self.source.as_ref()
    }

    /// Palette consulted by the next render
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable access for adding or removing palette colors
    pub const fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// Cell style of the next render
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Select the cell style of the next render
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Tiling parameters of the next render
    pub const fn params(&self) -> &TileParams {
        &self.params
    }

    /// Mutable access to the tiling parameters
    pub const fn params_mut(&mut self) -> &mut TileParams {
        &mut self.params
    }

    /// Render the source with the current settings and record the result
    ///
    /// # Errors
    ///
    /// Returns an error if no source is loaded or the render pass fails; the
    /// history is unchanged in that case
    pub fn render(&mut self) -> Result<&RgbImage> {
        let source = self.source.as_ref().ok_or(PixelationError::NoImageLoaded)?;
        let output = render(source, self.style, &self.params, &self.palette)?;
        Ok(self.history.push(output))
    }

    /// Most recent output at the history cursor
    pub fn current(&self) -> Option<&RgbImage> {
        self.history.current()
    }

    /// Step back to the previous output
    pub fn undo(&mut self) -> Option<&RgbImage> {
        self.history.undo()
    }

    /// Step forward to the next output
    pub fn redo(&mut self) -> Option<&RgbImage> {
        self.history.redo()
    }

    /// Output history
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Write the current output to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been rendered or the image cannot be saved
    pub fn save_current(&self, path: &Path) -> Result<()> {
        let current = self.history.current().ok_or(PixelationError::NoImageLoaded)?;
        save_rgb_image(current, path)
    }
}
