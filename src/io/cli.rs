//! Command-line interface for batch pixelation of PNG files

use crate::algorithm::executor::render_with_stats;
use crate::algorithm::palette::Palette;
use crate::io::configuration::{
    DEFAULT_RECT_HEIGHT, DEFAULT_RECT_WIDTH, DEFAULT_SHAPE_SIZE, DEFAULT_VORONOI_POINTS,
    IMAGE_EXTENSION, MAX_SHAPE_SIZE, MAX_VORONOI_POINTS, MIN_SHAPE_SIZE, MIN_VORONOI_POINTS,
    OUTPUT_SUFFIX,
};
use crate::io::error::{PixelationError, Result, unsupported_target};
use crate::io::image::{load_rgb_image, save_rgb_image};
use crate::io::palette::{load_palette, parse_hex_color};
use crate::io::progress::ProgressManager;
use crate::spatial::tiler::{Style, TileParams};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pixelation")]
#[command(
    author,
    version,
    about = "Redraw images as circles, squares, rectangles, triangles or Voronoi cells"
)]
/// Command-line arguments for the pixelation tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Shape of the cells
    #[arg(short = 'S', long, value_enum, default_value_t = Style::Circle)]
    pub style: Style,

    /// Circle radius, square side or triangle side in pixels
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SHAPE_SIZE,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_SHAPE_SIZE)..=i64::from(MAX_SHAPE_SIZE))
    )]
    pub size: u32,

    /// Rectangle width in pixels
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_RECT_WIDTH,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_SHAPE_SIZE)..=i64::from(MAX_SHAPE_SIZE))
    )]
    pub width: u32,

    /// Rectangle height in pixels
    #[arg(
        short = 'H',
        long,
        default_value_t = DEFAULT_RECT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_SHAPE_SIZE)..=i64::from(MAX_SHAPE_SIZE))
    )]
    pub height: u32,

    /// Number of Voronoi seed points
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_VORONOI_POINTS,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_VORONOI_POINTS)..=i64::from(MAX_VORONOI_POINTS))
    )]
    pub points: u32,

    /// Random seed for reproducible Voronoi cells
    #[arg(long)]
    pub seed: Option<u64>,

    /// Palette file with one hex color per line
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Additional palette color such as `#ff8800` (repeatable)
    #[arg(short, long = "color", value_name = "HEX")]
    pub colors: Vec<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tiling parameters gathered from the arguments
    pub const fn tile_params(&self) -> TileParams {
        TileParams {
            size: self.size,
            width: self.width,
            height: self.height,
            points: self.points,
            seed: self.seed,
        }
    }

    /// Palette from `--palette` followed by every `--color`, in order
    ///
    /// # Errors
    ///
    /// Returns an error if the palette file cannot be read or a color is malformed
    pub fn build_palette(&self) -> Result<Palette> {
        let mut palette = match &self.palette {
            Some(path) => load_palette(path)?,
            None => Palette::new(),
        };
        for (index, text) in self.colors.iter().enumerate() {
            palette.push(parse_hex_color(text, index + 1)?);
        }
        if !palette.is_empty() && !palette.is_active() {
            log::warn!(
                "palette has only {} colors; sampling source colors directly",
                palette.len()
            );
        }
        Ok(palette)
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments, returning the outputs written
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, palette loading or file processing fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("nothing to process in {}", self.cli.target.display());
            return Ok(Vec::new());
        }

        let palette = self.cli.build_palette()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outputs = Vec::with_capacity(files.len());
        for file in &files {
            outputs.push(self.process_file(file, &palette)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outputs)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(unsupported_target(target, "Target file must be a PNG image"));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| PixelationError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| PixelationError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.is_file()
                    && is_png(&path)
                    && !is_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(unsupported_target(
                target,
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, palette: &Palette) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_rgb_image(input_path)?;
        let (rendered, stats) =
            render_with_stats(&source, self.cli.style, &self.cli.tile_params(), palette)?;
        save_rgb_image(&rendered, &output_path)?;

        log::info!(
            "{} -> {} ({} cells, {} skipped)",
            input_path.display(),
            output_path.display(),
            stats.cells,
            stats.skipped
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(input_path, start_time.elapsed());
        }

        Ok(output_path)
    }

    /// Output location for `input_path`: `<stem>_pixelated.png` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{IMAGE_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

// Previous outputs in a directory are never treated as inputs
fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
