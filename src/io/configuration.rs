//! Rendering constants and runtime configuration defaults

/// Minimum palette length before palette matching replaces direct sampling
pub const MIN_PALETTE_SIZE: usize = 4;

// Command-line ranges
/// Smallest accepted shape size, rectangle width or rectangle height
pub const MIN_SHAPE_SIZE: u32 = 1;
/// Largest shape size accepted on the command line
pub const MAX_SHAPE_SIZE: u32 = 50;
/// Smallest Voronoi seed count accepted on the command line
pub const MIN_VORONOI_POINTS: u32 = 10;
/// Largest Voronoi seed count accepted on the command line
pub const MAX_VORONOI_POINTS: u32 = 1000;

// Default values for configurable parameters
/// Default circle radius, square side and triangle side in pixels
pub const DEFAULT_SHAPE_SIZE: u32 = 10;
/// Default rectangle width in pixels
pub const DEFAULT_RECT_WIDTH: u32 = 10;
/// Default rectangle height in pixels
pub const DEFAULT_RECT_HEIGHT: u32 = 10;
/// Default number of Voronoi seed points
pub const DEFAULT_VORONOI_POINTS: u32 = 100;

/// Number of rendered images kept for undo
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pixelated";
/// Extension of processed and produced files
pub const IMAGE_EXTENSION: &str = "png";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
