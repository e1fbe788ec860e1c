/// Command-line parsing and batch file processing
pub mod cli;
/// Defaults, ranges and output naming
pub mod configuration;
/// Error taxonomy and constructors
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Palette file parsing
pub mod palette;
/// Progress bars for batch runs
pub mod progress;
