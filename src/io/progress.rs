//! Batch progress display across processed files

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Single progress bar advancing once per rendered file
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
        }
    }

    /// Show a bar sized for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let template =
            format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        let style = ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");

        self.bar = ProgressBar::new(file_count as u64);
        self.bar.set_style(style);
        self.completed = 0;
    }

    /// Show which file is being rendered
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Advance past a rendered file
    pub fn complete_file(&mut self, path: &Path, elapsed: Duration) {
        self.completed += 1;
        self.bar.inc(1);
        log::debug!("rendered {} in {elapsed:.2?}", path.display());
    }

    /// Files completed since [`Self::initialize`]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} files processed", self.completed));
    }
}
