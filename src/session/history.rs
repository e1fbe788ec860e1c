//! Bounded undo/redo history of rendered images

use crate::io::configuration::DEFAULT_HISTORY_CAPACITY;
use crate::io::error::{Result, invalid_parameter};
use image::RgbImage;
use std::collections::VecDeque;

/// Fixed-capacity ordered list of complete output images
///
/// The cursor points at the current image. Pushing discards everything after
/// the cursor and evicts the oldest image once the capacity is reached.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<RgbImage>,
    cursor: Option<usize>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` images
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(invalid_parameter(
                "capacity",
                &capacity,
                &"history must hold at least one image",
            ));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        })
    }

    /// Record `image` as the new current entry and return it
    #[allow(clippy::indexing_slicing)]
    pub fn push(&mut self, image: RgbImage) -> &RgbImage {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(image);

        // Newest entry always exists after push_back
        let newest = self.entries.len() - 1;
        self.cursor = Some(newest);
        &self.entries[newest]
    }

    /// Current image, if any
    pub fn current(&self) -> Option<&RgbImage> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    /// Step back one image, returning it, or `None` at the oldest entry
    pub fn undo(&mut self) -> Option<&RgbImage> {
        let previous = self.cursor?.checked_sub(1)?;
        self.cursor = Some(previous);
        self.entries.get(previous)
    }

    /// Step forward one image, returning it, or `None` at the newest entry
    pub fn redo(&mut self) -> Option<&RgbImage> {
        let next = self.cursor? + 1;
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entries.get(next)
    }

    /// Test if an older image is available
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    /// Test if a newer image is available
    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.entries.len())
    }

    /// Number of stored images
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if no image has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored images
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every stored image
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
            cursor: None,
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}
