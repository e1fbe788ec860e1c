use bitvec::prelude::*;
use std::fmt;

/// Palette entries already assigned during one render pass
///
/// Indexed by palette position. Indices beyond the tracked length count as
/// unused, and marking one grows the set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsedColorSet {
    bits: BitVec,
}

impl UsedColorSet {
    /// Create a set sized for a palette of `palette_len` colors, none used
    pub fn new(palette_len: usize) -> Self {
        Self {
            bits: bitvec![0; palette_len],
        }
    }

    /// Record the palette entry at `index` as assigned
    pub fn mark(&mut self, index: usize) {
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        self.bits.set(index, true);
    }

    /// Test whether the palette entry at `index` has been assigned
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Forget every assignment, starting a new pass
    pub fn reset(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no entries have been assigned
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count assigned entries
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Assigned palette indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for UsedColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UsedColorSet({} used: {:?})", self.count(), self.to_vec())
    }
}
