//! Fill color resolution with nearest-unused palette matching

use crate::algorithm::palette::Palette;
use crate::algorithm::used_colors::UsedColorSet;
use crate::math::distance::rgb_distance;
use image::Rgb;

/// Resolve the fill color for one sampled source color
///
/// Palettes below the minimum size leave `sampled` untouched. Otherwise the
/// unused palette color nearest to `sampled` (Euclidean RGB) is marked used
/// and returned, the earliest entry winning ties. Marking covers every entry
/// holding that color, so a repeated color is assigned once per pass. Once
/// every entry is used the first palette entry is returned again.
pub fn resolve_color(sampled: Rgb<u8>, palette: &Palette, used: &mut UsedColorSet) -> Rgb<u8> {
    if !palette.is_active() {
        return sampled;
    }

    let mut nearest: Option<(usize, f64)> = None;
    for (index, &candidate) in palette.colors().iter().enumerate() {
        if used.contains(index) {
            continue;
        }
        let distance = rgb_distance(sampled, candidate);
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((index, distance));
        }
    }

    // Exhausted palettes fall back to the first entry rather than cycling
    let index = nearest.map_or(0, |(index, _)| index);
    let Some(chosen) = palette.get(index) else {
        return sampled;
    };
    for (position, &candidate) in palette.colors().iter().enumerate() {
        if candidate == chosen {
            used.mark(position);
        }
    }
    chosen
}

/// Color resolution state for a single render pass
///
/// Owns the used-color bookkeeping so that it starts empty for every pass.
#[derive(Debug)]
pub struct Colorizer<'a> {
    palette: &'a Palette,
    used: UsedColorSet,
    assigned: usize,
    fallbacks: usize,
}

impl<'a> Colorizer<'a> {
    /// Start a pass against `palette` with no colors used
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            used: UsedColorSet::new(palette.len()),
            assigned: 0,
            fallbacks: 0,
        }
    }

    /// Resolve the fill color for `sampled`, updating the used set
    pub fn resolve(&mut self, sampled: Rgb<u8>) -> Rgb<u8> {
        if self.palette.is_active() {
            if self.used.count() >= self.palette.len() {
                self.fallbacks += 1;
            } else {
                self.assigned += 1;
            }
        }
        resolve_color(sampled, self.palette, &mut self.used)
    }

    /// Palette entries consumed so far
    pub const fn used(&self) -> &UsedColorSet {
        &self.used
    }

    /// Cells that received a distinct palette color
    pub const fn assigned(&self) -> usize {
        self.assigned
    }

    /// Cells that received the first palette entry after exhaustion
    pub const fn fallbacks(&self) -> usize {
        self.fallbacks
    }
}
