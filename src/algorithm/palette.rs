//! Caller-owned list of candidate fill colors

use crate::io::configuration::MIN_PALETTE_SIZE;
use image::Rgb;

/// Ordered list of RGB colors available for palette matching
///
/// Insertion order is preserved and decides ties during matching. Repeated
/// colors are kept and count towards the activation threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Build a palette from colors in order
    pub fn from_colors(colors: impl IntoIterator<Item = Rgb<u8>>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Append a color
    pub fn push(&mut self, color: Rgb<u8>) {
        self.colors.push(color);
    }

    /// Remove the color at `index`, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Option<Rgb<u8>> {
        (index < self.colors.len()).then(|| self.colors.remove(index))
    }

    /// Remove the first occurrence of `color`, returning whether it was found
    pub fn remove_color(&mut self, color: Rgb<u8>) -> bool {
        self.position(color)
            .and_then(|index| self.remove(index))
            .is_some()
    }

    /// Remove every color
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Index of the first occurrence of `color`
    pub fn position(&self, color: Rgb<u8>) -> Option<usize> {
        self.colors.iter().position(|&candidate| candidate == color)
    }

    /// Color at `index`
    pub fn get(&self, index: usize) -> Option<Rgb<u8>> {
        self.colors.get(index).copied()
    }

    /// All colors in insertion order
    pub const fn colors(&self) -> &[Rgb<u8>] {
        self.colors.as_slice()
    }

    /// Number of colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Test if the palette holds no colors
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether the palette is large enough to replace direct sampling
    pub const fn is_active(&self) -> bool {
        self.colors.len() >= MIN_PALETTE_SIZE
    }
}

impl FromIterator<Rgb<u8>> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb<u8>>>(iter: I) -> Self {
        Self::from_colors(iter)
    }
}
