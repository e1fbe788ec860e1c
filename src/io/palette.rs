//! Palette files and hex color parsing
//!
//! A palette file lists one color per line. Lines starting with `;` are
//! comments and blank lines are skipped. Only the first whitespace-separated
//! token of a line is read, so colors may carry a trailing name. This accepts
//! Paint.NET palette files as-is.

use crate::algorithm::palette::Palette;
use crate::io::error::{PixelationError, Result};
use image::Rgb;
use std::path::Path;

/// Parse a hex color string
///
/// Supports `RGB` (each digit doubled), `RRGGBB` and `AARRGGBB` (alpha
/// ignored), with or without a leading `#`. `line` is reported in errors.
///
/// # Errors
///
/// Returns an error if the string has the wrong length or a non-hex digit
pub fn parse_hex_color(text: &str, line: usize) -> Result<Rgb<u8>> {
    let trimmed = text.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let parse_error = |reason: &str| PixelationError::PaletteParse {
        line,
        value: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(parse_error("expected hexadecimal digits"));
    }

    let byte_at = |start: usize| {
        hex.get(start..start + 2)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| parse_error("truncated color"))
    };

    match hex.len() {
        3 => {
            let mut rgb = [0_u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let value = digit.to_digit(16).unwrap_or(0) as u8;
                *slot = (value << 4) | value;
            }
            Ok(Rgb(rgb))
        }
        6 => Ok(Rgb([byte_at(0)?, byte_at(2)?, byte_at(4)?])),
        8 => Ok(Rgb([byte_at(2)?, byte_at(4)?, byte_at(6)?])),
        _ => Err(parse_error("expected 3, 6 or 8 hex digits")),
    }
}

/// Parse palette text, one color per line, preserving order
///
/// # Errors
///
/// Returns an error naming the first line that is not a valid color
pub fn parse_palette(text: &str) -> Result<Palette> {
    let mut palette = Palette::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if token.starts_with(';') {
            continue;
        }
        palette.push(parse_hex_color(token, index + 1)?);
    }
    Ok(palette)
}

/// Read and parse a palette file
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains an invalid color
pub fn load_palette(path: &Path) -> Result<Palette> {
    let text = std::fs::read_to_string(path).map_err(|e| PixelationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read palette",
        source: e,
    })?;
    let palette = parse_palette(&text)?;
    log::info!(
        "loaded {} palette colors from {}",
        palette.len(),
        path.display()
    );
    Ok(palette)
}
