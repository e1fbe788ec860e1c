//! Euclidean distance in RGB space
//!
//! Channels are compared unweighted; no perceptual color space is involved.

use image::Rgb;

/// Squared Euclidean distance between two RGB colors
///
/// Preserves the ordering of [`rgb_distance`] without the square root, so it is
/// the cheaper choice when only comparisons are needed
pub fn rgb_distance_squared(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&lhs, &rhs)| {
            let delta = u32::from(lhs.abs_diff(rhs));
            delta * delta
        })
        .sum()
}

/// Euclidean distance `sqrt(dr² + dg² + db²)` between two RGB colors
pub fn rgb_distance(a: Rgb<u8>, b: Rgb<u8>) -> f64 {
    f64::from(rgb_distance_squared(a, b)).sqrt()
}
