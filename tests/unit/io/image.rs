//! Tests for image decoding to RGB and PNG export

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use pixelation::PixelationError;
    use pixelation::io::image::{load_rgb_image, save_rgb_image};

    // Tests RGBA sources are converted to RGB with alpha dropped
    // Verified by premultiplying alpha during conversion
    #[test]
    fn test_load_converts_rgba() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("rgba.png");
        let source = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]));
        assert!(source.save(&path).is_ok());

        let loaded = load_rgb_image(&path);

        assert!(loaded.is_ok_and(|img| {
            img.dimensions() == (3, 2) && img.pixels().all(|&p| p == Rgb([10, 20, 30]))
        }));
    }

    // Tests saving creates missing directories and round-trips losslessly
    // Verified by disabling directory creation
    #[test]
    fn test_save_creates_parent_directories() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("a").join("b").join("out.png");
        let image = RgbImage::from_fn(4, 4, |x, y| Rgb([x as u8 * 60, y as u8 * 60, 7]));

        assert!(save_rgb_image(&image, &path).is_ok());
        assert!(path.exists());
        assert!(load_rgb_image(&path).is_ok_and(|loaded| loaded == image));
    }

    // Tests missing files surface as load errors carrying the path
    // Verified by mapping to a generic file system error
    #[test]
    fn test_load_missing_file() {
        let result = load_rgb_image(std::path::Path::new("does/not/exist.png"));

        assert!(matches!(
            result,
            Err(PixelationError::ImageLoad { ref path, .. }) if path.ends_with("exist.png")
        ));
    }

    // Tests unknown extensions fail as export errors
    // Verified by defaulting to PNG for unknown extensions
    #[test]
    fn test_save_unknown_extension() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let image = RgbImage::new(1, 1);

        let result = save_rgb_image(&image, &dir.path().join("out.unknownext"));
        assert!(matches!(result, Err(PixelationError::ImageExport { .. })));
    }
}
