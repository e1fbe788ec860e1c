//! Tests for palette editing and the activation threshold

#[cfg(test)]
mod tests {
    use image::Rgb;
    use pixelation::algorithm::palette::Palette;

    // Tests appending keeps insertion order and repeated colors
    // Verified by skipping colors already present
    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut palette = Palette::new();

        palette.push(Rgb([3, 3, 3]));
        palette.push(Rgb([1, 1, 1]));
        palette.push(Rgb([3, 3, 3]));

        assert_eq!(
            palette.colors(),
            &[Rgb([3, 3, 3]), Rgb([1, 1, 1]), Rgb([3, 3, 3])]
        );
    }

    // Tests palettes become active at four colors
    // Verified by comparing with > instead of >=
    #[test]
    fn test_activation_threshold() {
        let mut palette: Palette = (0..3).map(|v| Rgb([v, v, v])).collect();
        assert!(!palette.is_active());

        palette.push(Rgb([9, 9, 9]));
        assert!(palette.is_active());

        palette.remove(0);
        assert!(!palette.is_active());
    }

    // Tests removal by index and by color
    // Verified by removing from the end regardless of index
    #[test]
    fn test_remove_entries() {
        let mut palette =
            Palette::from_colors([Rgb([1, 0, 0]), Rgb([0, 1, 0]), Rgb([0, 0, 1])]);

        assert_eq!(palette.remove(1), Some(Rgb([0, 1, 0])));
        assert_eq!(palette.remove(5), None);
        assert!(palette.remove_color(Rgb([1, 0, 0])));
        assert!(!palette.remove_color(Rgb([7, 7, 7])));

        assert_eq!(palette.colors(), &[Rgb([0, 0, 1])]);
        assert_eq!(palette.position(Rgb([0, 0, 1])), Some(0));
    }

    // Tests four entries with a repeat still activate the palette
    // Verified by collapsing repeated colors on insert
    #[test]
    fn test_repeated_colors_count_towards_threshold() {
        let mut palette = Palette::from_colors([
            Rgb([5, 5, 5]),
            Rgb([6, 6, 6]),
            Rgb([5, 5, 5]),
            Rgb([7, 7, 7]),
        ]);

        assert_eq!(palette.len(), 4);
        assert!(palette.is_active());
        assert_eq!(palette.position(Rgb([5, 5, 5])), Some(0));

        assert!(palette.remove_color(Rgb([5, 5, 5])));
        assert_eq!(
            palette.colors(),
            &[Rgb([6, 6, 6]), Rgb([5, 5, 5]), Rgb([7, 7, 7])]
        );
    }

    // Tests clearing leaves an empty palette
    // Verified by skipping the clear
    #[test]
    fn test_clear() {
        let mut palette = Palette::from_colors([Rgb([1, 2, 3])]);
        palette.clear();

        assert!(palette.is_empty());
        assert_eq!(palette, Palette::default());
    }
}
