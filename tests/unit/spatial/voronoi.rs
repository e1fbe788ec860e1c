//! Tests for Voronoi seed generation and region rejection

#[cfg(test)]
mod tests {
    use pixelation::PixelationError;
    use pixelation::spatial::cell::{CellShape, Vertex};
    use pixelation::spatial::voronoi::{random_seeds, voronoi_cells};

    // One interior site surrounded by eight hull sites; only the interior
    // region is bounded, spanning roughly 33..68 on both axes
    fn ring_with_center() -> Vec<Vertex> {
        [
            (50.0, 50.0),
            (20.0, 22.0),
            (52.0, 18.0),
            (81.0, 21.0),
            (18.0, 49.0),
            (83.0, 52.0),
            (21.0, 79.0),
            (48.0, 82.0),
            (79.0, 80.0),
        ]
        .iter()
        .map(|&(x, y)| Vertex::new(x, y))
        .collect()
    }

    // Tests seeded generation is reproducible and stays in the inclusive range
    // Verified by using an exclusive upper bound
    #[test]
    fn test_random_seeds_reproducible_and_bounded() {
        let first = random_seeds((30, 20), 500, Some(3));
        let second = random_seeds((30, 20), 500, Some(3));

        assert_eq!(first.len(), 500);
        assert_eq!(first, second);
        for seed in &first {
            assert!((0.0..=30.0).contains(&seed.x));
            assert!((0.0..=20.0).contains(&seed.y));
            assert!(seed.x.fract().abs() < f64::EPSILON);
        }
    }

    // Tests different seeds produce different point sets
    // Verified by ignoring the seed value
    #[test]
    fn test_random_seeds_depend_on_seed() {
        assert_ne!(
            random_seeds((100, 100), 20, Some(1)),
            random_seeds((100, 100), 20, Some(2))
        );
    }

    // Tests only the bounded interior region survives
    // Verified by accepting regions with vertices at infinity
    #[test]
    fn test_unbounded_regions_rejected() {
        let Ok(cells) = voronoi_cells((100, 100), &ring_with_center()) else {
            unreachable!("Triangulation should succeed");
        };

        assert_eq!(cells.len(), 1);
        let Some(CellShape::Polygon { vertices }) = cells.first().map(|c| c.shape.clone()) else {
            unreachable!("Expected polygon cell");
        };
        assert_eq!(vertices.len(), 8);
        for vertex in &vertices {
            assert!((33.0..68.0).contains(&vertex.x), "x = {}", vertex.x);
            assert!((33.0..68.0).contains(&vertex.y), "y = {}", vertex.y);
        }
    }

    // Tests bounded regions reaching past the image edge are dropped, not clipped
    // Verified by clamping vertices to the image
    #[test]
    fn test_out_of_bounds_regions_rejected() {
        let Ok(cells) = voronoi_cells((60, 60), &ring_with_center()) else {
            unreachable!("Triangulation should succeed");
        };

        assert!(cells.is_empty());
    }

    // Tests degenerate inputs yield no cells instead of failing
    // Verified by returning the single site region as the whole image
    #[test]
    fn test_degenerate_seed_sets_yield_nothing() {
        let single = voronoi_cells((10, 10), &[Vertex::new(5.0, 5.0)]);
        assert!(single.is_ok_and(|cells| cells.is_empty()));

        let collinear = [
            Vertex::new(1.0, 1.0),
            Vertex::new(3.0, 3.0),
            Vertex::new(5.0, 5.0),
            Vertex::new(7.0, 7.0),
        ];
        let diagonal = voronoi_cells((10, 10), &collinear);
        assert!(diagonal.is_ok_and(|cells| cells.is_empty()));

        let empty = voronoi_cells((10, 10), &[]);
        assert!(empty.is_ok_and(|cells| cells.is_empty()));
    }

    // Tests duplicate seeds collapse into a single site
    // Verified by inserting duplicates as distinct sites
    #[test]
    fn test_duplicate_seeds_collapse() {
        let mut seeds = ring_with_center();
        seeds.push(Vertex::new(50.0, 50.0));

        let cells = voronoi_cells((100, 100), &seeds);
        assert!(cells.is_ok_and(|cells| cells.len() == 1));
    }

    // Tests non-finite seeds surface as computation errors
    // Verified by silently skipping failed insertions
    #[test]
    fn test_non_finite_seed_rejected() {
        let result = voronoi_cells((10, 10), &[Vertex::new(f64::NAN, 1.0)]);

        assert!(matches!(
            result,
            Err(PixelationError::Computation { .. })
        ));
    }
}
