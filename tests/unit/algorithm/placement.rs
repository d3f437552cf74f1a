//! Tests for candidate traversal, jittered placement and occlusion-skip

#[cfg(test)]
mod tests {
    use jitterect::algorithm::placement::{PlacementConfig, PlacementSummary, RectanglePlacer};
    use jitterect::color::{Color, ColorTable};
    use jitterect::io::error::GenerationError;
    use jitterect::math::jitter::JitterBounds;
    use jitterect::math::random::RandomSource;
    use jitterect::spatial::Canvas;
    use std::num::NonZeroU32;

    const WHITE: Color = Color::opaque(255, 255, 255);
    const RED: Color = Color::opaque(255, 0, 0);
    const BLUE: Color = Color::opaque(0, 0, 255);

    fn spacing(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    fn config(width: u32, height: u32, dist_x: u32, dist_y: u32) -> PlacementConfig {
        PlacementConfig {
            rect_colors: ColorTable::new(vec![RED]).unwrap(),
            canvas_color: WHITE,
            canvas_width: width,
            canvas_height: height,
            dist_x: spacing(dist_x),
            dist_y: spacing(dist_y),
            rect_width: 2,
            rect_height: 2,
            jitter: JitterBounds::NONE,
            preserve_square: false,
            from_src_image: false,
        }
    }

    // Tests candidates match the brute-force modulo definition, in x-outer order
    #[test]
    fn test_candidates_match_definition() {
        for (width, height, dist_x, dist_y) in [(10, 10, 5, 5), (17, 9, 3, 4), (8, 8, 1, 7), (5, 5, 6, 6)] {
            let cfg = config(width, height, dist_x, dist_y);
            let placer = RectanglePlacer::new(&cfg);

            let mut expected = Vec::new();
            for x in 1..width {
                for y in 1..height {
                    if y % dist_y == 0 && x % dist_x == 0 {
                        expected.push((x, y));
                    }
                }
            }

            let actual: Vec<(u32, u32)> = placer.candidates().collect();
            assert_eq!(actual, expected, "{width}x{height} spaced {dist_x}x{dist_y}");
        }
    }

    // Tests the origin row and column are never candidates
    #[test]
    fn test_origin_excluded() {
        let cfg = config(6, 6, 2, 3);
        let placer = RectanglePlacer::new(&cfg);

        assert_eq!(placer.columns().collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(placer.rows().collect::<Vec<_>>(), vec![3]);
        assert!(placer.candidates().all(|(x, y)| x >= 1 && y >= 1));
    }

    // Tests spacing derivation and its zero guard
    #[test]
    fn test_spacing_from_factor() {
        assert_eq!(PlacementConfig::spacing_from_factor("x", 100, 4).unwrap(), spacing(25));
        assert_eq!(PlacementConfig::spacing_from_factor("y", 7, 2).unwrap(), spacing(3));

        for (extent, factor) in [(100, 0), (10, 11)] {
            let err = PlacementConfig::spacing_from_factor("x", extent, factor).unwrap_err();
            match err {
                GenerationError::DivisionByZeroDistFactor { axis, .. } => assert_eq!(axis, "x"),
                other => unreachable!("Expected DivisionByZeroDistFactor, got {other:?}"),
            }
        }
    }

    // Tests distance factors are recomputed from extent and spacing
    #[test]
    fn test_dist_factor_recomputed() {
        let cfg = config(100, 90, 30, 9);
        assert_eq!(cfg.x_dist_factor(), 3);
        assert_eq!(cfg.y_dist_factor(), 10);
    }

    // Tests an image extent keeps spacing and changes the reported factors
    #[test]
    fn test_image_extent_recomputes_factors() {
        let mut cfg = config(100, 50, 25, 10);
        assert_eq!((cfg.x_dist_factor(), cfg.y_dist_factor()), (4, 5));

        cfg.use_image_extent(300, 50);

        assert!(cfg.from_src_image);
        assert_eq!((cfg.canvas_width, cfg.canvas_height), (300, 50));
        assert_eq!((cfg.dist_x.get(), cfg.dist_y.get()), (25, 10));
        assert_eq!((cfg.x_dist_factor(), cfg.y_dist_factor()), (12, 5));
        assert_eq!(RectanglePlacer::new(&cfg).columns().len(), 11);
    }

    // Tests unjittered rectangles sit exactly on their grid points
    #[test]
    fn test_no_jitter_exact_placement() {
        let mut cfg = config(12, 12, 6, 6);
        cfg.rect_width = 3;
        cfg.rect_height = 1;
        let mut canvas = Canvas::solid(12, 12, WHITE);
        let mut rng = RandomSource::new(1);

        let summary = RectanglePlacer::new(&cfg).place(&mut canvas, &mut rng);

        assert_eq!(summary.drawn, 1);
        for x in 0..12 {
            for y in 0..12 {
                let expected = if (5..8).contains(&x) && y == 6 { RED } else { WHITE };
                assert_eq!(canvas.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    // Tests occlusion-skip draws nothing when every color is already present
    #[test]
    fn test_occlusion_skip_draws_nothing() {
        let mut cfg = config(30, 30, 3, 3);
        cfg.rect_colors = ColorTable::new(vec![RED, RED]).unwrap();
        cfg.jitter = JitterBounds {
            x: 2,
            y: 2,
            width: 2,
            height: 2,
        };
        cfg.from_src_image = true;
        let mut canvas = Canvas::solid(30, 30, RED);
        let before = canvas.clone();
        let mut rng = RandomSource::new(8);

        let summary = RectanglePlacer::new(&cfg).place(&mut canvas, &mut rng);

        assert_eq!(summary.drawn, 0);
        assert_eq!(summary.skipped, summary.candidates);
        assert_eq!(summary.candidates, 81);
        assert_eq!(canvas, before);
    }

    // Tests occlusion-skip only applies in image mode
    #[test]
    fn test_solid_mode_always_draws() {
        let cfg = config(30, 30, 3, 3);
        let mut canvas = Canvas::solid(30, 30, RED);
        let mut rng = RandomSource::new(8);

        let summary = RectanglePlacer::new(&cfg).place(&mut canvas, &mut rng);

        assert_eq!(summary.drawn, summary.candidates);
        assert_eq!(summary.skipped, 0);
    }

    // Tests occlusion-skip draws where the center shows a different color
    #[test]
    fn test_occlusion_skip_draws_different_color() {
        let mut cfg = config(10, 10, 5, 5);
        cfg.from_src_image = true;
        cfg.rect_colors = ColorTable::new(vec![BLUE]).unwrap();
        let mut canvas = Canvas::solid(10, 10, RED);
        let mut rng = RandomSource::new(2);

        let summary = RectanglePlacer::new(&cfg).place(&mut canvas, &mut rng);

        assert_eq!(summary.drawn, 1);
        assert_eq!(canvas.get(5, 5), Some(BLUE));
    }

    // Tests identical seeds paint identical canvases
    #[test]
    fn test_deterministic_with_seed() {
        let mut cfg = config(64, 48, 4, 4);
        cfg.rect_colors = ColorTable::new(vec![RED, BLUE, WHITE]).unwrap();
        cfg.rect_width = 5;
        cfg.rect_height = 3;
        cfg.jitter = JitterBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 1,
        };

        let paint = |seed| {
            let mut canvas = Canvas::solid(64, 48, WHITE);
            let mut rng = RandomSource::new(seed);
            RectanglePlacer::new(&cfg).place(&mut canvas, &mut rng);
            canvas
        };

        assert_eq!(paint(99), paint(99));
        assert_ne!(paint(99), paint(100));
    }

    // Tests shrinking jitter past zero size degrades to empty draws
    #[test]
    fn test_negative_size_is_harmless() {
        let mut cfg = config(20, 20, 2, 2);
        cfg.rect_width = 1;
        cfg.rect_height = 1;
        cfg.jitter = JitterBounds {
            x: 40,
            y: 40,
            width: 10,
            height: 10,
        };
        let mut canvas = Canvas::solid(20, 20, WHITE);
        let mut rng = RandomSource::new(5);

        let summary = RectanglePlacer::new(&cfg).place(&mut canvas, &mut rng);

        assert_eq!(summary.candidates, 81);
        assert_eq!(summary.drawn, 81);
    }

    // Tests the progress callback sees each column once, in order
    #[test]
    fn test_progress_reports_columns() {
        let cfg = config(20, 10, 4, 5);
        let mut canvas = Canvas::solid(20, 10, WHITE);
        let mut rng = RandomSource::new(4);
        let mut seen = Vec::new();

        let summary = RectanglePlacer::new(&cfg).place_with_progress(&mut canvas, &mut rng, |c| {
            seen.push(c);
        });

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(
            summary,
            PlacementSummary {
                candidates: 4,
                drawn: 4,
                skipped: 0,
                pixels: 16,
            }
        );
    }
}
