//! Tests for randomized settings built from an extracted palette

#[cfg(test)]
mod tests {
    use jitterect::color::{Color, ColorTable};
    use jitterect::io::config_file::CanvasOverrides;
    use jitterect::io::configuration::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use jitterect::io::error::ErrorKind;
    use jitterect::io::sampling::{JitterAxis, sampled_config};
    use jitterect::math::jitter::JitterBounds;
    use jitterect::math::random::RandomSource;

    fn palette() -> ColorTable {
        ColorTable::new(vec![
            Color::opaque(10, 20, 30),
            Color::opaque(200, 100, 0),
            Color::opaque(0, 0, 0),
        ])
        .unwrap()
    }

    // Tests sampled values fall in their documented ranges
    #[test]
    fn test_sampled_ranges() {
        for seed in 0..50 {
            let mut rng = RandomSource::new(seed);
            let config = sampled_config(palette(), &CanvasOverrides::default(), &mut rng).unwrap();

            assert_eq!(config.canvas_width, DEFAULT_CANVAS_WIDTH);
            assert_eq!(config.canvas_height, DEFAULT_CANVAS_HEIGHT);
            assert!(palette().colors().contains(&config.canvas_color));
            assert!((2..20).contains(&config.x_dist_factor()));
            assert!((2..20).contains(&config.y_dist_factor()));
            assert!((2..40).contains(&config.rect_width));
            assert!((2..40).contains(&config.rect_height));
            assert!(!config.preserve_square);
            assert!(!config.from_src_image);

            let jitter = config.jitter;
            let set = [jitter.x, jitter.y, jitter.width, jitter.height]
                .iter()
                .filter(|&&v| v > 0)
                .count();
            assert!(set <= 1, "seed {seed} set {set} jitter bounds");
            assert!([jitter.x, jitter.y, jitter.width, jitter.height]
                .iter()
                .all(|&v| v < 100));
        }
    }

    // Tests overrides replace sampled values
    #[test]
    fn test_overrides_respected() {
        let overrides = CanvasOverrides {
            width: Some(300),
            height: Some(120),
            x_factor: Some(6),
            y_factor: Some(4),
        };
        let mut rng = RandomSource::new(3);
        let config = sampled_config(palette(), &overrides, &mut rng).unwrap();

        assert_eq!((config.canvas_width, config.canvas_height), (300, 120));
        assert_eq!((config.dist_x.get(), config.dist_y.get()), (50, 30));
    }

    // Tests a factor larger than the canvas is rejected
    #[test]
    fn test_oversized_factor_rejected() {
        let overrides = CanvasOverrides {
            width: Some(10),
            x_factor: Some(20),
            ..CanvasOverrides::default()
        };
        let mut rng = RandomSource::new(3);

        let err = sampled_config(palette(), &overrides, &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZeroDistFactor);
    }

    // Tests the same seed samples the same settings
    #[test]
    fn test_sampling_is_deterministic() {
        let mut a = RandomSource::new(77);
        let mut b = RandomSource::new(77);

        assert_eq!(
            sampled_config(palette(), &CanvasOverrides::default(), &mut a).unwrap(),
            sampled_config(palette(), &CanvasOverrides::default(), &mut b).unwrap()
        );
    }

    // Tests every jitter axis can be chosen
    #[test]
    fn test_all_axes_reachable() {
        let mut rng = RandomSource::new(12);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let axis = JitterAxis::sample(&mut rng);
            if !seen.contains(&axis) {
                seen.push(axis);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    // Tests axis bounds set only their own field
    #[test]
    fn test_axis_bounds() {
        assert_eq!(
            JitterAxis::Y.bounds(7),
            JitterBounds {
                y: 7,
                ..JitterBounds::NONE
            }
        );
        assert_eq!(
            JitterAxis::Width.bounds(3),
            JitterBounds {
                width: 3,
                ..JitterBounds::NONE
            }
        );
    }
}
