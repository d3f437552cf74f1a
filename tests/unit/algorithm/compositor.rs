//! Tests for filling rectangles onto a canvas

#[cfg(test)]
mod tests {
    use jitterect::algorithm::compositor::fill_rect;
    use jitterect::color::Color;
    use jitterect::spatial::{Canvas, Rect};

    const BLACK: Color = Color::opaque(0, 0, 0);
    const GREEN: Color = Color::opaque(0, 255, 0);

    fn painted(canvas: &Canvas) -> Vec<(i64, i64)> {
        let mut cells = Vec::new();
        for x in 0..i64::from(canvas.width()) {
            for y in 0..i64::from(canvas.height()) {
                if canvas.get(x, y) == Some(GREEN) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    // Tests exactly the rectangle's pixels are written
    #[test]
    fn test_fill_rect_exact_pixels() {
        let mut canvas = Canvas::solid(6, 6, BLACK);
        let written = fill_rect(&mut canvas, &Rect::centered(3, 3, 2, 3), GREEN);

        assert_eq!(written, 6);
        assert_eq!(
            painted(&canvas),
            vec![(2, 2), (2, 3), (2, 4), (3, 2), (3, 3), (3, 4)]
        );
    }

    // Tests rectangles hanging off the canvas are clipped
    #[test]
    fn test_fill_rect_clipped() {
        let mut canvas = Canvas::solid(4, 4, BLACK);
        let written = fill_rect(&mut canvas, &Rect::centered(0, 0, 4, 4), GREEN);

        assert_eq!(written, 4);
        assert_eq!(painted(&canvas), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    // Tests empty and off-canvas rectangles leave the canvas untouched
    #[test]
    fn test_fill_rect_noop() {
        let mut canvas = Canvas::solid(4, 4, BLACK);
        let before = canvas.clone();

        assert_eq!(fill_rect(&mut canvas, &Rect::centered(2, 2, -3, 2), GREEN), 0);
        assert_eq!(fill_rect(&mut canvas, &Rect::centered(50, 50, 3, 3), GREEN), 0);
        assert_eq!(canvas, before);
    }

    // Tests fills overwrite previous colors at full opacity
    #[test]
    fn test_fill_rect_overwrites() {
        let mut canvas = Canvas::solid(3, 3, BLACK);
        let translucent = Color::new(10, 20, 30, 40);

        fill_rect(&mut canvas, &Rect::centered(1, 1, 3, 3), GREEN);
        fill_rect(&mut canvas, &Rect::centered(1, 1, 1, 1), translucent);

        assert_eq!(canvas.get(1, 1), Some(translucent));
        assert_eq!(canvas.get(0, 0), Some(GREEN));
    }
}
