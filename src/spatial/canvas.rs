//! Mutable RGBA pixel buffer being painted
//!
//! Coordinates are signed so jittered rectangles may extend past any edge.
//! Reads outside the buffer return `None`, writes outside are dropped.

use crate::color::hex::Color;
use image::RgbaImage;

/// Width × height grid of RGBA pixels with origin at the top-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled entirely with `color`
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color.into()),
        }
    }

    /// Adopt an existing image's pixels and dimensions
    pub const fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Check whether a coordinate lies inside `[0, width) × [0, height)`
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.pixel_coords(x, y).is_some()
    }

    /// Read the pixel at `(x, y)`, or `None` outside the canvas
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        let (px, py) = self.pixel_coords(x, y)?;
        self.image.get_pixel_checked(px, py).map(|p| Color::from(*p))
    }

    /// Overwrite the pixel at `(x, y)`; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        let pixel = self
            .pixel_coords(x, y)
            .and_then(|(px, py)| self.image.get_pixel_mut_checked(px, py));
        if let Some(pixel) = pixel {
            *pixel = color.into();
        }
    }

    /// Overwrite every pixel with `color`
    pub fn fill_solid(&mut self, color: Color) {
        let pixel = color.into();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Hand the underlying image off for encoding
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn pixel_coords(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let px = u32::try_from(x).ok()?;
        let py = u32::try_from(y).ok()?;
        (px < self.width() && py < self.height()).then_some((px, py))
    }
}
