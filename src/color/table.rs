//! Ordered color table with weighting by repetition

use crate::color::hex::Color;
use crate::io::error::{GenerationError, Result};
use crate::math::random::RandomSource;

/// Non-empty ordered collection of rectangle colors
///
/// Duplicates are allowed and are the weighting mechanism: a color present
/// N times is N times as likely to be drawn as a color present once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    /// Build a table from decoded colors
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredConfig` if `colors` is empty
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GenerationError::MissingRequiredConfig {
                fields: vec!["rectColors"],
            });
        }
        Ok(Self { colors })
    }

    /// Build a table from `#RRGGBB` strings
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` for the first malformed entry, or
    /// `MissingRequiredConfig` if there are no entries
    pub fn from_hex<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = codes
            .into_iter()
            .map(|code| Color::from_hex(code.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Append `extra` more copies of `color`
    #[must_use]
    pub fn with_weight(mut self, color: Color, extra: usize) -> Self {
        self.colors.extend(std::iter::repeat_n(color, extra));
        self
    }

    /// Draw a color uniformly over all entries
    pub fn draw(&self, rng: &mut RandomSource) -> Color {
        let index = rng.index(self.colors.len());
        self.colors
            .get(index)
            .copied()
            .unwrap_or(Color::opaque(0, 0, 0))
    }

    /// Number of entries, counting duplicates
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed table
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
