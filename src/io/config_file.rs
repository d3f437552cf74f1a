//! JSON config file loading, validation and re-serialization
//!
//! Missing numeric fields deserialize as zero and missing strings as empty,
//! so "absent" and "zero" are the same thing to the required-field check.
//! An explicit `null` is read the same way.

use crate::algorithm::placement::PlacementConfig;
use crate::color::{Color, ColorTable};
use crate::io::configuration::{MAX_CANVAS_DIMENSION, MAX_COLOR_WEIGHT};
use crate::io::error::{GenerationError, Result, WithPath, invalid_parameter};
use crate::math::jitter::JitterBounds;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// On-disk configuration, keyed in camelCase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    /// Rectangle colors as `#RRGGBB`
    #[serde(deserialize_with = "null_as_default")]
    pub rect_colors: Vec<String>,
    /// Canvas width in pixels
    #[serde(deserialize_with = "null_as_default")]
    pub canvas_width: i64,
    /// Canvas height in pixels
    #[serde(deserialize_with = "null_as_default")]
    pub canvas_height: i64,
    /// Background color as `#RRGGBB`
    #[serde(deserialize_with = "null_as_default")]
    pub canvas_color: String,
    /// Number of grid cells across; spacing is `canvasWidth / xDistFactor`
    #[serde(deserialize_with = "null_as_default")]
    pub x_dist_factor: i64,
    /// Number of grid cells down; spacing is `canvasHeight / yDistFactor`
    #[serde(deserialize_with = "null_as_default")]
    pub y_dist_factor: i64,
    /// Horizontal position jitter bound
    #[serde(deserialize_with = "null_as_default")]
    pub jitter_x: i64,
    /// Vertical position jitter bound
    #[serde(deserialize_with = "null_as_default")]
    pub jitter_y: i64,
    /// Width jitter bound
    #[serde(deserialize_with = "null_as_default")]
    pub jitter_width: i64,
    /// Height jitter bound
    #[serde(deserialize_with = "null_as_default")]
    pub jitter_height: i64,
    /// Base rectangle width
    #[serde(deserialize_with = "null_as_default")]
    pub rect_width: i64,
    /// Base rectangle height
    #[serde(deserialize_with = "null_as_default")]
    pub rect_height: i64,
    /// Keep rectangles square under size jitter
    #[serde(deserialize_with = "null_as_default")]
    pub preserve_square: bool,
    /// Extra copies of `weightedColor` to append to the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Color to weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_color: Option<String>,
}

// `null` reads like an absent key, so the required-field check reports it
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

type Presence = fn(&ConfigFile) -> bool;

const REQUIRED_FIELDS: &[(&str, Presence)] = &[
    ("rectColors", |c| !c.rect_colors.is_empty()),
    ("canvasWidth", |c| c.canvas_width != 0),
    ("canvasHeight", |c| c.canvas_height != 0),
    ("canvasColor", |c| !c.canvas_color.is_empty()),
    ("xDistFactor", |c| c.x_dist_factor != 0),
    ("yDistFactor", |c| c.y_dist_factor != 0),
    ("rectWidth", |c| c.rect_width != 0),
    ("rectHeight", |c| c.rect_height != 0),
];

impl ConfigFile {
    /// Parse a config from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` if the text is not a JSON object of the expected shape
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path)?;
        Self::parse(&text).with_path(path)
    }

    /// Check required fields, color formats and weight consistency
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required field is zero or empty (all such fields are listed)
    /// - A color is not `#` followed by six hex digits
    /// - Only one of `weight` and `weightedColor` is given
    /// - A numeric field is negative
    /// - `weight` exceeds `MAX_COLOR_WEIGHT`
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .filter(|(_, present)| !present(self))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(GenerationError::MissingRequiredConfig { fields: missing });
        }

        for code in &self.rect_colors {
            Color::from_hex(code)?;
        }
        Color::from_hex(&self.canvas_color)?;

        match self.weighting() {
            (Some(_), Some(color)) => {
                Color::from_hex(color)?;
            }
            (None, None) => {}
            (weight, color) => {
                return Err(GenerationError::InconsistentWeightFields {
                    has_weight: weight.is_some(),
                    has_weighted_color: color.is_some(),
                });
            }
        }

        for (name, value) in self.numeric_fields() {
            if value < 0 {
                return Err(invalid_parameter(name, &value, &"must not be negative"));
            }
        }

        if let Some(weight) = self.weight.filter(|&w| w > MAX_COLOR_WEIGHT) {
            return Err(invalid_parameter(
                "weight",
                &weight,
                &format!("must be at most {MAX_COLOR_WEIGHT}"),
            ));
        }

        Ok(())
    }

    /// Validate and convert into placement parameters
    ///
    /// # Errors
    ///
    /// Returns any [`Self::validate`] error, `InvalidParameter` for values
    /// beyond the supported range, or `DivisionByZeroDistFactor` if a
    /// distance factor exceeds its canvas extent
    pub fn into_placement_config(self) -> Result<PlacementConfig> {
        self.validate()?;

        let canvas_width = canvas_dimension("canvasWidth", self.canvas_width)?;
        let canvas_height = canvas_dimension("canvasHeight", self.canvas_height)?;
        let x_factor = to_u32("xDistFactor", self.x_dist_factor)?;
        let y_factor = to_u32("yDistFactor", self.y_dist_factor)?;

        let mut rect_colors = ColorTable::from_hex(&self.rect_colors)?;
        if let (Some(weight), Some(code)) = self.weighting() {
            let extra = usize::try_from(weight)
                .map_err(|e| invalid_parameter("weight", &weight, &e))?;
            rect_colors = rect_colors.with_weight(Color::from_hex(code)?, extra);
        }

        Ok(PlacementConfig {
            rect_colors,
            canvas_color: Color::from_hex(&self.canvas_color)?,
            canvas_width,
            canvas_height,
            dist_x: PlacementConfig::spacing_from_factor("x", canvas_width, x_factor)?,
            dist_y: PlacementConfig::spacing_from_factor("y", canvas_height, y_factor)?,
            rect_width: to_u32("rectWidth", self.rect_width)?,
            rect_height: to_u32("rectHeight", self.rect_height)?,
            jitter: JitterBounds {
                x: to_u32("jitterX", self.jitter_x)?,
                y: to_u32("jitterY", self.jitter_y)?,
                width: to_u32("jitterWidth", self.jitter_width)?,
                height: to_u32("jitterHeight", self.jitter_height)?,
            },
            preserve_square: self.preserve_square,
            from_src_image: false,
        })
    }

    /// Describe effective placement parameters in config file form
    ///
    /// Distance factors are recomputed from the canvas extents and spacing.
    /// Weighting is already expanded into `rectColors`, so the weight fields
    /// are left out.
    pub fn from_placement_config(config: &PlacementConfig) -> Self {
        Self {
            rect_colors: config
                .rect_colors
                .colors()
                .iter()
                .map(|c| c.to_hex())
                .collect(),
            canvas_width: i64::from(config.canvas_width),
            canvas_height: i64::from(config.canvas_height),
            canvas_color: config.canvas_color.to_hex(),
            x_dist_factor: i64::from(config.x_dist_factor()),
            y_dist_factor: i64::from(config.y_dist_factor()),
            jitter_x: i64::from(config.jitter.x),
            jitter_y: i64::from(config.jitter.y),
            jitter_width: i64::from(config.jitter.width),
            jitter_height: i64::from(config.jitter.height),
            rect_width: i64::from(config.rect_width),
            rect_height: i64::from(config.rect_height),
            preserve_square: config.preserve_square,
            weight: None,
            weighted_color: None,
        }
    }

    /// Serialize as indented JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` if serialization fails
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // A zero weight and an empty color both count as absent
    fn weighting(&self) -> (Option<i64>, Option<&str>) {
        (
            self.weight.filter(|&w| w != 0),
            self.weighted_color.as_deref().filter(|c| !c.is_empty()),
        )
    }

    fn numeric_fields(&self) -> [(&'static str, i64); 11] {
        [
            ("canvasWidth", self.canvas_width),
            ("canvasHeight", self.canvas_height),
            ("xDistFactor", self.x_dist_factor),
            ("yDistFactor", self.y_dist_factor),
            ("jitterX", self.jitter_x),
            ("jitterY", self.jitter_y),
            ("jitterWidth", self.jitter_width),
            ("jitterHeight", self.jitter_height),
            ("rectWidth", self.rect_width),
            ("rectHeight", self.rect_height),
            ("weight", self.weight.unwrap_or(0)),
        ]
    }
}

/// Command-line replacements applied on top of a loaded config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasOverrides {
    /// Replacement canvas width
    pub width: Option<u32>,
    /// Replacement canvas height
    pub height: Option<u32>,
    /// Replacement horizontal distance factor
    pub x_factor: Option<u32>,
    /// Replacement vertical distance factor
    pub y_factor: Option<u32>,
}

/// Apply overrides to a loaded configuration
///
/// Width and height replace the canvas extents. A distance factor
/// recomputes spacing from the extent in effect after that replacement;
/// without a factor override the spacing stays as loaded.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero or oversized dimension, or
/// `DivisionByZeroDistFactor` for a factor that yields zero spacing
pub fn apply_overrides(config: &mut PlacementConfig, overrides: &CanvasOverrides) -> Result<()> {
    if let Some(width) = overrides.width {
        config.canvas_width = canvas_dimension("width", i64::from(width))?;
    }
    if let Some(height) = overrides.height {
        config.canvas_height = canvas_dimension("height", i64::from(height))?;
    }
    if let Some(factor) = overrides.x_factor {
        config.dist_x = PlacementConfig::spacing_from_factor("x", config.canvas_width, factor)?;
    }
    if let Some(factor) = overrides.y_factor {
        config.dist_y = PlacementConfig::spacing_from_factor("y", config.canvas_height, factor)?;
    }
    Ok(())
}

/// Convert a canvas dimension, rejecting zero and anything above the cap
///
/// # Errors
///
/// Returns `InvalidParameter` if `value` is outside `1..=MAX_CANVAS_DIMENSION`
pub fn canvas_dimension(name: &'static str, value: i64) -> Result<u32> {
    let dimension = to_u32(name, value)?;
    if dimension == 0 || dimension > MAX_CANVAS_DIMENSION {
        return Err(invalid_parameter(
            name,
            &value,
            &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
        ));
    }
    Ok(dimension)
}

fn to_u32(name: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|e| invalid_parameter(name, &value, &e))
}
