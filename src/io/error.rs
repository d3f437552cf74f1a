//! Error types and path context for configuration, placement setup and raster I/O

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Color string is not `#` followed by exactly six hex digits
    InvalidColorFormat {
        /// The offending color string
        value: String,
    },

    /// One or more required configuration fields are zero or empty
    MissingRequiredConfig {
        /// Names of every missing field, in declaration order
        fields: Vec<&'static str>,
    },

    /// Only one of `weight` / `weightedColor` was given
    InconsistentWeightFields {
        /// Whether `weight` was present
        has_weight: bool,
        /// Whether `weightedColor` was present
        has_weighted_color: bool,
    },

    /// A distance factor would produce zero grid spacing
    ///
    /// Occurs when the factor itself is zero or exceeds the canvas extent,
    /// since spacing is derived as `extent / factor`.
    DivisionByZeroDistFactor {
        /// Axis the factor applies to (`x` or `y`)
        axis: &'static str,
        /// Canvas extent along that axis
        extent: u32,
        /// The rejected factor
        factor: u32,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Neither a config file nor a palette source was supplied
    MissingSource,

    /// Config file is not valid JSON for the expected shape
    ConfigParse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
    },

    /// Failed to load canvas image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Coarse classification of [`GenerationError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed hex color
    InvalidColorFormat,
    /// Required field zero or empty
    MissingRequiredConfig,
    /// `weight` without `weightedColor` or vice versa
    InconsistentWeightFields,
    /// Distance factor yields zero spacing
    DivisionByZeroDistFactor,
    /// Any other rejected parameter or missing source
    InvalidParameter,
    /// File read, decode, parse or write failure
    IoFailure,
}

impl GenerationError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidColorFormat { .. } => ErrorKind::InvalidColorFormat,
            Self::MissingRequiredConfig { .. } => ErrorKind::MissingRequiredConfig,
            Self::InconsistentWeightFields { .. } => ErrorKind::InconsistentWeightFields,
            Self::DivisionByZeroDistFactor { .. } => ErrorKind::DivisionByZeroDistFactor,
            Self::InvalidParameter { .. } | Self::MissingSource => ErrorKind::InvalidParameter,
            Self::ConfigParse { .. }
            | Self::ImageLoad { .. }
            | Self::ImageExport { .. }
            | Self::FileSystem { .. } => ErrorKind::IoFailure,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat { value } => {
                write!(
                    f,
                    "Invalid color '{value}': expected '#' followed by 6 hex digits"
                )
            }
            Self::MissingRequiredConfig { fields } => {
                write!(
                    f,
                    "Invalid config: required properties [{}] must be non-zero and non-empty",
                    fields.join(", ")
                )
            }
            Self::InconsistentWeightFields {
                has_weight,
                has_weighted_color,
            } => {
                let (given, missing) = if *has_weight && !*has_weighted_color {
                    ("weight", "weightedColor")
                } else {
                    ("weightedColor", "weight")
                };
                write!(
                    f,
                    "Invalid config: '{given}' is specified without '{missing}'; both or neither are required"
                )
            }
            Self::DivisionByZeroDistFactor {
                axis,
                extent,
                factor,
            } => {
                write!(
                    f,
                    "Distance factor {factor} on the {axis} axis yields zero grid spacing for extent {extent}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MissingSource => {
                write!(
                    f,
                    "Some source file is required: specify either '--config' or '--extract'"
                )
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse config '{}': {source}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

const UNKNOWN_PATH: &str = "<unknown>";

/// Attaches the offending path to I/O errors converted without one
pub trait WithPath<T> {
    /// Replace an unknown path on I/O variants with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<GenerationError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only variants built through `From` carry the placeholder
            match &mut error {
                GenerationError::ConfigParse { path: p, .. }
                | GenerationError::ImageLoad { path: p, .. }
                | GenerationError::ImageExport { path: p, .. }
                | GenerationError::FileSystem { path: p, .. }
                    if p.as_os_str() == UNKNOWN_PATH =>
                {
                    *p = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "read",
            source: err,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
