use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Error type for covplot-render operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The plotting backend failed while drawing or saving.
    #[error("Failed to draw figure: {0}")]
    Drawing(String),

    /// A color in the style configuration is not `#rrggbb`.
    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    /// A numeric style setting is out of range.
    #[error("Invalid plot setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    /// Unknown output format name.
    #[error("Unknown figure format {0:?}, expected svg or png")]
    UnknownFormat(String),

    /// Failed to create the output directory.
    #[error("Can't create output directory {path:?}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

/// Result type alias for covplot-render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
