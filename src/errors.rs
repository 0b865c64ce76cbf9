// SPDX-License-Identifier: GPL-3.0-only

//! Error types for depth conversion

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DepthError
pub type DepthResult<T> = Result<T, DepthError>;

/// Depth conversion error type
///
/// Every variant is fatal: the pipeline never retries and never writes a
/// partial output file.
#[derive(Debug, Error)]
pub enum DepthError {
    /// A required input file does not exist
    #[error("required input file not found: {}", .path.display())]
    Precondition { path: PathBuf },

    /// The color image path has no file stem to derive siblings from
    #[error("cannot derive depth file names from: {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// Raw sample count does not match the color image dimensions
    #[error(
        "raw depth has {actual} samples but a {width}x{height} image needs {expected}"
    )]
    ShapeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Raw byte length is not a whole number of f32 samples
    #[error("raw depth length {bytes} is not a multiple of 4 bytes")]
    PartialSample { bytes: usize },

    /// Configuration values rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Filesystem error with the path it happened on
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image decode or encode failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration file could not be parsed
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl DepthError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DepthError::Io {
            path: path.into(),
            source,
        }
    }
}
