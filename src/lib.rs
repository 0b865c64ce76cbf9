// SPDX-License-Identifier: GPL-3.0-only

//! Raw depth conversion
//!
//! Converts a renderer's raw normalized depth buffer (little-endian f32,
//! 0.0 = optical center, 1.0 = far clipping plane) into a 16-bit PNG depth
//! map in millimeters where 0 marks unknown or invalid depth.
//!
//! # Architecture
//!
//! - [`constants`]: Fixed renderer and output constants
//! - [`config`]: The constants as a validated, loadable configuration
//! - [`paths`]: Sibling file naming around the color image
//! - [`depth`]: Raw buffer decoding, remapping, PNG output and previews
//! - [`pipeline`]: End-to-end conversion of one color/depth pair
//! - [`errors`]: Error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use raw_depth_convert::{ConvertOptions, convert};
//! use std::path::Path;
//!
//! let report = convert(Path::new("captures/rgb_12.png"), &ConvertOptions::default())?;
//! println!("wrote {}", report.output_path().display());
//! # Ok::<(), raw_depth_convert::DepthError>(())
//! ```

pub mod config;
pub mod constants;
pub mod depth;
pub mod errors;
pub mod paths;
pub mod pipeline;

// Re-export commonly used types
pub use config::DepthConfig;
pub use depth::{DepthBuffer, DepthNormalizer, DepthStats, OutputDepthBuffer, PreviewStyle};
pub use errors::{DepthError, DepthResult};
pub use paths::SiblingPaths;
pub use pipeline::{ConversionReport, ConvertOptions, convert};
