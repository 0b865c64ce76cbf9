// SPDX-License-Identifier: GPL-3.0-only

//! Depth conversion constants - Single source of truth
//!
//! The raw buffers come from a renderer whose depth target stores
//! `R32_SFloat` values where 0.0 is the camera optical center and 1.0 is
//! the far clipping plane. The output is a 16-bit PNG in millimeters.

/// Distance in meters represented by a raw value of 1.0
pub const CLIPPING_PLANE_FAR_METERS: f32 = 1000.0;

/// Upper bound of representable output distance (meters)
///
/// Limited by millimeter output in a 16-bit PNG (65535 mm).
pub const OUTPUT_FAR_LIMIT_METERS: f32 = 65.0;

/// Lower bound of representable output distance (meters, exclusive)
pub const OUTPUT_NEAR_LIMIT_METERS: f32 = 0.3;

/// Meters to output units (millimeters)
pub const OUTPUT_UNITS_SCALE: f32 = 1000.0;

/// Margin subtracted from the far limit when testing validity
pub const OUTPUT_FAR_MARGIN_METERS: f32 = 1.0;

/// Invalid / unknown depth marker in the output image
pub const DEPTH_INVALID_MM: u16 = 0;

/// Size in bytes of one raw depth sample (little-endian f32)
pub const RAW_SAMPLE_BYTES: usize = 4;

/// Suffix appended to the color image stem for the raw depth input
pub const RAW_DEPTH_SUFFIX: &str = "_depth.raw";

/// Suffix appended to the color image stem for the PNG depth output
pub const DEPTH_PNG_SUFFIX: &str = "_depth.png";

/// Suffix appended to the color image stem for the optional preview
pub const DEPTH_PREVIEW_SUFFIX: &str = "_depth_preview.png";
