// SPDX-License-Identifier: GPL-3.0-only

//! Depth conversion configuration
//!
//! The defaults reproduce the renderer's fixed constants. A JSON file may
//! override any subset of the fields.

use crate::constants::{
    CLIPPING_PLANE_FAR_METERS, OUTPUT_FAR_LIMIT_METERS, OUTPUT_FAR_MARGIN_METERS,
    OUTPUT_NEAR_LIMIT_METERS, OUTPUT_UNITS_SCALE,
};
use crate::errors::{DepthError, DepthResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Numeric parameters of the depth remapping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthConfig {
    /// Distance in meters that a raw value of 1.0 represents
    pub clipping_plane_far_meters: f32,
    /// Upper bound of representable output distance (meters)
    pub output_far_limit_meters: f32,
    /// Lower bound of representable output distance (meters, exclusive)
    pub output_near_limit_meters: f32,
    /// Factor from meters to the integer output unit
    pub output_units_scale: f32,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            clipping_plane_far_meters: CLIPPING_PLANE_FAR_METERS,
            output_far_limit_meters: OUTPUT_FAR_LIMIT_METERS,
            output_near_limit_meters: OUTPUT_NEAR_LIMIT_METERS,
            output_units_scale: OUTPUT_UNITS_SCALE,
        }
    }
}

impl DepthConfig {
    /// Parse a configuration from JSON; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> DepthResult<Self> {
        let config: DepthConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> DepthResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| DepthError::io(path, e))?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), ?config, "Loaded depth configuration");
        Ok(config)
    }

    /// Pretty-printed JSON form of this configuration
    pub fn to_json_pretty(&self) -> DepthResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Exclusive upper bound (meters) a sample must stay below to be valid
    pub fn valid_far_meters(&self) -> f32 {
        self.output_far_limit_meters - OUTPUT_FAR_MARGIN_METERS
    }

    /// Check that the remapping is well defined for these values
    ///
    /// Beyond plain sanity checks, this guarantees that every valid sample
    /// lands in `1..=65535`, so 0 only ever means "invalid".
    pub fn validate(&self) -> DepthResult<()> {
        let fields = [
            ("clipping_plane_far_meters", self.clipping_plane_far_meters),
            ("output_far_limit_meters", self.output_far_limit_meters),
            ("output_near_limit_meters", self.output_near_limit_meters),
            ("output_units_scale", self.output_units_scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if self.clipping_plane_far_meters <= 0.0 {
            return Err(invalid("clipping_plane_far_meters must be positive"));
        }
        if self.output_units_scale <= 0.0 {
            return Err(invalid("output_units_scale must be positive"));
        }
        if self.output_near_limit_meters < 0.0 {
            return Err(invalid("output_near_limit_meters must not be negative"));
        }

        let far = self.valid_far_meters();
        if self.output_near_limit_meters >= far {
            return Err(invalid(format!(
                "near limit {} m must be below far limit minus margin ({} m)",
                self.output_near_limit_meters, far
            )));
        }
        if far * self.output_units_scale > f32::from(u16::MAX) {
            return Err(invalid(format!(
                "far limit {} m at scale {} exceeds the 16-bit output range",
                far, self.output_units_scale
            )));
        }
        // Anything rounding to 0 would be indistinguishable from the sentinel
        if self.output_near_limit_meters * self.output_units_scale < 1.0 {
            return Err(invalid(format!(
                "near limit {} m at scale {} lets valid samples round to 0",
                self.output_near_limit_meters, self.output_units_scale
            )));
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> DepthError {
    DepthError::InvalidConfig(msg.into())
}
