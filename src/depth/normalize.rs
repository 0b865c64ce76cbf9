// SPDX-License-Identifier: GPL-3.0-only

//! Normalized depth to millimeter remapping
//!
//! Per sample:
//! 1. `meters = raw * clipping_plane_far`
//! 2. valid iff `near < meters < far_limit - margin` and finite
//! 3. invalid samples become 0.0
//! 4. `round(meters * units_scale)`, ties to even
//! 5. saturating cast to `u16`
//!
//! All arithmetic stays in f32, the precision of the source data, so the
//! exclusive boundaries land where the renderer's values put them.

use super::buffer::DepthBuffer;
use super::output::OutputDepthBuffer;
use crate::config::DepthConfig;

/// Stateless converter from normalized depth to output units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthNormalizer {
    config: DepthConfig,
    valid_far_meters: f32,
}

impl DepthNormalizer {
    pub fn new(config: DepthConfig) -> Self {
        Self {
            config,
            valid_far_meters: config.valid_far_meters(),
        }
    }

    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    /// Convert a normalized sample to meters
    #[inline]
    pub fn meters(&self, raw: f32) -> f32 {
        raw * self.config.clipping_plane_far_meters
    }

    /// Whether a distance in meters is representable in the output
    ///
    /// NaN fails both comparisons; the explicit finiteness check covers
    /// configurations where an infinity could slip through.
    #[inline]
    pub fn is_valid(&self, meters: f32) -> bool {
        meters > self.config.output_near_limit_meters
            && meters < self.valid_far_meters
            && meters.is_finite()
    }

    /// Convert one raw sample to output units (0 = invalid)
    #[inline]
    pub fn convert_sample(&self, raw: f32) -> u16 {
        let meters = self.meters(raw);
        let meters = if self.is_valid(meters) { meters } else { 0.0 };
        // `as` saturates float to int casts
        (meters * self.config.output_units_scale).round_ties_even() as u16
    }

    /// Per-sample validity, same shape and order as the buffer
    pub fn validity_mask(&self, depth: &DepthBuffer) -> Vec<bool> {
        depth
            .samples()
            .iter()
            .map(|&raw| self.is_valid(self.meters(raw)))
            .collect()
    }

    /// Remap a whole buffer
    pub fn normalize(&self, depth: &DepthBuffer) -> OutputDepthBuffer {
        let millimeters = depth
            .samples()
            .iter()
            .map(|&raw| self.convert_sample(raw))
            .collect();
        OutputDepthBuffer::from_parts(depth.width(), depth.height(), millimeters)
    }
}

impl Default for DepthNormalizer {
    fn default() -> Self {
        Self::new(DepthConfig::default())
    }
}
