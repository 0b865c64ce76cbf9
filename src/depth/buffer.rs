// SPDX-License-Identifier: GPL-3.0-only

//! Raw normalized depth buffer
//!
//! The renderer writes a flat array of little-endian f32 values with no
//! header. Dimensions come from the paired color image.

use crate::constants::RAW_SAMPLE_BYTES;
use crate::errors::{DepthError, DepthResult};
use std::path::Path;
use tracing::debug;

/// Row-major grid of normalized depth samples (0.0 = optical center,
/// 1.0 = far clipping plane)
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl DepthBuffer {
    /// Wrap samples as a `width` x `height` grid
    ///
    /// The sample count must match exactly; neither truncation nor
    /// padding is applied.
    pub fn new(width: u32, height: u32, samples: Vec<f32>) -> DepthResult<Self> {
        let expected = pixel_count(width, height);
        if samples.len() != expected {
            return Err(DepthError::ShapeMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Decode a little-endian f32 byte array and reshape it
    pub fn from_le_bytes(bytes: &[u8], width: u32, height: u32) -> DepthResult<Self> {
        if bytes.len() % RAW_SAMPLE_BYTES != 0 {
            return Err(DepthError::PartialSample { bytes: bytes.len() });
        }

        let samples: Vec<f32> = bytes
            .chunks_exact(RAW_SAMPLE_BYTES)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();

        Self::new(width, height, samples)
    }

    /// Read a raw depth file and reshape it to `width` x `height`
    pub fn load(path: &Path, width: u32, height: u32) -> DepthResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| DepthError::io(path, e))?;
        debug!(
            path = %path.display(),
            bytes = bytes.len(),
            width,
            height,
            "Read raw depth buffer"
        );
        Self::from_le_bytes(&bytes, width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples in row-major order
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Number of pixels in a `width` x `height` grid
pub(crate) fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
