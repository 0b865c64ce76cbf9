// SPDX-License-Identifier: GPL-3.0-only

//! 16-bit millimeter depth output
//!
//! Encoded as a single channel 16-bit PNG where 0 marks unknown or invalid
//! depth.

use super::buffer::pixel_count;
use crate::constants::DEPTH_INVALID_MM;
use crate::errors::{DepthError, DepthResult};
use image::{ImageBuffer, ImageFormat, Luma};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// 16-bit grayscale image holding millimeters
pub type DepthImage = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Row-major grid of output depth values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDepthBuffer {
    width: u32,
    height: u32,
    millimeters: Vec<u16>,
}

/// Summary of an output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStats {
    pub total_pixels: usize,
    pub valid_pixels: usize,
    pub invalid_pixels: usize,
    /// Smallest valid value (None when no pixel is valid)
    pub min_mm: Option<u16>,
    /// Largest valid value (None when no pixel is valid)
    pub max_mm: Option<u16>,
}

impl DepthStats {
    /// Fraction of valid pixels in `0.0..=1.0` (0.0 for an empty image)
    pub fn valid_ratio(&self) -> f64 {
        if self.total_pixels == 0 {
            0.0
        } else {
            self.valid_pixels as f64 / self.total_pixels as f64
        }
    }
}

impl OutputDepthBuffer {
    /// Callers guarantee `millimeters.len() == width * height`
    pub(crate) fn from_parts(width: u32, height: u32, millimeters: Vec<u16>) -> Self {
        debug_assert_eq!(millimeters.len(), pixel_count(width, height));
        Self {
            width,
            height,
            millimeters,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.millimeters
    }

    /// Value at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.millimeters
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn stats(&self) -> DepthStats {
        let mut valid_pixels = 0usize;
        let mut min_mm: Option<u16> = None;
        let mut max_mm: Option<u16> = None;

        for &mm in self.millimeters.iter().filter(|&&mm| mm != DEPTH_INVALID_MM) {
            valid_pixels += 1;
            min_mm = Some(min_mm.map_or(mm, |m| m.min(mm)));
            max_mm = Some(max_mm.map_or(mm, |m| m.max(mm)));
        }

        DepthStats {
            total_pixels: self.millimeters.len(),
            valid_pixels,
            invalid_pixels: self.millimeters.len() - valid_pixels,
            min_mm,
            max_mm,
        }
    }

    /// Copy into a 16-bit grayscale image
    pub fn to_image(&self) -> DepthResult<DepthImage> {
        DepthImage::from_raw(self.width, self.height, self.millimeters.clone()).ok_or(
            DepthError::ShapeMismatch {
                width: self.width,
                height: self.height,
                expected: pixel_count(self.width, self.height),
                actual: self.millimeters.len(),
            },
        )
    }

    /// Encode as a 16-bit single channel PNG in memory
    pub fn encode_png(&self) -> DepthResult<Vec<u8>> {
        let image = self.to_image()?;
        let mut buf = Vec::new();
        image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    /// Write the PNG to disk
    ///
    /// Encoding finishes before the file is created, so an encode failure
    /// never leaves a truncated file behind.
    pub fn save_png(&self, path: &Path) -> DepthResult<()> {
        let png = self.encode_png()?;
        std::fs::write(path, &png).map_err(|e| DepthError::io(path, e))?;
        debug!(path = %path.display(), bytes = png.len(), "Saved 16-bit depth PNG");
        Ok(())
    }
}
