// SPDX-License-Identifier: GPL-3.0-only

//! Depth preview rendering
//!
//! Renders an output buffer as an 8-bit RGB image for quick inspection:
//! - Turbo colormap (blue=near, red=far)
//! - Grayscale (bright=near, dark=far)
//!
//! Invalid pixels are black.

use super::output::OutputDepthBuffer;
use crate::constants::DEPTH_INVALID_MM;
use image::RgbImage;

/// Preview color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PreviewStyle {
    #[default]
    Turbo,
    Grayscale,
}

/// Turbo colormap: perceptually uniform rainbow (blue=near, red=far)
///
/// Based on: https://ai.googleblog.com/2019/08/turbo-improved-rainbow-colormap-for.html
/// Uses the 5th-order polynomial fit to Turbo published with the colormap
/// (Mikhailov, 2019).
#[inline]
fn turbo(t: f32) -> [u8; 3] {
    let r = (0.13572138
        + t * (4.6153926 + t * (-42.66032 + t * (132.13108 + t * (-152.54825 + t * 59.28144)))))
        .clamp(0.0, 1.0);
    let g = (0.09140261
        + t * (2.19418 + t * (4.84296 + t * (-14.18503 + t * (4.27805 + t * 2.53377)))))
        .clamp(0.0, 1.0);
    let b = (0.1066733
        + t * (12.64194 + t * (-60.58204 + t * (109.99648 + t * (-82.52904 + t * 20.43388)))))
        .clamp(0.0, 1.0);
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// Render `depth` with `style`, mapping `range_mm` (near, far) onto the
/// color scale
///
/// Values outside the range are clamped to its ends.
pub fn render_preview(
    depth: &OutputDepthBuffer,
    style: PreviewStyle,
    range_mm: (u16, u16),
) -> RgbImage {
    let (near, far) = range_mm;
    let near = f32::from(near);
    let span = (f32::from(far) - near).max(1.0);

    let pixels: Vec<u8> = depth
        .as_slice()
        .iter()
        .flat_map(|&mm| {
            if mm == DEPTH_INVALID_MM {
                return [0, 0, 0];
            }
            let t = ((f32::from(mm) - near) / span).clamp(0.0, 1.0);
            match style {
                PreviewStyle::Turbo => turbo(t),
                PreviewStyle::Grayscale => {
                    let gray = ((1.0 - t) * 255.0) as u8;
                    [gray, gray, gray]
                }
            }
        })
        .collect();

    // One RGB triple per depth sample, so the length always matches
    RgbImage::from_raw(depth.width(), depth.height(), pixels)
        .unwrap_or_else(|| RgbImage::new(depth.width(), depth.height()))
}
