// SPDX-License-Identifier: GPL-3.0-only

//! Depth conversion pipeline
//!
//! Converts one color/depth pair:
//! 1. Check that the color image and its raw depth sibling exist
//! 2. Read the color image dimensions
//! 3. Load and reshape the raw depth buffer
//! 4. Remap to 16-bit millimeters
//! 5. Save `{uid}_depth.png` (and optionally the preview)

use crate::config::DepthConfig;
use crate::constants::DEPTH_INVALID_MM;
use crate::depth::{DepthBuffer, DepthNormalizer, DepthStats, PreviewStyle, render_preview};
use crate::errors::DepthResult;
use crate::paths::SiblingPaths;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for a single conversion
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConvertOptions {
    pub config: DepthConfig,
    /// Also write a colormap preview when set
    pub preview: Option<PreviewStyle>,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub paths: SiblingPaths,
    pub width: u32,
    pub height: u32,
    pub stats: DepthStats,
    /// Preview file, when one was written
    pub preview_path: Option<PathBuf>,
}

impl ConversionReport {
    pub fn output_path(&self) -> &Path {
        &self.paths.depth_png
    }
}

/// Convert the raw depth paired with `color_path` into a 16-bit PNG
///
/// Nothing is written unless every step before the write succeeded.
pub fn convert(color_path: &Path, options: &ConvertOptions) -> DepthResult<ConversionReport> {
    options.config.validate()?;

    let paths = SiblingPaths::from_color_path(color_path)?;
    paths.check_inputs()?;

    let (width, height) = image::image_dimensions(&paths.color)?;
    debug!(
        color = %paths.color.display(),
        width,
        height,
        "Read color image dimensions"
    );

    let depth = DepthBuffer::load(&paths.raw_depth, width, height)?;

    let normalizer = DepthNormalizer::new(options.config);
    let output = normalizer.normalize(&depth);
    let stats = output.stats();

    output.save_png(&paths.depth_png)?;

    if stats.valid_pixels == 0 {
        warn!(
            raw_depth = %paths.raw_depth.display(),
            "No depth sample fell inside the valid range"
        );
    }

    let preview_path = match options.preview {
        Some(style) => {
            let range = preview_range(&stats, &options.config);
            let preview = render_preview(&output, style, range);
            preview.save(&paths.preview_png)?;
            debug!(
                path = %paths.preview_png.display(),
                ?style,
                near_mm = range.0,
                far_mm = range.1,
                "Saved depth preview"
            );
            Some(paths.preview_png.clone())
        }
        None => None,
    };

    info!(
        output = %paths.depth_png.display(),
        width,
        height,
        valid = stats.valid_pixels,
        invalid = stats.invalid_pixels,
        min_mm = stats.min_mm.unwrap_or(DEPTH_INVALID_MM),
        max_mm = stats.max_mm.unwrap_or(DEPTH_INVALID_MM),
        "Depth conversion complete"
    );

    Ok(ConversionReport {
        paths,
        width,
        height,
        stats,
        preview_path,
    })
}

/// Color scale range for the preview
///
/// Uses the observed valid range, falling back to the configured valid
/// range when nothing (or a single value) was observed.
fn preview_range(stats: &DepthStats, config: &DepthConfig) -> (u16, u16) {
    match (stats.min_mm, stats.max_mm) {
        (Some(min), Some(max)) if min < max => (min, max),
        _ => {
            let scale = config.output_units_scale;
            let near = (config.output_near_limit_meters * scale).round_ties_even() as u16;
            let far = (config.valid_far_meters() * scale).round_ties_even() as u16;
            (near, far)
        }
    }
}
