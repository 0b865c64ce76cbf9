// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! - Converting one color/depth pair
//! - Printing the effective configuration

use raw_depth_convert::{ConvertOptions, DepthConfig, PreviewStyle, convert};
use std::path::Path;

/// Load the configuration file if one was given, defaults otherwise
fn load_config(config_path: Option<&Path>) -> Result<DepthConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => Ok(DepthConfig::load(path)?),
        None => Ok(DepthConfig::default()),
    }
}

/// Print the effective configuration as JSON
pub fn print_config(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    config.validate()?;
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

/// Convert the raw depth paired with `color_image`
pub fn convert_depth(
    color_image: &Path,
    config_path: Option<&Path>,
    preview: Option<PreviewStyle>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions {
        config: load_config(config_path)?,
        preview,
    };

    let report = convert(color_image, &options)?;
    let stats = &report.stats;

    println!("Depth saved: {}", report.output_path().display());
    if let Some(preview_path) = &report.preview_path {
        println!("Preview saved: {}", preview_path.display());
    }

    let range = match (stats.min_mm, stats.max_mm) {
        (Some(min), Some(max)) => format!("{}-{} mm", min, max),
        _ => "no valid depth".to_string(),
    };
    println!(
        "  {}x{}, {} of {} pixels valid ({:.1}%), {}",
        report.width,
        report.height,
        stats.valid_pixels,
        stats.total_pixels,
        stats.valid_ratio() * 100.0,
        range
    );

    Ok(())
}
