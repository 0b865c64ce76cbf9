// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the conversion pipeline

use raw_depth_convert::{ConvertOptions, DepthError, PreviewStyle, convert};
use std::path::{Path, PathBuf};

/// Write a blank color image and its raw depth sibling into `dir`
fn write_pair(dir: &Path, uid: &str, width: u32, height: u32, depth: &[f32]) -> PathBuf {
    let color = dir.join(format!("{uid}.png"));
    image::RgbImage::new(width, height).save(&color).unwrap();

    let raw: Vec<u8> = depth.iter().flat_map(|v| v.to_le_bytes()).collect();
    std::fs::write(dir.join(format!("{uid}_depth.raw")), raw).unwrap();
    color
}

fn read_depth_png(path: &Path) -> image::ImageBuffer<image::Luma<u16>, Vec<u16>> {
    let decoded = image::open(path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::L16);
    decoded.into_luma16()
}

#[test]
fn test_convert_boundary_values() {
    let dir = tempfile::tempdir().unwrap();
    let depth = [
        0.0003,
        0.0004,
        0.064,
        0.0639,
        f32::NAN,
        f32::INFINITY,
        0.0,
        0.01,
    ];
    let color = write_pair(dir.path(), "rgb_7", 4, 2, &depth);

    let report = convert(&color, &ConvertOptions::default()).unwrap();

    let expected_path = dir.path().join("rgb_7_depth.png");
    assert_eq!(report.output_path(), expected_path);
    assert_eq!((report.width, report.height), (4, 2));
    assert_eq!(report.stats.valid_pixels, 3);
    assert_eq!(report.stats.min_mm, Some(400));
    assert_eq!(report.stats.max_mm, Some(63900));
    assert!(report.preview_path.is_none());

    let output = read_depth_png(&expected_path);
    assert_eq!(output.dimensions(), (4, 2));
    assert_eq!(output.as_raw(), &vec![0, 400, 0, 63900, 0, 0, 0, 10000]);
}

#[test]
fn test_output_shape_matches_color_image() {
    let dir = tempfile::tempdir().unwrap();
    let (width, height) = (7, 3);
    let depth: Vec<f32> = (0..width * height).map(|i| 0.001 + i as f32 * 0.0001).collect();
    let color = write_pair(dir.path(), "frame", width, height, &depth);

    let report = convert(&color, &ConvertOptions::default()).unwrap();
    let output = read_depth_png(report.output_path());
    assert_eq!(output.dimensions(), (width, height));
    // Row-major: last sample of the first row lands at (width - 1, 0)
    assert_eq!(output.get_pixel(width - 1, 0).0[0], 1600);
    assert!(output.pixels().all(|p| p.0[0] != 0));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let depth: Vec<f32> = (0..64).map(|i| i as f32 * 0.0009).collect();
    let color = write_pair(dir.path(), "rgb", 8, 8, &depth);

    let first = convert(&color, &ConvertOptions::default()).unwrap();
    let first_bytes = std::fs::read(first.output_path()).unwrap();
    let second = convert(&color, &ConvertOptions::default()).unwrap();
    let second_bytes = std::fs::read(second.output_path()).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_missing_raw_depth_is_precondition_error() {
    let dir = tempfile::tempdir().unwrap();
    let color = dir.path().join("rgb.png");
    image::RgbImage::new(2, 2).save(&color).unwrap();

    match convert(&color, &ConvertOptions::default()) {
        Err(DepthError::Precondition { path }) => {
            assert_eq!(path, dir.path().join("rgb_depth.raw"));
        }
        other => panic!("expected precondition error, got {other:?}"),
    }
    assert!(!dir.path().join("rgb_depth.png").exists());
}

#[test]
fn test_missing_color_image_is_precondition_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert(&dir.path().join("rgb.png"), &ConvertOptions::default());
    assert!(matches!(result, Err(DepthError::Precondition { .. })));
}

#[test]
fn test_shape_mismatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let color = write_pair(dir.path(), "rgb", 4, 4, &[0.001; 15]);

    match convert(&color, &ConvertOptions::default()) {
        Err(DepthError::ShapeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected shape mismatch, got {other:?}"),
    }
    assert!(!dir.path().join("rgb_depth.png").exists());
}

#[test]
fn test_excess_samples_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let color = write_pair(dir.path(), "rgb", 2, 2, &[0.001; 5]);

    assert!(matches!(
        convert(&color, &ConvertOptions::default()),
        Err(DepthError::ShapeMismatch { actual: 5, .. })
    ));
    assert!(!dir.path().join("rgb_depth.png").exists());
}

#[test]
fn test_preview_written_next_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let depth = [0.001, 0.002, f32::NAN, 0.004];
    let color = write_pair(dir.path(), "rgb", 2, 2, &depth);

    let options = ConvertOptions {
        preview: Some(PreviewStyle::Grayscale),
        ..ConvertOptions::default()
    };
    let report = convert(&color, &options).unwrap();

    let preview_path = dir.path().join("rgb_depth_preview.png");
    assert_eq!(report.preview_path.as_deref(), Some(preview_path.as_path()));

    let preview = image::open(&preview_path).unwrap().into_rgb8();
    assert_eq!(preview.dimensions(), (2, 2));
    // Nearest valid sample is brightest, invalid is black
    assert_eq!(preview.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(preview.get_pixel(0, 1).0, [0, 0, 0]);
    assert_eq!(preview.get_pixel(1, 1).0, [0, 0, 0]);
}
