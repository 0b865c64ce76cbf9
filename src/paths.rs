// SPDX-License-Identifier: GPL-3.0-only

//! Sibling file naming
//!
//! A color image `D/{uid}.{ext}` is paired with:
//! - `D/{uid}_depth.raw` - raw normalized depth input
//! - `D/{uid}_depth.png` - 16-bit millimeter depth output
//! - `D/{uid}_depth_preview.png` - optional colormap preview

use crate::constants::{DEPTH_PNG_SUFFIX, DEPTH_PREVIEW_SUFFIX, RAW_DEPTH_SUFFIX};
use crate::errors::{DepthError, DepthResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// All file paths involved in converting one color/depth pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingPaths {
    /// Color image supplying the dimensions
    pub color: PathBuf,
    /// Raw little-endian f32 depth buffer
    pub raw_depth: PathBuf,
    /// 16-bit PNG depth output
    pub depth_png: PathBuf,
    /// Colormap preview output
    pub preview_png: PathBuf,
}

impl SiblingPaths {
    /// Derive sibling paths from the color image path
    pub fn from_color_path(color: impl AsRef<Path>) -> DepthResult<Self> {
        let color = color.as_ref();
        let uid = color
            .file_stem()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DepthError::InvalidPath {
                path: color.to_path_buf(),
            })?;
        let dir = color.parent().unwrap_or_else(|| Path::new(""));
        let sibling = |suffix: &str| {
            let mut name = uid.to_os_string();
            name.push(suffix);
            dir.join(name)
        };

        Ok(Self {
            color: color.to_path_buf(),
            raw_depth: sibling(RAW_DEPTH_SUFFIX),
            depth_png: sibling(DEPTH_PNG_SUFFIX),
            preview_png: sibling(DEPTH_PREVIEW_SUFFIX),
        })
    }

    /// Fail if either input file is missing (color first, then raw depth)
    pub fn check_inputs(&self) -> DepthResult<()> {
        for path in [&self.color, &self.raw_depth] {
            if !path.exists() {
                return Err(DepthError::Precondition { path: path.clone() });
            }
        }
        debug!(
            color = %self.color.display(),
            raw_depth = %self.raw_depth.display(),
            "Input files present"
        );
        Ok(())
    }
}
