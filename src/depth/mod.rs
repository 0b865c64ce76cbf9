// SPDX-License-Identifier: GPL-3.0-only

//! Depth buffer processing
//!
//! Decodes raw normalized depth, remaps it to 16-bit millimeters and
//! renders optional previews of the result.

mod buffer;
mod normalize;
mod output;
mod visualization;

pub use buffer::DepthBuffer;
pub use normalize::DepthNormalizer;
pub use output::{DepthStats, OutputDepthBuffer};
pub use visualization::{PreviewStyle, render_preview};
