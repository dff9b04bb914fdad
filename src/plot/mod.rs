// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Offline heatmap rendering
//!
//! Renders a whole dataset as a PNG: one row per record, one column per
//! embedding dimension, each value column-normalized and mapped through
//! the `bwr` colormap. Uses the same normalization as `/data?normalized=1`
//! so the image matches what the browser viewer draws.

pub mod colormap;

use image::{ImageFormat, RgbImage};
use std::path::Path;
use thiserror::Error;

use crate::vector::normalize_columns;

pub use colormap::bwr;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("nothing to plot: dataset has no records or no dimensions")]
    Empty,

    #[error("heatmap too large: {rows} rows x {columns} columns at scale {scale}")]
    TooLarge {
        rows: usize,
        columns: usize,
        scale: u32,
    },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    /// Each value becomes a `scale x scale` block of pixels
    pub scale: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

/// Render raw (unnormalized) rows into an image.
pub fn render_heatmap(rows: &[Vec<f64>], options: PlotOptions) -> Result<RgbImage, PlotError> {
    let columns = rows.first().map(Vec::len).unwrap_or(0);
    if rows.is_empty() || columns == 0 {
        return Err(PlotError::Empty);
    }

    let scale = options.scale.max(1);
    let too_large = || PlotError::TooLarge {
        rows: rows.len(),
        columns,
        scale,
    };
    let width = u32::try_from(columns)
        .ok()
        .and_then(|c| c.checked_mul(scale))
        .ok_or_else(too_large)?;
    let height = u32::try_from(rows.len())
        .ok()
        .and_then(|r| r.checked_mul(scale))
        .ok_or_else(too_large)?;

    let normalized = normalize_columns(rows);

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let row = &normalized[(y / scale) as usize];
        bwr(row.get((x / scale) as usize).copied().unwrap_or(0.0))
    }))
}

/// Write the image as PNG regardless of the file extension.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), PlotError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
