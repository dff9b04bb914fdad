// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vector math shared by the server and the heatmap renderer

pub mod normalize;
pub mod transform;

pub use normalize::{column_ranges, normalize_columns, ColumnRange};
pub use transform::{apply as transform_record, TransformOptions};
