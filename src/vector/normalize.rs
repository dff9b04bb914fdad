// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Column-wise min-max normalization
//!
//! Every column is rescaled independently so its minimum maps to 0 and its
//! maximum to 1. A constant column maps to all zeros.

/// Minimum and maximum of one column.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    pub fn is_constant(&self) -> bool {
        self.min == self.max
    }

    /// Map `value` into [0, 1]; constant columns always yield 0.
    ///
    /// Works on halved values so a range wider than `f64::MAX` does not
    /// overflow to infinity.
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_constant() {
            return 0.0;
        }
        let span = self.max / 2.0 - self.min / 2.0;
        ((value / 2.0 - self.min / 2.0) / span).clamp(0.0, 1.0)
    }
}

/// Per-column ranges of a row-major matrix. All rows must have the same
/// length; an empty matrix yields no ranges.
pub fn column_ranges(rows: &[Vec<f64>]) -> Vec<ColumnRange> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut ranges: Vec<ColumnRange> = first
        .iter()
        .map(|&v| ColumnRange { min: v, max: v })
        .collect();

    for row in &rows[1..] {
        debug_assert_eq!(row.len(), ranges.len(), "ragged matrix");
        for (range, &value) in ranges.iter_mut().zip(row) {
            range.min = range.min.min(value);
            range.max = range.max.max(value);
        }
    }

    ranges
}

/// Normalize a row-major matrix column by column.
pub fn normalize_columns(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let ranges = column_ranges(rows);
    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&ranges)
                .map(|(&value, range)| range.scale(value))
                .collect()
        })
        .collect()
}
