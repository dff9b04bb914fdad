// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Read-time transform applied to each record's vector for `/data`.

use crate::dataset::Record;

/// Options requested by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Use the precomputed normalized vector instead of the raw one
    pub normalized: bool,
    /// Sort values ascending (drops dimension identity)
    pub sorted: bool,
}

/// Select raw or normalized values, then optionally sort them ascending.
pub fn apply(record: &Record, options: TransformOptions) -> Vec<f64> {
    let source = if options.normalized {
        &record.normalized
    } else {
        &record.raw
    };

    let mut values = source.clone();
    if options.sorted {
        values.sort_by(f64::total_cmp);
    }
    values
}
