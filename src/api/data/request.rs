// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Validated query parameters for `GET /data`
//!
//! Raw query pairs are turned into a [`DataRequest`] at the boundary so the
//! handler only ever sees a known dataset name and two booleans.

use crate::api::errors::{ApiError, DatasetSource};
use crate::dataset::DatasetName;
use crate::vector::TransformOptions;

/// Query for `GET /data?dataset=<name>&sorted=0|1&normalized=0|1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRequest {
    pub dataset: DatasetName,
    pub options: TransformOptions,
}

impl DataRequest {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    ///
    /// # Validation Rules
    /// 1. **dataset**: required, must name a registered dataset
    /// 2. **sorted / normalized**: exactly `1` means true; anything else,
    ///    including absence, means false
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        let dataset = parse_dataset(first_value(pairs, "dataset"))?;
        Ok(Self {
            dataset,
            options: TransformOptions {
                sorted: parse_flag(first_value(pairs, "sorted")),
                normalized: parse_flag(first_value(pairs, "normalized")),
            },
        })
    }
}

/// Validate only the `dataset` query parameter (used by `/heatmap`).
pub fn dataset_from_pairs(pairs: &[(String, String)]) -> Result<DatasetName, ApiError> {
    parse_dataset(first_value(pairs, "dataset"))
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_dataset(value: Option<&str>) -> Result<DatasetName, ApiError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or(ApiError::InvalidDataset(DatasetSource::Query))
}

fn parse_flag(value: Option<&str>) -> bool {
    value == Some("1")
}
