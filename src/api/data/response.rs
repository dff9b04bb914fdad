// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response item for `GET /data`

use serde::{Deserialize, Serialize};

use crate::dataset::Record;
use crate::vector::{transform_record, TransformOptions};

/// Header carrying the dataset's load status on every `/data` response
pub const DATASET_STATUS_HEADER: &str = "x-dataset-status";

/// One element of the `/data` JSON array
///
/// # Example
/// ```json
/// { "filename": "cat1.jpg", "embedding": [0.0, 0.0, 1.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub filename: String,
    pub embedding: Vec<f64>,
}

impl DataRecord {
    pub fn from_record(record: &Record, options: TransformOptions) -> Self {
        Self {
            filename: record.filename.clone(),
            embedding: transform_record(record, options),
        }
    }
}
