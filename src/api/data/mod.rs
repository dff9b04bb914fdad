// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding data API
//!
//! Provides `GET /data`, the JSON feed behind the heatmap page.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::data_handler;
pub use request::{dataset_from_pairs, DataRequest};
pub use response::{DataRecord, DATASET_STATUS_HEADER};
