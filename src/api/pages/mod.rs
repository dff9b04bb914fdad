// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod handler;

pub use handler::{heatmap_handler, index_handler, HEATMAP_HTML, INDEX_HTML};
