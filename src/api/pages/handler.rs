// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTML page handlers for `/` and `/heatmap`

use axum::{extract::Query, response::Html};

use crate::api::data::dataset_from_pairs;
use crate::api::errors::ApiError;

/// Landing page linking to each dataset's heatmap
pub const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Heatmap viewer; the dataset is read client-side from the query string
pub const HEATMAP_HTML: &str = include_str!("../../../static/heatmap.html");

/// GET / handler
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /heatmap handler
///
/// # Errors
/// - 400 `Invalid dataset parameter`: missing or unknown `dataset`
pub async fn heatmap_handler(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<&'static str>, ApiError> {
    dataset_from_pairs(&pairs)?;
    Ok(Html(HEATMAP_HTML))
}
