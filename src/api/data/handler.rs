// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /data HTTP handler

use axum::{
    extract::{Query, State},
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::request::DataRequest;
use super::response::{DataRecord, DATASET_STATUS_HEADER};
use crate::api::errors::{ApiError, DatasetSource};
use crate::api::http_server::AppState;
use crate::dataset::LoadStatus;

/// GET /data handler
///
/// Returns every record of the dataset, in file order, as
/// `[{"filename": ..., "embedding": [...]}, ...]`. Each embedding is the raw
/// or normalized vector, optionally sorted ascending.
///
/// # Errors
/// - 400 `Invalid dataset parameter`: missing or unknown `dataset`
/// - 503 `Dataset failed to load`: the embedding file was malformed
///
/// A dataset whose file is missing answers 200 with `[]`; the
/// `X-Dataset-Status` header tells the two empty cases apart.
pub async fn data_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let request = DataRequest::from_pairs(&pairs)?;
    let dataset = state
        .registry
        .get(request.dataset)
        .ok_or(ApiError::InvalidDataset(DatasetSource::Query))?;

    if let LoadStatus::Failed { reason } = &dataset.status {
        return Err(ApiError::DatasetUnavailable {
            name: dataset.name,
            reason: reason.clone(),
        });
    }

    debug!(
        "Serving {} records from {} (sorted={}, normalized={})",
        dataset.len(),
        dataset.name,
        request.options.sorted,
        request.options.normalized
    );

    let body: Vec<DataRecord> = dataset
        .records()
        .iter()
        .map(|record| DataRecord::from_record(record, request.options))
        .collect();

    let mut response = Json(body).into_response();
    response.headers_mut().insert(
        DATASET_STATUS_HEADER,
        HeaderValue::from_static(dataset.status.as_str()),
    );
    Ok(response)
}
