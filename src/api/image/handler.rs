// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /image/{dataset}/{relPath...} HTTP handler

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::api::errors::{ApiError, DatasetSource};
use crate::api::http_server::AppState;
use crate::dataset::DatasetName;
use crate::sandbox::resolve_within;

/// Content type sent for every image, whatever the file's real format.
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// `<dataset>/<relative path>` split out of the wildcard capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath {
    pub dataset: DatasetName,
    pub relative: String,
}

impl ImagePath {
    /// Parse the already percent-decoded remainder after `/image/`.
    ///
    /// # Errors
    /// - `InvalidPath` when the dataset segment or the relative path is empty
    /// - `InvalidDataset` when the first segment is not a registered name
    pub fn parse(rest: &str) -> Result<Self, ApiError> {
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        let (dataset, relative) = rest.split_once('/').unwrap_or((rest, ""));
        if dataset.is_empty() {
            return Err(ApiError::InvalidPath);
        }

        let dataset = dataset
            .parse()
            .map_err(|_| ApiError::InvalidDataset(DatasetSource::Path))?;
        if relative.is_empty() {
            return Err(ApiError::InvalidPath);
        }

        Ok(Self {
            dataset,
            relative: relative.to_string(),
        })
    }
}

/// GET /image/{dataset}/{relPath...} handler
///
/// Streams the file from the dataset's image directory.
///
/// # Errors
/// - 400 `Invalid image path`: missing dataset or relative path
/// - 400 `Invalid dataset`: unknown dataset segment
/// - 403 `Forbidden`: path resolves outside the image directory
/// - 404: no regular file at the resolved path
/// - 413: file larger than `max_image_bytes`
pub async fn image_handler(
    State(state): State<AppState>,
    Path(rest): Path<String>,
) -> Result<Response, ApiError> {
    let path = ImagePath::parse(&rest)?;
    let dataset = state
        .registry
        .get(path.dataset)
        .ok_or(ApiError::InvalidDataset(DatasetSource::Path))?;

    let file_path = resolve_within(&dataset.paths.image_dir, &path.relative).await?;

    let size = tokio::fs::metadata(&file_path)
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?
        .len();
    if size > state.config.max_image_bytes {
        return Err(ApiError::PayloadTooLarge {
            size,
            limit: state.config.max_image_bytes,
        });
    }

    let file = tokio::fs::File::open(&file_path)
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?;
    debug!("Streaming {} ({} bytes)", file_path.display(), size);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, IMAGE_CONTENT_TYPE.to_string()),
            (header::CONTENT_LENGTH, size.to_string()),
        ],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response())
}

/// `/image` and `/image/` with nothing after them
pub async fn invalid_image_path_handler() -> ApiError {
    ApiError::InvalidPath
}
