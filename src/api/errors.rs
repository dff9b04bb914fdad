// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::dataset::DatasetName;
use crate::sandbox::SandboxError;

/// Where an invalid dataset name came from; selects the error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// `?dataset=` query parameter
    Query,
    /// `/image/<dataset>/...` path segment
    Path,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid dataset ({0:?})")]
    InvalidDataset(DatasetSource),

    #[error("Invalid image path")]
    InvalidPath,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Dataset {name} failed to load: {reason}")]
    DatasetUnavailable { name: DatasetName, reason: String },

    #[error("File is {size} bytes, limit is {limit}")]
    PayloadTooLarge { size: u64, limit: u64 },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidDataset(_) | ApiError::InvalidPath => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::DatasetUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidDataset(DatasetSource::Query) => "Invalid dataset parameter",
            ApiError::InvalidDataset(DatasetSource::Path) => "Invalid dataset",
            ApiError::InvalidPath => "Invalid image path",
            ApiError::Forbidden => "Forbidden",
            ApiError::NotFound => "Not found",
            ApiError::DatasetUnavailable { .. } => "Dataset failed to load",
            ApiError::PayloadTooLarge { .. } => "File too large",
            ApiError::InternalError(_) => "Internal server error",
        }
    }

    /// Get error code for logging
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidDataset(_) => "INVALID_DATASET",
            ApiError::InvalidPath => "INVALID_PATH",
            ApiError::Forbidden => "FORBIDDEN",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::DatasetUnavailable { .. } => "DATASET_UNAVAILABLE",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<SandboxError> for ApiError {
    fn from(err: SandboxError) -> Self {
        match err {
            SandboxError::Forbidden => ApiError::Forbidden,
            SandboxError::NotFound => ApiError::NotFound,
            SandboxError::Io(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = self.error_code(), "{}", self);
        } else if status == StatusCode::FORBIDDEN {
            warn!(code = self.error_code(), "{}", self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.user_message(),
        )
            .into_response()
    }
}
