// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Allow-listed static asset handler
//!
//! Serves files from `static_dir` for any path no other route claims, but
//! only for known asset extensions and only through the same sandbox used
//! for images.

use std::path::Path;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::sandbox::resolve_within;

/// Content type for an allow-listed extension, `None` if not served.
pub fn asset_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "html" => "text/html; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// Fallback handler for every unrouted path
pub async fn asset_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::NotFound);
    }

    let decoded = percent_decode_str(uri.path())
        .decode_utf8()
        .map_err(|_| ApiError::NotFound)?;
    let relative = decoded.trim_start_matches('/');
    if relative.is_empty() {
        return Err(ApiError::NotFound);
    }

    let content_type = asset_content_type(Path::new(relative)).ok_or(ApiError::NotFound)?;
    let file_path = resolve_within(&state.config.static_dir, relative).await?;
    let bytes = tokio::fs::read(&file_path)
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
