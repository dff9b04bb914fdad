// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Source image API
//!
//! Provides `GET /image/{dataset}/{relPath...}`, sandboxed to each
//! dataset's image directory.

pub mod handler;

pub use handler::{image_handler, invalid_image_path_handler, ImagePath, IMAGE_CONTENT_TYPE};
