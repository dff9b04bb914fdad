// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod assets;
pub mod data;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod image;
pub mod pages;

pub use data::{data_handler, DataRecord, DataRequest};
pub use errors::{ApiError, DatasetSource};
pub use handlers::{DatasetHealth, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
pub use image::{image_handler, ImagePath};
