// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod plot;
pub mod sandbox;
pub mod vector;
pub mod version;

// Re-export main types
pub use api::{create_app, start_server, ApiError, AppState};
pub use config::{ConfigError, ServerConfig};
pub use dataset::{Dataset, DatasetLoadError, DatasetName, DatasetPaths, DatasetRegistry, LoadStatus, Record};
pub use sandbox::SandboxError;
pub use vector::TransformOptions;
