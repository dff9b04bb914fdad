// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration
//!
//! Sources, later ones winning: built-in defaults, an optional TOML file,
//! `HEATMAP_*` environment variables, then command-line flags.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::dataset::{DatasetName, DatasetPaths};

/// Default cap on a single served image (20 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Per-dataset path overrides from the `[datasets.<name>]` table.
///
/// Relative paths are taken relative to `embeddings_dir` / `image_root`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatasetOverride {
    pub embedding_file: Option<PathBuf>,
    pub image_dir: Option<PathBuf>,
}

/// Configuration for the embedding server
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Directory holding one embedding file per dataset
    pub embeddings_dir: PathBuf,
    /// Directory holding one image subdirectory per dataset
    pub image_root: PathBuf,
    /// Directory for allow-listed static assets (js, css, ...)
    pub static_dir: PathBuf,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Largest image file that will be served
    pub max_image_bytes: u64,
    pub datasets: BTreeMap<DatasetName, DatasetOverride>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            embeddings_dir: PathBuf::from("embeddings"),
            image_root: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            request_timeout_secs: 30,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            datasets: BTreeMap::new(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Override fields from `HEATMAP_*` environment variables
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| env::var(key).ok());
    }

    fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("HEATMAP_HOST") {
            self.host = host;
        }
        if let Some(port) = parse_var(&lookup, "HEATMAP_PORT") {
            self.port = port;
        }
        if let Some(dir) = lookup("HEATMAP_EMBEDDINGS_DIR") {
            self.embeddings_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("HEATMAP_IMAGE_ROOT") {
            self.image_root = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("HEATMAP_STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(secs) = parse_var(&lookup, "HEATMAP_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = secs;
        }
        if let Some(bytes) = parse_var(&lookup, "HEATMAP_MAX_IMAGE_BYTES") {
            self.max_image_bytes = bytes;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be greater than 0".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_image_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_image_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Paths for one dataset after applying overrides
    pub fn dataset_paths(&self, name: DatasetName) -> DatasetPaths {
        let overrides = self.datasets.get(&name).cloned().unwrap_or_default();
        let embedding_file = overrides
            .embedding_file
            .unwrap_or_else(|| PathBuf::from(name.default_embedding_file()));
        let image_dir = overrides
            .image_dir
            .unwrap_or_else(|| PathBuf::from(name.default_image_dir()));

        DatasetPaths {
            embedding_file: self.embeddings_dir.join(embedding_file),
            image_dir: self.image_root.join(image_dir),
        }
    }

    /// Paths for every registered dataset
    pub fn dataset_layout(&self) -> BTreeMap<DatasetName, DatasetPaths> {
        DatasetName::ALL
            .into_iter()
            .map(|name| (name, self.dataset_paths(name)))
            .collect()
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
