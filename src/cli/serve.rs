// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::api::{start_server, AppState};
use crate::config::ServerConfig;
use crate::dataset::DatasetRegistry;

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(long, env = "HEATMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory with the *_embeddings_small.tsv files
    #[arg(long)]
    pub embeddings_dir: Option<PathBuf>,

    /// Directory with the per-dataset image trees
    #[arg(long)]
    pub image_root: Option<PathBuf>,

    /// Directory with heatmap.js, style.css and other assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Resolve the effective config: defaults, file, environment, flags.
    pub fn resolve_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = ServerConfig::from_toml_file(path)
                    .with_context(|| format!("loading {}", path.display()))?;
                config.apply_env();
                config
            }
            None => ServerConfig::from_env(),
        };
        self.apply_flags(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_flags(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.embeddings_dir {
            config.embeddings_dir = dir.clone();
        }
        if let Some(dir) = &self.image_root {
            config.image_root = dir.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = dir.clone();
        }
    }
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let config = args.resolve_config()?;
    info!(
        "Embeddings from {}, images from {}, assets from {}",
        config.embeddings_dir.display(),
        config.image_root.display(),
        config.static_dir.display()
    );

    let registry = DatasetRegistry::load(config.dataset_layout()).await;
    for dataset in registry.iter() {
        info!(
            "Dataset {}: {} ({} records, {} dimensions)",
            dataset.name,
            dataset.status.as_str(),
            dataset.len(),
            dataset.dimensions()
        );
    }

    start_server(AppState::new(registry, config)).await
}
