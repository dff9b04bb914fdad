// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dataset registry
//!
//! Built once at startup and never mutated afterwards, so it is shared
//! across request handlers behind a plain `Arc` with no locking.

use std::collections::BTreeMap;

use tracing::{error, info};

use super::loader::load_dataset;
use super::types::{Dataset, DatasetName, DatasetPaths, LoadStatus};

/// Immutable mapping from dataset name to its loaded contents.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    datasets: BTreeMap<DatasetName, Dataset>,
}

impl DatasetRegistry {
    /// Load every configured dataset in parallel on the blocking pool.
    ///
    /// Individual datasets may come back `Missing` or `Failed`; the registry
    /// itself is always built.
    pub async fn load(layout: BTreeMap<DatasetName, DatasetPaths>) -> Self {
        info!("Loading {} datasets", layout.len());

        let tasks: Vec<_> = layout
            .into_iter()
            .map(|(name, paths)| {
                let fallback = paths.clone();
                let handle = tokio::task::spawn_blocking(move || load_dataset(name, paths));
                (name, fallback, handle)
            })
            .collect();

        let mut datasets = Vec::with_capacity(tasks.len());
        for (name, paths, handle) in tasks {
            let dataset = match handle.await {
                Ok(dataset) => dataset,
                Err(e) => {
                    error!("Loader task for {} panicked: {}", name, e);
                    Dataset::empty(
                        name,
                        paths,
                        LoadStatus::Failed {
                            reason: format!("loader task failed: {}", e),
                        },
                    )
                }
            };
            datasets.push(dataset);
        }

        Self::from_datasets(datasets)
    }

    /// Build a registry from already-loaded datasets.
    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        Self {
            datasets: datasets.into_iter().map(|d| (d.name, d)).collect(),
        }
    }

    pub fn get(&self, name: DatasetName) -> Option<&Dataset> {
        self.datasets.get(&name)
    }

    /// Registered datasets in name order
    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
