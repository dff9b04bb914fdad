// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::http_server::AppState;
use crate::dataset::{Dataset, DatasetName, DatasetRegistry, LoadStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetHealth {
    pub name: DatasetName,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub records: usize,
    pub dimensions: usize,
}

impl From<&Dataset> for DatasetHealth {
    fn from(dataset: &Dataset) -> Self {
        let reason = match &dataset.status {
            LoadStatus::Failed { reason } => Some(reason.clone()),
            _ => None,
        };
        Self {
            name: dataset.name,
            status: dataset.status.as_str().to_string(),
            reason,
            records: dataset.len(),
            dimensions: dataset.dimensions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" when every dataset loaded, otherwise "degraded"
    pub status: String,
    pub version: String,
    pub datasets: Vec<DatasetHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

impl HealthResponse {
    pub fn from_registry(registry: &DatasetRegistry) -> Self {
        let datasets: Vec<DatasetHealth> = registry.iter().map(DatasetHealth::from).collect();
        let issues: Vec<String> = registry
            .iter()
            .filter_map(|d| match &d.status {
                LoadStatus::Loaded => None,
                LoadStatus::Missing => Some(format!(
                    "{}: embedding file not found ({})",
                    d.name,
                    d.paths.embedding_file.display()
                )),
                LoadStatus::Failed { reason } => Some(format!("{}: {}", d.name, reason)),
            })
            .collect();

        Self {
            status: if issues.is_empty() { "ok" } else { "degraded" }.to_string(),
            version: crate::version::VERSION.to_string(),
            datasets,
            issues: (!issues.is_empty()).then_some(issues),
        }
    }
}

/// GET /health handler
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_registry(&state.registry))
}
