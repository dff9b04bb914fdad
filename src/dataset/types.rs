// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core dataset types: the closed set of dataset names, records and load status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::errors::UnknownDataset;

/// One of the fixed image collections served by this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetName {
    Planes,
    Cats,
    Dogs,
}

impl DatasetName {
    /// Every registered dataset, in display order.
    pub const ALL: [DatasetName; 3] = [DatasetName::Planes, DatasetName::Cats, DatasetName::Dogs];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetName::Planes => "planes",
            DatasetName::Cats => "cats",
            DatasetName::Dogs => "dogs",
        }
    }

    /// Default embedding file name inside the embeddings directory
    pub fn default_embedding_file(&self) -> &'static str {
        match self {
            DatasetName::Planes => "plane_embeddings_small.tsv",
            DatasetName::Cats => "cat_embeddings_small.tsv",
            DatasetName::Dogs => "dog_embeddings_small.tsv",
        }
    }

    /// Default image directory relative to the image root
    pub fn default_image_dir(&self) -> &'static str {
        match self {
            DatasetName::Planes => "fgvc-aircraft-2013b/data/images",
            DatasetName::Cats => "PetImages/Cat",
            DatasetName::Dogs => "PetImages/Dog",
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetName {
    type Err = UnknownDataset;

    /// Exact, case-sensitive match against the registered names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownDataset(s.to_string()))
    }
}

/// A single embedding row: the image file name, its raw vector and the
/// column-normalized vector computed at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub filename: String,
    pub raw: Vec<f64>,
    pub normalized: Vec<f64>,
}

/// Outcome of loading a dataset's source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadStatus {
    /// Source file parsed completely
    Loaded,
    /// Source file absent; the dataset is served empty
    Missing,
    /// Source file present but malformed
    Failed { reason: String },
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Loaded => "loaded",
            LoadStatus::Missing => "missing",
            LoadStatus::Failed { .. } => "failed",
        }
    }
}

/// Filesystem locations for one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub embedding_file: PathBuf,
    pub image_dir: PathBuf,
}

/// A loaded dataset. Records keep their source-file order and all share the
/// same vector length.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: DatasetName,
    pub paths: DatasetPaths,
    pub status: LoadStatus,
    records: Vec<Record>,
    dimensions: usize,
}

impl Dataset {
    pub(crate) fn new(
        name: DatasetName,
        paths: DatasetPaths,
        status: LoadStatus,
        records: Vec<Record>,
    ) -> Self {
        let dimensions = records.first().map(|r| r.raw.len()).unwrap_or(0);
        Self {
            name,
            paths,
            status,
            records,
            dimensions,
        }
    }

    /// An empty dataset carrying a non-`Loaded` status.
    pub(crate) fn empty(name: DatasetName, paths: DatasetPaths, status: LoadStatus) -> Self {
        Self::new(name, paths, status, Vec::new())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Vector length shared by every record (0 for an empty dataset)
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}
