// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dataset store
//!
//! Loads each collection's embedding file into memory once at startup:
//!
//! ```text
//!  <name>_embeddings.tsv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  parser   │  filename<TAB>[v1,...,vn] → ParsedLine
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  uniform dims + column normalization → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ registry  │  DatasetName → Dataset, read-only after startup
//!   └──────────┘
//! ```

pub mod errors;
pub mod loader;
pub mod parser;
pub mod registry;
pub mod types;

pub use errors::{DatasetLoadError, UnknownDataset};
pub use loader::{load_dataset, read_embedding_file};
pub use registry::DatasetRegistry;
pub use types::{Dataset, DatasetName, DatasetPaths, LoadStatus, Record};
