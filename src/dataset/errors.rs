// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for embedding file loading

use thiserror::Error;

/// Errors that abort loading a single dataset's embedding file.
///
/// Line numbers are 1-based, matching what an editor shows.
#[derive(Error, Debug)]
pub enum DatasetLoadError {
    /// Line has no tab separating filename and vector
    #[error("line {line}: missing tab between filename and embedding")]
    MissingTab { line: usize },

    /// Vector text is not a bracketed list of finite numbers
    #[error("line {line}: malformed embedding: {reason}")]
    MalformedVector { line: usize, reason: String },

    /// Vector length differs from the first record
    #[error("line {line}: expected {expected} dimensions, got {actual}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Generic I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasetLoadError {
    /// Line the error was detected on, if it came from parsing
    pub fn line(&self) -> Option<usize> {
        match self {
            DatasetLoadError::MissingTab { line }
            | DatasetLoadError::MalformedVector { line, .. }
            | DatasetLoadError::DimensionMismatch { line, .. } => Some(*line),
            DatasetLoadError::Io(_) => None,
        }
    }
}

/// A dataset name outside the registered set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown dataset: {0:?}")]
pub struct UnknownDataset(pub String);
