// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Embedding file loader
//!
//! Reads a source file line by line, checks that every vector has the same
//! length, and runs column normalization once over the whole matrix.
//!
//! A missing file is not an error: the dataset comes back empty with
//! [`LoadStatus::Missing`]. A malformed line aborts that dataset only and
//! yields an empty dataset with [`LoadStatus::Failed`].

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{error, info, warn};

use super::errors::DatasetLoadError;
use super::parser::{parse_line, ParsedLine};
use super::types::{Dataset, DatasetName, DatasetPaths, LoadStatus, Record};
use crate::vector::normalize::normalize_columns;

/// Read and validate every line of an embedding file.
///
/// Empty lines are skipped. Returns `Ok(None)` when the file does not exist.
pub fn read_embedding_file(path: &Path) -> Result<Option<Vec<ParsedLine>>, DatasetLoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut lines = Vec::new();
    let mut expected_dims: Option<usize> = None;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let parsed = parse_line(&line, line_no)?;
        match expected_dims {
            None => expected_dims = Some(parsed.embedding.len()),
            Some(expected) if expected != parsed.embedding.len() => {
                return Err(DatasetLoadError::DimensionMismatch {
                    line: line_no,
                    expected,
                    actual: parsed.embedding.len(),
                });
            }
            Some(_) => {}
        }
        lines.push(parsed);
    }

    Ok(Some(lines))
}

/// Pair each parsed line with its normalized vector.
pub fn build_records(lines: Vec<ParsedLine>) -> Vec<Record> {
    let raw: Vec<Vec<f64>> = lines.iter().map(|l| l.embedding.clone()).collect();
    let normalized = normalize_columns(&raw);

    lines
        .into_iter()
        .zip(normalized)
        .map(|(line, normalized)| Record {
            filename: line.filename,
            raw: line.embedding,
            normalized,
        })
        .collect()
}

/// Load one dataset. Never fails; problems are reflected in `Dataset::status`.
pub fn load_dataset(name: DatasetName, paths: DatasetPaths) -> Dataset {
    match read_embedding_file(&paths.embedding_file) {
        Ok(Some(lines)) => {
            let records = build_records(lines);
            let dataset = Dataset::new(name, paths, LoadStatus::Loaded, records);
            info!(
                "Loaded dataset {}: {} records, {} dimensions",
                name,
                dataset.len(),
                dataset.dimensions()
            );
            dataset
        }
        Ok(None) => {
            warn!(
                "Embedding file for {} not found: {}",
                name,
                paths.embedding_file.display()
            );
            Dataset::empty(name, paths, LoadStatus::Missing)
        }
        Err(e) => {
            error!(
                line = e.line(),
                "Failed to load dataset {} from {}: {}",
                name,
                paths.embedding_file.display(),
                e
            );
            Dataset::empty(
                name,
                paths,
                LoadStatus::Failed {
                    reason: e.to_string(),
                },
            )
        }
    }
}
