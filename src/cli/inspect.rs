// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::read_lines;
use crate::vector::{column_ranges, ColumnRange};

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Embedding file to summarize
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub file: String,
    pub count: usize,
    pub dimensions: usize,
    pub columns: Vec<ColumnRange>,
}

pub fn summarize(path: &Path) -> Result<InspectReport> {
    let lines = read_lines(path)?;
    let rows: Vec<Vec<f64>> = lines.into_iter().map(|l| l.embedding).collect();

    Ok(InspectReport {
        file: path.display().to_string(),
        count: rows.len(),
        dimensions: rows.first().map(Vec::len).unwrap_or(0),
        columns: column_ranges(&rows),
    })
}

pub fn run(args: InspectArgs) -> Result<()> {
    let report = summarize(&args.file)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
