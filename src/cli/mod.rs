// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod inspect;
pub mod plot;
pub mod serve;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;

use crate::dataset::parser::ParsedLine;
use crate::dataset::read_embedding_file;

/// Embedding heatmap server and tools
#[derive(Parser, Debug)]
#[command(name = "embedding-heatmap")]
#[command(version)]
#[command(about = "Serve and visualize image embedding datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load all datasets and run the HTTP server
    Serve(serve::ServeArgs),

    /// Render an embedding file as a PNG heatmap
    Plot(plot::PlotArgs),

    /// Print record count, dimensions and column ranges as JSON
    Inspect(inspect::InspectArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Plot(args) => plot::run(args),
        Commands::Inspect(args) => inspect::run(args),
    }
}

/// Read one embedding file for the offline subcommands, where a missing
/// file is an error rather than an empty dataset.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<ParsedLine>> {
    read_embedding_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?
        .ok_or_else(|| anyhow!("embedding file not found: {}", path.display()))
}
