// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::read_lines;
use crate::plot::{render_heatmap, save_png, PlotOptions};

/// Arguments for the plot command
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Embedding file (filename<TAB>[v1,...,vn] per line)
    pub file: PathBuf,

    /// Output PNG path
    #[arg(long, short, default_value = "embeddings_heatmap.png")]
    pub output: PathBuf,

    /// Pixels per value along each axis
    #[arg(long, default_value_t = 1)]
    pub scale: u32,
}

pub fn run(args: PlotArgs) -> Result<()> {
    let lines = read_lines(&args.file)?;
    let rows: Vec<Vec<f64>> = lines.into_iter().map(|l| l.embedding).collect();

    let image = render_heatmap(&rows, PlotOptions { scale: args.scale })
        .with_context(|| format!("rendering {}", args.file.display()))?;
    save_png(&image, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(
        "Columns: {}, Rows: {} -> {} ({}x{} px)",
        rows.first().map(Vec::len).unwrap_or(0),
        rows.len(),
        args.output.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
