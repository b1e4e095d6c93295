//! Command-line interface for motif-mark.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **render**: Draw an SVG diagram of motif hits for each FASTA file
//! - **locate**: Report every motif hit with its offset and stacking row
//! - **expand**: Show the literal DNA and RNA variants of each motif
//!
//! ## Usage
//!
//! ```text
//! # Draw Figure_1.svg next to the input
//! motif-mark render -f Figure_1.fasta -m Fig_1_motifs.txt
//!
//! # Several inputs, another palette, output elsewhere
//! motif-mark render -f a.fa -f b.fa.gz -m motifs.txt -c dark2 --output-dir plots/
//!
//! # Hit table for scripting
//! motif-mark locate -f Figure_1.fasta -m Fig_1_motifs.txt --format tsv
//!
//! # What does YGCY match?
//! motif-mark expand -m motifs.txt
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::core::motif::MotifSet;
use crate::matching::expand::expand;
use crate::parsing::motifs::parse_motif_file;

pub mod expand;
pub mod locate;
pub mod render;

#[derive(Parser)]
#[command(name = "motif-mark")]
#[command(version)]
#[command(about = "Locate sequence motifs and draw them on gene diagrams")]
#[command(
    long_about = "motif-mark finds ambiguity-coded motifs (IUPAC codes such as Y, R, N) in FASTA records and draws each record to scale as an SVG diagram.\n\nEach record's first uppercase run is drawn as the exon; lowercase flanks are drawn as introns. Overlapping motif hits are stacked so they never collide.\n\nNote: stacking is greedy. A hit is placed above the tallest stack under its span, so diagrams can use more rows than strictly necessary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw motif diagrams as SVG
    Render(render::RenderArgs),

    /// Report motif hits and their stacking rows
    Locate(locate::LocateArgs),

    /// List the literal variants of each motif
    Expand(expand::ExpandArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Read and expand a motif file, failing on the first bad motif
///
/// # Errors
///
/// Returns an error if the file cannot be read or any motif fails to expand.
pub fn load_motifs(path: &Path) -> anyhow::Result<MotifSet> {
    let motifs = parse_motif_file(path)
        .with_context(|| format!("Failed to read motifs from {}", path.display()))?;

    let expanded =
        expand(&motifs).with_context(|| format!("Invalid motif in {}", path.display()))?;

    tracing::info!(motifs = expanded.len(), path = %path.display(), "Loaded motifs");
    Ok(expanded)
}
