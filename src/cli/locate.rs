use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_motifs, OutputFormat};
use crate::core::motif::MotifSet;
use crate::matching::engine::{MotifEngine, RecordHits};
use crate::parsing::fasta::parse_fasta_file;

#[derive(Args)]
pub struct LocateArgs {
    /// Input FASTA file (repeat for several files; .gz/.bgz accepted)
    #[arg(short = 'f', long = "files", required = true)]
    pub files: Vec<PathBuf>,

    /// Motif file, one motif per line
    #[arg(short, long, required = true)]
    pub motifs: PathBuf,
}

/// Execute locate subcommand
///
/// # Errors
///
/// Returns an error if the motifs or any input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LocateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let motifs = load_motifs(&args.motifs)?;
    let engine = MotifEngine::new(&motifs);

    let mut per_file = Vec::with_capacity(args.files.len());
    for input in &args.files {
        let records = parse_fasta_file(input)
            .with_context(|| format!("Failed to parse {}", input.display()))?;

        if verbose {
            eprintln!("{}: {} records", input.display(), records.len());
        }
        per_file.push((input.display().to_string(), engine.analyze_all(&records)));
    }

    match format {
        OutputFormat::Text => print_text_results(&per_file, &motifs),
        OutputFormat::Json => print_json_results(&per_file, &motifs)?,
        OutputFormat::Tsv => print_tsv_results(&per_file, &motifs),
    }

    Ok(())
}

fn motif_name(motifs: &MotifSet, index: usize) -> &str {
    motifs.get(index).map_or("?", |m| m.motif.as_str())
}

fn print_text_results(per_file: &[(String, Vec<RecordHits>)], motifs: &MotifSet) {
    for (file, results) in per_file {
        println!("{file}");
        println!("{}", "=".repeat(60));

        for result in results {
            println!(
                "\n{} ({}, {} nt, {} hits, {} rows)",
                result.record.name,
                result.alphabet,
                result.record.len(),
                result.hit_count(),
                result.rows.row_count()
            );

            for occurrences in &result.occurrences {
                if occurrences.is_empty() {
                    println!("  {:<12} no hits", occurrences.motif.as_str());
                }
            }

            for placed in &result.rows {
                println!(
                    "  {:<12} {:>8}..{:<8} row {}",
                    motif_name(motifs, placed.hit.motif_index),
                    placed.hit.start,
                    placed.hit.end(),
                    placed.row
                );
            }
        }
        println!();
    }
}

fn print_json_results(
    per_file: &[(String, Vec<RecordHits>)],
    motifs: &MotifSet,
) -> anyhow::Result<()> {
    let output: Vec<_> = per_file
        .iter()
        .map(|(file, results)| {
            serde_json::json!({
                "file": file,
                "records": results.iter().map(|result| serde_json::json!({
                    "name": result.record.name,
                    "alphabet": result.alphabet,
                    "length": result.record.len(),
                    "feature_start": result.record.upstream.len(),
                    "feature_end": result.record.upstream.len() + result.record.feature.len(),
                    "row_count": result.rows.row_count(),
                    "occurrences": result.occurrences,
                    "hits": result.rows.iter().map(|placed| serde_json::json!({
                        "motif": motif_name(motifs, placed.hit.motif_index),
                        "start": placed.hit.start,
                        "end": placed.hit.end(),
                        "row": placed.row,
                    })).collect::<Vec<_>>(),
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(per_file: &[(String, Vec<RecordHits>)], motifs: &MotifSet) {
    println!("file\trecord\talphabet\tmotif\tstart\tend\trow");
    for (file, results) in per_file {
        for result in results {
            for placed in &result.rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    file,
                    result.record.name,
                    result.alphabet,
                    motif_name(motifs, placed.hit.motif_index),
                    placed.hit.start,
                    placed.hit.end(),
                    placed.row
                );
            }
        }
    }
}
