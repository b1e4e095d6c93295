use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_motifs, OutputFormat};
use crate::core::motif::{Alphabet, MotifSet};

#[derive(Args)]
pub struct ExpandArgs {
    /// Motif file, one motif per line
    #[arg(short, long, required = true)]
    pub motifs: PathBuf,

    /// Only list variants for this alphabet
    #[arg(long, value_parser = parse_alphabet)]
    pub alphabet: Option<Alphabet>,
}

fn parse_alphabet(s: &str) -> Result<Alphabet, String> {
    match s.to_ascii_lowercase().as_str() {
        "dna" => Ok(Alphabet::Dna),
        "rna" => Ok(Alphabet::Rna),
        _ => Err(format!("unknown alphabet '{s}' (expected dna or rna)")),
    }
}

/// Execute expand subcommand
///
/// # Errors
///
/// Returns an error if the motif file cannot be read or a motif is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExpandArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let motifs = load_motifs(&args.motifs)?;

    let alphabets: Vec<Alphabet> = match args.alphabet {
        Some(alphabet) => vec![alphabet],
        None => vec![Alphabet::Dna, Alphabet::Rna],
    };

    if verbose {
        let total: usize = motifs.iter().map(|m| m.dna.len()).sum();
        eprintln!("{} motifs, {total} literal variants each alphabet", motifs.len());
    }

    match format {
        OutputFormat::Text => print_text(&motifs, &alphabets),
        OutputFormat::Json => print_json(&motifs, &alphabets)?,
        OutputFormat::Tsv => print_tsv(&motifs, &alphabets),
    }

    Ok(())
}

fn print_text(motifs: &MotifSet, alphabets: &[Alphabet]) {
    for expanded in motifs {
        println!("{} ({} variants)", expanded.motif, expanded.dna.len());
        for &alphabet in alphabets {
            let variants: Vec<&str> = expanded.variants(alphabet).iter().collect();
            println!("  {alphabet}: {}", variants.join(", "));
        }
    }
}

fn print_json(motifs: &MotifSet, alphabets: &[Alphabet]) -> anyhow::Result<()> {
    let output: Vec<_> = motifs
        .iter()
        .map(|expanded| {
            let mut entry = serde_json::json!({
                "motif": expanded.motif.as_str(),
                "variant_count": expanded.dna.len(),
            });
            for &alphabet in alphabets {
                let variants: Vec<&str> = expanded.variants(alphabet).iter().collect();
                entry[alphabet.to_string().to_lowercase()] = serde_json::json!(variants);
            }
            entry
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(motifs: &MotifSet, alphabets: &[Alphabet]) {
    println!("motif\talphabet\tvariant");
    for expanded in motifs {
        for &alphabet in alphabets {
            for variant in expanded.variants(alphabet).iter() {
                println!("{}\t{alphabet}\t{variant}", expanded.motif);
            }
        }
    }
}
