use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::warn;

use crate::cli::{load_motifs, OutputFormat};
use crate::core::motif::MotifSet;
use crate::matching::engine::MotifEngine;
use crate::parsing::fasta::{is_fasta_file, parse_fasta_file};
use crate::render::canvas::SvgCanvas;
use crate::render::diagram::{draw_diagram, DiagramLayout};
use crate::render::palette::{Palette, DEFAULT_PALETTE};
use crate::utils::validation::svg_output_path;

#[derive(Args)]
pub struct RenderArgs {
    /// Input FASTA file (repeat for several files; .gz/.bgz accepted)
    #[arg(short = 'f', long = "files", required = true)]
    pub files: Vec<PathBuf>,

    /// Motif file, one motif per line
    #[arg(short, long, required = true)]
    pub motifs: PathBuf,

    /// Named color palette (tab10, set1, dark2, paired)
    #[arg(short = 'c', long = "color", default_value = DEFAULT_PALETTE)]
    pub color: String,

    /// JSON file with an array of "#rrggbb" colors (overrides --color)
    #[arg(long)]
    pub palette_file: Option<PathBuf>,

    /// Directory for the SVG files (defaults to each input's directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Summary of one written diagram
#[derive(Debug, serde::Serialize)]
struct RenderedDiagram {
    input: String,
    output: String,
    records: usize,
    hits: usize,
}

/// Execute render subcommand
///
/// # Errors
///
/// Returns an error if the motifs, palette or any input cannot be read, or a
/// diagram cannot be written. Motifs are validated before any file is drawn.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RenderArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let motifs = load_motifs(&args.motifs)?;

    let palette = match &args.palette_file {
        Some(path) => Palette::from_json_file(path)
            .with_context(|| format!("Failed to load palette from {}", path.display()))?,
        None => Palette::named(&args.color)?,
    };

    if motifs.len() > palette.len() {
        warn!(
            motifs = motifs.len(),
            colors = palette.len(),
            palette = %palette.name,
            "More motifs than palette colors; some motifs will share a color"
        );
    }

    let outputs = output_paths(&args.files, args.output_dir.as_deref())?;

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let layout = DiagramLayout::default();
    let mut rendered = Vec::with_capacity(args.files.len());

    for (input, output) in args.files.iter().zip(&outputs) {
        let diagram = render_file(input, output, &motifs, &palette, &layout)?;

        if verbose {
            eprintln!(
                "{}: {} records, {} hits",
                input.display(),
                diagram.records,
                diagram.hits
            );
        }
        rendered.push(diagram);
    }

    match format {
        OutputFormat::Text => {
            for diagram in &rendered {
                println!("Wrote {}", diagram.output);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
        OutputFormat::Tsv => {
            println!("input\toutput\trecords\thits");
            for d in &rendered {
                println!("{}\t{}\t{}\t{}", d.input, d.output, d.records, d.hits);
            }
        }
    }

    Ok(())
}

/// One diagram path per input, refusing inputs that would overwrite each other
fn output_paths(inputs: &[PathBuf], output_dir: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut outputs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let output = svg_output_path(input, output_dir);
        if let Some(previous) = claimed.insert(output.clone(), input) {
            anyhow::bail!(
                "{} and {} would both be drawn to {}",
                previous.display(),
                input.display(),
                output.display()
            );
        }
        outputs.push(output);
    }

    Ok(outputs)
}

fn render_file(
    input: &Path,
    output: &Path,
    motifs: &MotifSet,
    palette: &Palette,
    layout: &DiagramLayout,
) -> anyhow::Result<RenderedDiagram> {
    if !is_fasta_file(input) {
        warn!(path = %input.display(), "Input does not have a FASTA extension");
    }

    let records = parse_fasta_file(input)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let results = MotifEngine::new(motifs).analyze_all(&records);

    let (width, height) = layout.canvas_size(&results, motifs.len());
    let mut canvas = SvgCanvas::new(width, height);
    draw_diagram(&mut canvas, &results, motifs, palette, layout);
    canvas.save(output)?;

    Ok(RenderedDiagram {
        input: input.display().to_string(),
        output: output.display().to_string(),
        records: results.len(),
        hits: results.iter().map(|r| r.hit_count()).sum(),
    })
}
