//! Drawing located motifs as gene diagrams.
//!
//! - [`palette`]: Motif colors, selected by name or loaded from JSON
//! - [`canvas`]: The [`Canvas`](canvas::Canvas) drawing trait and its SVG implementation
//! - [`diagram`]: Panel geometry and the drawing of genes, marks and legend
//!
//! ## Example
//!
//! ```rust,no_run
//! use motif_mark::core::motif::Motif;
//! use motif_mark::matching::{expand::expand, MotifEngine};
//! use motif_mark::parsing::fasta::parse_fasta_str;
//! use motif_mark::render::{canvas::SvgCanvas, diagram::{draw_diagram, DiagramLayout}, palette::Palette};
//! use std::path::Path;
//!
//! let motifs = expand(&[Motif::new("YGCY")]).unwrap();
//! let records = parse_fasta_str(">gene\naaaTGCTaaa\n").unwrap();
//! let results = MotifEngine::new(&motifs).analyze_all(&records);
//!
//! let layout = DiagramLayout::default();
//! let (width, height) = layout.canvas_size(&results, motifs.len());
//! let mut canvas = SvgCanvas::new(width, height);
//! draw_diagram(&mut canvas, &results, &motifs, &Palette::default(), &layout);
//! canvas.save(Path::new("gene.svg")).unwrap();
//! ```

pub mod canvas;
pub mod diagram;
pub mod palette;
