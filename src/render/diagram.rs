//! Gene diagram layout.
//!
//! One panel per record, stacked top to bottom below the legend. Within a
//! panel the sequence is drawn to scale, one unit per nucleotide: flanks as
//! a thin line, the feature as an open box, and each motif hit as a small
//! colored bar lifted above the line by its stacking row.

use tracing::debug;

use crate::core::motif::MotifSet;
use crate::matching::engine::RecordHits;
use crate::render::canvas::{Canvas, Point, Rect};
use crate::render::palette::{Palette, Rgb};

/// Geometry of a diagram, in drawing units
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    /// Left edge of every panel outline and of the legend box
    pub outline_x: f64,
    /// X coordinate of the first nucleotide
    pub sequence_x: f64,
    /// Height of each record panel
    pub panel_height: f64,
    /// Vertical space per legend entry
    pub legend_row_height: f64,
    /// Top of the legend box
    pub legend_y: f64,
    pub legend_width: f64,
    /// Length of the colored line in a legend entry
    pub legend_swatch_length: f64,
    /// Offset of each legend entry below its row boundary
    pub legend_entry_offset: f64,
    /// Distance from a panel's top to its title baseline
    pub title_offset: f64,
    /// Distance from a panel's top to the sequence line
    pub baseline_offset: f64,
    /// Half the height of the feature box
    pub feature_half_height: f64,
    pub mark_height: f64,
    /// Vertical distance between stacking rows
    pub row_step: f64,
    /// Gap between the sequence line and the lowest mark
    pub mark_lift: f64,
    /// Extra width beyond the longest record
    pub padding_width: f64,
    /// Extra height beyond the panels and legend
    pub padding_height: f64,
    pub outline_width: f64,
    pub legend_swatch_width: f64,
    pub mark_outline_width: f64,
}

impl Default for DiagramLayout {
    fn default() -> Self {
        Self {
            outline_x: 25.0,
            sequence_x: 50.0,
            panel_height: 150.0,
            legend_row_height: 30.0,
            legend_y: 25.0,
            legend_width: 180.0,
            legend_swatch_length: 30.0,
            legend_entry_offset: 10.0,
            title_offset: 25.0,
            baseline_offset: 115.0,
            feature_half_height: 20.0,
            mark_height: 4.0,
            row_step: 6.0,
            mark_lift: 2.0,
            padding_width: 100.0,
            padding_height: 50.0,
            outline_width: 2.0,
            legend_swatch_width: 5.0,
            mark_outline_width: 0.1,
        }
    }
}

#[allow(clippy::cast_precision_loss)] // Sequence lengths are far below 2^52
fn units(n: usize) -> f64 {
    n as f64
}

impl DiagramLayout {
    /// Width and height needed for `records` and `motif_count` legend entries
    #[must_use]
    pub fn canvas_size(&self, records: &[RecordHits], motif_count: usize) -> (f64, f64) {
        let longest = records.iter().map(|r| r.record.len()).max().unwrap_or(0);
        let width = units(longest) + self.padding_width;
        let height = units(records.len()) * self.panel_height
            + self.padding_height
            + self.legend_height(motif_count);
        (width, height)
    }

    fn legend_height(&self, motif_count: usize) -> f64 {
        units(motif_count) * self.legend_row_height
    }

    /// Top edge of the panel for record `index`
    #[must_use]
    pub fn panel_top(&self, index: usize, motif_count: usize) -> f64 {
        units(index) * self.panel_height + self.legend_height(motif_count) + self.legend_y
    }

    /// Y coordinate of the sequence line in a panel
    #[must_use]
    pub fn baseline(&self, panel_top: f64) -> f64 {
        panel_top + self.baseline_offset
    }

    /// Bar for a hit at `start` spanning `len` nucleotides on stacking `row`
    #[must_use]
    pub fn mark_rect(&self, baseline: f64, start: usize, len: usize, row: usize) -> Rect {
        let lift = self.row_step * units(row + 1);
        Rect::new(
            self.sequence_x + units(start),
            baseline - self.mark_lift - lift,
            units(len),
            self.mark_height,
        )
    }
}

/// Draw the whole diagram: every record panel, then the legend on top.
pub fn draw_diagram<C: Canvas>(
    canvas: &mut C,
    records: &[RecordHits],
    motifs: &MotifSet,
    palette: &Palette,
    layout: &DiagramLayout,
) {
    for (index, hits) in records.iter().enumerate() {
        let baseline = draw_gene(canvas, hits, index, motifs.len(), layout);
        draw_marks(canvas, hits, baseline, motifs, palette, layout);
    }
    draw_legend(canvas, motifs, palette, layout);

    debug!(
        records = records.len(),
        motifs = motifs.len(),
        "Drew diagram"
    );
}

/// Draw a record's title, outline, flanks and feature; returns the baseline
fn draw_gene<C: Canvas>(
    canvas: &mut C,
    hits: &RecordHits,
    index: usize,
    motif_count: usize,
    layout: &DiagramLayout,
) -> f64 {
    let record = &hits.record;
    let top = layout.panel_top(index, motif_count);
    let x = layout.sequence_x;

    canvas.set_line_width(layout.outline_width);
    canvas.text(Point::new(x, top + layout.title_offset), &record.name, Rgb::BLACK);
    canvas.stroke_rect(
        Rect::new(
            layout.outline_x,
            top,
            layout.sequence_x + units(record.len()),
            layout.panel_height,
        ),
        Rgb::BLACK,
    );

    let baseline = layout.baseline(top);
    let feature_start = x + units(record.upstream.len());
    let feature_end = feature_start + units(record.feature.len());

    canvas.line(
        Point::new(x, baseline),
        Point::new(feature_start, baseline),
        Rgb::BLACK,
    );
    canvas.stroke_rect(
        Rect::new(
            feature_start,
            baseline - layout.feature_half_height,
            units(record.feature.len()),
            layout.feature_half_height * 2.0,
        ),
        Rgb::BLACK,
    );
    canvas.line(
        Point::new(feature_end, baseline),
        Point::new(feature_end + units(record.downstream.len()), baseline),
        Rgb::BLACK,
    );

    baseline
}

fn draw_marks<C: Canvas>(
    canvas: &mut C,
    hits: &RecordHits,
    baseline: f64,
    motifs: &MotifSet,
    palette: &Palette,
    layout: &DiagramLayout,
) {
    canvas.set_line_width(layout.mark_outline_width);
    for placed in &hits.rows {
        let hit = placed.hit;
        let rect = layout.mark_rect(baseline, hit.start, hit.len, placed.row);
        canvas.fill_rect(rect, palette.color_for(hit.motif_index, motifs.len()));
        canvas.stroke_rect(rect, Rgb::BLACK);
    }
}

fn draw_legend<C: Canvas>(
    canvas: &mut C,
    motifs: &MotifSet,
    palette: &Palette,
    layout: &DiagramLayout,
) {
    canvas.set_line_width(layout.outline_width);
    canvas.stroke_rect(
        Rect::new(
            layout.outline_x,
            layout.legend_y,
            layout.legend_width,
            layout.legend_height(motifs.len()),
        ),
        Rgb::BLACK,
    );

    canvas.set_line_width(layout.legend_swatch_width);
    for (index, expanded) in motifs.iter().enumerate() {
        let color = palette.color_for(index, motifs.len());
        let y = units(index + 1) * layout.legend_row_height + layout.legend_entry_offset;
        let swatch_end = layout.sequence_x + layout.legend_swatch_length;
        canvas.line(Point::new(layout.sequence_x, y), Point::new(swatch_end, y), color);
        canvas.text(
            Point::new(swatch_end + 5.0, y + 3.0),
            expanded.motif.as_str(),
            color,
        );
    }
}
