//! The drawing surface the diagram renderer paints on.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use svg::node::element as svg_element;
use svg::Document;
use thiserror::Error;
use tracing::{error, info};

use crate::render::palette::Rgb;

/// Font used for titles and legend entries
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Font size used for titles and legend entries
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
}

/// A point in drawing units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Drawing primitives needed to render a diagram.
///
/// Strokes use the current line width.
pub trait Canvas {
    fn set_line_width(&mut self, width: f64);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn stroke_rect(&mut self, rect: Rect, color: Rgb);

    fn line(&mut self, from: Point, to: Point, color: Rgb);

    /// Write text with its baseline starting at `at`
    fn text(&mut self, at: Point, content: &str, color: Rgb);
}

/// A [`Canvas`] that builds an SVG document
#[derive(Debug)]
pub struct SvgCanvas {
    document: Document,
    line_width: f64,
}

impl SvgCanvas {
    /// Create a canvas of the given size with a white background
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let document = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        let mut canvas = Self {
            document,
            line_width: 1.0,
        };
        canvas.push(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", Rgb::WHITE),
        );
        canvas
    }

    fn push(&mut self, node: impl Into<Box<dyn svg::Node>>) {
        let document = std::mem::replace(&mut self.document, Document::new());
        self.document = document.add(node);
    }

    /// Write the SVG to `path`
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Io` if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        info!(path = %path.display(), "Creating SVG file");

        let mut file = File::create(path).map_err(|err| {
            error!(path = %path.display(), %err, "Failed to create SVG file");
            err
        })?;

        write!(file, "{}", self.document).map_err(|err| {
            error!(path = %path.display(), %err, "Failed to write SVG content");
            err
        })?;

        Ok(())
    }
}

impl Canvas for SvgCanvas {
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.push(
            svg_element::Rectangle::new()
                .set("x", rect.x)
                .set("y", rect.y)
                .set("width", rect.width)
                .set("height", rect.height)
                .set("fill", color),
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        self.push(
            svg_element::Rectangle::new()
                .set("x", rect.x)
                .set("y", rect.y)
                .set("width", rect.width)
                .set("height", rect.height)
                .set("fill", "none")
                .set("stroke", color)
                .set("stroke-width", self.line_width),
        );
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb) {
        self.push(
            svg_element::Line::new()
                .set("x1", from.x)
                .set("y1", from.y)
                .set("x2", to.x)
                .set("y2", to.y)
                .set("stroke", color)
                .set("stroke-width", self.line_width),
        );
    }

    fn text(&mut self, at: Point, content: &str, color: Rgb) {
        self.push(
            svg_element::Text::new(content)
                .set("x", at.x)
                .set("y", at.y)
                .set("font-family", DEFAULT_FONT_FAMILY)
                .set("font-size", DEFAULT_FONT_SIZE)
                .set("fill", color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_svg_canvas_output() {
        let mut canvas = SvgCanvas::new(200.0, 100.0);
        canvas.set_line_width(2.0);
        canvas.stroke_rect(Rect::new(25.0, 25.0, 150.0, 50.0), Rgb::BLACK);
        canvas.fill_rect(Rect::new(60.0, 40.0, 4.0, 4.0), Rgb::new(255, 0, 0));
        canvas.line(Point::new(50.0, 60.0), Point::new(90.0, 60.0), Rgb::BLACK);
        canvas.text(Point::new(50.0, 20.0), "gene <1>", Rgb::BLACK);

        let svg = canvas.document.to_string();
        assert!(svg.contains("viewBox=\"0 0 200 100\""));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("fill=\"#ff0000\""));
        assert!(svg.contains("<line"));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("<text"));
    }

    #[test]
    fn test_save() {
        let temp = NamedTempFile::with_suffix(".svg").unwrap();
        SvgCanvas::new(10.0, 10.0).save(temp.path()).unwrap();

        let written = std::fs::read_to_string(temp.path()).unwrap();
        assert!(written.contains("<svg"));
        assert!(written.contains("</svg>"));
    }

    #[test]
    fn test_save_to_missing_directory() {
        let result = SvgCanvas::new(10.0, 10.0).save(Path::new("/nonexistent/dir/out.svg"));
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
