//! Motif colors.
//!
//! A [`Palette`] is an explicit value handed to the renderer; motif `i` in
//! the declared motif list always gets `palette.color_for(i, motif_count)`.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the palette used when none is requested
pub const DEFAULT_PALETTE: &str = "tab10";

/// Palettes that can be selected by name
pub const NAMED_PALETTES: [&str; 4] = ["tab10", "set1", "dark2", "paired"];

const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const SET1: [&str; 9] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

const DARK2: [&str; 8] = [
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];

const PAIRED: [&str; 12] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Unknown palette '{0}' (available: tab10, set1, dark2, paired)")]
    UnknownName(String),

    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("Palette has no colors")]
    Empty,

    #[error("Failed to read palette: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse palette: {0}")]
    Json(#[from] serde_json::Error),
}

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    /// Parse `#rrggbb` (the leading `#` is optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PaletteError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for svg::node::Value {
    fn from(color: Rgb) -> Self {
        Self::from(color.to_string())
    }
}

/// An ordered list of colors to assign to motifs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_hex(DEFAULT_PALETTE, &TAB10)
    }
}

impl Palette {
    /// Build a palette from a list of colors
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::Empty` if `colors` is empty.
    pub fn new(name: impl Into<String>, colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// Look up one of the [`NAMED_PALETTES`] (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::UnknownName` for any other name.
    pub fn named(name: &str) -> Result<Self, PaletteError> {
        let hex: &[&str] = match name.to_lowercase().as_str() {
            "tab10" => &TAB10,
            "set1" => &SET1,
            "dark2" => &DARK2,
            "paired" => &PAIRED,
            _ => return Err(PaletteError::UnknownName(name.to_string())),
        };
        Ok(Self::from_hex(&name.to_lowercase(), hex))
    }

    /// Load a palette from a JSON array of `#rrggbb` strings
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::Io` if the file cannot be read, `PaletteError::Json`
    /// if it is not an array of valid colors, or `PaletteError::Empty`.
    pub fn from_json_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        let colors: Vec<Rgb> = serde_json::from_str(&content)?;
        let name = path
            .file_stem()
            .map_or_else(|| "custom".to_string(), |s| s.to_string_lossy().to_string());
        Self::new(name, colors)
    }

    fn from_hex(name: &str, hex: &[&str]) -> Self {
        let colors = hex
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect::<Vec<Rgb>>();
        debug_assert_eq!(colors.len(), hex.len(), "malformed color in {name}");
        Self {
            name: name.to_string(),
            colors,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of motif `index` out of `motif_count`.
    ///
    /// With no more motifs than colors each motif gets its own color in
    /// palette order; otherwise motifs are spread evenly across the palette
    /// and neighbours share colors.
    #[must_use]
    pub fn color_for(&self, index: usize, motif_count: usize) -> Rgb {
        let len = self.colors.len();
        if len == 0 {
            return Rgb::BLACK;
        }

        let slot = if motif_count <= len {
            index % len
        } else {
            (index * len / motif_count).min(len - 1)
        };
        self.colors[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_rgb_parse_and_display() {
        let color: Rgb = "#1F77b4".parse().unwrap();
        assert_eq!(color, Rgb::new(0x1f, 0x77, 0xb4));
        assert_eq!(color.to_string(), "#1f77b4");
        assert_eq!("00ff00".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 0));

        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("red".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_named_palettes() {
        for name in NAMED_PALETTES {
            let palette = Palette::named(name).unwrap();
            assert!(!palette.is_empty(), "{name} is empty");
        }
        assert_eq!(Palette::named("TAB10").unwrap(), Palette::default());
        assert_eq!(Palette::default().len(), 10);
        assert!(matches!(
            Palette::named("viridis"),
            Err(PaletteError::UnknownName(_))
        ));
    }

    #[test]
    fn test_named_palettes_keep_every_color() {
        for (name, expected) in [("tab10", 10), ("set1", 9), ("dark2", 8), ("paired", 12)] {
            assert_eq!(Palette::named(name).unwrap().len(), expected, "{name}");
        }
    }

    #[test]
    fn test_distinct_colors_when_palette_is_large_enough() {
        let palette = Palette::default();
        let colors: Vec<_> = (0..4).map(|i| palette.color_for(i, 4)).collect();
        assert_eq!(colors[0], "#1f77b4".parse().unwrap());
        assert_eq!(colors[3], "#d62728".parse().unwrap());
        let unique: std::collections::HashSet<_> = colors.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_spread_when_more_motifs_than_colors() {
        let palette = Palette::named("dark2").unwrap();
        assert_eq!(palette.color_for(0, 16), palette.colors[0]);
        assert_eq!(palette.color_for(1, 16), palette.colors[0]);
        assert_eq!(palette.color_for(2, 16), palette.colors[1]);
        assert_eq!(palette.color_for(15, 16), palette.colors[7]);
    }

    #[test]
    fn test_palette_from_json_file() {
        let mut temp = NamedTempFile::with_suffix(".json").unwrap();
        temp.write_all(br##"["#000000", "#ff0000"]"##).unwrap();
        temp.flush().unwrap();

        let palette = Palette::from_json_file(temp.path()).unwrap();
        assert_eq!(palette.colors, vec![Rgb::BLACK, Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_palette_from_bad_json() {
        let mut temp = NamedTempFile::with_suffix(".json").unwrap();
        temp.write_all(br#"["blue"]"#).unwrap();
        temp.flush().unwrap();
        assert!(matches!(
            Palette::from_json_file(temp.path()),
            Err(PaletteError::Json(_))
        ));

        let mut empty = NamedTempFile::with_suffix(".json").unwrap();
        empty.write_all(b"[]").unwrap();
        empty.flush().unwrap();
        assert!(matches!(
            Palette::from_json_file(empty.path()),
            Err(PaletteError::Empty)
        ));
    }
}
