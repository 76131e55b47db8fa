//! Entry markers for the file list.
//!
//! Directories carry an arrow, files a colored dot keyed by their content
//! category, unknown files a dim middle dot.

use crate::core::fm::Entry;
use crate::core::preview::{FileCategory, category_for};
use crate::ui::theme::ColorScheme;

use ratatui::style::Color;

pub const DIR_MARKER: &str = "▸";
pub const FILE_MARKER: &str = "●";
pub const PLAIN_MARKER: &str = "·";

/// Marker glyph and color for one listing row.
pub fn entry_marker(entry: &Entry, scheme: &ColorScheme) -> (&'static str, Color) {
    if entry.is_dir() {
        return (DIR_MARKER, scheme.cyan);
    }
    let category = entry
        .extension()
        .map(|ext| category_for(&ext))
        .unwrap_or(FileCategory::Other);
    match category {
        FileCategory::Python => (FILE_MARKER, scheme.cyan),
        FileCategory::Script => (FILE_MARKER, scheme.yellow),
        FileCategory::Text | FileCategory::Markdown => (FILE_MARKER, scheme.green),
        FileCategory::Data => (FILE_MARKER, scheme.purple_light),
        FileCategory::Image => (FILE_MARKER, scheme.pink),
        FileCategory::Archive => (FILE_MARKER, scheme.orange),
        FileCategory::Other => (PLAIN_MARKER, scheme.border),
    }
}
