//! Content-preview pipeline for peruse.
//!
//! [preview] is a pure function of a path and its current filesystem state:
//! it classifies the target, applies the size/binary fallbacks, decodes up to
//! a capped number of lines, and picks a rendering through the extension
//! table. Every filesystem failure degrades to a [Diagnostic] value; nothing
//! here aborts the session.

use crate::core::fm::count_children;
use crate::core::formatter::format_size;

use phf::phf_map;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Seek};
use std::path::Path;

/// Files above this size are never read for preview.
pub const MAX_PREVIEW_BYTES: u64 = 1_000_000;
/// Decoding stops once this many lines have been produced.
pub const MAX_PREVIEW_LINES: usize = 1000;
/// Marker appended when [MAX_PREVIEW_LINES] is reached with content left.
pub const TRUNCATION_MARKER: &str = "... (preview truncated)";
// Bytes sniffed for NUL before treating a file as text.
const BINARY_PEEK_BYTES: usize = 1024;

/// Content category derived from a file extension.
///
/// Extending the mapping is a single edit to [EXT_CATEGORY_MAP]; unknown
/// extensions fall back to [FileCategory::Other].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Python,
    Script,
    Text,
    Markdown,
    Data,
    Image,
    Archive,
    Other,
}

static EXT_CATEGORY_MAP: phf::Map<&'static str, FileCategory> = phf_map! {
    "py" => FileCategory::Python,
    "js" => FileCategory::Script,
    "ts" => FileCategory::Script,
    "jsx" => FileCategory::Script,
    "tsx" => FileCategory::Script,
    "md" => FileCategory::Markdown,
    "markdown" => FileCategory::Markdown,
    "txt" => FileCategory::Text,
    "rst" => FileCategory::Text,
    "json" => FileCategory::Data,
    "yaml" => FileCategory::Data,
    "yml" => FileCategory::Data,
    "toml" => FileCategory::Data,
    "jpg" => FileCategory::Image,
    "jpeg" => FileCategory::Image,
    "png" => FileCategory::Image,
    "gif" => FileCategory::Image,
    "svg" => FileCategory::Image,
    "zip" => FileCategory::Archive,
    "tar" => FileCategory::Archive,
    "gz" => FileCategory::Archive,
    "bz2" => FileCategory::Archive,
};

/// Looks up the content category for a (lowercased) extension.
pub fn category_for(ext: &str) -> FileCategory {
    EXT_CATEGORY_MAP
        .get(&ext.to_lowercase())
        .copied()
        .unwrap_or(FileCategory::Other)
}

/// Renderable preview content, recomputed on every selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Plain text lines, no language hint.
    Plain(Vec<String>),
    /// Text lines tagged with the extension as a language hint. Renderers
    /// unable to highlight the hint degrade to plain text.
    Highlighted(Vec<String>, String),
    /// Markdown-family source, rendered as a structured document.
    Document(String),
    /// Immediate child counts of a directory.
    Directory { dir_count: usize, file_count: usize },
    /// Non-fatal placeholder substituted for normal content.
    Diagnostic(Diagnostic),
}

/// User-visible placeholder values for recoverable preview failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    NotFound,
    PermissionDenied {
        /// True when the denied target is known to be a directory, so the
        /// renderer can keep the directory tag.
        directory: bool,
    },
    /// Carries the formatted size; content is never read.
    TooLarge(String),
    /// NUL bytes found in the sniff window; carries the formatted size.
    Binary(String),
    EmptyFile,
    /// Any other read failure, with its message.
    Read(String),
}

impl Diagnostic {
    /// Short message as shown in the preview pane.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::NotFound => "File not found".to_string(),
            Diagnostic::PermissionDenied { directory: true } => {
                "Directory\n\nPermission denied".to_string()
            }
            Diagnostic::PermissionDenied { directory: false } => "Permission denied".to_string(),
            Diagnostic::TooLarge(size) => {
                format!("File too large to preview\n\nSize: {size}")
            }
            Diagnostic::Binary(size) => format!("Binary file\n\nSize: {size}"),
            Diagnostic::EmptyFile => "Empty file".to_string(),
            Diagnostic::Read(msg) => format!("Error: {msg}"),
        }
    }
}

/// Produces the preview content for `path`.
pub fn preview(path: &Path) -> Preview {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) => return Preview::Diagnostic(io_diagnostic(e, false)),
    };

    if meta.is_dir() {
        return match count_children(path) {
            Ok((dir_count, file_count)) => Preview::Directory {
                dir_count,
                file_count,
            },
            Err(e) => Preview::Diagnostic(io_diagnostic(e, true)),
        };
    }

    if meta.len() > MAX_PREVIEW_BYTES {
        return Preview::Diagnostic(Diagnostic::TooLarge(format_size(meta.len())));
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Preview::Diagnostic(io_diagnostic(e, false)),
    };

    let lines = match read_text_lines(file) {
        Ok(Some(lines)) => lines,
        Ok(None) => return Preview::Diagnostic(Diagnostic::Binary(format_size(meta.len()))),
        Err(e) => return Preview::Diagnostic(io_diagnostic(e, false)),
    };

    if lines.is_empty() {
        return Preview::Diagnostic(Diagnostic::EmptyFile);
    }

    match path.extension().map(|e| e.to_string_lossy().to_lowercase()) {
        Some(ext) if category_for(&ext) == FileCategory::Markdown => {
            Preview::Document(lines.join("\n"))
        }
        Some(ext) if !ext.is_empty() => Preview::Highlighted(lines, ext),
        _ => Preview::Plain(lines),
    }
}

/// Reads up to [MAX_PREVIEW_LINES] lossy-decoded lines.
///
/// Returns `Ok(None)` when the NUL sniff classifies the content as binary.
/// Invalid byte sequences are replaced, never raised.
fn read_text_lines(mut file: File) -> io::Result<Option<Vec<String>>> {
    let mut peek = [0u8; BINARY_PEEK_BYTES];
    let n = file.read(&mut peek)?;
    if peek[..n].contains(&0) {
        return Ok(None);
    }
    file.rewind()?;

    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        while buf.last() == Some(&b'\n') || buf.last() == Some(&b'\r') {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());

        if lines.len() == MAX_PREVIEW_LINES {
            if !reader.fill_buf()?.is_empty() {
                lines.push(TRUNCATION_MARKER.to_string());
            }
            break;
        }
    }

    Ok(Some(lines))
}

fn io_diagnostic(e: io::Error, directory: bool) -> Diagnostic {
    match e.kind() {
        ErrorKind::NotFound => Diagnostic::NotFound,
        ErrorKind::PermissionDenied => Diagnostic::PermissionDenied { directory },
        _ => Diagnostic::Read(e.to_string()),
    }
}
