//! Display formatting helpers shared by the info boxes and preview pane.

use unicode_width::UnicodeWidthChar;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const TAB_WIDTH: usize = 4;

/// Formats a byte count with binary (1024) scaling and one decimal place.
///
/// # Returns
/// Strings like `"0.0 B"`, `"1.0 KB"`, `"2.5 MB"`. Values past the TB
/// threshold stay in TB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", SIZE_UNITS[unit])
}

/// Renders the low nine permission bits as `rwxrwxrwx` with `-` placeholders.
pub fn format_permissions(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let triad = (mode >> shift) & 0o7;
        out.push(if triad & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triad & 0o2 != 0 { 'w' } else { '-' });
        out.push(if triad & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Expands tabs and truncates `line` to at most `width` terminal columns.
///
/// Truncation is cell-aware: a wide character that would straddle the
/// boundary is dropped rather than split.
pub fn sanitize_to_width(line: &str, width: usize) -> String {
    let mut out = String::new();
    let mut cols = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - (cols % TAB_WIDTH);
            if cols + pad > width {
                break;
            }
            out.extend(std::iter::repeat_n(' ', pad));
            cols += pad;
            continue;
        }
        if ch.is_control() {
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if cols + w > width {
            break;
        }
        out.push(ch);
        cols += w;
    }
    out
}
