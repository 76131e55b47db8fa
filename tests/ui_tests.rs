//! UI-related tests for peruse
//!
//! These tests focus on the display-side helpers: text sanitization,
//! size/permission formatting, color scheme tables and the overlay stack.

use peruse::core;
use peruse::ui::overlays::{Overlay, OverlayStack};
use peruse::ui::theme::SCHEMES;
use tempfile::tempdir;

#[test]
fn test_sanitization_respects_pane_width() {
    let pane_width = 10;

    let cases = vec!["short.txt", "very_long_filename.txt", "🦀_crab.rs", "\t_tab"];

    for input in cases {
        let result = core::sanitize_to_width(input, pane_width);
        let actual_width = unicode_width::UnicodeWidthStr::width(result.as_str());

        assert!(
            actual_width <= pane_width,
            "Width overflow for input '{}': result '{}' has width {}",
            input,
            result,
            actual_width
        );
        assert!(
            !result.chars().any(|c| c.is_control()),
            "Result contains control characters: {:?}",
            result
        );
    }
}

#[test]
fn test_size_formatting_reference_values() {
    assert_eq!(core::format_size(0), "0.0 B");
    assert_eq!(core::format_size(1024), "1.0 KB");
    assert_eq!(core::format_size(1_048_576), "1.0 MB");
}

#[test]
fn test_permission_rendering_is_always_nine_chars() {
    for mode in [0o000, 0o644, 0o755, 0o777, 0o123] {
        assert_eq!(core::format_permissions(mode).len(), 9);
    }
    assert_eq!(core::format_permissions(0o640), "rw-r-----");
}

#[test]
fn test_core_empty_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let entries = core::browse_dir(temp_dir.path())?;

    assert!(entries.is_empty(), "Directory should be empty");
    Ok(())
}

#[test]
fn test_scheme_table_has_eight_named_palettes() {
    assert_eq!(SCHEMES.len(), 8);
    assert_eq!(SCHEMES[0].name, "Tokyo Night");
    assert!(SCHEMES.iter().all(|s| !s.name.is_empty()));
}

#[test]
fn test_overlay_stack_ordering() {
    let mut overlays = OverlayStack::new();
    overlays.push(Overlay::Help);
    overlays.push(Overlay::Settings { cursor: 0 });

    assert!(matches!(overlays.top(), Some(Overlay::Settings { .. })));
    overlays.pop();
    assert!(matches!(overlays.top(), Some(Overlay::Help)));
}
