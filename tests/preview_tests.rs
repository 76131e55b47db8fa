use peruse::core::formatter::format_size;
use peruse::core::preview::{
    Diagnostic, MAX_PREVIEW_BYTES, MAX_PREVIEW_LINES, Preview, TRUNCATION_MARKER, preview,
};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_size_cap_boundary_is_exact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let at_cap = dir.path().join("at_cap.txt");
    fs::File::create(&at_cap)?.set_len(MAX_PREVIEW_BYTES)?;
    // A sparse file reads as NULs past its first byte, so the cap-sized
    // file classifies as binary rather than too-large.
    assert!(matches!(
        preview(&at_cap),
        Preview::Diagnostic(Diagnostic::Binary(_))
    ));

    let over_cap = dir.path().join("over_cap.txt");
    fs::File::create(&over_cap)?.set_len(MAX_PREVIEW_BYTES + 1)?;
    match preview(&over_cap) {
        Preview::Diagnostic(Diagnostic::TooLarge(size)) => {
            assert_eq!(size, format_size(MAX_PREVIEW_BYTES + 1));
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_markdown_renders_as_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let md = dir.path().join("README.markdown");
    fs::write(&md, "# Heading\n\nSome body text.\n")?;

    match preview(&md) {
        Preview::Document(text) => assert!(text.starts_with("# Heading")),
        other => panic!("expected Document, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_extensionless_file_is_plain() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let makefile = dir.path().join("Makefile");
    fs::write(&makefile, "all:\n\ttrue\n")?;

    match preview(&makefile) {
        Preview::Plain(lines) => assert_eq!(lines[0], "all:"),
        other => panic!("expected Plain, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_truncation_marker_only_past_cap() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let long = dir.path().join("trace.log");
    let mut f = fs::File::create(&long)?;
    for i in 0..MAX_PREVIEW_LINES * 2 {
        writeln!(f, "entry {i}")?;
    }

    match preview(&long) {
        Preview::Highlighted(lines, _) => {
            assert_eq!(lines.len(), MAX_PREVIEW_LINES + 1);
            assert_eq!(lines.last().map(String::as_str), Some(TRUNCATION_MARKER));
            assert_eq!(lines[0], "entry 0");
        }
        other => panic!("expected Highlighted, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_directory_preview_counts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("one"))?;
    fs::write(dir.path().join("a"), "")?;
    fs::write(dir.path().join("b"), "")?;
    // Hidden children still count, only the listing filters them.
    fs::write(dir.path().join(".c"), "")?;

    assert_eq!(
        preview(dir.path()),
        Preview::Directory {
            dir_count: 1,
            file_count: 3
        }
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_keeps_directory_tag() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let locked = dir.path().join("locked");
    fs::create_dir(&locked)?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
    if fs::read_dir(&locked).is_ok() {
        // Privileged users bypass mode bits; nothing to observe here.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    match preview(&locked) {
        Preview::Diagnostic(Diagnostic::PermissionDenied { directory }) => {
            assert!(directory, "denied target is known to be a directory");
        }
        other => panic!("expected PermissionDenied, got {other:?}"),
    }

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[test]
fn test_binary_then_deleted_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let blob = dir.path().join("image.png");
    fs::write(&blob, [0x89, 0x50, 0x4e, 0x47, 0x00, 0x0d])?;

    assert!(matches!(
        preview(&blob),
        Preview::Diagnostic(Diagnostic::Binary(_))
    ));

    fs::remove_file(&blob)?;
    assert_eq!(preview(&blob), Preview::Diagnostic(Diagnostic::NotFound));
    Ok(())
}

#[test]
fn test_crlf_lines_are_stripped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("dos.txt");
    fs::write(&path, "first\r\nsecond\r\n")?;

    match preview(&path) {
        Preview::Highlighted(lines, _) => assert_eq!(lines, ["first", "second"]),
        other => panic!("expected Highlighted, got {other:?}"),
    }
    Ok(())
}
