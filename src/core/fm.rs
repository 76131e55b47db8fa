//! Filesystem entry model and directory reading for peruse.
//!
//! Provides the [Entry] struct, an immutable metadata snapshot taken at
//! listing/search time, and the [browse_dir] function all listings are built
//! from. Staleness (a file changing after the snapshot) is tolerated, not
//! detected.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What an [Entry] turned out to be when its metadata was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Metadata could not be read (broken symlink, racing delete, etc.).
    Unreadable,
}

/// A single filesystem object as shown in a listing or search result.
///
/// Holds the absolute path plus cached metadata: kind, size (bytes for files,
/// immediate child count for directories) and the POSIX permission bits.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
    size: u64,
    mode: u32,
}

impl Entry {
    /// Takes a metadata snapshot of `path`.
    ///
    /// Never fails: entries whose metadata cannot be read come back as
    /// [EntryKind::Unreadable] with zeroed size and mode.
    pub fn snapshot(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) => {
                let kind = if meta.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                let size = if meta.is_dir() {
                    fs::read_dir(path).map(|rd| rd.count() as u64).unwrap_or(0)
                } else {
                    meta.len()
                };
                Entry {
                    path: path.to_path_buf(),
                    kind,
                    size,
                    mode: permission_bits(&meta),
                }
            }
            Err(_) => Entry {
                path: path.to_path_buf(),
                kind: EntryKind::Unreadable,
                size: 0,
                mode: 0,
            },
        }
    }

    // Accessors

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Bytes for files, immediate child count for directories.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The low nine POSIX permission bits (rwx for owner/group/other).
    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Final path component, lossy-decoded.
    pub fn name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy())
    }

    /// Hidden-marker check on the final path component only.
    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name())
    }

    /// Lowercased extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// An entry name is hidden when it starts with the hidden-marker prefix.
#[inline]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

/// Reads the children of `path` as metadata snapshots.
///
/// Individual children whose directory entry cannot be read are skipped; the
/// whole call fails only when `path` itself cannot be opened.
pub fn browse_dir(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(64);
    for dirent in fs::read_dir(path)? {
        let dirent = match dirent {
            Ok(d) => d,
            Err(_) => continue,
        };
        entries.push(Entry::snapshot(&dirent.path()));
    }
    Ok(entries)
}

/// Sorts entries in place: directories first, then case-insensitive name
/// order within each partition.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
    });
}

/// Counts the immediate children of a directory, split into directories and
/// files. Hidden entries are included, matching what the preview reports.
pub fn count_children(path: &Path) -> io::Result<(usize, usize)> {
    let mut dirs = 0;
    let mut files = 0;
    for dirent in fs::read_dir(path)? {
        let Ok(dirent) = dirent else { continue };
        match dirent.file_type() {
            Ok(ft) if ft.is_dir() => dirs += 1,
            Ok(_) => files += 1,
            Err(_) => files += 1,
        }
    }
    Ok((dirs, files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn snapshot_file_and_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let file_path = tmp.path().join("hello.txt");
        std::fs::write(&file_path, "abc123")?;

        let file = Entry::snapshot(&file_path);
        assert_eq!(file.kind(), EntryKind::File);
        assert_eq!(file.size(), 6);
        assert_eq!(file.name(), "hello.txt");
        assert!(!file.is_hidden());

        let dir = Entry::snapshot(tmp.path());
        assert_eq!(dir.kind(), EntryKind::Directory);
        assert_eq!(dir.size(), 1, "directory size is its child count");
        Ok(())
    }

    #[test]
    fn snapshot_missing_path_is_unreadable() {
        let entry = Entry::snapshot(Path::new("/path/does/not/exist"));
        assert_eq!(entry.kind(), EntryKind::Unreadable);
        assert_eq!(entry.size(), 0);
        assert_eq!(entry.mode(), 0);
    }

    #[test]
    fn hidden_name_detection() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let hidden = tmp.path().join(".secrets");
        File::create(&hidden)?;
        assert!(Entry::snapshot(&hidden).is_hidden());
        assert!(is_hidden_name(".git"));
        assert!(!is_hidden_name("main.rs"));
        Ok(())
    }

    #[test]
    fn sort_partitions_dirs_before_files() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        std::fs::create_dir(tmp.path().join("zeta"))?;
        File::create(tmp.path().join("Alpha.txt"))?;
        File::create(tmp.path().join("beta.txt"))?;

        let mut entries = browse_dir(tmp.path())?;
        sort_entries(&mut entries);

        let names: Vec<String> = entries.iter().map(|e| e.name().into_owned()).collect();
        assert_eq!(names, vec!["zeta", "Alpha.txt", "beta.txt"]);
        Ok(())
    }

    #[test]
    fn browse_nonexistent_fails() {
        assert!(browse_dir(Path::new("/path/does/not/exist")).is_err());
    }

    #[test]
    fn count_children_splits_kinds() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        std::fs::create_dir(tmp.path().join("sub"))?;
        File::create(tmp.path().join("a.txt"))?;
        File::create(tmp.path().join(".hidden"))?;

        let (dirs, files) = count_children(tmp.path())?;
        assert_eq!(dirs, 1);
        assert_eq!(files, 2, "hidden files count toward the totals");
        Ok(())
    }
}
