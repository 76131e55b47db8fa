//! Directory-navigation cursor model for peruse.
//!
//! [DirectoryListing] owns the current directory, its visible entries and the
//! selection cursor. Row 0 is a pseudo-entry for the parent directory
//! whenever one exists, so "go up" is reachable with the same select action
//! as any other row.

use crate::core::fm::{self, Entry};

use std::io;
use std::path::{Path, PathBuf};

/// Snapshot of one directory plus the selection cursor into it.
pub struct DirectoryListing {
    current_dir: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    show_hidden: bool,
    has_parent: bool,
    last_error: Option<String>,
}

impl DirectoryListing {
    /// Opens `path` as the starting directory.
    ///
    /// This is the only fallible entry point: an unreadable startup
    /// directory is a fatal error, later navigation failures degrade to
    /// [last_error](Self::last_error). Relative paths are canonicalized so
    /// the parent chain is walkable; a bare `inner` would otherwise report
    /// the empty path as its parent.
    pub fn open(path: &Path) -> io::Result<Self> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            path.canonicalize()?
        };
        let entries = fm::browse_dir(&path)?;
        let mut listing = Self {
            current_dir: path,
            entries: Vec::new(),
            selected: 0,
            show_hidden: false,
            has_parent: false,
            last_error: None,
        };
        listing.install_entries(entries);
        Ok(listing)
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// True when row `idx` is the parent pseudo-entry.
    #[inline]
    pub fn is_parent_row(&self, idx: usize) -> bool {
        self.has_parent && idx == 0
    }

    #[inline]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// Moves the cursor by `delta`, clamped to the listing bounds.
    ///
    /// # Returns
    /// Whether the selection actually changed.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let max = self.entries.len() - 1;
        let next = self
            .selected
            .saturating_add_signed(delta)
            .min(max);
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Activates the selected row: the parent pseudo-entry goes up, a
    /// directory descends into it. Files are a no-op here; the preview pane
    /// already shows them.
    pub fn enter_selected(&mut self) {
        if self.is_parent_row(self.selected) {
            self.go_to_parent();
            return;
        }
        let Some(entry) = self.entries.get(self.selected) else {
            return;
        };
        if entry.is_dir() {
            let target = entry.path().to_path_buf();
            self.change_dir(target, None);
        }
    }

    /// Moves to the parent directory and selects the directory just exited.
    pub fn go_to_parent(&mut self) {
        let Some(parent) = self.current_dir.parent() else {
            return;
        };
        let exited = self.current_dir.clone();
        self.change_dir(parent.to_path_buf(), Some(exited));
    }

    /// Flips hidden-entry visibility and rebuilds the listing, keeping the
    /// cursor on the same path where possible.
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        let keep = self.selected_entry().map(|e| e.path().to_path_buf());
        self.refresh();
        if let Some(path) = keep
            && let Some(idx) = self.entries.iter().position(|e| e.path() == path)
        {
            self.selected = idx;
        }
    }

    /// Re-reads the current directory and resets the cursor to the top.
    pub fn refresh(&mut self) {
        self.reload(None);
    }

    /// Navigates to a search hit: directories are entered, files select
    /// themselves inside their parent directory.
    pub fn jump_to_path(&mut self, path: &Path, is_dir: bool) {
        if is_dir {
            self.change_dir(path.to_path_buf(), None);
        } else if let Some(parent) = path.parent() {
            self.change_dir(parent.to_path_buf(), Some(path.to_path_buf()));
        }
    }

    /// Commits the directory change, then rebuilds the listing.
    fn change_dir(&mut self, target: PathBuf, focus: Option<PathBuf>) {
        self.current_dir = target;
        self.reload(focus);
    }

    /// Rebuilds the entries for the (already committed) current directory.
    ///
    /// An unreadable directory does not roll back: the listing collapses to
    /// a single diagnostic row, and the parent chain stays walkable so the
    /// user can leave again.
    fn reload(&mut self, focus: Option<PathBuf>) {
        match fm::browse_dir(&self.current_dir) {
            Ok(entries) => {
                self.install_entries(entries);
                if let Some(path) = focus
                    && let Some(idx) = self.entries.iter().position(|e| e.path() == path)
                {
                    self.selected = idx;
                }
            }
            Err(e) => {
                self.entries.clear();
                self.has_parent = self.current_dir.parent().is_some();
                self.selected = 0;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Filters, sorts and prepends the parent pseudo-entry; resets the
    /// cursor to the top and clears any stale error.
    fn install_entries(&mut self, mut entries: Vec<Entry>) {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        fm::sort_entries(&mut entries);

        self.has_parent = self.current_dir.parent().is_some();
        if let Some(parent) = self.current_dir.parent() {
            entries.insert(0, Entry::snapshot(parent));
        }

        self.entries = entries;
        self.selected = 0;
        self.last_error = None;
    }
}
