//! Application state and main controller for peruse.
//!
//! [AppState] owns the directory listing, the mode state machine
//! (browsing/searching), the overlay stack, the fuzzy index and the derived
//! preview/info content. Keypresses are routed top-down: overlays first, then
//! the active mode, then the browsing keymap.

use crate::app::keymap::{Command, Keymap};
use crate::app::nav::DirectoryListing;
use crate::app::search::SearchState;
use crate::core::find::FuzzyIndex;
use crate::core::fm::count_children;
use crate::core::formatter::{format_permissions, format_size};
use crate::core::preview::{self, Preview};
use crate::ui::overlays::{Overlay, OverlayStack};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use std::io;
use std::path::{Path, PathBuf};

/// Outcome of one processed keypress.
pub(crate) enum KeypressResult {
    /// Nothing changed, no redraw needed.
    Continue,
    /// State changed, redraw.
    Consumed,
    Quit,
}

/// Which component currently owns plain keyboard input.
pub(crate) enum Mode {
    Browsing,
    Searching(SearchState),
}

/// Content of the three summary boxes above the file list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct InfoSummaries {
    pub(crate) dir_size: String,
    pub(crate) file_size: String,
    pub(crate) permissions: String,
}

impl Default for InfoSummaries {
    fn default() -> Self {
        Self {
            dir_size: "N/A".to_string(),
            file_size: "N/A".to_string(),
            permissions: "N/A".to_string(),
        }
    }
}

pub(crate) struct AppState {
    keymap: Keymap,
    listing: DirectoryListing,
    mode: Mode,
    overlays: OverlayStack,
    index: FuzzyIndex,
    preview: Preview,
    info: InfoSummaries,
    theme_idx: usize,
    last_previewed: Option<PathBuf>,
}

impl AppState {
    /// Builds the state rooted at `path`. An unreadable startup directory is
    /// the only fatal error the app knows.
    pub(crate) fn new(path: &Path) -> io::Result<Self> {
        let listing = DirectoryListing::open(path)?;
        let mut app = Self {
            keymap: Keymap::new(),
            listing,
            mode: Mode::Browsing,
            overlays: OverlayStack::new(),
            index: FuzzyIndex::new(),
            preview: Preview::Diagnostic(preview::Diagnostic::NotFound),
            info: InfoSummaries::default(),
            theme_idx: 0,
            last_previewed: None,
        };
        app.sync_selection();
        Ok(app)
    }

    #[inline]
    pub(crate) fn listing(&self) -> &DirectoryListing {
        &self.listing
    }

    #[inline]
    pub(crate) fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub(crate) fn overlays(&self) -> &OverlayStack {
        &self.overlays
    }

    #[inline]
    pub(crate) fn preview(&self) -> &Preview {
        &self.preview
    }

    #[inline]
    pub(crate) fn info(&self) -> &InfoSummaries {
        &self.info
    }

    #[inline]
    pub(crate) fn theme_idx(&self) -> usize {
        self.theme_idx
    }

    pub(crate) fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if !self.overlays.is_empty() {
            return self.handle_overlay_key(key);
        }
        if matches!(self.mode, Mode::Searching(_)) {
            return self.handle_search_key(key);
        }
        self.handle_browsing_key(key)
    }

    fn handle_browsing_key(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(command) = self.keymap.lookup(key) else {
            return KeypressResult::Continue;
        };
        match command {
            Command::MoveUp => {
                if !self.listing.move_selection(-1) {
                    return KeypressResult::Continue;
                }
            }
            Command::MoveDown => {
                if !self.listing.move_selection(1) {
                    return KeypressResult::Continue;
                }
            }
            Command::Select => self.listing.enter_selected(),
            Command::Back => self.listing.go_to_parent(),
            Command::ToggleHidden => self.listing.toggle_hidden(),
            Command::OpenSearch => {
                // A fresh snapshot per search session, rooted where the user
                // is browsing right now.
                self.index.build(self.listing.current_dir());
                self.mode = Mode::Searching(SearchState::open(&self.index));
                return KeypressResult::Consumed;
            }
            Command::ShowHelp => {
                self.overlays.push(Overlay::Help);
                return KeypressResult::Consumed;
            }
            Command::ShowSettings => {
                self.overlays.push(Overlay::Settings {
                    cursor: self.theme_idx,
                });
                return KeypressResult::Consumed;
            }
            Command::Quit => return KeypressResult::Quit,
        }
        self.sync_selection();
        KeypressResult::Consumed
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> KeypressResult {
        let Mode::Searching(search) = &mut self.mode else {
            return KeypressResult::Continue;
        };
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browsing;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mode = Mode::Browsing;
            }
            KeyCode::Enter => {
                let target = search
                    .selected_hit()
                    .map(|h| (h.path().to_path_buf(), h.is_dir()));
                self.mode = Mode::Browsing;
                if let Some((path, is_dir)) = target {
                    self.listing.jump_to_path(&path, is_dir);
                    self.sync_selection();
                }
            }
            KeyCode::Up => search.select_prev(),
            KeyCode::Down => search.select_next(),
            KeyCode::Backspace => search.pop_char(&self.index),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search.push_char(c, &self.index);
            }
            _ => return KeypressResult::Continue,
        }
        KeypressResult::Consumed
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(top) = self.overlays.top_mut() else {
            return KeypressResult::Continue;
        };
        match top {
            Overlay::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                    self.overlays.pop();
                }
                _ => return KeypressResult::Continue,
            },
            Overlay::Settings { cursor } => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    self.overlays.pop();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    *cursor = cursor.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    *cursor = (*cursor + 1).min(crate::ui::theme::SCHEMES.len() - 1);
                }
                KeyCode::Enter => {
                    self.theme_idx = *cursor;
                    self.overlays.pop();
                }
                _ => return KeypressResult::Continue,
            },
        }
        KeypressResult::Consumed
    }

    /// Recomputes the preview pane and the info boxes for the current
    /// selection. No-op when the selected path is unchanged, so repeated
    /// calls after clamped cursor moves are free.
    pub(crate) fn sync_selection(&mut self) {
        let selected = self.listing.selected_entry().map(|e| e.path().to_path_buf());
        if selected == self.last_previewed && self.last_previewed.is_some() {
            return;
        }

        let Some(path) = selected else {
            self.preview = Preview::Diagnostic(preview::Diagnostic::NotFound);
            self.info = InfoSummaries::default();
            self.last_previewed = None;
            return;
        };

        self.preview = preview::preview(&path);
        self.info = self.build_info();
        self.last_previewed = Some(path);
    }

    fn build_info(&self) -> InfoSummaries {
        let Some(entry) = self.listing.selected_entry() else {
            return InfoSummaries::default();
        };

        if entry.is_dir() {
            // Counts already computed by the preview pipeline.
            let dir_size = match &self.preview {
                Preview::Directory {
                    dir_count,
                    file_count,
                } => format!("{dir_count} dirs, {file_count} files"),
                _ => "Permission denied".to_string(),
            };
            InfoSummaries {
                dir_size,
                file_size: "Directory".to_string(),
                permissions: format_permissions(entry.mode()),
            }
        } else {
            let dir_size = match count_children(self.listing.current_dir()) {
                Ok((dirs, files)) => format!("{dirs} dirs, {files} files"),
                Err(_) => "Permission denied".to_string(),
            };
            InfoSummaries {
                dir_size,
                file_size: format_size(entry.size()),
                permissions: format_permissions(entry.mode()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::fs;
    use tempfile::tempdir;

    fn press(app: &mut AppState, code: KeyCode) -> KeypressResult {
        app.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn seed(root: &Path) -> std::io::Result<()> {
        fs::create_dir(root.join("docs"))?;
        fs::write(root.join("docs/guide.md"), "# Guide\n")?;
        fs::write(root.join("notes.txt"), "hello\n")?;
        Ok(())
    }

    #[test]
    fn quit_key_quits() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;
        assert!(matches!(press(&mut app, KeyCode::Char('q')), KeypressResult::Quit));
        Ok(())
    }

    #[test]
    fn clamped_move_is_not_a_redraw() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;
        assert!(matches!(
            press(&mut app, KeyCode::Up),
            KeypressResult::Continue
        ));
        assert!(matches!(
            press(&mut app, KeyCode::Down),
            KeypressResult::Consumed
        ));
        Ok(())
    }

    #[test]
    fn selection_change_recomputes_preview_and_info()
    -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;

        press(&mut app, KeyCode::Down); // -> docs
        assert!(matches!(
            app.preview(),
            Preview::Directory {
                dir_count: 0,
                file_count: 1
            }
        ));
        assert_eq!(app.info().file_size, "Directory");
        assert_eq!(app.info().dir_size, "0 dirs, 1 files");

        press(&mut app, KeyCode::Down); // -> notes.txt
        assert!(matches!(app.preview(), Preview::Highlighted(_, _)));
        assert_eq!(app.info().file_size, "6.0 B");
        assert_eq!(app.info().dir_size, "1 dirs, 1 files");
        Ok(())
    }

    #[test]
    fn sync_selection_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;
        press(&mut app, KeyCode::Down);

        let before = (app.preview().clone(), app.info().clone());
        app.sync_selection();
        app.sync_selection();
        assert_eq!(before, (app.preview().clone(), app.info().clone()));
        Ok(())
    }

    #[test]
    fn search_open_edit_confirm() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;

        press(&mut app, KeyCode::Char('/'));
        assert!(matches!(app.mode(), Mode::Searching(_)));

        for c in "guide".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode(), Mode::Browsing));
        assert_eq!(app.listing().current_dir(), tmp.path().join("docs"));
        assert_eq!(
            app.listing()
                .selected_entry()
                .map(|e| e.name().into_owned()),
            Some("guide.md".to_string())
        );
        Ok(())
    }

    #[test]
    fn escape_cancels_search_without_moving() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;
        let dir_before = app.listing().current_dir().to_path_buf();

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.mode(), Mode::Browsing));
        assert_eq!(app.listing().current_dir(), dir_before);
        Ok(())
    }

    #[test]
    fn browsing_keys_are_inert_while_searching() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;

        press(&mut app, KeyCode::Char('/'));
        // 'q' is query input here, not quit.
        assert!(matches!(
            press(&mut app, KeyCode::Char('q')),
            KeypressResult::Consumed
        ));
        let Mode::Searching(search) = app.mode() else {
            panic!("expected search mode");
        };
        assert_eq!(search.query(), "q");
        Ok(())
    }

    #[test]
    fn settings_overlay_switches_theme() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;

        press(&mut app, KeyCode::Char('s'));
        assert!(!app.overlays().is_empty());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.overlays().is_empty());
        assert_eq!(app.theme_idx(), 2);
        Ok(())
    }

    #[test]
    fn help_overlay_blocks_quit_key() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        seed(tmp.path())?;
        let mut app = AppState::new(tmp.path())?;

        press(&mut app, KeyCode::Char('?'));
        // 'q' closes the overlay instead of quitting.
        assert!(matches!(
            press(&mut app, KeyCode::Char('q')),
            KeypressResult::Consumed
        ));
        assert!(app.overlays().is_empty());
        assert!(matches!(press(&mut app, KeyCode::Char('q')), KeypressResult::Quit));
        Ok(())
    }
}
