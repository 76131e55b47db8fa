//! Core runtime logic for peruse.
//!
//! This module contains the non-UI engine pieces used by the application:
//! - [fm]: directory traversal and file metadata (see [browse_dir], [Entry]).
//! - [find]: the recursive fuzzy-search index (see [FuzzyIndex]).
//! - [preview]: the content-preview pipeline with its fallback ladder.
//! - [formatter]: size/permission/width formatting helpers.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.

pub mod find;
pub mod fm;
pub mod formatter;
pub mod preview;
pub mod terminal;

pub use find::{FuzzyIndex, SearchHit};
pub use fm::{Entry, EntryKind, browse_dir};
pub use formatter::{format_permissions, format_size, sanitize_to_width};
pub use preview::{Diagnostic, Preview};
