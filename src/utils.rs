//! Miscellaneous utility functions for peruse.
//!
//! Holds the [cli] argument handling and the [helpers] submodule with path
//! display utilities used throughout the app.

pub mod cli;
pub mod helpers;

pub use helpers::{readable_path, resolve_initial_dir, shorten_home_path};
