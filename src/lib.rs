//! Internal library crate for peruse.
//!
//! The shipped application is the `peruse` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! This API is only used to build the `peruse` binary and is not considered a library for external use.

pub mod app;
pub mod core;
pub mod ui;
pub mod utils;
