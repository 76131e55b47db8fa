//! Application layer for peruse: navigation model, search state, key
//! handling and the central [AppState] controller.

pub mod keymap;
pub mod nav;
pub mod search;
pub mod state;

pub use nav::DirectoryListing;
pub use search::SearchState;
pub(crate) use state::{AppState, KeypressResult, Mode};
