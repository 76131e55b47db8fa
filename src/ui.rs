//! UI layer: renderer, overlays, entry markers and color schemes.

pub mod icons;
pub mod overlays;
pub mod render;
pub mod theme;

pub(crate) use render::render;
