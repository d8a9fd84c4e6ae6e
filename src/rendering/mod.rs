//! Rendering modules for the CareMap viewer.
//!
//! Low-level painting for the map canvas: background, tile grid,
//! markers, and the selection popup.

pub mod map_renderer;
