//! Region, layout and rendering modules for the TUI.
//!
//! This module owns everything that ends up on screen: region canvases, their
//! geometry, the panel stack and the coordinator that composites frames.

pub mod layout;
pub mod panel;
pub mod region;
pub mod render;
pub mod theme;

pub use layout::{LayoutGeometry, LayoutManager, RegionHandles, compute_layout};
pub use region::{Region, RegionArena, RegionId, RegionName};
pub use render::{Damage, RenderCoordinator};
pub use theme::{StyleId, ThemeExt};
