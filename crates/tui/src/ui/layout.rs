//! Region geometry and the layout manager.
//!
//! Responsibilities:
//! - Compute the four region rectangles from the terminal size and ratios.
//! - Own the region arena and the handles of the four fixed regions.
//! - Show/hide the side panel, recomputing the main region's width.
//! - Rebuild every region's geometry on terminal resize.
//!
//! Does NOT handle:
//! - Painting or compositing (see `ui::render`).
//! - Mode transitions (see `app`).
//!
//! Invariants:
//! - Regions never exceed the terminal bounds.
//! - Main, chat and command never overlap; side overlaps only main's hidden
//!   extent (main is narrowed while side is shown).
//! - Main's width is a pure function of the geometry and side visibility
//!   ([`LayoutGeometry::main_area`]).

use parley_config::{ChatConfig, LayoutConfig};
use ratatui::layout::Rect;

use crate::error::LayoutError;
use crate::ui::region::{Prompt, Region, RegionArena, RegionId, RegionName};
use crate::ui::render::RenderCoordinator;

pub const MIN_TERMINAL_ROWS: u16 = 3;
pub const MIN_TERMINAL_COLS: u16 = 2;

/// Rectangles for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub terminal: Rect,
    /// Height shared by main and side.
    pub upper_height: u16,
    pub side: Rect,
    pub chat: Rect,
    pub command: Rect,
}

impl LayoutGeometry {
    /// Main region area, narrowed by the side region's width when it shows.
    pub fn main_area(&self, side_visible: bool) -> Rect {
        let width = if side_visible {
            self.terminal.width - self.side.width
        } else {
            self.terminal.width
        };
        Rect::new(0, 0, width, self.upper_height)
    }
}

/// Compute region geometry for a `cols` x `rows` terminal.
///
/// - command: the last row, full width.
/// - chat: `ceil(rows * vertical_ratio) - 1` rows above it, full width.
/// - side: right `ceil(cols * horizontal_ratio)` columns of the rest.
/// - main: the remaining upper-left area.
pub fn compute_layout(
    cols: u16,
    rows: u16,
    vertical_ratio: f64,
    horizontal_ratio: f64,
) -> Result<LayoutGeometry, LayoutError> {
    if rows < MIN_TERMINAL_ROWS || cols < MIN_TERMINAL_COLS {
        return Err(LayoutError::TerminalTooSmall { cols, rows });
    }

    let chat_height = ((f64::from(rows) * vertical_ratio).ceil() as u16)
        .saturating_sub(1)
        .clamp(1, rows - 2);
    let upper_height = rows - 1 - chat_height;
    let side_width = ((f64::from(cols) * horizontal_ratio).ceil() as u16).clamp(1, cols - 1);

    Ok(LayoutGeometry {
        terminal: Rect::new(0, 0, cols, rows),
        upper_height,
        side: Rect::new(cols - side_width, 0, side_width, upper_height),
        chat: Rect::new(0, upper_height, cols, chat_height),
        command: Rect::new(0, rows - 1, cols, 1),
    })
}

/// Handles of the four fixed regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHandles {
    pub main: RegionId,
    pub side: RegionId,
    pub chat: RegionId,
    pub command: RegionId,
}

impl RegionHandles {
    pub fn get(&self, name: RegionName) -> RegionId {
        match name {
            RegionName::Main => self.main,
            RegionName::Side => self.side,
            RegionName::Chat => self.chat,
            RegionName::CommandLine => self.command,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutManager {
    arena: RegionArena,
    handles: RegionHandles,
    geometry: LayoutGeometry,
    vertical_ratio: f64,
    horizontal_ratio: f64,
}

impl LayoutManager {
    /// Build the four regions for a `cols` x `rows` terminal.
    ///
    /// Fails with [`LayoutError::TerminalTooSmall`] before any region exists.
    pub fn new(
        cols: u16,
        rows: u16,
        layout: &LayoutConfig,
        chat: &ChatConfig,
    ) -> Result<Self, LayoutError> {
        let geometry = compute_layout(cols, rows, layout.vertical_ratio, layout.horizontal_ratio)?;
        tracing::debug!(?geometry, "Computed initial layout");

        let mut arena = RegionArena::new();
        let main = arena.insert(
            Region::new(
                RegionName::Main,
                geometry.main_area(layout.side_panel_visible),
            )
            .bordered()
            .titled("main"),
        );
        let side = arena.insert(
            Region::new(RegionName::Side, geometry.side)
                .bordered()
                .titled("side"),
        );
        let chat = arena.insert(
            Region::new(RegionName::Chat, geometry.chat)
                .bordered()
                .titled("chat")
                .with_prompt(Prompt {
                    row: 1,
                    col: chat.left_margin,
                    text: chat.prompt.clone(),
                }),
        );
        let command = arena.insert(Region::new(RegionName::CommandLine, geometry.command));

        Ok(Self {
            arena,
            handles: RegionHandles {
                main,
                side,
                chat,
                command,
            },
            geometry,
            vertical_ratio: layout.vertical_ratio,
            horizontal_ratio: layout.horizontal_ratio,
        })
    }

    pub fn handles(&self) -> RegionHandles {
        self.handles
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn arena(&self) -> &RegionArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut RegionArena {
        &mut self.arena
    }

    pub fn region(&self, name: RegionName) -> &Region {
        &self.arena[self.handles.get(name)]
    }

    pub fn region_mut(&mut self, name: RegionName) -> &mut Region {
        let id = self.handles.get(name);
        &mut self.arena[id]
    }

    /// Recompute the main region's area from side panel visibility.
    pub fn recompute_main(&mut self, side_visible: bool) -> Rect {
        let area = self.geometry.main_area(side_visible);
        self.region_mut(RegionName::Main).set_area(area);
        area
    }

    /// Show or hide the side panel.
    ///
    /// Main is resized and fully repainted; the panel stack is marked for
    /// restacking so the next frame composites the new order.
    pub fn set_side_panel_visible(&mut self, visible: bool, render: &mut RenderCoordinator) {
        let area = self.recompute_main(visible);
        tracing::debug!(visible, main = ?area, "Side panel visibility changed");
        render.set_panel_visible(self.handles.side, visible);
        render.repaint_region(&mut self.arena, self.handles.main, true);
    }

    /// Recompute every region for a new terminal size.
    ///
    /// On error the previous geometry is kept unchanged.
    pub fn resize(&mut self, cols: u16, rows: u16, side_visible: bool) -> Result<(), LayoutError> {
        let geometry = compute_layout(cols, rows, self.vertical_ratio, self.horizontal_ratio)?;
        tracing::debug!(?geometry, "Recomputed layout after resize");
        self.geometry = geometry;
        self.recompute_main(side_visible);
        self.region_mut(RegionName::Side).set_area(geometry.side);
        self.region_mut(RegionName::Chat).set_area(geometry.chat);
        self.region_mut(RegionName::CommandLine)
            .set_area(geometry.command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_80x24_default_ratios() {
        let g = compute_layout(80, 24, 1.0 / 3.0, 0.25).unwrap();
        assert_eq!(g.chat, Rect::new(0, 16, 80, 7));
        assert_eq!(g.upper_height, 16);
        assert_eq!(g.side, Rect::new(60, 0, 20, 16));
        assert_eq!(g.command, Rect::new(0, 23, 80, 1));
        assert_eq!(g.main_area(true), Rect::new(0, 0, 60, 16));
        assert_eq!(g.main_area(false), Rect::new(0, 0, 80, 16));
    }

    #[test]
    fn test_minimum_terminal() {
        let g = compute_layout(2, 3, 1.0 / 3.0, 0.25).unwrap();
        assert_eq!(g.chat.height, 1);
        assert_eq!(g.upper_height, 1);
        assert_eq!(g.side.width, 1);
        assert_eq!(g.main_area(true).width, 1);
    }

    #[test]
    fn test_too_small_terminal_fails() {
        assert_eq!(
            compute_layout(1, 24, 0.5, 0.5),
            Err(LayoutError::TerminalTooSmall { cols: 1, rows: 24 })
        );
        assert_eq!(
            compute_layout(80, 2, 0.5, 0.5),
            Err(LayoutError::TerminalTooSmall { cols: 80, rows: 2 })
        );
    }

    #[test]
    fn test_extreme_ratios_are_clamped() {
        let g = compute_layout(10, 10, 0.999, 0.999).unwrap();
        assert_eq!(g.chat.height, 8);
        assert_eq!(g.upper_height, 1);
        assert_eq!(g.side.width, 9);

        let g = compute_layout(10, 10, 0.001, 0.001).unwrap();
        assert_eq!(g.chat.height, 1);
        assert_eq!(g.side.width, 1);
    }

    #[test]
    fn test_manager_resize_keeps_geometry_on_error() {
        let mut manager =
            LayoutManager::new(80, 24, &LayoutConfig::default(), &ChatConfig::default()).unwrap();
        let before = *manager.geometry();
        assert!(manager.resize(1, 1, true).is_err());
        assert_eq!(*manager.geometry(), before);

        manager.resize(100, 30, true).unwrap();
        assert_eq!(manager.region(RegionName::CommandLine).area(), Rect::new(0, 29, 100, 1));
        assert_eq!(manager.region(RegionName::Main).area().width, 75);
    }
}
