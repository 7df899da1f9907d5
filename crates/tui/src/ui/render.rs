//! Render coordinator.
//!
//! Responsibilities:
//! - Repaint the status line and individual regions into their canvases.
//! - Track which regions are damaged since the last frame.
//! - Composite visible region canvases into a ratatui frame in panel-stack
//!   order and place the cursor.
//!
//! Does NOT handle:
//! - Region geometry (see `ui::layout`).
//! - Deciding what text a region shows (see `app`).
//!
//! Invariants:
//! - After any panel visibility change the stack is restacked before the next
//!   frame is composited.
//! - Composition is clipped to the frame; oversized regions never panic.
//! - Damage is cleared only by a completed [`RenderCoordinator::present`].

use bitflags::bitflags;
use parley_config::Theme;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

use crate::mode::CursorPosition;
use crate::ui::layout::RegionHandles;
use crate::ui::panel::PanelStack;
use crate::ui::region::{Region, RegionArena, RegionId, RegionName};
use crate::ui::theme::{StyleId, ThemeExt};

bitflags! {
    /// Regions changed since the last presented frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Damage: u8 {
        const MAIN = 1 << 0;
        const SIDE = 1 << 1;
        const CHAT = 1 << 2;
        const STATUS = 1 << 3;
        /// Panel visibility or order changed.
        const STACK = 1 << 4;
    }
}

impl Damage {
    pub fn for_region(name: RegionName) -> Self {
        match name {
            RegionName::Main => Self::MAIN,
            RegionName::Side => Self::SIDE,
            RegionName::Chat => Self::CHAT,
            RegionName::CommandLine => Self::STATUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusLine {
    text: String,
    style: StyleId,
}

#[derive(Debug, Clone)]
pub struct RenderCoordinator {
    theme: Theme,
    stack: PanelStack,
    damage: Damage,
    status: StatusLine,
}

impl RenderCoordinator {
    /// Stack order, bottom first: main, chat, command, side.
    pub fn new(theme: Theme, handles: RegionHandles, side_visible: bool) -> Self {
        let mut stack = PanelStack::new();
        stack.push(handles.main);
        stack.push(handles.chat);
        stack.push(handles.command);
        stack.push(handles.side);
        if !side_visible {
            stack.hide(handles.side);
        }
        Self {
            theme,
            stack,
            damage: Damage::all(),
            status: StatusLine {
                text: String::new(),
                style: StyleId::Status,
            },
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the whole status line with `text`.
    pub fn repaint_status_line(
        &mut self,
        arena: &mut RegionArena,
        command: RegionId,
        text: &str,
        style: StyleId,
    ) {
        let style_value = self.theme.style(style);
        let region = &mut arena[command];
        region.fill(style_value);
        region.put_str(0, 0, text, style_value);
        self.status = StatusLine {
            text: text.to_string(),
            style,
        };
        self.damage |= Damage::STATUS;
    }

    /// Repaint one region. `full_clear = false` keeps existing glyphs and only
    /// redraws the border and title.
    pub fn repaint_region(&mut self, arena: &mut RegionArena, id: RegionId, full_clear: bool) {
        let region = &mut arena[id];
        region.paint(full_clear, &self.theme);
        self.damage |= Damage::for_region(region.name());
    }

    /// Record a direct glyph edit on `region`.
    pub fn mark(&mut self, region: &Region) {
        self.damage |= Damage::for_region(region.name());
    }

    pub fn set_panel_visible(&mut self, id: RegionId, visible: bool) {
        if visible {
            self.stack.show(id);
        } else {
            self.stack.hide(id);
        }
        self.damage |= Damage::STACK;
    }

    pub fn is_panel_hidden(&self, id: RegionId) -> bool {
        self.stack.is_hidden(id)
    }

    pub fn status_text(&self) -> &str {
        &self.status.text
    }

    pub fn status_style(&self) -> StyleId {
        self.status.style
    }

    pub fn damage(&self) -> Damage {
        self.damage
    }

    pub fn needs_present(&self) -> bool {
        !self.damage.is_empty()
    }

    pub fn invalidate_all(&mut self) {
        self.damage = Damage::all();
    }

    /// Composite every visible region into the frame and place the cursor.
    ///
    /// `cursor` is a position relative to a region; `None` hides the cursor.
    pub fn present(
        &mut self,
        frame: &mut Frame,
        arena: &RegionArena,
        cursor: Option<(RegionId, CursorPosition)>,
    ) {
        if self.stack.is_stale() {
            self.stack.update();
            tracing::trace!(visible = self.stack.visible().len(), "Restacked panels");
        }

        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        for &id in self.stack.visible() {
            if let Some(region) = arena.get(id) {
                blit(region, buffer, bounds);
            }
        }

        if let Some((id, pos)) = cursor
            && let Some(region) = arena.get(id)
        {
            let area = region.area();
            let position = Position::new(
                area.x.saturating_add(pos.col),
                area.y.saturating_add(pos.row),
            );
            if area.contains(position) && bounds.contains(position) {
                frame.set_cursor_position(position);
            }
        }

        self.damage = Damage::empty();
    }
}

fn blit(region: &Region, target: &mut Buffer, bounds: Rect) {
    let area = region.area();
    let visible = area.intersection(bounds);
    for y in visible.top()..visible.bottom() {
        for x in visible.left()..visible.right() {
            if let (Some(src), Some(dst)) = (
                region.canvas().cell((x - area.x, y - area.y)),
                target.cell_mut((x, y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::LayoutManager;
    use parley_config::{ChatConfig, LayoutConfig};
    use ratatui::{Terminal, backend::TestBackend};

    fn setup(cols: u16, rows: u16) -> (LayoutManager, RenderCoordinator) {
        let layout =
            LayoutManager::new(cols, rows, &LayoutConfig::default(), &ChatConfig::default())
                .unwrap();
        let render = RenderCoordinator::new(Theme::default(), layout.handles(), true);
        (layout, render)
    }

    #[test]
    fn test_status_line_fills_row() {
        let (mut layout, mut render) = setup(20, 6);
        let command = layout.handles().command;
        render.repaint_status_line(layout.arena_mut(), command, "-- COMMAND --", StyleId::Status);
        let region = &layout.arena()[command];
        assert_eq!(region.row_text(0), "-- COMMAND --");
        assert_eq!(render.status_text(), "-- COMMAND --");
        let last = region.canvas().cell((19, 0)).unwrap();
        assert_eq!(last.bg, Theme::default().status_bg);
        assert!(render.damage().contains(Damage::STATUS));
    }

    #[test]
    fn test_present_clears_damage_and_restacks() {
        let (mut layout, mut render) = setup(20, 6);
        let handles = layout.handles();
        render.repaint_region(layout.arena_mut(), handles.side, true);
        render.set_panel_visible(handles.side, false);
        assert!(render.damage().contains(Damage::STACK | Damage::SIDE));

        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|f| render.present(f, layout.arena(), None))
            .unwrap();
        assert!(!render.needs_present());
        assert!(render.is_panel_hidden(handles.side));
    }

    #[test]
    fn test_present_clips_to_smaller_frame() {
        let (mut layout, mut render) = setup(40, 12);
        let handles = layout.handles();
        for id in [handles.main, handles.side, handles.chat] {
            render.repaint_region(layout.arena_mut(), id, true);
        }
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal
            .draw(|f| render.present(f, layout.arena(), None))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.area, Rect::new(0, 0, 10, 4));
        assert_eq!(buffer.cell((0, 0)).map(|c| c.symbol()), Some("┌"));
    }
}
