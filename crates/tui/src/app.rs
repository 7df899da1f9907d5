//! Application state and rendering.
//!
//! This module ties the input session, the layout manager and the render
//! coordinator together into the modal UI engine.
//!
//! The module is organized into submodules:
//! - `input`: key dispatch per mode and the keybinding actions
//! - `command`: command-line composing and commit
//! - `chat`: chat entry, echo geometry, wrap and scroll
//! - `render`: frame composition

mod chat;
mod command;
mod input;
mod render;

pub use chat::ChatGeometry;

use parley_config::Config;
use ratatui::layout::Rect;

use crate::buffer::TextBuffer;
use crate::collab::{ChatTransport, CommandExecutor, EchoExecutor, NullTransport};
use crate::error::LayoutError;
use crate::input::{KeyBindingTable, ShiftState};
use crate::mode::{CursorPosition, CursorVisibility, InputSession, Mode};
use crate::ui::{LayoutManager, Region, RegionName, RenderCoordinator, StyleId};

/// Main application state.
pub struct App {
    session: InputSession,
    layout: LayoutManager,
    renderer: RenderCoordinator,
    keymap: KeyBindingTable,
    executor: Box<dyn CommandExecutor>,
    transport: Box<dyn ChatTransport>,
    chat_margin: u16,
    prompt_width: u16,
    /// Logical chat rows scrolled out above the chat region's first row.
    chat_scroll: u16,
}

impl App {
    /// Build the engine for a terminal of `size`.
    ///
    /// Fails before anything is drawn when the terminal cannot hold the
    /// regions.
    pub fn new(config: &Config, size: Rect) -> Result<Self, LayoutError> {
        let layout = LayoutManager::new(size.width, size.height, &config.layout, &config.chat)?;
        let renderer = RenderCoordinator::new(
            config.theme.to_theme(),
            layout.handles(),
            config.layout.side_panel_visible,
        );
        let prompt_width = u16::try_from(config.chat.prompt.chars().count()).unwrap_or(u16::MAX);

        let mut app = Self {
            session: InputSession::new(ShiftState::new(), config.layout.side_panel_visible),
            layout,
            renderer,
            keymap: KeyBindingTable::default(),
            executor: Box::new(EchoExecutor),
            transport: Box::new(NullTransport),
            chat_margin: config.chat.left_margin,
            prompt_width,
            chat_scroll: 0,
        };
        app.sync_keymap_help();
        app.repaint_all();
        tracing::info!(
            cols = size.width,
            rows = size.height,
            theme = %config.theme,
            "Session started"
        );
        Ok(app)
    }

    pub fn with_command_executor(mut self, executor: Box<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_chat_transport(mut self, transport: Box<dyn ChatTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Share a shift flag written by an external listener.
    pub fn with_shift_state(mut self, shift: ShiftState) -> Self {
        self.session.shift = shift;
        self
    }

    pub fn with_keymap(mut self, keymap: KeyBindingTable) -> Self {
        self.keymap = keymap;
        self.sync_keymap_help();
        self.repaint_region(RegionName::Side, true);
        self
    }

    pub fn mode(&self) -> Mode {
        self.session.mode
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn command_buffer(&self) -> &TextBuffer {
        &self.session.command_buffer
    }

    pub fn chat_buffer(&self) -> &TextBuffer {
        &self.session.chat_buffer
    }

    pub fn status_text(&self) -> &str {
        self.renderer.status_text()
    }

    pub fn status_style(&self) -> StyleId {
        self.renderer.status_style()
    }

    /// Cursor position relative to the active region.
    pub fn cursor(&self) -> CursorPosition {
        self.session.cursor
    }

    pub fn cursor_visibility(&self) -> CursorVisibility {
        self.session.cursor_visibility
    }

    pub fn side_panel_visible(&self) -> bool {
        self.session.side_panel_visible
    }

    pub fn shift_state(&self) -> &ShiftState {
        &self.session.shift
    }

    pub fn keymap(&self) -> &KeyBindingTable {
        &self.keymap
    }

    pub fn layout(&self) -> &LayoutManager {
        &self.layout
    }

    pub fn region(&self, name: RegionName) -> &Region {
        self.layout.region(name)
    }

    pub fn renderer(&self) -> &RenderCoordinator {
        &self.renderer
    }

    pub fn chat_scroll(&self) -> u16 {
        self.chat_scroll
    }

    /// True when something changed since the last rendered frame.
    pub fn needs_redraw(&self) -> bool {
        self.renderer.needs_present()
    }

    /// Rebuild the layout for a new terminal size.
    ///
    /// A size below the minimum keeps the previous geometry and reports it on
    /// the status line.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        match self
            .layout
            .resize(cols, rows, self.session.side_panel_visible)
        {
            Ok(()) => self.repaint_all(),
            Err(err) => {
                tracing::warn!(error = %err, "Keeping previous layout");
                self.show_warning(format!("terminal too small ({cols}x{rows})"));
                self.renderer.invalidate_all();
            }
        }
    }

    fn sync_keymap_help(&mut self) {
        let lines = self.keymap.help_lines();
        self.layout.region_mut(RegionName::Side).set_body(lines);
    }

    fn repaint_all(&mut self) {
        for name in [RegionName::Main, RegionName::Side, RegionName::Chat] {
            self.repaint_region(name, true);
        }
        if self.session.mode.is_chat() {
            self.resync_chat();
        }
        if self.session.mode.is_composing() {
            self.echo_command_buffer();
        } else {
            self.show_banner();
        }
    }

    fn repaint_region(&mut self, name: RegionName, full_clear: bool) {
        let id = self.layout.handles().get(name);
        self.renderer
            .repaint_region(self.layout.arena_mut(), id, full_clear);
    }

    fn set_status(&mut self, text: &str, style: StyleId) {
        let command = self.layout.handles().command;
        self.renderer
            .repaint_status_line(self.layout.arena_mut(), command, text, style);
    }

    /// Put the current mode's banner on the status line.
    fn show_banner(&mut self) {
        let banner = self.session.mode.banner();
        self.set_status(&banner, StyleId::Status);
    }

    /// Transient notice on the status line; replaced by the next banner.
    fn show_warning(&mut self, message: String) {
        tracing::debug!(%message, "Status warning");
        self.set_status(&message, StyleId::Status);
    }
}
