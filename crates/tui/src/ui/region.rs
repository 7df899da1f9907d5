//! Rectangular drawable regions and the arena that owns them.
//!
//! Responsibilities:
//! - Hold each region's geometry, decoration (border, title, prompt), static
//!   body lines and a retained canvas of drawn glyphs.
//! - Provide clipped drawing primitives (string, char, row fill).
//! - Hand out stable [`RegionId`] handles through [`RegionArena`].
//!
//! Does NOT handle:
//! - Computing geometry (see `ui::layout`).
//! - Compositing canvases into a frame (see `ui::render`).
//!
//! Invariants:
//! - The canvas always matches the region's current size, with its origin at
//!   (0, 0) in region-local coordinates.
//! - Drawing outside the canvas is silently clipped, never a panic.
//! - Handles are only created by an arena and stay valid for its lifetime.

use std::ops::{Index, IndexMut};

use parley_config::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::ThemeExt;

/// Which of the four fixed regions this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionName {
    Main,
    Side,
    Chat,
    CommandLine,
}

/// Static text drawn at a fixed region-local position on every full repaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub row: u16,
    pub col: u16,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Region {
    name: RegionName,
    area: Rect,
    bordered: bool,
    title: Option<String>,
    prompt: Option<Prompt>,
    body: Vec<String>,
    canvas: Buffer,
}

impl Region {
    pub fn new(name: RegionName, area: Rect) -> Self {
        Self {
            name,
            area,
            bordered: false,
            title: None,
            prompt: None,
            body: Vec::new(),
            canvas: Buffer::empty(local(area)),
        }
    }

    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn name(&self) -> RegionName {
        self.name
    }

    /// Absolute area on the terminal.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Replace the lines drawn inside the border on full repaints.
    pub fn set_body(&mut self, lines: Vec<String>) {
        self.body = lines;
    }

    /// Move/resize the region. The canvas is recreated blank.
    pub fn set_area(&mut self, area: Rect) {
        if area != self.area {
            self.area = area;
            self.canvas = Buffer::empty(local(area));
        }
    }

    pub fn canvas(&self) -> &Buffer {
        &self.canvas
    }

    /// Repaint decoration. A full clear first blanks the canvas and redraws
    /// the body and prompt; otherwise existing glyphs are kept and only the
    /// border and title are drawn again.
    pub fn paint(&mut self, full_clear: bool, theme: &Theme) {
        if full_clear {
            self.fill(theme.text());
            let offset = u16::from(self.bordered);
            let lines = std::mem::take(&mut self.body);
            for (row, line) in (offset..).zip(lines.iter()) {
                self.put_str(row, offset, line, theme.text());
            }
            self.body = lines;
            if let Some(prompt) = self.prompt.take() {
                self.put_str(prompt.row, prompt.col, &prompt.text, theme.text());
                self.prompt = Some(prompt);
            }
        }
        if self.bordered {
            let mut block = Block::bordered().border_style(theme.border());
            if let Some(title) = &self.title {
                block = block.title(Line::styled(format!(" {title} "), theme.title()));
            }
            block.render(local(self.area), &mut self.canvas);
        }
    }

    /// Blank every cell with `style`.
    pub fn fill(&mut self, style: Style) {
        self.canvas.reset();
        self.canvas.set_style(local(self.area), style);
    }

    /// Draw `text` starting at (row, col), clipped to the region width.
    pub fn put_str(&mut self, row: u16, col: u16, text: &str, style: Style) {
        if row >= self.height() || col >= self.width() {
            return;
        }
        let max_width = usize::from(self.width() - col);
        self.canvas.set_stringn(col, row, text, max_width, style);
    }

    pub fn put_char(&mut self, row: u16, col: u16, ch: char, style: Style) {
        if let Some(cell) = self.canvas.cell_mut((col, row)) {
            cell.set_char(ch).set_style(style);
        }
    }

    /// Symbol at (row, col), or None when outside the region.
    pub fn glyph(&self, row: u16, col: u16) -> Option<&str> {
        self.canvas.cell((col, row)).map(|cell| cell.symbol())
    }

    /// Text of one canvas row, trailing blanks trimmed.
    pub fn row_text(&self, row: u16) -> String {
        let text: String = (0..self.width())
            .filter_map(|col| self.glyph(row, col))
            .collect();
        text.trim_end().to_string()
    }
}

fn local(area: Rect) -> Rect {
    Rect::new(0, 0, area.width, area.height)
}

/// Stable handle to a region inside a [`RegionArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

/// Append-only owner of all regions.
#[derive(Debug, Clone, Default)]
pub struct RegionArena {
    regions: Vec<Region>,
}

impl RegionArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: Region) -> RegionId {
        self.regions.push(region);
        RegionId(self.regions.len() - 1)
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(index, region)| (RegionId(index), region))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Index<RegionId> for RegionArena {
    type Output = Region;

    fn index(&self, id: RegionId) -> &Region {
        &self.regions[id.0]
    }
}

impl IndexMut<RegionId> for RegionArena {
    fn index_mut(&mut self, id: RegionId) -> &mut Region {
        &mut self.regions[id.0]
    }
}
