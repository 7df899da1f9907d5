//! Layered panel stack.
//!
//! Regions are composited bottom to top in stack order. Hiding or showing a
//! layer only marks the stack stale; the visible order is recomputed by
//! [`PanelStack::update`], which the render coordinator runs before every
//! frame that follows a visibility change.

use crate::ui::region::RegionId;

#[derive(Debug, Clone, Copy)]
struct Layer {
    region: RegionId,
    hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PanelStack {
    layers: Vec<Layer>,
    visible: Vec<RegionId>,
    stale: bool,
}

impl PanelStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a visible layer on top.
    pub fn push(&mut self, region: RegionId) {
        self.layers.push(Layer {
            region,
            hidden: false,
        });
        self.stale = true;
    }

    pub fn hide(&mut self, region: RegionId) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.region == region) {
            layer.hidden = true;
            self.stale = true;
        }
    }

    /// Unhide a layer and raise it to the top.
    pub fn show(&mut self, region: RegionId) {
        if let Some(pos) = self.layers.iter().position(|l| l.region == region) {
            let mut layer = self.layers.remove(pos);
            layer.hidden = false;
            self.layers.push(layer);
            self.stale = true;
        }
    }

    pub fn is_hidden(&self, region: RegionId) -> bool {
        self.layers
            .iter()
            .any(|l| l.region == region && l.hidden)
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Recompute the visible order from the layers.
    pub fn update(&mut self) {
        self.visible = self
            .layers
            .iter()
            .filter(|l| !l.hidden)
            .map(|l| l.region)
            .collect();
        self.stale = false;
    }

    /// Visible layers, bottom first, as of the last [`update`](Self::update).
    pub fn visible(&self) -> &[RegionId] {
        &self.visible
    }
}
