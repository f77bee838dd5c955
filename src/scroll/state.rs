use crate::foundation::core::Viewport;
use crate::foundation::math::clamp01;

/// The single scroll position shared by every trigger and by snapping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollState {
    offset: f64,
    max_scroll: f64,
    viewport: Viewport,
}

impl ScrollState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            offset: 0.0,
            max_scroll: 0.0,
            viewport,
        }
    }

    /// Scroll offset in pixels, in `[0, max_scroll]`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Largest reachable offset: document height minus viewport height, never negative.
    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Offset as a fraction of the scrollable distance (0 when nothing scrolls).
    pub fn normalized(&self) -> f64 {
        if self.max_scroll <= 0.0 {
            0.0
        } else {
            clamp01(self.offset / self.max_scroll)
        }
    }

    /// Pixel offset for a normalized position.
    pub fn to_pixels(&self, normalized: f64) -> f64 {
        clamp01(normalized) * self.max_scroll
    }

    /// Move to `px`, clamped into the scrollable range. Returns the applied offset.
    pub(crate) fn set_offset(&mut self, px: f64) -> f64 {
        self.offset = if px.is_finite() {
            px.clamp(0.0, self.max_scroll)
        } else {
            0.0
        };
        self.offset
    }

    /// Recompute the scrollable range for a document of `height` pixels.
    pub(crate) fn set_document_height(&mut self, height: f64) {
        self.max_scroll = (height - self.viewport.height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_scroll);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/state.rs"]
mod tests;
