use crate::foundation::error::{ScrollreelError, ScrollreelResult};

pub use kurbo::{Rect, Size, Vec2};

/// Visible browsing-surface dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with strictly positive, finite dimensions.
    pub fn new(width: f64, height: f64) -> ScrollreelResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ScrollreelError::layout(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Pixels for `percent` of the viewport width (`vw` units).
    pub fn vw(self, percent: f64) -> f64 {
        self.width * percent / 100.0
    }

    /// Pixels for `percent` of the viewport height (`vh` units).
    pub fn vh(self, percent: f64) -> f64 {
        self.height * percent / 100.0
    }

    /// Viewport as a kurbo size.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl std::str::FromStr for Viewport {
    type Err = ScrollreelError;

    /// Parse `"1440x900"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ScrollreelError::layout(format!("viewport '{s}' is not WxH")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| ScrollreelError::layout(format!("viewport '{s}' is not WxH")))
        };
        Self::new(parse(w)?, parse(h)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
