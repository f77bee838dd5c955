use crate::foundation::error::{ScrollreelError, ScrollreelResult};
use crate::foundation::math::lerp;

/// Interpolation contract for animated values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

/// Clip-path inset in percent of the element box (`inset(top right bottom left)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Inset {
    /// Percent clipped from the top edge.
    pub top: f64,
    /// Percent clipped from the right edge.
    pub right: f64,
    /// Percent clipped from the bottom edge.
    pub bottom: f64,
    /// Percent clipped from the left edge.
    pub left: f64,
}

impl Inset {
    /// Fully visible: nothing clipped.
    pub const NONE: Inset = Inset::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Fully clipped so that revealing it sweeps in from the left edge.
    pub const fn sweep_from_left() -> Self {
        Self::new(0.0, 100.0, 0.0, 0.0)
    }

    /// Fully clipped so that revealing it sweeps in from the right edge.
    pub const fn sweep_from_right() -> Self {
        Self::new(0.0, 0.0, 0.0, 100.0)
    }

    /// Fully clipped so that revealing it drops in from the top edge.
    pub const fn sweep_from_top() -> Self {
        Self::new(0.0, 0.0, 100.0, 0.0)
    }

    /// Fully clipped so that revealing it rises from the bottom edge.
    pub const fn sweep_from_bottom() -> Self {
        Self::new(100.0, 0.0, 0.0, 0.0)
    }

    /// Fraction of the element area left visible, in `[0, 1]`.
    pub fn visible_fraction(self) -> f64 {
        let w = (100.0 - self.left - self.right).max(0.0) / 100.0;
        let h = (100.0 - self.top - self.bottom).max(0.0) / 100.0;
        w * h
    }
}

impl Lerp for Inset {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            top: lerp(a.top, b.top, t),
            right: lerp(a.right, b.right, t),
            bottom: lerp(a.bottom, b.bottom, t),
            left: lerp(a.left, b.left, t),
        }
    }
}

impl std::str::FromStr for Inset {
    type Err = ScrollreelError;

    /// Parse CSS shorthand `inset(a b c d)` with 1–4 percentage values.
    fn from_str(s: &str) -> ScrollreelResult<Self> {
        let bad = || ScrollreelError::validation(format!("invalid inset '{s}'"));
        let body = s
            .trim()
            .strip_prefix("inset(")
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(bad)?;
        let vals = body
            .split_whitespace()
            .map(|v| v.trim_end_matches('%').parse::<f64>().map_err(|_| bad()))
            .collect::<ScrollreelResult<Vec<_>>>()?;
        match vals.as_slice() {
            [a] => Ok(Self::new(*a, *a, *a, *a)),
            [v, h] => Ok(Self::new(*v, *h, *v, *h)),
            [t, h, b] => Ok(Self::new(*t, *h, *b, *h)),
            [t, r, b, l] => Ok(Self::new(*t, *r, *b, *l)),
            _ => Err(bad()),
        }
    }
}

/// Fully resolved visual state of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    pub opacity: f64,
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels.
    pub y: f64,
    /// Vertical translation in percent of the element height.
    pub y_percent: f64,
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate: f64,
    pub clip: Inset,
    /// Numeric display value (stat counters).
    pub count: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            y_percent: 0.0,
            scale: 1.0,
            rotate: 0.0,
            clip: Inset::NONE,
            count: 0.0,
        }
    }
}

impl Style {
    /// Identity transform, fully opaque, unclipped.
    pub fn resting() -> Self {
        Self::default()
    }

    /// Overwrite every channel that `props` sets.
    pub fn apply(&mut self, props: &StyleProps) {
        macro_rules! put {
            ($($f:ident),*) => {$(
                if let Some(v) = props.$f {
                    self.$f = v;
                }
            )*};
        }
        put!(opacity, x, y, y_percent, scale, rotate, clip, count);
    }

    /// Vertical translation in pixels for an element of `height` pixels.
    pub fn total_y(&self, height: f64) -> f64 {
        self.y + self.y_percent * height / 100.0
    }
}

/// A partial style: only the channels that are `Some` participate.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Inset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn x(mut self, v: f64) -> Self {
        self.x = Some(v);
        self
    }

    pub fn y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }

    pub fn y_percent(mut self, v: f64) -> Self {
        self.y_percent = Some(v);
        self
    }

    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn rotate(mut self, v: f64) -> Self {
        self.rotate = Some(v);
        self
    }

    pub fn clip(mut self, v: Inset) -> Self {
        self.clip = Some(v);
        self
    }

    pub fn count(mut self, v: f64) -> Self {
        self.count = Some(v);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The resting value of every channel this set touches.
    pub fn resting(&self) -> Self {
        Self::capture(&Style::resting(), self)
    }

    /// Read from `style` the channels that `shape` sets.
    pub fn capture(style: &Style, shape: &StyleProps) -> Self {
        Self {
            opacity: shape.opacity.map(|_| style.opacity),
            x: shape.x.map(|_| style.x),
            y: shape.y.map(|_| style.y),
            y_percent: shape.y_percent.map(|_| style.y_percent),
            scale: shape.scale.map(|_| style.scale),
            rotate: shape.rotate.map(|_| style.rotate),
            clip: shape.clip.map(|_| style.clip),
            count: shape.count.map(|_| style.count),
        }
    }

    /// Channels set in `to`, interpolated from `from` (falling back to `to` where `from`
    /// is silent).
    pub fn interpolate(from: &StyleProps, to: &StyleProps, t: f64) -> StyleProps {
        fn chan<T: Lerp + Copy>(a: Option<T>, b: Option<T>, t: f64) -> Option<T> {
            let b = b?;
            Some(T::lerp(&a.unwrap_or(b), &b, t))
        }
        StyleProps {
            opacity: chan(from.opacity, to.opacity, t),
            x: chan(from.x, to.x, t),
            y: chan(from.y, to.y, t),
            y_percent: chan(from.y_percent, to.y_percent, t),
            scale: chan(from.scale, to.scale, t),
            rotate: chan(from.rotate, to.rotate, t),
            clip: chan(from.clip, to.clip, t),
            count: chan(from.count, to.count, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/style.rs"]
mod tests;
