use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Easing functions used to map normalized animation progress.
///
/// The `power` names accepted by [`Ease::from_str`](std::str::FromStr) follow the usual
/// web-animation convention: `power1` is quadratic, `power2` cubic, `power3` quartic and
/// `power4` quintic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
}

impl Ease {
    /// Every easing curve, in declaration order.
    pub const ALL: [Ease; 13] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
    ];

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in(t, 2),
            Self::OutQuad => ease_out(t, 2),
            Self::InOutQuad => ease_in_out(t, 2),
            Self::InCubic => ease_in(t, 3),
            Self::OutCubic => ease_out(t, 3),
            Self::InOutCubic => ease_in_out(t, 3),
            Self::InQuart => ease_in(t, 4),
            Self::OutQuart => ease_out(t, 4),
            Self::InOutQuart => ease_in_out(t, 4),
            Self::InQuint => ease_in(t, 5),
            Self::OutQuint => ease_out(t, 5),
            Self::InOutQuint => ease_in_out(t, 5),
        }
    }
}

fn ease_in(t: f64, p: i32) -> f64 {
    t.powi(p)
}

fn ease_out(t: f64, p: i32) -> f64 {
    1.0 - (1.0 - t).powi(p)
}

fn ease_in_out(t: f64, p: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(p - 1) * t.powi(p)
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(p) / 2.0)
    }
}

impl std::str::FromStr for Ease {
    type Err = ScrollreelError;

    fn from_str(s: &str) -> ScrollreelResult<Self> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("linear") || name.eq_ignore_ascii_case("none") {
            return Ok(Self::Linear);
        }
        let (family, dir) = name.split_once('.').unwrap_or((name, "out"));
        let idx = match family {
            "power1" => 0,
            "power2" => 1,
            "power3" => 2,
            "power4" => 3,
            _ => return Err(ScrollreelError::validation(format!("unknown ease '{s}'"))),
        };
        let offset = match dir {
            "in" => 0,
            "out" => 1,
            "inOut" => 2,
            _ => return Err(ScrollreelError::validation(format!("unknown ease '{s}'"))),
        };
        Ok(Self::ALL[1 + idx * 3 + offset])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
