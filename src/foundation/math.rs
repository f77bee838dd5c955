/// Tolerance used when comparing normalized positions and progress values.
pub const EPSILON: f64 = 1e-9;

/// Residual below which scrub smoothing lands exactly on its target.
pub(crate) const SETTLE_EPSILON: f64 = 1e-4;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp `t` into `[0, 1]`; NaN maps to 0.
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Normalized position of `v` inside `[a, b]`, clamped to `[0, 1]`.
///
/// Degenerate ranges (`a == b`) report 1 once `v` reached `a`, 0 before.
pub fn progress(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span.abs() <= EPSILON {
        return if v >= a { 1.0 } else { 0.0 };
    }
    clamp01((v - a) / span)
}

/// Move `current` toward `target` so that most of the distance is covered within `lag`
/// seconds. A non-positive lag jumps straight to the target.
pub(crate) fn smooth_toward(current: f64, target: f64, lag: f64, dt: f64) -> f64 {
    if lag <= 0.0 {
        return target;
    }
    let k = 1.0 - (-4.0 * dt.max(0.0) / lag).exp();
    let next = current + (target - current) * k;
    if (target - next).abs() < SETTLE_EPSILON {
        target
    } else {
        next
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
