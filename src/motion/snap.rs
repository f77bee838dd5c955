use crate::animation::ease::Ease;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};
use crate::foundation::math::clamp01;

/// Normalized snap distance at which snapping takes its longest duration.
const FULL_DURATION_DISTANCE: f64 = 0.1;

/// Scroll span of one pinned trigger, normalized by the maximum scroll.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinnedRange {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl PinnedRange {
    /// Range over `[start, end]`, both in `[0, 1]`.
    pub fn new(start: f64, end: f64) -> ScrollreelResult<Self> {
        if !(0.0 <= start && start <= end && end <= 1.0) {
            return Err(ScrollreelError::validation(format!(
                "pinned range [{start}, {end}] is not ordered inside [0, 1]"
            )));
        }
        Ok(Self {
            start,
            end,
            center: start + (end - start) * 0.5,
        })
    }

    /// Whether `value` lies inside the range widened by `tolerance` on both sides.
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        value >= self.start - tolerance && value <= self.end + tolerance
    }
}

/// Global snap: pulls the scroll toward the centre of the pinned range it sits in.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SnapCoordinator {
    ranges: Vec<PinnedRange>,
    tolerance: f64,
    min_duration: f64,
    max_duration: f64,
    delay: f64,
}

impl SnapCoordinator {
    pub const DEFAULT_TOLERANCE: f64 = 0.02;

    /// Coordinator over `ranges`, kept in the given order.
    pub fn new(ranges: Vec<PinnedRange>, tolerance: f64) -> ScrollreelResult<Self> {
        if !tolerance.is_finite() || !(0.0..0.5).contains(&tolerance) {
            return Err(ScrollreelError::validation(format!(
                "snap tolerance must be in [0, 0.5), got {tolerance}"
            )));
        }
        Ok(Self {
            ranges,
            tolerance,
            min_duration: 0.15,
            max_duration: 0.35,
            delay: 0.0,
        })
    }

    /// Build from pinned trigger spans in pixels. `None` when there is nothing to snap to:
    /// no spans, or a page that does not scroll.
    pub fn from_spans(spans: &[(f64, f64)], max_scroll: f64, tolerance: f64) -> ScrollreelResult<Option<Self>> {
        if spans.is_empty() || !(max_scroll > 0.0) {
            return Ok(None);
        }
        let mut sorted = spans.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        let ranges = sorted
            .into_iter()
            .map(|(s, e)| {
                let start = clamp01(s / max_scroll);
                let end = clamp01(e / max_scroll).max(start);
                PinnedRange::new(start, end)
            })
            .collect::<ScrollreelResult<Vec<_>>>()?;
        Self::new(ranges, tolerance).map(Some)
    }

    /// Bound snap durations to `[min, max]` seconds.
    pub fn with_durations(mut self, min: f64, max: f64) -> ScrollreelResult<Self> {
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(ScrollreelError::validation(format!(
                "snap durations must satisfy 0 <= min <= max, got {min}..{max}"
            )));
        }
        self.min_duration = min;
        self.max_duration = max;
        Ok(self)
    }

    /// Idle seconds after the last scroll input before a snap starts.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn ease(&self) -> Ease {
        Ease::OutCubic
    }

    /// Snap target for a normalized scroll value.
    ///
    /// Inside a (widened) range the closest containing centre wins, the first registered on
    /// ties. Outside every range the value is returned unchanged.
    pub fn snap_to(&self, value: f64) -> f64 {
        let mut best: Option<f64> = None;
        for r in self.ranges.iter().filter(|r| r.contains(value, self.tolerance)) {
            match best {
                Some(c) if (c - value).abs() <= (r.center - value).abs() => {}
                _ => best = Some(r.center),
            }
        }
        best.unwrap_or(value)
    }

    /// Snap duration for a normalized travel distance, growing with distance inside the
    /// configured bounds.
    pub fn duration_for(&self, distance: f64) -> f64 {
        let t = clamp01(distance.abs() / FULL_DURATION_DISTANCE);
        self.min_duration + (self.max_duration - self.min_duration) * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/snap.rs"]
mod tests;
