use crate::animation::style::StyleProps;
use crate::animation::timeline::{Timeline, TweenOpts};
use crate::foundation::math::{clamp01, lerp};
use crate::scroll::engine::TriggerId;
use crate::scroll::scope::{AnimationHost, AnimationScope};
use crate::scroll::trigger::{Threshold, TriggerEnd, TriggerSpec};
use crate::stage::ElementId;

/// Continuous vertical drift bound to scroll progress through a region.
///
/// Progress 0 (region top at viewport bottom) maps to `-depth` percent of the element height,
/// progress 1 (region bottom at viewport top) to `+depth`, linearly in between. The rendered
/// value trails the raw one by `lag` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    element: Option<ElementId>,
    region: Option<ElementId>,
    depth: f64,
    lag: f64,
}

impl Parallax {
    pub const DEFAULT_LAG: f64 = 1.2;

    pub fn new(element: Option<ElementId>, depth: f64) -> Self {
        Self {
            element,
            region: None,
            depth,
            lag: Self::DEFAULT_LAG,
        }
    }

    /// Measure progress against `region` instead of the element itself.
    pub fn region(mut self, region: Option<ElementId>) -> Self {
        self.region = region;
        self
    }

    pub fn lag(mut self, lag: f64) -> Self {
        self.lag = lag;
        self
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Vertical offset (percent of element height) for raw region progress.
    pub fn offset_at(&self, progress: f64) -> f64 {
        lerp(-self.depth, self.depth, clamp01(progress))
    }

    pub fn register<H: AnimationHost>(self, scope: &mut AnimationScope<H>) -> Option<TriggerId> {
        let Some(element) = self.element else {
            tracing::debug!(scope = scope.name(), "parallax element missing; skipped");
            return None;
        };
        let region = self.region.unwrap_or(element);
        let timeline = Timeline::new().from_to(
            [element],
            StyleProps::new().y_percent(self.offset_at(0.0)),
            StyleProps::new().y_percent(self.offset_at(1.0)),
            TweenOpts::new(1.0),
            0.0,
        );
        let spec = TriggerSpec::new(region)
            .start(Threshold::TOP_BOTTOM)
            .end(TriggerEnd::At(Threshold::BOTTOM_TOP))
            .scrub(timeline, self.lag);
        scope.trigger(spec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/parallax.rs"]
mod tests;
