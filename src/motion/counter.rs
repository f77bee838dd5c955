use crate::animation::ease::Ease;
use crate::animation::style::{Style, StyleProps};
use crate::animation::timeline::{Timeline, TweenOpts};
use crate::scroll::engine::TriggerId;
use crate::scroll::scope::{AnimationHost, AnimationScope};
use crate::scroll::trigger::{Threshold, TriggerSpec};
use crate::stage::ElementId;

/// Stat counters counting up from zero once their block scrolls into view.
#[derive(Clone, Debug)]
pub struct CountUp {
    trigger: Option<ElementId>,
    counters: Vec<(ElementId, f64)>,
    start: Threshold,
    duration: f64,
}

impl CountUp {
    pub const DEFAULT_DURATION: f64 = 2.0;

    pub fn new(trigger: Option<ElementId>, counters: impl IntoIterator<Item = (ElementId, f64)>) -> Self {
        Self {
            trigger,
            counters: counters.into_iter().collect(),
            start: Threshold::top(75.0),
            duration: Self::DEFAULT_DURATION,
        }
    }

    pub fn start(mut self, start: Threshold) -> Self {
        self.start = start;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn timeline(&self) -> Timeline {
        let opts = TweenOpts::new(self.duration).ease(Ease::OutCubic);
        self.counters.iter().fold(Timeline::new(), |tl, &(id, end)| {
            tl.from_to([id], StyleProps::new().count(0.0), StyleProps::new().count(end), opts, 0.0)
        })
    }

    pub fn register<H: AnimationHost>(self, scope: &mut AnimationScope<H>) -> Option<TriggerId> {
        let Some(trigger) = self.trigger else {
            tracing::debug!(scope = scope.name(), "counter block missing; skipped");
            return None;
        };
        if self.counters.is_empty() {
            return None;
        }
        scope.trigger(
            TriggerSpec::new(trigger)
                .start(self.start)
                .once()
                .on_enter(self.timeline()),
        )
    }

    /// The number a counter shows: its animated value, floored.
    pub fn displayed(style: &Style) -> i64 {
        style.count.floor() as i64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/counter.rs"]
mod tests;
