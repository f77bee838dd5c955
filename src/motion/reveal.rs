use crate::animation::ease::Ease;
use crate::animation::style::StyleProps;
use crate::animation::timeline::{Timeline, Tween, TweenOpts};
use crate::scroll::engine::TriggerId;
use crate::scroll::scope::{AnimationHost, AnimationScope};
use crate::scroll::trigger::{Threshold, TriggerSpec};
use crate::stage::ElementId;

/// One-shot entrance: when the trigger element crosses its start threshold, animate the
/// targets from an offset, transparent state to rest.
///
/// The start state is shown as soon as the reveal is registered so nothing flashes before
/// the trigger fires.
#[derive(Clone, Debug)]
pub struct Reveal {
    trigger: Option<ElementId>,
    targets: Vec<ElementId>,
    start: Threshold,
    from: StyleProps,
    to: Option<StyleProps>,
    opts: TweenOpts,
    extra: Vec<Tween>,
}

impl Reveal {
    /// Default start: element top at 85 % of the viewport height.
    pub const DEFAULT_START: Threshold = Threshold {
        element: 0.0,
        viewport: 0.85,
    };

    /// Fade-up of `trigger` itself (`y: 40`, opacity 0, 1 s, `Ease::OutQuart`).
    pub fn new(trigger: Option<ElementId>) -> Self {
        Self {
            trigger,
            targets: trigger.into_iter().collect(),
            start: Self::DEFAULT_START,
            from: StyleProps::new().y(40.0).opacity(0.0),
            to: None,
            opts: TweenOpts::new(1.0).ease(Ease::OutQuart),
            extra: Vec::new(),
        }
    }

    /// Animate `targets` instead of the trigger element.
    pub fn targets(mut self, targets: impl IntoIterator<Item = ElementId>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    pub fn start(mut self, start: Threshold) -> Self {
        self.start = start;
        self
    }

    pub fn from(mut self, from: StyleProps) -> Self {
        self.from = from;
        self
    }

    /// End state; defaults to the resting value of every channel in the start state.
    pub fn to(mut self, to: StyleProps) -> Self {
        self.to = Some(to);
        self
    }

    pub fn opts(mut self, opts: TweenOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Extra tween played by the same trigger (inner image zoom, overlay text).
    pub fn with(
        mut self,
        targets: impl IntoIterator<Item = ElementId>,
        from: StyleProps,
        to: StyleProps,
        opts: TweenOpts,
        position: f64,
    ) -> Self {
        self.extra.push(Tween {
            targets: targets.into_iter().collect(),
            from: Some(from),
            to,
            opts,
            position,
        });
        self
    }

    pub fn timeline(&self) -> Timeline {
        let to = self.to.unwrap_or_else(|| self.from.resting());
        let base = Timeline::new().from_to(self.targets.iter().copied(), self.from, to, self.opts, 0.0);
        self.extra.iter().cloned().fold(base, Timeline::with_tween)
    }

    /// Register through `scope`. A missing trigger element or an empty target list skips
    /// the reveal.
    pub fn register<H: AnimationHost>(self, scope: &mut AnimationScope<H>) -> Option<TriggerId> {
        let Some(trigger) = self.trigger else {
            tracing::debug!(scope = scope.name(), "reveal trigger missing; skipped");
            return None;
        };
        if self.targets.is_empty() {
            tracing::debug!(scope = scope.name(), "reveal has no targets; skipped");
            return None;
        }
        let spec = TriggerSpec::new(trigger)
            .start(self.start)
            .once()
            .on_enter(self.timeline());
        scope.trigger(spec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/reveal.rs"]
mod tests;
