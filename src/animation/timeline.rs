use std::collections::HashMap;

use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::animation::style::StyleProps;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};
use crate::foundation::math::clamp01;
use crate::stage::{ElementId, Stage};

/// Elements driven by one tween.
pub type Targets = SmallVec<[ElementId; 4]>;

/// Timing of a single tween.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenOpts {
    /// Seconds (or scrub units) for one target to go from start to end state.
    pub duration: f64,
    pub ease: Ease,
    /// Offset between consecutive targets.
    pub stagger: f64,
    /// Extra offset before the first target starts.
    pub delay: f64,
}

impl TweenOpts {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ease: Ease::Linear,
            stagger: 0.0,
            delay: 0.0,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

/// One property animation over a set of targets.
#[derive(Clone, Debug)]
pub struct Tween {
    pub targets: Targets,
    /// Explicit start state. `None` starts from whatever the target shows when the tween
    /// first renders.
    pub from: Option<StyleProps>,
    pub to: StyleProps,
    pub opts: TweenOpts,
    /// Start offset inside the timeline.
    pub position: f64,
}

impl Tween {
    fn start_for(&self, index: usize) -> f64 {
        self.position + self.opts.delay + self.opts.stagger * index as f64
    }

    /// Timeline time at which the last target finishes.
    pub fn end(&self) -> f64 {
        let last = self.targets.len().saturating_sub(1);
        self.start_for(last) + self.opts.duration
    }
}

/// Ordered set of tweens played together. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

/// Per-playback render memory: start states captured for `to`-only tweens, keyed by
/// (tween, target index), and the previously rendered time.
#[derive(Clone, Debug, Default)]
pub(crate) struct Captures {
    starts: HashMap<(usize, usize), StyleProps>,
    time: Option<f64>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `targets` from `from` to `to`, starting at `position`.
    ///
    /// The start state is shown as soon as the timeline renders, even before `position`.
    pub fn from_to(
        mut self,
        targets: impl IntoIterator<Item = ElementId>,
        from: StyleProps,
        to: StyleProps,
        opts: TweenOpts,
        position: f64,
    ) -> Self {
        self.tweens.push(Tween {
            targets: targets.into_iter().collect(),
            from: Some(from),
            to,
            opts,
            position,
        });
        self
    }

    /// Animate `targets` from their current state to `to`, starting at `position`.
    pub fn to(
        mut self,
        targets: impl IntoIterator<Item = ElementId>,
        to: StyleProps,
        opts: TweenOpts,
        position: f64,
    ) -> Self {
        self.tweens.push(Tween {
            targets: targets.into_iter().collect(),
            from: None,
            to,
            opts,
            position,
        });
        self
    }

    /// Jump `targets` to `props` at `position`.
    pub fn set(
        self,
        targets: impl IntoIterator<Item = ElementId>,
        props: StyleProps,
        position: f64,
    ) -> Self {
        self.to(targets, props, TweenOpts::new(0.0), position)
    }

    /// Append a prepared tween.
    pub fn with_tween(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.iter().all(|t| t.targets.is_empty())
    }

    /// Total length: the latest end over all tweens.
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    /// Every distinct target, in first-use order.
    pub fn targets(&self) -> Vec<ElementId> {
        let mut out: Vec<ElementId> = Vec::new();
        for id in self.tweens.iter().flat_map(|t| t.targets.iter().copied()) {
            if !out.contains(&id) {
                out.push(id);
            }
        }
        out
    }

    /// Reject negative or non-finite timing.
    pub fn validate(&self) -> ScrollreelResult<()> {
        for (i, t) in self.tweens.iter().enumerate() {
            let o = &t.opts;
            for (name, v) in [
                ("duration", o.duration),
                ("stagger", o.stagger),
                ("delay", o.delay),
                ("position", t.position),
            ] {
                if !v.is_finite() || v < 0.0 {
                    return Err(ScrollreelError::animation(format!(
                        "tween {i} has invalid {name} {v}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Render the timeline at `time` into `stage`. Targets that are no longer mounted are
    /// skipped.
    ///
    /// A tween only touches its targets while the playhead is inside it or has just crossed
    /// one of its edges since the previous render. Moving backward walks the tweens in
    /// reverse so earlier tweens have the last word.
    pub(crate) fn render(&self, time: f64, captures: &mut Captures, stage: &mut Stage) {
        let prev = captures.time.replace(time);
        let mut order: Vec<usize> = (0..self.tweens.len()).collect();
        if prev.is_some_and(|p| time < p) {
            order.reverse();
        }
        for ti in order {
            let tween = &self.tweens[ti];
            for (i, &id) in tween.targets.iter().enumerate() {
                let start = tween.start_for(i);
                let local = time - start;
                let prev_local = prev.map(|p| p - start);
                let duration = tween.opts.duration;
                if local < 0.0 {
                    let shown = match prev_local {
                        // First render: explicit start states show at once unless an
                        // earlier tween owns the target.
                        None => tween.from.filter(|_| !self.owned_before(ti, id)),
                        // Crossed back over the start.
                        Some(pl) if pl >= 0.0 => {
                            tween.from.or_else(|| captures.starts.get(&(ti, i)).copied())
                        }
                        Some(_) => None,
                    };
                    if let Some(props) = shown {
                        stage.apply(id, &props);
                    }
                    continue;
                }
                if local >= duration && prev_local.is_some_and(|pl| pl >= duration) {
                    continue;
                }
                let from = match &tween.from {
                    Some(from) => *from,
                    None => match captures.starts.get(&(ti, i)) {
                        Some(c) => *c,
                        None => {
                            let Some(style) = stage.style(id) else {
                                continue;
                            };
                            let c = StyleProps::capture(&style, &tween.to);
                            captures.starts.insert((ti, i), c);
                            c
                        }
                    },
                };
                let raw = if duration > 0.0 {
                    clamp01(local / duration)
                } else {
                    1.0
                };
                let eased = tween.opts.ease.apply(raw);
                stage.apply(id, &StyleProps::interpolate(&from, &tween.to, eased));
            }
        }
    }

    /// Show every explicit start state without advancing anything.
    pub(crate) fn render_start(&self, stage: &mut Stage) {
        for (ti, tween) in self.tweens.iter().enumerate() {
            let Some(from) = &tween.from else {
                continue;
            };
            for &id in &tween.targets {
                if !self.owned_before(ti, id) {
                    stage.apply(id, from);
                }
            }
        }
    }

    fn owned_before(&self, ti: usize, id: ElementId) -> bool {
        self.tweens[..ti].iter().any(|t| t.targets.contains(&id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
