use smallvec::SmallVec;

use crate::animation::style::StyleProps;
use crate::animation::timeline::Timeline;
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::{ScrollreelError, ScrollreelResult};
use crate::stage::ElementId;

/// Where a trigger edge sits: a point on the element meeting a line across the viewport.
///
/// `"top 85%"` is `element: 0.0, viewport: 0.85`: the element's top edge reaching 85 % of
/// the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Threshold {
    /// Point on the element, as a fraction of its height from the top.
    pub element: f64,
    /// Line across the viewport, as a fraction of its height from the top.
    pub viewport: f64,
}

impl Threshold {
    /// Element top meets viewport bottom.
    pub const TOP_BOTTOM: Threshold = Threshold {
        element: 0.0,
        viewport: 1.0,
    };
    /// Element bottom meets viewport top.
    pub const BOTTOM_TOP: Threshold = Threshold {
        element: 1.0,
        viewport: 0.0,
    };
    /// Element top meets viewport top.
    pub const TOP_TOP: Threshold = Threshold {
        element: 0.0,
        viewport: 0.0,
    };

    pub fn new(element: f64, viewport: f64) -> ScrollreelResult<Self> {
        for (name, v) in [("element", element), ("viewport", viewport)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ScrollreelError::validation(format!(
                    "threshold {name} fraction must be in [0, 1], got {v}"
                )));
            }
        }
        Ok(Self { element, viewport })
    }

    /// Element top at `percent` of the viewport height (`"top <percent>%"`).
    pub fn top(percent: f64) -> Self {
        Self {
            element: 0.0,
            viewport: (percent / 100.0).clamp(0.0, 1.0),
        }
    }

    /// Scroll offset at which this threshold is met for an element laid out at `bounds`.
    pub fn resolve(&self, bounds: Rect, viewport: Viewport) -> f64 {
        bounds.y0 + self.element * bounds.height() - self.viewport * viewport.height
    }
}

fn edge_fraction(token: &str) -> Option<f64> {
    match token {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => token
            .strip_suffix('%')
            .and_then(|v| v.parse::<f64>().ok())
            .map(|v| v / 100.0),
    }
}

impl std::str::FromStr for Threshold {
    type Err = ScrollreelError;

    /// Parse `"<element edge> <viewport edge>"`, each `top`, `center`, `bottom` or `N%`.
    fn from_str(s: &str) -> ScrollreelResult<Self> {
        let bad = || ScrollreelError::validation(format!("invalid threshold '{s}'"));
        let mut parts = s.split_whitespace();
        let (Some(el), Some(vp), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(bad());
        };
        let el = edge_fraction(el).ok_or_else(bad)?;
        let vp = edge_fraction(vp).ok_or_else(bad)?;
        Self::new(el, vp)
    }
}

/// Where a trigger stops.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TriggerEnd {
    At(Threshold),
    /// A scroll distance after the start, in percent of the viewport height (`"+=130%"`).
    Distance(f64),
}

impl Default for TriggerEnd {
    fn default() -> Self {
        Self::At(Threshold::BOTTOM_TOP)
    }
}

impl TriggerEnd {
    /// End offset for a trigger starting at `start`. Never before `start`.
    pub fn resolve(&self, start: f64, bounds: Rect, viewport: Viewport) -> f64 {
        let end = match self {
            Self::At(t) => t.resolve(bounds, viewport),
            Self::Distance(pct) => start + viewport.vh(*pct),
        };
        end.max(start)
    }
}

impl std::str::FromStr for TriggerEnd {
    type Err = ScrollreelError;

    fn from_str(s: &str) -> ScrollreelResult<Self> {
        let Some(rest) = s.trim().strip_prefix("+=") else {
            return s.parse().map(Self::At);
        };
        let pct = rest
            .strip_suffix('%')
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| ScrollreelError::validation(format!("invalid trigger end '{s}'")))?;
        Ok(Self::Distance(pct))
    }
}

/// Crossing notifications, named after the direction of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TriggerEvent {
    /// Scrolling down past the start.
    Enter,
    /// Scrolling down past the end.
    Leave,
    /// Scrolling up past the end.
    EnterBack,
    /// Scrolling up past the start.
    LeaveBack,
}

/// Scroll position relative to a trigger's `[start, end]` span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Region {
    /// At or above the start.
    #[default]
    Before,
    Active,
    /// At or below the end.
    After,
}

impl Region {
    pub fn of(offset: f64, start: f64, end: f64) -> Self {
        if offset <= start {
            Self::Before
        } else if offset < end {
            Self::Active
        } else {
            Self::After
        }
    }

    /// Events crossed when moving from `self` to `next`, in travel order.
    pub fn transition(self, next: Region) -> SmallVec<[TriggerEvent; 2]> {
        use Region::*;
        use TriggerEvent::*;
        match (self, next) {
            (Before, Active) => SmallVec::from_slice(&[Enter]),
            (Before, After) => SmallVec::from_slice(&[Enter, Leave]),
            (Active, After) => SmallVec::from_slice(&[Leave]),
            (After, Active) => SmallVec::from_slice(&[EnterBack]),
            (After, Before) => SmallVec::from_slice(&[EnterBack, LeaveBack]),
            (Active, Before) => SmallVec::from_slice(&[LeaveBack]),
            _ => SmallVec::new(),
        }
    }
}

/// A timeline driven by trigger progress instead of the clock.
#[derive(Clone, Debug)]
pub struct Scrub {
    pub timeline: Timeline,
    /// Seconds the rendered progress trails the raw scroll progress (0 = locked).
    pub lag: f64,
}

/// What a trigger observer sees after each evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerUpdate {
    /// Raw progress through `[start, end]`, clamped to `[0, 1]`.
    pub progress: f64,
    pub region: Region,
    /// Crossings since the previous evaluation.
    pub events: SmallVec<[TriggerEvent; 2]>,
}

/// Observer callback. Runs while the engine is busy and must not call back into it.
pub type UpdateFn = Box<dyn FnMut(&TriggerUpdate)>;

/// Everything a trigger does, fixed at registration.
pub struct TriggerSpec {
    pub element: ElementId,
    pub start: Threshold,
    pub end: TriggerEnd,
    /// Retire the trigger after its first entry.
    pub once: bool,
    /// Hold the element in place while the trigger is active.
    pub pin: bool,
    /// Wall-clock timeline played on the first entry.
    pub on_enter: Option<Timeline>,
    pub scrub: Option<Scrub>,
    /// Styles forced when scrolling back above the start.
    pub on_leave_back: Vec<(ElementId, StyleProps)>,
    pub on_update: Option<UpdateFn>,
}

impl std::fmt::Debug for TriggerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerSpec")
            .field("element", &self.element)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("once", &self.once)
            .field("pin", &self.pin)
            .field("on_enter", &self.on_enter.is_some())
            .field("scrub", &self.scrub.as_ref().map(|s| s.lag))
            .field("on_leave_back", &self.on_leave_back.len())
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

impl TriggerSpec {
    /// A trigger spanning "top bottom" to "bottom top" that does nothing yet.
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            start: Threshold::TOP_BOTTOM,
            end: TriggerEnd::default(),
            once: false,
            pin: false,
            on_enter: None,
            scrub: None,
            on_leave_back: Vec::new(),
            on_update: None,
        }
    }

    pub fn start(mut self, start: Threshold) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: TriggerEnd) -> Self {
        self.end = end;
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    pub fn pin(mut self) -> Self {
        self.pin = true;
        self
    }

    pub fn on_enter(mut self, timeline: Timeline) -> Self {
        self.on_enter = Some(timeline);
        self
    }

    pub fn scrub(mut self, timeline: Timeline, lag: f64) -> Self {
        self.scrub = Some(Scrub { timeline, lag });
        self
    }

    pub fn on_leave_back(mut self, targets: impl IntoIterator<Item = ElementId>, props: StyleProps) -> Self {
        self.on_leave_back.extend(targets.into_iter().map(|id| (id, props)));
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&TriggerUpdate) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn validate(&self) -> ScrollreelResult<()> {
        if let Some(tl) = &self.on_enter {
            tl.validate()?;
        }
        if let Some(s) = &self.scrub {
            s.timeline.validate()?;
            if !s.lag.is_finite() || s.lag < 0.0 {
                return Err(ScrollreelError::validation(format!(
                    "scrub lag must be non-negative, got {}",
                    s.lag
                )));
            }
        }
        if let TriggerEnd::Distance(d) = self.end {
            if !d.is_finite() || d < 0.0 {
                return Err(ScrollreelError::validation(format!(
                    "trigger distance must be non-negative, got {d}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
