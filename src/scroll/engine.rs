use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::animation::style::StyleProps;
use crate::animation::timeline::{Captures, Timeline};
use crate::foundation::core::Viewport;
use crate::foundation::math::{clamp01, lerp, progress, smooth_toward};
use crate::motion::snap::SnapCoordinator;
use crate::scroll::scope::AnimationHost;
use crate::scroll::state::ScrollState;
use crate::scroll::trigger::{Region, TriggerEvent, TriggerSpec, TriggerUpdate};
use crate::stage::{ElementId, Stage};

new_key_type! {
    /// Handle to a registered trigger.
    pub struct TriggerId;
    /// Handle to a wall-clock timeline playback.
    pub struct PlaybackId;
}

/// Called once when a playback runs to its end. Never called for killed playbacks.
pub type CompleteFn = Box<dyn FnOnce()>;

/// Snap moves closer than this many pixels are skipped.
const SNAP_MIN_TRAVEL_PX: f64 = 0.5;

struct LiveTrigger {
    spec: TriggerSpec,
    seq: u64,
    start: f64,
    end: f64,
    region: Region,
    progress: f64,
    fired: bool,
    retired: bool,
    scrub_visual: f64,
    scrub_rendered: Option<f64>,
    scrub_captures: Captures,
    playbacks: SmallVec<[PlaybackId; 1]>,
}

impl LiveTrigger {
    fn render_scrub(&mut self, stage: &mut Stage) {
        let Some(scrub) = &self.spec.scrub else {
            return;
        };
        if self.scrub_rendered == Some(self.scrub_visual) {
            return;
        }
        let time = self.scrub_visual * scrub.timeline.duration();
        scrub.timeline.render(time, &mut self.scrub_captures, stage);
        self.scrub_rendered = Some(self.scrub_visual);
    }
}

struct Playback {
    timeline: Timeline,
    captures: Captures,
    elapsed: f64,
    duration: f64,
    on_complete: Option<CompleteFn>,
}

#[derive(Clone, Copy, Debug)]
struct SnapMotion {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
}

pub(crate) struct EngineInner {
    stage: Stage,
    scroll: ScrollState,
    min_document_height: f64,
    triggers: SlotMap<TriggerId, LiveTrigger>,
    playbacks: SlotMap<PlaybackId, Playback>,
    snap: Option<SnapCoordinator>,
    snap_motion: Option<SnapMotion>,
    snap_pending: bool,
    idle: f64,
    next_seq: u64,
}

fn start_playback(
    playbacks: &mut SlotMap<PlaybackId, Playback>,
    stage: &mut Stage,
    timeline: Timeline,
    on_complete: Option<CompleteFn>,
) -> PlaybackId {
    let mut captures = Captures::default();
    timeline.render(0.0, &mut captures, stage);
    let duration = timeline.duration();
    playbacks.insert(Playback {
        timeline,
        captures,
        elapsed: 0.0,
        duration,
        on_complete,
    })
}

impl EngineInner {
    fn new(viewport: Viewport) -> Self {
        Self {
            stage: Stage::new(),
            scroll: ScrollState::new(viewport),
            min_document_height: 0.0,
            triggers: SlotMap::with_key(),
            playbacks: SlotMap::with_key(),
            snap: None,
            snap_motion: None,
            snap_pending: false,
            idle: 0.0,
            next_seq: 0,
        }
    }

    /// Trigger ids by start offset, registration order on ties.
    fn ordered_triggers(&self) -> Vec<TriggerId> {
        let mut ids: Vec<(f64, u64, TriggerId)> = self
            .triggers
            .iter()
            .map(|(id, t)| (t.start, t.seq, id))
            .collect();
        ids.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        ids.into_iter().map(|(_, _, id)| id).collect()
    }

    fn register(&mut self, spec: TriggerSpec) -> Option<TriggerId> {
        if let Err(err) = spec.validate() {
            tracing::warn!(%err, "trigger rejected");
            return None;
        }
        let Some(el) = self.stage.get(spec.element) else {
            tracing::debug!("trigger element is not mounted; registration skipped");
            return None;
        };
        let viewport = self.scroll.viewport();
        let start = spec.start.resolve(el.bounds, viewport);
        let end = spec.end.resolve(start, el.bounds, viewport);
        if let Some(tl) = &spec.on_enter {
            tl.render_start(&mut self.stage);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.triggers.insert(LiveTrigger {
            spec,
            seq,
            start,
            end,
            region: Region::Before,
            progress: 0.0,
            fired: false,
            retired: false,
            scrub_visual: 0.0,
            scrub_rendered: None,
            scrub_captures: Captures::default(),
            playbacks: SmallVec::new(),
        });
        tracing::trace!(?id, start, end, "trigger registered");
        if let Some(t) = self.triggers.get_mut(id) {
            t.render_scrub(&mut self.stage);
        }
        self.evaluate_one(id);
        Some(id)
    }

    fn evaluate(&mut self, upward: bool) {
        let mut ids = self.ordered_triggers();
        if upward {
            ids.reverse();
        }
        for id in ids {
            self.evaluate_one(id);
        }
    }

    fn evaluate_one(&mut self, id: TriggerId) {
        let offset = self.scroll.offset();
        let Some(t) = self.triggers.get_mut(id) else {
            return;
        };
        if t.retired || !self.stage.contains(t.spec.element) {
            return;
        }
        let region = Region::of(offset, t.start, t.end);
        let p = progress(t.start, t.end, offset);
        let events = t.region.transition(region);
        let moved = p != t.progress || !events.is_empty();
        t.region = region;
        t.progress = p;

        for event in &events {
            match event {
                TriggerEvent::Enter if !t.fired => {
                    t.fired = true;
                    tracing::debug!(?id, "trigger fired");
                    if let Some(tl) = t.spec.on_enter.take() {
                        let pb = start_playback(&mut self.playbacks, &mut self.stage, tl, None);
                        t.playbacks.push(pb);
                    }
                }
                TriggerEvent::LeaveBack => {
                    for (target, props) in &t.spec.on_leave_back {
                        self.stage.apply(*target, props);
                    }
                }
                _ => {}
            }
        }

        if t.spec.pin {
            let shift = (offset - t.start).clamp(0.0, t.end - t.start);
            self.stage.set_pin_shift(t.spec.element, shift);
        }
        if let Some(scrub) = &t.spec.scrub {
            if scrub.lag <= 0.0 {
                t.scrub_visual = p;
            }
            t.render_scrub(&mut self.stage);
        }
        if moved {
            if let Some(f) = t.spec.on_update.as_mut() {
                f(&TriggerUpdate {
                    progress: p,
                    region,
                    events,
                });
            }
        }
        if t.spec.once && t.fired {
            t.retired = true;
        }
    }

    fn set_offset(&mut self, px: f64) -> f64 {
        let before = self.scroll.offset();
        let applied = self.scroll.set_offset(px);
        self.evaluate(applied < before);
        applied
    }

    fn refresh(&mut self) {
        let height = self.stage.document_height().max(self.min_document_height);
        self.scroll.set_document_height(height);
        let viewport = self.scroll.viewport();
        for t in self.triggers.values_mut() {
            let Some(el) = self.stage.get(t.spec.element) else {
                continue;
            };
            t.start = t.spec.start.resolve(el.bounds, viewport);
            t.end = t.spec.end.resolve(t.start, el.bounds, viewport);
        }
        self.evaluate(false);
    }

    fn tick(&mut self, dt: f64) -> Vec<CompleteFn> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.step_snap(dt);

        let mut done: Vec<PlaybackId> = Vec::new();
        for (id, pb) in self.playbacks.iter_mut() {
            pb.elapsed += dt;
            pb.timeline.render(pb.elapsed, &mut pb.captures, &mut self.stage);
            if pb.elapsed >= pb.duration {
                done.push(id);
            }
        }
        let mut completions = Vec::new();
        for id in done {
            if let Some(f) = self.remove_playback(id).and_then(|pb| pb.on_complete) {
                completions.push(f);
            }
        }

        for t in self.triggers.values_mut() {
            if t.retired {
                continue;
            }
            let Some(scrub) = &t.spec.scrub else {
                continue;
            };
            t.scrub_visual = smooth_toward(t.scrub_visual, t.progress, scrub.lag, dt);
            t.render_scrub(&mut self.stage);
        }
        completions
    }

    fn step_snap(&mut self, dt: f64) {
        if let Some(mut m) = self.snap_motion.take() {
            m.elapsed += dt;
            let t = if m.duration > 0.0 {
                clamp01(m.elapsed / m.duration)
            } else {
                1.0
            };
            let ease = self.snap.as_ref().map(|s| s.ease()).unwrap_or_default();
            self.set_offset(lerp(m.from, m.to, ease.apply(t)));
            if t < 1.0 {
                self.snap_motion = Some(m);
            } else {
                tracing::trace!(offset = m.to, "snap settled");
            }
            return;
        }
        let Some(snap) = &self.snap else {
            return;
        };
        if !self.snap_pending {
            return;
        }
        self.idle += dt;
        if self.idle < snap.delay() {
            return;
        }
        self.snap_pending = false;
        let value = self.scroll.normalized();
        let target = snap.snap_to(value);
        let from = self.scroll.offset();
        let to = self.scroll.to_pixels(target);
        if (to - from).abs() < SNAP_MIN_TRAVEL_PX {
            return;
        }
        let duration = snap.duration_for(target - value);
        tracing::debug!(from, to, duration, "snap started");
        self.snap_motion = Some(SnapMotion {
            from,
            to,
            duration,
            elapsed: 0.0,
        });
    }

    fn remove_playback(&mut self, id: PlaybackId) -> Option<Playback> {
        let pb = self.playbacks.remove(id)?;
        for t in self.triggers.values_mut() {
            t.playbacks.retain(|p| *p != id);
        }
        Some(pb)
    }

    fn kill_trigger(&mut self, id: TriggerId) {
        let Some(t) = self.triggers.remove(id) else {
            return;
        };
        for pb in t.playbacks {
            self.playbacks.remove(pb);
        }
        if t.spec.pin {
            self.stage.set_pin_shift(t.spec.element, 0.0);
        }
        tracing::trace!(?id, "trigger killed");
    }

    fn pinned_spans(&self) -> Vec<(f64, f64)> {
        self.ordered_triggers()
            .into_iter()
            .filter_map(|id| self.triggers.get(id))
            .filter(|t| t.spec.pin && self.stage.contains(t.spec.element))
            .map(|t| (t.start, t.end))
            .collect()
    }
}

/// The scroll-driven animation engine: owns the stage, the scroll position, every trigger
/// and every running playback.
///
/// Single-threaded. Sections talk to it through an [`EngineHandle`]; the host drives it with
/// [`ScrollEngine::scroll_to`] and [`ScrollEngine::tick`].
pub struct ScrollEngine {
    inner: Rc<RefCell<EngineInner>>,
}

impl std::fmt::Debug for ScrollEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollEngine")
            .field("scroll", &inner.scroll)
            .field("elements", &inner.stage.len())
            .field("triggers", &inner.triggers.len())
            .field("playbacks", &inner.playbacks.len())
            .field("snap", &inner.snap.is_some())
            .finish()
    }
}

impl ScrollEngine {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EngineInner::new(viewport))),
        }
    }

    /// A weak capability handle for registering animations.
    pub fn handle(&self) -> EngineHandle {
        EngineHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn stage(&self) -> Ref<'_, Stage> {
        Ref::map(self.inner.borrow(), |i| &i.stage)
    }

    pub fn with_stage<R>(&self, f: impl FnOnce(&mut Stage) -> R) -> R {
        f(&mut self.inner.borrow_mut().stage)
    }

    pub fn scroll(&self) -> ScrollState {
        self.inner.borrow().scroll
    }

    /// Lower bound for the document height (space reserved after the last element).
    pub fn set_min_document_height(&self, px: f64) {
        self.inner.borrow_mut().min_document_height = px.max(0.0);
    }

    /// Re-measure the document and every trigger, then re-evaluate at the current offset.
    #[tracing::instrument(skip(self))]
    pub fn refresh(&self) {
        self.inner.borrow_mut().refresh();
    }

    /// User scroll input. Cancels a running snap. Returns the clamped offset.
    pub fn scroll_to(&self, px: f64) -> f64 {
        let mut inner = self.inner.borrow_mut();
        inner.snap_motion = None;
        inner.snap_pending = true;
        inner.idle = 0.0;
        inner.set_offset(px)
    }

    /// Advance clocks by `dt` seconds: snapping, playbacks and scrub smoothing.
    pub fn tick(&self, dt: f64) {
        let completions = self.inner.borrow_mut().tick(dt);
        for f in completions {
            f();
        }
    }

    /// Tick for `seconds` in frames of `frame` seconds.
    pub fn advance(&self, seconds: f64, frame: f64) {
        let frame = if frame > 0.0 { frame } else { 1.0 / 60.0 };
        let mut left = seconds;
        while left > 0.0 {
            let dt = left.min(frame);
            self.tick(dt);
            left -= dt;
        }
    }

    /// Pixel spans of every pinned trigger, by start.
    pub fn pinned_spans(&self) -> Vec<(f64, f64)> {
        self.inner.borrow().pinned_spans()
    }

    #[tracing::instrument(skip_all, fields(ranges = coordinator.ranges().len()))]
    pub fn install_snap(&self, coordinator: SnapCoordinator) {
        tracing::debug!("snap installed");
        self.inner.borrow_mut().snap = Some(coordinator);
    }

    /// Uninstall the coordinator and stop any snap in flight.
    pub fn clear_snap(&self) -> Option<SnapCoordinator> {
        let mut inner = self.inner.borrow_mut();
        inner.snap_motion = None;
        inner.snap_pending = false;
        inner.snap.take()
    }

    pub fn snap(&self) -> Option<SnapCoordinator> {
        self.inner.borrow().snap.clone()
    }

    pub fn is_snapping(&self) -> bool {
        self.inner.borrow().snap_motion.is_some()
    }

    pub fn trigger_count(&self) -> usize {
        self.inner.borrow().triggers.len()
    }

    pub fn playback_count(&self) -> usize {
        self.inner.borrow().playbacks.len()
    }

    /// Raw progress of a trigger, `None` once it is gone.
    pub fn trigger_progress(&self, id: TriggerId) -> Option<f64> {
        self.inner.borrow().triggers.get(id).map(|t| t.progress)
    }
}

/// Weak handle to a [`ScrollEngine`]. Every call is a no-op once the engine is dropped.
#[derive(Clone, Debug)]
pub struct EngineHandle {
    inner: Weak<RefCell<EngineInner>>,
}

impl EngineHandle {
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    fn with<R>(&self, f: impl FnOnce(&mut EngineInner) -> R) -> Option<R> {
        let inner = self.inner.upgrade()?;
        let Ok(mut guard) = inner.try_borrow_mut() else {
            tracing::warn!("engine is busy; call dropped");
            return None;
        };
        Some(f(&mut *guard))
    }
}

impl AnimationHost for EngineHandle {
    fn register_trigger(&self, spec: TriggerSpec) -> Option<TriggerId> {
        self.with(|e| e.register(spec)).flatten()
    }

    fn play(&self, timeline: Timeline, on_complete: Option<CompleteFn>) -> Option<PlaybackId> {
        self.with(|e| {
            if let Err(err) = timeline.validate() {
                tracing::warn!(%err, "timeline rejected");
                return None;
            }
            Some(start_playback(&mut e.playbacks, &mut e.stage, timeline, on_complete))
        })
        .flatten()
    }

    fn set(&self, target: ElementId, props: StyleProps) -> bool {
        self.with(|e| e.stage.apply(target, &props)).unwrap_or(false)
    }

    fn kill_trigger(&self, id: TriggerId) {
        self.with(|e| e.kill_trigger(id));
    }

    fn kill_playback(&self, id: PlaybackId) {
        self.with(|e| e.remove_playback(id));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/engine.rs"]
mod tests;
