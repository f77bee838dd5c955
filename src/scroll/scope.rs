use crate::animation::style::StyleProps;
use crate::animation::timeline::Timeline;
use crate::scroll::engine::{CompleteFn, EngineHandle, PlaybackId, TriggerId};
use crate::scroll::trigger::TriggerSpec;
use crate::stage::ElementId;

/// The narrow capability sections use to animate.
///
/// Every call is best-effort: `None`/`false` means the registration was skipped (target not
/// mounted, engine gone), never an error.
pub trait AnimationHost {
    fn register_trigger(&self, spec: TriggerSpec) -> Option<TriggerId>;
    fn play(&self, timeline: Timeline, on_complete: Option<CompleteFn>) -> Option<PlaybackId>;
    fn set(&self, target: ElementId, props: StyleProps) -> bool;
    fn kill_trigger(&self, id: TriggerId);
    fn kill_playback(&self, id: PlaybackId);
}

/// Everything one section registered. Dropping the scope kills all of it.
pub struct AnimationScope<H: AnimationHost = EngineHandle> {
    host: H,
    name: String,
    triggers: Vec<TriggerId>,
    playbacks: Vec<PlaybackId>,
}

impl<H: AnimationHost> std::fmt::Debug for AnimationScope<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationScope")
            .field("name", &self.name)
            .field("triggers", &self.triggers.len())
            .field("playbacks", &self.playbacks.len())
            .finish()
    }
}

impl<H: AnimationHost> AnimationScope<H> {
    pub fn new(host: H, name: impl Into<String>) -> Self {
        Self {
            host,
            name: name.into(),
            triggers: Vec::new(),
            playbacks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn trigger(&mut self, spec: TriggerSpec) -> Option<TriggerId> {
        let id = self.host.register_trigger(spec)?;
        self.triggers.push(id);
        Some(id)
    }

    pub fn play(&mut self, timeline: Timeline, on_complete: Option<CompleteFn>) -> Option<PlaybackId> {
        let id = self.host.play(timeline, on_complete)?;
        self.playbacks.push(id);
        Some(id)
    }

    pub fn set(&self, target: ElementId, props: StyleProps) -> bool {
        self.host.set(target, props)
    }

    pub fn trigger_ids(&self) -> &[TriggerId] {
        &self.triggers
    }

    pub fn playback_ids(&self) -> &[PlaybackId] {
        &self.playbacks
    }

    /// Kill every registration made through this scope.
    pub fn release(&mut self) {
        if self.triggers.is_empty() && self.playbacks.is_empty() {
            return;
        }
        tracing::debug!(
            scope = %self.name,
            triggers = self.triggers.len(),
            playbacks = self.playbacks.len(),
            "releasing animation scope"
        );
        for id in self.triggers.drain(..) {
            self.host.kill_trigger(id);
        }
        for id in self.playbacks.drain(..) {
            self.host.kill_playback(id);
        }
    }
}

impl<H: AnimationHost> Drop for AnimationScope<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/scope.rs"]
mod tests;
