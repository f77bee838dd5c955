use std::cell::Cell;
use std::rc::Rc;

use crate::animation::ease::Ease;
use crate::animation::style::StyleProps;
use crate::animation::timeline::{Timeline, TweenOpts};
use crate::content::config::MotionSettings;
use crate::foundation::core::Viewport;
use crate::scroll::engine::{PlaybackId, TriggerId};
use crate::scroll::scope::{AnimationHost, AnimationScope};
use crate::scroll::trigger::{Region, Threshold, TriggerEnd, TriggerSpec};
use crate::stage::ElementId;

/// Lifecycle of the pinned hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum HeroPhase {
    #[default]
    Unmounted,
    /// Entrance timeline running.
    Entering,
    /// Pinned, exit not started.
    PinnedIdle,
    /// Pin progress past the exit start; layers follow the scrubbed exit.
    Exiting,
    /// Scrolled past the pin distance; the section flows away.
    Unpinned,
}

/// Mounted hero layers. Any layer may be absent.
#[derive(Clone, Debug, Default)]
pub struct HeroLayers {
    pub section: Option<ElementId>,
    pub text: Option<ElementId>,
    pub image: Option<ElementId>,
    pub caption: Option<ElementId>,
    pub caption_items: Vec<ElementId>,
    pub nav: Option<ElementId>,
}

impl HeroLayers {
    /// Layers moved by the exit and reset on scroll-back.
    fn exit_layers(&self) -> impl Iterator<Item = ElementId> + '_ {
        [self.text, self.image, self.caption].into_iter().flatten()
    }
}

/// Plays the hero entrance, pins the section and scrubs its exit.
#[derive(Debug)]
pub struct HeroController {
    phase: Rc<Cell<HeroPhase>>,
    pin: Option<TriggerId>,
    entrance: Option<PlaybackId>,
}

impl HeroController {
    /// Wall-clock entrance: background text, portrait, staggered caption items and nav.
    pub fn entrance_timeline(layers: &HeroLayers) -> Timeline {
        let opts = |d: f64| TweenOpts::new(d).ease(Ease::OutCubic);
        Timeline::new()
            .from_to(
                layers.text,
                StyleProps::new().opacity(0.0).y(40.0).scale(0.98),
                StyleProps::new().opacity(1.0).y(0.0).scale(1.0),
                opts(0.8),
                0.0,
            )
            .from_to(
                layers.image,
                StyleProps::new().opacity(0.0).x(60.0).scale(1.03),
                StyleProps::new().opacity(1.0).x(0.0).scale(1.0),
                opts(0.9),
                0.1,
            )
            .from_to(
                layers.caption_items.iter().copied(),
                StyleProps::new().opacity(0.0).y(30.0),
                StyleProps::new().opacity(1.0).y(0.0),
                opts(0.6).stagger(0.08),
                0.3,
            )
            .from_to(
                layers.nav,
                StyleProps::new().opacity(0.0).y(-20.0),
                StyleProps::new().opacity(1.0).y(0.0),
                opts(0.5),
                0.0,
            )
    }

    /// Scrubbed exit over a unit-length timeline: nothing moves before `exit_start`, then text
    /// and image slide left, the caption right, all fading out.
    pub fn exit_timeline(layers: &HeroLayers, viewport: Viewport, exit_start: f64) -> Timeline {
        let opts = TweenOpts::new(1.0 - exit_start).ease(Ease::InCubic);
        Timeline::new()
            .from_to(
                layers.text,
                StyleProps::new().x(0.0).opacity(1.0),
                StyleProps::new().x(viewport.vw(-18.0)).opacity(0.0),
                opts,
                exit_start,
            )
            .from_to(
                layers.image,
                StyleProps::new().x(0.0).scale(1.0).opacity(1.0),
                StyleProps::new().x(viewport.vw(-22.0)).scale(1.06).opacity(0.0),
                opts,
                exit_start,
            )
            .from_to(
                layers.caption,
                StyleProps::new().x(0.0).opacity(1.0),
                StyleProps::new().x(viewport.vw(10.0)).opacity(0.0),
                opts,
                exit_start,
            )
    }

    /// Register the pin and the exit scrub, then start the entrance.
    pub fn mount<H: AnimationHost>(
        layers: &HeroLayers,
        viewport: Viewport,
        settings: &MotionSettings,
        scope: &mut AnimationScope<H>,
    ) -> Self {
        let phase = Rc::new(Cell::new(HeroPhase::Entering));
        let entering = Rc::new(Cell::new(true));

        let pin = layers.section.and_then(|section| {
            let exit_start = settings.exit_start;
            let observed = phase.clone();
            let still_entering = entering.clone();
            let spec = TriggerSpec::new(section)
                .start(Threshold::TOP_TOP)
                .end(TriggerEnd::Distance(settings.pin_distance * 100.0))
                .pin()
                .scrub(
                    Self::exit_timeline(layers, viewport, exit_start),
                    settings.hero_scrub_lag,
                )
                .on_leave_back(layers.exit_layers(), StyleProps::new().opacity(1.0).x(0.0))
                .on_leave_back(layers.image, StyleProps::new().scale(1.0))
                .on_update(move |u| {
                    let next = if u.region == Region::After {
                        HeroPhase::Unpinned
                    } else if u.progress >= exit_start {
                        HeroPhase::Exiting
                    } else if still_entering.get() {
                        HeroPhase::Entering
                    } else {
                        HeroPhase::PinnedIdle
                    };
                    if observed.replace(next) != next {
                        tracing::debug!(phase = ?next, "hero phase");
                    }
                });
            scope.trigger(spec)
        });

        let done_phase = phase.clone();
        let done_entering = entering.clone();
        let entrance = scope.play(
            Self::entrance_timeline(layers),
            Some(Box::new(move || {
                done_entering.set(false);
                if done_phase.get() == HeroPhase::Entering {
                    done_phase.set(HeroPhase::PinnedIdle);
                }
            })),
        );
        if entrance.is_none() {
            entering.set(false);
            if phase.get() == HeroPhase::Entering {
                phase.set(HeroPhase::PinnedIdle);
            }
        }

        Self {
            phase,
            pin,
            entrance,
        }
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase.get()
    }

    pub fn pin_trigger(&self) -> Option<TriggerId> {
        self.pin
    }

    pub fn entrance(&self) -> Option<PlaybackId> {
        self.entrance
    }

    /// Mark the hero as gone. Its registrations die with the owning scope.
    pub fn unmount(&self) {
        self.phase.set(HeroPhase::Unmounted);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/hero.rs"]
mod tests;
