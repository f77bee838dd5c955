//! A whole portfolio page: every section mounted, animated and snapped.

use crate::animation::style::Style;
use crate::content::config::{MotionSettings, PageMeta, SiteConfig};
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::ScrollreelResult;
use crate::motion::barrier::RegistrationBarrier;
use crate::motion::hero::{HeroController, HeroPhase};
use crate::motion::snap::{PinnedRange, SnapCoordinator};
use crate::scroll::engine::ScrollEngine;
use crate::scroll::scope::AnimationScope;
use crate::sections::{self, SectionContext, SectionKind};
use crate::stage::layout::{FlowLayout, MountedSection};

struct LiveSection {
    kind: SectionKind,
    mounted: MountedSection,
    scope: AnimationScope,
}

/// A mounted page.
///
/// Mounting is two-phase. Phase one lays out every section with content and lets each one
/// register its animations through its own [`AnimationScope`]; every section, rendered or
/// not, then arrives at a [`RegistrationBarrier`]. Phase two runs once the barrier is
/// complete and installs the [`SnapCoordinator`] over the pinned ranges.
pub struct Page {
    sections: Vec<LiveSection>,
    hero: Option<HeroController>,
    engine: ScrollEngine,
    settings: MotionSettings,
    meta: PageMeta,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("sections", &self.rendered())
            .field("hero", &self.hero_phase())
            .field("engine", &self.engine)
            .finish()
    }
}

impl Page {
    #[tracing::instrument(skip_all, fields(width = viewport.width, height = viewport.height))]
    pub fn mount(config: &SiteConfig, viewport: Viewport, settings: MotionSettings) -> ScrollreelResult<Self> {
        settings.validate()?;
        let engine = ScrollEngine::new(viewport);
        let ctx = SectionContext { viewport, settings };
        let layout = FlowLayout::new(viewport);
        let all: Vec<_> = SectionKind::ALL
            .into_iter()
            .map(|kind| sections::build(kind, config))
            .collect();

        let mut top = 0.0;
        let mut placed = Vec::with_capacity(all.len());
        for section in &all {
            let mounted = match section.markup(&ctx) {
                Some(markup) => {
                    let mounted = engine.with_stage(|stage| layout.mount(stage, &markup, top))?;
                    top = mounted.next_top;
                    Some(mounted)
                }
                None => None,
            };
            placed.push(mounted);
        }
        engine.set_min_document_height(top);
        engine.refresh();

        let mut barrier = RegistrationBarrier::new(SectionKind::ALL.map(SectionKind::key));
        let mut live = Vec::new();
        let mut hero = None;
        for (section, mounted) in all.iter().zip(placed) {
            let kind = section.kind();
            match mounted {
                Some(mounted) => {
                    let mut scope = AnimationScope::new(engine.handle(), kind.key());
                    if let Some(controller) = section.animate(&mounted, &ctx, &mut scope) {
                        hero = Some(controller);
                    }
                    tracing::debug!(
                        section = kind.key(),
                        triggers = scope.trigger_ids().len(),
                        "section mounted"
                    );
                    live.push(LiveSection {
                        kind,
                        mounted,
                        scope,
                    });
                }
                None => tracing::debug!(section = kind.key(), "no content; section not rendered"),
            }
            barrier.arrive(kind.key());
        }

        let page = Self {
            sections: live,
            hero,
            engine,
            settings,
            meta: config.meta(),
        };
        if barrier.is_complete() {
            page.install_snap()?;
        } else {
            tracing::warn!(missing = ?barrier.remaining(), "registration incomplete; snapping disabled");
        }
        Ok(page)
    }

    fn install_snap(&self) -> ScrollreelResult<()> {
        let spans = self.engine.pinned_spans();
        let max = self.engine.scroll().max_scroll();
        let s = &self.settings;
        match SnapCoordinator::from_spans(&spans, max, s.snap_tolerance)? {
            Some(coordinator) => {
                let coordinator = coordinator
                    .with_durations(s.snap_min_duration, s.snap_max_duration)?
                    .with_delay(s.snap_delay);
                self.engine.install_snap(coordinator);
            }
            None => tracing::debug!(pinned = spans.len(), max, "nothing to snap to"),
        }
        Ok(())
    }

    pub fn engine(&self) -> &ScrollEngine {
        &self.engine
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Sections currently mounted, in document order.
    pub fn rendered(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    pub fn hero_phase(&self) -> HeroPhase {
        self.hero.as_ref().map(HeroController::phase).unwrap_or_default()
    }

    /// User scroll to `px`. Returns the applied (clamped) offset.
    pub fn scroll_to(&self, px: f64) -> f64 {
        self.engine.scroll_to(px)
    }

    pub fn tick(&self, dt: f64) {
        self.engine.tick(dt);
    }

    /// Run frames of `frame` seconds for `seconds`.
    pub fn advance(&self, seconds: f64, frame: f64) {
        self.engine.advance(seconds, frame);
    }

    /// Where snapping would send the normalized position `value`; `None` without snapping.
    pub fn snap_target(&self, value: f64) -> Option<f64> {
        self.engine.snap().map(|c| c.snap_to(value))
    }

    pub fn style(&self, key: &str) -> Option<Style> {
        let stage = self.engine.stage();
        stage.find(key).and_then(|id| stage.style(id))
    }

    /// Tear down one section: its animations stop and its elements leave the document.
    /// Returns `false` when the section is not mounted.
    pub fn unmount_section(&mut self, kind: SectionKind) -> bool {
        let Some(at) = self.sections.iter().position(|s| s.kind == kind) else {
            return false;
        };
        let LiveSection {
            mounted, mut scope, ..
        } = self.sections.remove(at);
        scope.release();
        let removed = self.engine.with_stage(|stage| stage.unmount_tree(&mounted.key));
        if kind == SectionKind::Hero {
            if let Some(hero) = self.hero.take() {
                hero.unmount();
            }
            self.engine.clear_snap();
        }
        tracing::debug!(section = kind.key(), elements = removed, "section unmounted");
        true
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let scroll = self.engine.scroll();
        let stage = self.engine.stage();
        let elements = stage
            .iter()
            .filter_map(|(id, el)| {
                Some(ElementSnapshot {
                    key: el.key.clone(),
                    rect: stage.visual_rect(id)?,
                    style: el.style,
                })
            })
            .collect();
        PageSnapshot {
            offset: scroll.offset(),
            max_scroll: scroll.max_scroll(),
            normalized: scroll.normalized(),
            viewport: scroll.viewport(),
            hero_phase: self.hero_phase(),
            sections: self.rendered(),
            pinned_ranges: self
                .engine
                .snap()
                .map(|c| c.ranges().to_vec())
                .unwrap_or_default(),
            elements,
        }
    }
}

/// Serializable view of a page at one moment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    pub offset: f64,
    pub max_scroll: f64,
    pub normalized: f64,
    pub viewport: Viewport,
    pub hero_phase: HeroPhase,
    pub sections: Vec<SectionKind>,
    pub pinned_ranges: Vec<PinnedRange>,
    pub elements: Vec<ElementSnapshot>,
}

impl PageSnapshot {
    pub fn element(&self, key: &str) -> Option<&ElementSnapshot> {
        self.elements.iter().find(|e| e.key == key)
    }
}

/// One element as drawn: its visual box (translation and pinning applied) and style.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementSnapshot {
    pub key: String,
    pub rect: Rect,
    pub style: Style,
}
