//! Scrollreel is a headless engine for scroll-synchronized page animation.
//!
//! A page is a vertical stack of sections laid out in document space. As the scroll offset
//! changes, scrollreel drives four kinds of motion over the mounted elements:
//!
//! 1. **Reveals**: one-shot timelines fired when an element crosses a viewport threshold
//!    ([`Reveal`], [`CountUp`])
//! 2. **Parallax**: continuous offsets bound to scroll progress through a region, smoothed
//!    by a lag ([`Parallax`])
//! 3. **Pinned hero**: a wall-clock entrance, then a pinned section whose exit is scrubbed
//!    by scroll ([`HeroController`])
//! 4. **Snapping**: after scroll input, settle into the centre of the pinned range the
//!    position falls in ([`SnapCoordinator`])
//!
//! Everything runs on one thread: the host calls [`ScrollEngine::scroll_to`] on input and
//! [`ScrollEngine::tick`] per frame. The resolved styles of every element are the only
//! output, read through [`Stage`] or a serializable [`PageSnapshot`].
//!
//! Sections never reach the engine directly. They register through an [`AnimationScope`]
//! over the narrow [`AnimationHost`] capability, and everything a scope registered is killed
//! when the scope is dropped.
#![forbid(unsafe_code)]

mod animation;
mod content;
mod foundation;
mod motion;
mod page;
mod scroll;
mod sections;
mod stage;

pub use animation::ease::Ease;
pub use animation::style::{Inset, Lerp, Style, StyleProps};
pub use animation::timeline::{Timeline, Tween, TweenOpts};
pub use content::config::{
    Achievement, AchievementsContent, ExperienceContent, FeatureCard, FooterContent, HeroContent,
    ImageRef, IntroGridContent, Link, MotionSettings, PageMeta, Project, ProjectsContent,
    ServiceItem, ServicesContent, SiteConfig, SkillCategory, SkillsContent, SocialLink, Stat,
};
pub use foundation::core::{Rect, Size, Vec2, Viewport};
pub use foundation::error::{ScrollreelError, ScrollreelResult};
pub use foundation::math::{approx_eq, clamp01, lerp, progress};
pub use motion::barrier::RegistrationBarrier;
pub use motion::counter::CountUp;
pub use motion::hero::{HeroController, HeroLayers, HeroPhase};
pub use motion::parallax::Parallax;
pub use motion::reveal::Reveal;
pub use motion::snap::{PinnedRange, SnapCoordinator};
pub use page::{ElementSnapshot, Page, PageSnapshot};
pub use scroll::engine::{CompleteFn, EngineHandle, PlaybackId, ScrollEngine, TriggerId};
pub use scroll::scope::{AnimationHost, AnimationScope};
pub use scroll::state::ScrollState;
pub use scroll::trigger::{
    Region, Scrub, Threshold, TriggerEnd, TriggerEvent, TriggerSpec, TriggerUpdate, UpdateFn,
};
pub use sections::SectionKind;
pub use stage::layout::{Extent, FlowLayout, Markup, MountedSection, NodeRef, PlacedSection};
pub use stage::{Element, ElementId, Stage};
