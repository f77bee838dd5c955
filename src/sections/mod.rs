//! The page sections: what each renders for its content and how it animates.

pub(crate) mod about;
pub(crate) mod achievements;
pub(crate) mod contact;
pub(crate) mod experience;
pub(crate) mod hero;
pub(crate) mod projects;
pub(crate) mod services;
pub(crate) mod skills;

use crate::animation::ease::Ease;
use crate::animation::style::StyleProps;
use crate::animation::timeline::TweenOpts;
use crate::content::config::{MotionSettings, SiteConfig};
use crate::foundation::core::Viewport;
use crate::foundation::error::ScrollreelError;
use crate::motion::hero::HeroController;
use crate::motion::reveal::Reveal;
use crate::scroll::scope::AnimationScope;
use crate::scroll::trigger::Threshold;
use crate::stage::layout::{Extent, Markup, MountedSection};

/// Page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Services,
    Experience,
    Projects,
    Skills,
    Achievements,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Achievements,
        SectionKind::Contact,
    ];

    /// Root element key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    /// Whether `config` has anything for this section to show.
    pub fn has_content(self, config: &SiteConfig) -> bool {
        match self {
            Self::Hero => config.hero.has_content(),
            Self::About => config.intro_grid.has_content(),
            Self::Services => config.services.has_content(),
            Self::Experience => config.why_choose_me.has_content(),
            Self::Projects => config.featured_projects.has_content(),
            Self::Skills => config.testimonials.has_content(),
            Self::Achievements => config.faq.has_content(),
            Self::Contact => config.footer.has_content(),
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.key())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = ScrollreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| ScrollreelError::validation(format!("unknown section '{s}'")))
    }
}

/// Shared inputs for rendering and animating sections.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SectionContext {
    pub viewport: Viewport,
    pub settings: MotionSettings,
}

impl SectionContext {
    /// The configured default reveal start.
    pub fn reveal_start(&self) -> Threshold {
        Threshold::top(self.settings.reveal_start * 100.0)
    }
}

/// One renderable page section.
pub(crate) trait Section {
    fn kind(&self) -> SectionKind;

    /// Element tree to mount, `None` when the content is empty.
    fn markup(&self, ctx: &SectionContext) -> Option<Markup>;

    /// Register animations for the mounted tree. Only the hero hands back a controller.
    fn animate(
        &self,
        mounted: &MountedSection,
        ctx: &SectionContext,
        scope: &mut AnimationScope,
    ) -> Option<HeroController>;
}

/// The section implementation for `kind`.
pub(crate) fn build(kind: SectionKind, config: &SiteConfig) -> Box<dyn Section + '_> {
    match kind {
        SectionKind::Hero => Box::new(hero::Hero(&config.hero)),
        SectionKind::About => Box::new(about::About(&config.intro_grid)),
        SectionKind::Services => Box::new(services::Services(&config.services)),
        SectionKind::Experience => Box::new(experience::Experience(&config.why_choose_me)),
        SectionKind::Projects => Box::new(projects::Projects(&config.featured_projects)),
        SectionKind::Skills => Box::new(skills::Skills(&config.testimonials)),
        SectionKind::Achievements => Box::new(achievements::Achievements(&config.faq)),
        SectionKind::Contact => Box::new(contact::Contact(&config.footer)),
    }
}

/// Standard section box: generous vertical padding, blocks spaced apart.
pub(crate) fn section_markup(kind: SectionKind) -> Markup {
    Markup::new(kind.key()).padding(120.0).gap(48.0)
}

/// Heading block, present when `shown`.
pub(crate) fn heading(m: &mut Markup, shown: bool) {
    if shown {
        m.block("heading", Extent::Px(160.0));
    }
}

/// Heading slide-up shared by most sections.
pub(crate) fn reveal_heading(mounted: &MountedSection, ctx: &SectionContext, scope: &mut AnimationScope) {
    Reveal::new(mounted.find("heading"))
        .start(ctx.reveal_start())
        .from(StyleProps::new().y(60.0).opacity(0.0))
        .opts(TweenOpts::new(1.0).ease(Ease::OutQuart))
        .register(scope);
}

/// Staggered card entrance triggered by their container.
pub(crate) fn reveal_items(
    mounted: &MountedSection,
    container: &str,
    start: f64,
    y: f64,
    stagger: f64,
    scope: &mut AnimationScope,
) {
    let items = mounted.items(container);
    Reveal::new(mounted.find(container))
        .targets(items)
        .start(Threshold::top(start))
        .from(StyleProps::new().y(y).opacity(0.0))
        .opts(TweenOpts::new(0.8).ease(Ease::OutQuart).stagger(stagger))
        .register(scope);
}

#[cfg(test)]
#[path = "../../tests/unit/sections/sections.rs"]
mod tests;
