use crate::animation::ease::Ease;
use crate::animation::style::StyleProps;
use crate::animation::timeline::TweenOpts;
use crate::content::config::FooterContent;
use crate::motion::hero::HeroController;
use crate::motion::reveal::Reveal;
use crate::scroll::scope::AnimationScope;
use crate::scroll::trigger::Threshold;
use crate::sections::{Section, SectionContext, SectionKind, section_markup};
use crate::stage::layout::{Extent, Markup, MountedSection};

const START: Threshold = Threshold {
    element: 0.0,
    viewport: 0.88,
};

/// Footer: oversized logo above contact, navigation and social columns.
pub(crate) struct Contact<'a>(pub &'a FooterContent);

impl Section for Contact<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Contact
    }

    fn markup(&self, _ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = section_markup(SectionKind::Contact);
        if !c.logo_text.is_empty() {
            m.block("logo", Extent::Px(200.0));
        }
        let columns = [
            !c.email.is_empty() || !c.location_text.is_empty(),
            !c.nav_links.is_empty(),
            !c.social_links.is_empty(),
        ];
        let shown = columns.iter().filter(|&&shown| shown).count();
        if shown > 0 {
            let content = m.grid(None, "content", shown, 32.0);
            for i in 0..shown {
                m.child(content, &i.to_string(), Extent::Px(180.0));
            }
        }
        if !c.tagline.is_empty() || !c.copyright.is_empty() || !c.bottom_links.is_empty() {
            m.block("bottom", Extent::Px(64.0));
        }
        Some(m)
    }

    fn animate(
        &self,
        mounted: &MountedSection,
        _ctx: &SectionContext,
        scope: &mut AnimationScope,
    ) -> Option<HeroController> {
        Reveal::new(mounted.find("logo"))
            .start(START)
            .from(StyleProps::new().y(80.0).scale(0.9).opacity(0.0))
            .opts(TweenOpts::new(1.2).ease(Ease::OutQuart))
            .register(scope);
        Reveal::new(mounted.find("content"))
            .targets(mounted.items("content"))
            .start(START)
            .from(StyleProps::new().y(40.0).opacity(0.0))
            .opts(TweenOpts::new(1.0).ease(Ease::OutQuart).delay(0.3))
            .register(scope);
        None
    }
}
