use crate::content::config::HeroContent;
use crate::motion::hero::{HeroController, HeroLayers};
use crate::scroll::scope::AnimationScope;
use crate::sections::{Section, SectionContext, SectionKind};
use crate::stage::layout::{Extent, Markup, MountedSection};

/// Full-viewport pinned hero: giant background text, portrait, caption and nav bar.
pub(crate) struct Hero<'a>(pub &'a HeroContent);

impl Section for Hero<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Hero
    }

    fn markup(&self, ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = Markup::new(SectionKind::Hero.key())
            .min_height(Extent::Vh(100.0))
            .pin_spacing(Extent::Vh(ctx.settings.pin_distance * 100.0));
        if !c.background_text.is_empty() {
            m.overlay(None, "text");
        }
        if !c.hero_image.is_empty() {
            m.overlay(None, "image");
        }
        let lines = [
            !c.overlay_text.is_empty() || !c.headline.is_empty(),
            !c.subheadline.is_empty(),
            !c.cta_primary.is_empty() || !c.cta_secondary.is_empty(),
        ];
        if lines.iter().any(|&shown| shown) {
            let caption = m.overlay(None, "caption");
            let shown = lines.iter().filter(|&&shown| shown).count();
            for i in 0..shown {
                m.child(caption, &i.to_string(), Extent::Px(56.0));
            }
        }
        if !c.brand_name.is_empty() || !c.nav_links.is_empty() {
            let nav = m.overlay(None, "nav");
            m.child(nav, "bar", Extent::Px(80.0));
        }
        Some(m)
    }

    fn animate(
        &self,
        mounted: &MountedSection,
        ctx: &SectionContext,
        scope: &mut AnimationScope,
    ) -> Option<HeroController> {
        let layers = HeroLayers {
            section: Some(mounted.root),
            text: mounted.find("text"),
            image: mounted.find("image"),
            caption: mounted.find("caption"),
            caption_items: mounted.items("caption"),
            nav: mounted.find("nav"),
        };
        Some(HeroController::mount(&layers, ctx.viewport, &ctx.settings, scope))
    }
}
