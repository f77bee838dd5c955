use crate::animation::ease::Ease;
use crate::animation::style::StyleProps;
use crate::animation::timeline::TweenOpts;
use crate::content::config::AchievementsContent;
use crate::motion::hero::HeroController;
use crate::motion::reveal::Reveal;
use crate::scroll::scope::AnimationScope;
use crate::scroll::trigger::Threshold;
use crate::sections::{
    Section, SectionContext, SectionKind, heading, reveal_heading, reveal_items, section_markup,
};
use crate::stage::layout::{Extent, Markup, MountedSection};

/// Achievement list with a closing call to action.
pub(crate) struct Achievements<'a>(pub &'a AchievementsContent);

impl Section for Achievements<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Achievements
    }

    fn markup(&self, _ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = section_markup(SectionKind::Achievements);
        heading(&mut m, !c.title_regular.is_empty());
        if !c.faqs.is_empty() {
            let list = m.block("item", Extent::Auto);
            for i in 0..c.faqs.len() {
                m.child(list, &i.to_string(), Extent::Px(96.0));
            }
        }
        if !c.cta_text.is_empty() || !c.cta_button_text.is_empty() {
            m.block("cta", Extent::Px(160.0));
        }
        Some(m)
    }

    fn animate(
        &self,
        mounted: &MountedSection,
        ctx: &SectionContext,
        scope: &mut AnimationScope,
    ) -> Option<HeroController> {
        reveal_heading(mounted, ctx, scope);
        reveal_items(mounted, "item", 80.0, 40.0, 0.08, scope);
        Reveal::new(mounted.find("cta"))
            .start(Threshold::top(90.0))
            .from(StyleProps::new().y(40.0).opacity(0.0))
            .opts(TweenOpts::new(1.0).ease(Ease::OutQuart))
            .register(scope);
        None
    }
}
