use crate::content::config::SkillsContent;
use crate::motion::hero::HeroController;
use crate::scroll::scope::AnimationScope;
use crate::sections::{
    Section, SectionContext, SectionKind, heading, reveal_heading, reveal_items, section_markup,
};
use crate::stage::layout::{Extent, Markup, MountedSection};

/// Skill categories as a card grid.
pub(crate) struct Skills<'a>(pub &'a SkillsContent);

impl Section for Skills<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Skills
    }

    fn markup(&self, _ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = section_markup(SectionKind::Skills);
        heading(&mut m, !c.title_regular.is_empty());
        if !c.testimonials.is_empty() {
            let grid = m.grid(None, "card", 3, 24.0);
            for i in 0..c.testimonials.len() {
                m.child(grid, &i.to_string(), Extent::Px(240.0));
            }
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
        reveal_items(mounted, "card", 80.0, 40.0, 0.1, scope);
        None
    }
}
