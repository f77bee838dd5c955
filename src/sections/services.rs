use crate::content::config::ServicesContent;
use crate::motion::hero::HeroController;
use crate::scroll::scope::AnimationScope;
use crate::sections::{
    Section, SectionContext, SectionKind, heading, reveal_heading, reveal_items, section_markup,
};
use crate::stage::layout::{Extent, Markup, MountedSection};

/// Heading plus a three-column grid of service cards.
pub(crate) struct Services<'a>(pub &'a ServicesContent);

impl Section for Services<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Services
    }

    fn markup(&self, _ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = section_markup(SectionKind::Services);
        heading(&mut m, !c.title_line1.is_empty() || !c.subtitle.is_empty());
        if !c.services.is_empty() {
            let grid = m.grid(None, "card", 3, 24.0);
            for i in 0..c.services.len() {
                m.child(grid, &i.to_string(), Extent::Px(280.0));
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
        reveal_items(mounted, "card", 78.0, 60.0, 0.12, scope);
        None
    }
}
