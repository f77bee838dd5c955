use crate::animation::ease::Ease;
use crate::animation::style::{Inset, StyleProps};
use crate::animation::timeline::TweenOpts;
use crate::content::config::ProjectsContent;
use crate::motion::hero::HeroController;
use crate::motion::parallax::Parallax;
use crate::motion::reveal::Reveal;
use crate::scroll::scope::AnimationScope;
use crate::scroll::trigger::Threshold;
use crate::sections::{Section, SectionContext, SectionKind, heading, reveal_heading, section_markup};
use crate::stage::layout::{Extent, Markup, MountedSection};

const CARD_SCRUB_LAG: f64 = 1.5;

/// Featured projects: one tall card per project, image beside a stack of text items.
pub(crate) struct Projects<'a>(pub &'a ProjectsContent);

impl Section for Projects<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Projects
    }

    fn markup(&self, _ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = section_markup(SectionKind::Projects);
        heading(&mut m, !c.title_regular.is_empty() || !c.subtitle.is_empty());
        for (i, project) in c.projects.iter().enumerate() {
            let card = m.block(&format!("card.{i}"), Extent::Px(560.0));
            let image = m.overlay(Some(card), "image");
            m.overlay(Some(image), "inner");
            let text = m.child(card, "text", Extent::Auto);
            let rows = 2
                + usize::from(!project.description.is_empty())
                + usize::from(!project.tags.is_empty());
            for r in 0..rows {
                m.child(text, &r.to_string(), Extent::Px(48.0));
            }
        }
        if !c.view_all_text.is_empty() {
            m.block("view_all", Extent::Px(64.0));
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

        for (i, card) in mounted.items("card").into_iter().enumerate() {
            let image = mounted.find(&format!("card.{i}.image"));
            let inner = mounted.find(&format!("card.{i}.image.inner"));
            let sweep = if i % 2 == 0 {
                Inset::sweep_from_left()
            } else {
                Inset::sweep_from_right()
            };
            Reveal::new(Some(card))
                .targets(image)
                .start(Threshold::top(80.0))
                .from(StyleProps::new().clip(sweep))
                .opts(TweenOpts::new(1.4).ease(Ease::InOutQuint))
                .with(
                    inner,
                    StyleProps::new().scale(1.35),
                    StyleProps::new().scale(1.1),
                    TweenOpts::new(1.4).ease(Ease::InOutQuint),
                    0.0,
                )
                .register(scope);
            Parallax::new(inner, 5.0)
                .region(Some(card))
                .lag(CARD_SCRUB_LAG)
                .register(scope);

            let text = format!("card.{i}.text");
            Reveal::new(mounted.find(&text))
                .targets(mounted.items(&text))
                .start(Threshold::top(75.0))
                .from(StyleProps::new().y(50.0).opacity(0.0))
                .opts(TweenOpts::new(0.8).ease(Ease::OutQuart).stagger(0.1).delay(0.4))
                .register(scope);
        }

        Reveal::new(mounted.find("view_all")).start(ctx.reveal_start()).register(scope);
        None
    }
}
