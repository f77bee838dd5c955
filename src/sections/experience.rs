use crate::animation::ease::Ease;
use crate::animation::style::{Inset, StyleProps};
use crate::animation::timeline::TweenOpts;
use crate::content::config::ExperienceContent;
use crate::motion::counter::CountUp;
use crate::motion::hero::HeroController;
use crate::motion::parallax::Parallax;
use crate::motion::reveal::Reveal;
use crate::scroll::scope::AnimationScope;
use crate::scroll::trigger::Threshold;
use crate::sections::{Section, SectionContext, SectionKind, heading, reveal_heading, section_markup};
use crate::stage::layout::{Extent, Markup, MountedSection};

/// Clip the wide image starts from: `inset(15% 5% 15% 5%)`.
const WIDE_CLIP: Inset = Inset::new(15.0, 5.0, 15.0, 5.0);

/// Feature image cards, a counting stats card and an optional wide closing image.
pub(crate) struct Experience<'a>(pub &'a ExperienceContent);

impl Section for Experience<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Experience
    }

    fn markup(&self, ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = section_markup(SectionKind::Experience);
        heading(&mut m, !c.title_regular.is_empty() || !c.subtitle.is_empty());
        if !c.feature_cards.is_empty() {
            let grid = m.grid(None, "feature", 2, 24.0);
            for i in 0..c.feature_cards.len() {
                let card = m.child(grid, &i.to_string(), Extent::Px(420.0));
                m.overlay(Some(card), "inner");
            }
        }
        if !c.stats.is_empty() {
            let stats = m.grid(None, "stat", c.stats.len().min(4), 24.0);
            for i in 0..c.stats.len() {
                m.child(stats, &i.to_string(), Extent::Px(120.0));
            }
        }
        if !c.wide_image.is_empty() {
            let wide = m.block("wide", Extent::Px(ctx.viewport.vh(70.0)));
            m.overlay(Some(wide), "inner");
            if !c.wide_title.is_empty() || !c.wide_description.is_empty() {
                m.overlay(Some(wide), "text");
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

        for (i, card) in mounted.items("feature").into_iter().enumerate() {
            let inner = mounted.find(&format!("feature.{i}.inner"));
            let delay = i as f64 * 0.15;
            Reveal::new(Some(card))
                .start(ctx.reveal_start())
                .from(StyleProps::new().clip(Inset::sweep_from_bottom()))
                .opts(TweenOpts::new(1.2).ease(Ease::InOutQuint).delay(delay))
                .with(
                    inner,
                    StyleProps::new().scale(1.3),
                    StyleProps::new().scale(1.0),
                    TweenOpts::new(1.4).ease(Ease::OutQuart).delay(delay),
                    0.0,
                )
                .register(scope);
            Parallax::new(inner, 4.0)
                .region(Some(card))
                .lag(ctx.settings.parallax_lag)
                .register(scope);
        }

        let block = mounted.find("stat");
        Reveal::new(block)
            .start(ctx.reveal_start())
            .from(StyleProps::new().y(80.0).opacity(0.0))
            .opts(TweenOpts::new(1.0).ease(Ease::OutQuart).delay(0.3))
            .register(scope);
        let counters = mounted
            .items("stat")
            .into_iter()
            .zip(&self.0.stats)
            .map(|(id, stat)| (id, stat.value));
        CountUp::new(block, counters).register(scope);

        if let Some(wide) = mounted.find("wide") {
            let inner = mounted.find("wide.inner");
            Reveal::new(Some(wide))
                .start(ctx.reveal_start())
                .from(StyleProps::new().clip(WIDE_CLIP))
                .to(StyleProps::new().clip(Inset::NONE))
                .opts(TweenOpts::new(1.4).ease(Ease::InOutQuint))
                .register(scope);
            Parallax::new(inner, 3.0)
                .region(Some(wide))
                .lag(ctx.settings.parallax_lag)
                .register(scope);
            Reveal::new(mounted.find("wide.text"))
                .start(Threshold::top(70.0))
                .from(StyleProps::new().y(40.0).opacity(0.0))
                .register(scope);
        }
        None
    }
}
