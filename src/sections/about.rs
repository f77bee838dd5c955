use crate::animation::ease::Ease;
use crate::animation::style::{Inset, StyleProps};
use crate::animation::timeline::TweenOpts;
use crate::content::config::IntroGridContent;
use crate::motion::hero::HeroController;
use crate::motion::parallax::Parallax;
use crate::motion::reveal::Reveal;
use crate::scroll::scope::AnimationScope;
use crate::scroll::trigger::Threshold;
use crate::sections::{Section, SectionContext, SectionKind, section_markup};
use crate::stage::layout::{Extent, Markup, MountedSection};

/// Parallax depth (percent) per portfolio image, cycling.
const DEPTHS: [f64; 5] = [6.0, 3.0, 5.0, 4.0, 7.0];

/// Starting clip per portfolio image, cycling.
const SWEEPS: [Inset; 4] = [
    Inset::sweep_from_bottom(),
    Inset::sweep_from_left(),
    Inset::sweep_from_top(),
    Inset::sweep_from_right(),
];

/// Intro grid: two-line title, description, focus line and a grid of portfolio images.
pub(crate) struct About<'a>(pub &'a IntroGridContent);

impl Section for About<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::About
    }

    fn markup(&self, _ctx: &SectionContext) -> Option<Markup> {
        let c = self.0;
        if !c.has_content() {
            return None;
        }
        let mut m = section_markup(SectionKind::About);
        let lines = [&c.title_line1, &c.title_line2]
            .into_iter()
            .filter(|l| !l.is_empty())
            .count();
        if lines > 0 {
            let title = m.block("title", Extent::Auto);
            for i in 0..lines {
                m.child(title, &format!("line.{i}"), Extent::Px(96.0));
            }
        }
        if !c.description.is_empty() {
            m.block("description", Extent::Px(160.0));
        }
        if !c.accent_text.is_empty() {
            m.block("focus", Extent::Px(40.0));
        }
        if !c.portfolio_images.is_empty() {
            let grid = m.grid(None, "image", 3, 24.0);
            for i in 0..c.portfolio_images.len() {
                let card = m.child(grid, &i.to_string(), Extent::Px(420.0));
                m.overlay(Some(card), "inner");
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
        let lines = mounted.items("title.line");
        Reveal::new(mounted.find("title"))
            .targets(lines)
            .start(ctx.reveal_start())
            .from(StyleProps::new().y_percent(110.0))
            .opts(TweenOpts::new(1.1).ease(Ease::OutQuint).stagger(0.13))
            .register(scope);

        Reveal::new(mounted.find("description"))
            .start(ctx.reveal_start())
            .from(StyleProps::new().y(30.0).opacity(0.0))
            .opts(TweenOpts::new(1.0).ease(Ease::OutQuart).delay(0.35))
            .register(scope);

        Reveal::new(mounted.find("focus"))
            .start(ctx.reveal_start())
            .from(StyleProps::new().y(20.0).opacity(0.0))
            .opts(TweenOpts::new(0.8).ease(Ease::OutQuart).stagger(0.1))
            .register(scope);

        for (i, card) in mounted.items("image").into_iter().enumerate() {
            let inner = mounted.find(&format!("image.{i}.inner"));
            let tilt = if i % 2 == 0 { -3.0 } else { 3.0 };
            let delay = (i % 3) as f64 * 0.1;
            Reveal::new(Some(card))
                .start(Threshold::top(90.0))
                .from(StyleProps::new().clip(SWEEPS[i % SWEEPS.len()]))
                .opts(TweenOpts::new(1.2).ease(Ease::InOutQuint).delay(delay))
                .with(
                    inner,
                    StyleProps::new().scale(1.45).rotate(tilt),
                    StyleProps::new().scale(1.12).rotate(0.0),
                    TweenOpts::new(1.6).ease(Ease::OutQuart).delay(delay),
                    0.0,
                )
                .register(scope);
            Parallax::new(inner, DEPTHS[i % DEPTHS.len()])
                .region(Some(card))
                .lag(ctx.settings.parallax_lag)
                .register(scope);
        }
        None
    }
}
