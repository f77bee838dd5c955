use super::*;
use crate::animation::style::Inset;
use crate::foundation::core::{Rect, Viewport};
use crate::scroll::engine::ScrollEngine;

fn engine() -> ScrollEngine {
    let e = ScrollEngine::new(Viewport::new(1000.0, 800.0).unwrap());
    e.set_min_document_height(5000.0);
    e.refresh();
    e
}

fn mount(e: &ScrollEngine, key: &str, top: f64) -> ElementId {
    e.with_stage(|s| s.mount(key, None, Rect::new(0.0, top, 1000.0, top + 300.0)))
}

#[test]
fn staggered_reveal_hides_then_settles_in_order() {
    let e = engine();
    let grid = mount(&e, "grid", 2000.0);
    let a = mount(&e, "grid.0", 2000.0);
    let b = mount(&e, "grid.1", 2000.0);
    let mut scope = AnimationScope::new(e.handle(), "grid");
    let id = Reveal::new(Some(grid))
        .targets([a, b])
        .opts(TweenOpts::new(1.0).stagger(0.2))
        .register(&mut scope);
    assert!(id.is_some());
    for el in [a, b] {
        let s = e.stage().style(el).unwrap();
        assert_eq!((s.opacity, s.y), (0.0, 40.0));
    }
    assert_eq!(e.stage().style(grid).unwrap().opacity, 1.0);

    e.scroll_to(1400.0);
    e.advance(0.1, 0.05);
    let (oa, ob) = (
        e.stage().style(a).unwrap().opacity,
        e.stage().style(b).unwrap().opacity,
    );
    assert!(oa > ob);

    e.advance(2.0, 0.05);
    for el in [a, b] {
        let s = e.stage().style(el).unwrap();
        assert_eq!((s.opacity, s.y), (1.0, 0.0));
    }
}

#[test]
fn missing_trigger_or_targets_registers_nothing() {
    let e = engine();
    let mut scope = AnimationScope::new(e.handle(), "about");
    assert!(Reveal::new(None).register(&mut scope).is_none());
    let el = mount(&e, "about.heading", 2000.0);
    assert!(Reveal::new(Some(el)).targets([]).register(&mut scope).is_none());
    assert_eq!(e.trigger_count(), 0);
}

#[test]
fn default_reveal_is_a_one_second_quartic_fade_up() {
    let tl = Reveal::new(Some(ElementId::default())).timeline();
    let tween = &tl.tweens()[0];
    assert_eq!(tween.opts.ease, Ease::OutQuart);
    assert_eq!(tween.opts.duration, 1.0);
    assert_eq!(tween.from, Some(StyleProps::new().y(40.0).opacity(0.0)));
    assert_eq!(tl.duration(), 1.0);
}

#[test]
fn end_state_defaults_to_rest() {
    let tl = Reveal::new(Some(ElementId::default()))
        .from(StyleProps::new().y(60.0).opacity(0.0).clip(Inset::sweep_from_left()))
        .timeline();
    let to = tl.tweens()[0].to;
    assert_eq!(to.y, Some(0.0));
    assert_eq!(to.opacity, Some(1.0));
    assert_eq!(to.clip, Some(Inset::NONE));
    assert_eq!(to.scale, None);
}

#[test]
fn extra_tweens_share_the_trigger() {
    let e = engine();
    let card = mount(&e, "card", 2000.0);
    let inner = mount(&e, "card.inner", 2000.0);
    let mut scope = AnimationScope::new(e.handle(), "card");
    Reveal::new(Some(card))
        .from(StyleProps::new().clip(Inset::sweep_from_bottom()))
        .with(
            [inner],
            StyleProps::new().scale(1.45),
            StyleProps::new().scale(1.12),
            TweenOpts::new(1.6),
            0.0,
        )
        .register(&mut scope);
    assert_eq!(e.trigger_count(), 1);
    assert_eq!(e.stage().style(inner).unwrap().scale, 1.45);
    assert_eq!(e.stage().style(card).unwrap().clip, Inset::sweep_from_bottom());

    e.scroll_to(1400.0);
    e.advance(2.0, 0.05);
    assert_eq!(e.stage().style(inner).unwrap().scale, 1.12);
    assert_eq!(e.stage().style(card).unwrap().clip, Inset::NONE);
}
