use super::*;
use crate::foundation::core::Rect;
use crate::scroll::engine::ScrollEngine;
use crate::stage::Stage;

struct Rig {
    engine: ScrollEngine,
    layers: HeroLayers,
    hero: HeroController,
    _scope: AnimationScope,
}

fn locked() -> MotionSettings {
    MotionSettings {
        hero_scrub_lag: 0.0,
        ..MotionSettings::default()
    }
}

fn rig(settings: MotionSettings) -> Rig {
    let viewport = Viewport::new(1000.0, 800.0).unwrap();
    let engine = ScrollEngine::new(viewport);
    engine.set_min_document_height(5000.0);
    let full = Rect::new(0.0, 0.0, 1000.0, 800.0);
    let layers = engine.with_stage(|s: &mut Stage| {
        let section = s.mount("hero", None, full);
        let caption = s.mount("hero.caption", Some(section), full);
        HeroLayers {
            section: Some(section),
            text: Some(s.mount("hero.text", Some(section), full)),
            image: Some(s.mount("hero.image", Some(section), full)),
            caption: Some(caption),
            caption_items: vec![
                s.mount("hero.caption.0", Some(caption), Rect::new(0.0, 0.0, 1000.0, 40.0)),
                s.mount("hero.caption.1", Some(caption), Rect::new(0.0, 40.0, 1000.0, 80.0)),
            ],
            nav: Some(s.mount("hero.nav", Some(section), Rect::new(0.0, 0.0, 1000.0, 80.0))),
        }
    });
    engine.refresh();
    let mut scope = AnimationScope::new(engine.handle(), "hero");
    let hero = HeroController::mount(&layers, viewport, &settings, &mut scope);
    Rig {
        engine,
        layers,
        hero,
        _scope: scope,
    }
}

fn style(r: &Rig, id: Option<ElementId>) -> crate::animation::style::Style {
    r.engine.stage().style(id.unwrap()).unwrap()
}

#[test]
fn entrance_runs_then_hero_idles_pinned() {
    let r = rig(locked());
    assert_eq!(r.hero.phase(), HeroPhase::Entering);
    assert!(r.hero.pin_trigger().is_some());
    assert!(r.hero.entrance().is_some());
    assert_eq!(style(&r, r.layers.text).opacity, 0.0);
    assert_eq!(style(&r, r.layers.nav).y, -20.0);

    r.engine.advance(2.0, 1.0 / 60.0);
    assert_eq!(r.hero.phase(), HeroPhase::PinnedIdle);
    let text = style(&r, r.layers.text);
    assert_eq!((text.opacity, text.y, text.scale), (1.0, 0.0, 1.0));
    assert_eq!(style(&r, r.layers.image).x, 0.0);
    assert_eq!(style(&r, r.layers.caption_items.get(1).copied()).opacity, 1.0);
}

#[test]
fn scrubbed_exit_follows_pin_progress() {
    let r = rig(locked());
    r.engine.advance(2.0, 1.0 / 60.0);

    r.engine.scroll_to(728.0);
    assert_eq!(r.hero.phase(), HeroPhase::Exiting);
    let text = style(&r, r.layers.text);
    assert_eq!((text.x, text.opacity), (0.0, 1.0));
    let section = r.engine.stage().visual_rect(r.layers.section.unwrap()).unwrap();
    assert_eq!(section.y0, 728.0);

    r.engine.scroll_to(884.0);
    let text = style(&r, r.layers.text);
    assert!((text.x - -22.5).abs() < 1e-9);
    assert!((text.opacity - 0.875).abs() < 1e-9);

    r.engine.scroll_to(1040.0);
    assert_eq!(r.hero.phase(), HeroPhase::Unpinned);
    let text = style(&r, r.layers.text);
    assert_eq!((text.x, text.opacity), (-180.0, 0.0));
    let image = style(&r, r.layers.image);
    assert_eq!((image.x, image.scale, image.opacity), (-220.0, 1.06, 0.0));
    let caption = style(&r, r.layers.caption);
    assert_eq!((caption.x, caption.opacity), (100.0, 0.0));
}

#[test]
fn scrolling_back_to_top_restores_every_layer() {
    let r = rig(locked());
    r.engine.advance(2.0, 1.0 / 60.0);
    r.engine.scroll_to(1040.0);
    r.engine.scroll_to(0.0);

    assert_eq!(r.hero.phase(), HeroPhase::PinnedIdle);
    for layer in [r.layers.text, r.layers.image, r.layers.caption] {
        let s = style(&r, layer);
        assert_eq!((s.x, s.opacity), (0.0, 1.0));
    }
    assert_eq!(style(&r, r.layers.image).scale, 1.0);
    let section = r.engine.stage().visual_rect(r.layers.section.unwrap()).unwrap();
    assert_eq!(section.y0, 0.0);
}

#[test]
fn lagged_exit_trails_then_converges() {
    let r = rig(MotionSettings::default());
    r.engine.advance(2.0, 1.0 / 60.0);
    r.engine.scroll_to(1040.0);
    r.engine.tick(1.0 / 60.0);
    assert!(style(&r, r.layers.text).opacity > 0.0);

    r.engine.advance(5.0, 1.0 / 60.0);
    assert!(style(&r, r.layers.text).opacity < 1e-6);
}

#[test]
fn exit_timeline_spans_a_unit_of_progress() {
    let viewport = Viewport::new(1000.0, 800.0).unwrap();
    let layers = HeroLayers {
        text: Some(ElementId::default()),
        ..HeroLayers::default()
    };
    let tl = HeroController::exit_timeline(&layers, viewport, 0.7);
    assert_eq!(tl.duration(), 1.0);
    assert_eq!(tl.tweens()[0].position, 0.7);
}

#[test]
fn hero_without_section_skips_the_pin() {
    let viewport = Viewport::new(1000.0, 800.0).unwrap();
    let engine = ScrollEngine::new(viewport);
    let text = engine.with_stage(|s| s.mount("hero.text", None, Rect::new(0.0, 0.0, 1000.0, 800.0)));
    let layers = HeroLayers {
        text: Some(text),
        ..HeroLayers::default()
    };
    let mut scope = AnimationScope::new(engine.handle(), "hero");
    let hero = HeroController::mount(&layers, viewport, &MotionSettings::default(), &mut scope);
    assert!(hero.pin_trigger().is_none());
    assert!(hero.entrance().is_some());
    assert!(engine.pinned_spans().is_empty());

    hero.unmount();
    assert_eq!(hero.phase(), HeroPhase::Unmounted);
}
