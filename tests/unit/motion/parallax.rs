use super::*;
use crate::foundation::core::{Rect, Viewport};
use crate::scroll::engine::ScrollEngine;

fn rig(lag: f64) -> (ScrollEngine, ElementId, AnimationScope) {
    let e = ScrollEngine::new(Viewport::new(1000.0, 800.0).unwrap());
    e.set_min_document_height(5000.0);
    e.refresh();
    let el = e.with_stage(|s| s.mount("img", None, Rect::new(0.0, 2000.0, 1000.0, 2400.0)));
    let mut scope = AnimationScope::new(e.handle(), "img");
    Parallax::new(Some(el), 5.0).lag(lag).register(&mut scope);
    (e, el, scope)
}

fn drift(e: &ScrollEngine, el: ElementId) -> f64 {
    e.stage().style(el).unwrap().y_percent
}

#[test]
fn offset_is_linear_and_clamped() {
    let p = Parallax::new(None, 6.0);
    assert_eq!(p.offset_at(0.0), -6.0);
    assert_eq!(p.offset_at(0.5), 0.0);
    assert_eq!(p.offset_at(1.0), 6.0);
    assert_eq!(p.offset_at(-3.0), -6.0);
    assert_eq!(p.offset_at(7.0), 6.0);
    assert_eq!(p.depth(), 6.0);
}

#[test]
fn unlagged_drift_is_monotonic_across_the_region() {
    let (e, el, _scope) = rig(0.0);
    assert_eq!(drift(&e, el), -5.0);
    let mut last = f64::NEG_INFINITY;
    for offset in [1000.0, 1200.0, 1500.0, 1800.0, 2100.0, 2400.0, 3000.0] {
        e.scroll_to(offset);
        let y = drift(&e, el);
        assert!(y >= last);
        last = y;
    }
    assert_eq!(last, 5.0);
    e.scroll_to(1800.0);
    assert_eq!(drift(&e, el), 0.0);
}

#[test]
fn lagged_drift_trails_then_catches_up() {
    let (e, el, _scope) = rig(1.2);
    e.scroll_to(2400.0);
    assert_eq!(drift(&e, el), -5.0);
    e.tick(1.0 / 60.0);
    let y = drift(&e, el);
    assert!(y > -5.0 && y < 5.0);
    e.advance(10.0, 1.0 / 60.0);
    assert_eq!(drift(&e, el), 5.0);
}

#[test]
fn missing_element_is_skipped() {
    let e = ScrollEngine::new(Viewport::new(1000.0, 800.0).unwrap());
    let mut scope = AnimationScope::new(e.handle(), "img");
    assert!(Parallax::new(None, 4.0).register(&mut scope).is_none());
    assert_eq!(e.trigger_count(), 0);
}
