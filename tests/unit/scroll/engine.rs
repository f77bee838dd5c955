use std::cell::Cell;

use super::*;
use crate::animation::timeline::TweenOpts;
use crate::foundation::core::Rect;
use crate::scroll::trigger::{Threshold, TriggerEnd};

fn engine() -> ScrollEngine {
    let e = ScrollEngine::new(Viewport::new(1000.0, 800.0).unwrap());
    e.set_min_document_height(5000.0);
    e.refresh();
    e
}

fn mount(e: &ScrollEngine, key: &str, top: f64, height: f64) -> ElementId {
    e.with_stage(|s| s.mount(key, None, Rect::new(0.0, top, 1000.0, top + height)))
}

fn fade_in(id: ElementId) -> Timeline {
    Timeline::new().from_to(
        [id],
        StyleProps::new().opacity(0.0).y(40.0),
        StyleProps::new().opacity(1.0).y(0.0),
        TweenOpts::new(1.0),
        0.0,
    )
}

fn opacity(e: &ScrollEngine, id: ElementId) -> f64 {
    e.stage().style(id).unwrap().opacity
}

#[test]
fn one_shot_applies_start_state_and_fires_on_crossing() {
    let e = engine();
    let el = mount(&e, "card", 2000.0, 300.0);
    let h = e.handle();
    let spec = TriggerSpec::new(el)
        .start(Threshold::top(85.0))
        .once()
        .on_enter(fade_in(el));
    let id = h.register_trigger(spec).unwrap();
    assert_eq!(opacity(&e, el), 0.0);

    e.scroll_to(1000.0);
    e.advance(2.0, 0.1);
    assert_eq!(opacity(&e, el), 0.0);

    e.scroll_to(1400.0);
    assert_eq!(e.playback_count(), 1);
    e.advance(1.5, 0.1);
    assert_eq!(opacity(&e, el), 1.0);
    assert_eq!(e.playback_count(), 0);
    assert!(e.trigger_progress(id).is_some());
}

#[test]
fn fired_one_shot_never_refires() {
    let e = engine();
    let el = mount(&e, "card", 2000.0, 300.0);
    let fires = Rc::new(Cell::new(0));
    let counter = fires.clone();
    let spec = TriggerSpec::new(el)
        .start(Threshold::top(85.0))
        .once()
        .on_enter(fade_in(el))
        .on_update(move |u| {
            if u.events.contains(&TriggerEvent::Enter) {
                counter.set(counter.get() + 1);
            }
        });
    e.handle().register_trigger(spec).unwrap();
    for offset in [1500.0, 0.0, 1500.0, 0.0, 1500.0] {
        e.scroll_to(offset);
        e.advance(0.5, 0.1);
    }
    assert_eq!(fires.get(), 1);
    assert_eq!(e.playback_count(), 0);
}

#[test]
fn element_already_past_threshold_fires_at_registration() {
    let e = engine();
    let el = mount(&e, "intro", 100.0, 300.0);
    e.handle()
        .register_trigger(TriggerSpec::new(el).start(Threshold::top(85.0)).once().on_enter(fade_in(el)))
        .unwrap();
    assert_eq!(e.playback_count(), 1);
}

#[test]
fn unmounted_element_is_skipped() {
    let e = engine();
    let el = mount(&e, "gone", 100.0, 300.0);
    e.with_stage(|s| s.unmount(el));
    assert!(e.handle().register_trigger(TriggerSpec::new(el)).is_none());
    assert_eq!(e.trigger_count(), 0);
}

#[test]
fn pin_holds_element_in_viewport() {
    let e = engine();
    let el = mount(&e, "hero", 0.0, 800.0);
    e.handle()
        .register_trigger(
            TriggerSpec::new(el)
                .start(Threshold::TOP_TOP)
                .end(TriggerEnd::Distance(130.0))
                .pin(),
        )
        .unwrap();
    e.scroll_to(500.0);
    assert_eq!(e.stage().visual_rect(el).unwrap().y0, 500.0);
    e.scroll_to(3000.0);
    assert_eq!(e.stage().visual_rect(el).unwrap().y0, 1040.0);
    assert_eq!(e.pinned_spans(), vec![(0.0, 1040.0)]);
}

#[test]
fn scrub_lags_then_settles_on_progress() {
    let e = engine();
    let el = mount(&e, "panel", 1000.0, 1000.0);
    let tl = Timeline::new().from_to(
        [el],
        StyleProps::new().x(0.0),
        StyleProps::new().x(100.0),
        TweenOpts::new(1.0),
        0.0,
    );
    let spec = TriggerSpec::new(el)
        .start(Threshold::TOP_TOP)
        .end(TriggerEnd::At(Threshold::BOTTOM_TOP))
        .scrub(tl, 1.0);
    e.handle().register_trigger(spec).unwrap();
    e.scroll_to(1500.0);
    e.tick(0.05);
    let early = e.stage().style(el).unwrap().x;
    assert!(early > 0.0 && early < 50.0, "{early}");
    e.advance(5.0, 1.0 / 60.0);
    assert!((e.stage().style(el).unwrap().x - 50.0).abs() < 1e-9);
}

#[test]
fn leave_back_forces_styles() {
    let e = engine();
    let el = mount(&e, "hero", 0.0, 800.0);
    let spec = TriggerSpec::new(el)
        .start(Threshold::TOP_TOP)
        .end(TriggerEnd::Distance(100.0))
        .on_leave_back([el], StyleProps::new().opacity(1.0));
    e.handle().register_trigger(spec).unwrap();
    e.scroll_to(400.0);
    e.with_stage(|s| s.apply(el, &StyleProps::new().opacity(0.2)));
    e.scroll_to(0.0);
    assert_eq!(opacity(&e, el), 1.0);
}

#[test]
fn killing_trigger_cancels_its_playback() {
    let e = engine();
    let el = mount(&e, "card", 100.0, 300.0);
    let h = e.handle();
    let id = h
        .register_trigger(TriggerSpec::new(el).start(Threshold::top(85.0)).on_enter(fade_in(el)))
        .unwrap();
    assert_eq!(e.playback_count(), 1);
    h.kill_trigger(id);
    assert_eq!(e.playback_count(), 0);
    let rev = e.stage().revision();
    e.advance(1.0, 0.1);
    assert_eq!(e.stage().revision(), rev);
}

#[test]
fn completion_callback_runs_once() {
    let e = engine();
    let el = mount(&e, "nav", 0.0, 80.0);
    let done = Rc::new(Cell::new(0));
    let flag = done.clone();
    e.handle()
        .play(fade_in(el), Some(Box::new(move || flag.set(flag.get() + 1))))
        .unwrap();
    e.advance(3.0, 0.25);
    assert_eq!(done.get(), 1);
}

#[test]
fn snap_pulls_scroll_to_pinned_center() {
    let e = engine();
    e.install_snap(
        SnapCoordinator::new(vec![crate::motion::snap::PinnedRange::new(0.1, 0.3).unwrap()], 0.02).unwrap(),
    );
    let max = e.scroll().max_scroll();
    e.scroll_to(0.25 * max);
    e.tick(0.0);
    assert!(e.is_snapping());
    e.advance(1.0, 1.0 / 60.0);
    assert!(!e.is_snapping());
    assert!((e.scroll().normalized() - 0.2).abs() < 1e-9);

    e.scroll_to(0.6 * max);
    e.advance(1.0, 1.0 / 60.0);
    assert!((e.scroll().normalized() - 0.6).abs() < 1e-9);
}

#[test]
fn user_scroll_cancels_running_snap() {
    let e = engine();
    e.install_snap(
        SnapCoordinator::new(vec![crate::motion::snap::PinnedRange::new(0.0, 0.2).unwrap()], 0.02).unwrap(),
    );
    e.scroll_to(0.0);
    e.tick(0.0);
    assert!(e.is_snapping());
    e.scroll_to(3000.0);
    assert!(!e.is_snapping());
}

#[test]
fn dropped_engine_makes_handle_inert() {
    let e = engine();
    let el = mount(&e, "a", 0.0, 100.0);
    let h = e.handle();
    drop(e);
    assert!(!h.is_alive());
    assert!(h.register_trigger(TriggerSpec::new(el)).is_none());
    assert!(!h.set(el, StyleProps::new().x(1.0)));
}
