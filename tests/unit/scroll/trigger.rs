use super::*;
use crate::animation::timeline::TweenOpts;
use crate::stage::Stage;

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

#[test]
fn parses_keyword_and_percent_thresholds() {
    let t: Threshold = "top 85%".parse().unwrap();
    assert_eq!(t, Threshold::top(85.0));
    assert_eq!("top bottom".parse::<Threshold>().unwrap(), Threshold::TOP_BOTTOM);
    assert_eq!("bottom top".parse::<Threshold>().unwrap(), Threshold::BOTTOM_TOP);
    assert_eq!("top top".parse::<Threshold>().unwrap(), Threshold::TOP_TOP);
    assert_eq!("center 50%".parse::<Threshold>().unwrap().element, 0.5);
}

#[test]
fn rejects_malformed_thresholds() {
    for s in ["", "top", "top 85% extra", "middle top", "top 150%", "top x%"] {
        assert!(s.parse::<Threshold>().is_err(), "{s}");
    }
}

#[test]
fn resolves_against_element_and_viewport() {
    let bounds = Rect::new(0.0, 2000.0, 1000.0, 2400.0);
    assert!((Threshold::top(85.0).resolve(bounds, vp()) - 1320.0).abs() < 1e-9);
    assert_eq!(Threshold::BOTTOM_TOP.resolve(bounds, vp()), 2400.0);
    assert_eq!(Threshold::TOP_TOP.resolve(bounds, vp()), 2000.0);
}

#[test]
fn distance_end_is_relative_to_start() {
    let end: TriggerEnd = "+=130%".parse().unwrap();
    assert_eq!(end, TriggerEnd::Distance(130.0));
    let bounds = Rect::new(0.0, 0.0, 1000.0, 800.0);
    assert_eq!(end.resolve(0.0, bounds, vp()), 1040.0);
    assert!("+=-5%".parse::<TriggerEnd>().is_err());
    assert_eq!(
        "bottom top".parse::<TriggerEnd>().unwrap(),
        TriggerEnd::At(Threshold::BOTTOM_TOP)
    );
}

#[test]
fn end_never_precedes_start() {
    let bounds = Rect::new(0.0, 100.0, 1000.0, 110.0);
    let end = TriggerEnd::At(Threshold::TOP_TOP);
    assert_eq!(end.resolve(500.0, bounds, vp()), 500.0);
}

#[test]
fn region_transitions_follow_travel_direction() {
    use TriggerEvent::*;
    assert_eq!(Region::of(0.0, 0.0, 10.0), Region::Before);
    assert_eq!(Region::of(5.0, 0.0, 10.0), Region::Active);
    assert_eq!(Region::of(10.0, 0.0, 10.0), Region::After);
    assert_eq!(Region::Before.transition(Region::After).as_slice(), &[Enter, Leave]);
    assert_eq!(Region::After.transition(Region::Before).as_slice(), &[EnterBack, LeaveBack]);
    assert_eq!(Region::Active.transition(Region::Before).as_slice(), &[LeaveBack]);
    assert!(Region::Active.transition(Region::Active).is_empty());
}

#[test]
fn validate_checks_lag_and_timelines() {
    let mut stage = Stage::new();
    let id = stage.mount("a", None, Rect::new(0.0, 0.0, 10.0, 10.0));
    let ok = TriggerSpec::new(id).scrub(Timeline::new(), 0.6);
    assert!(ok.validate().is_ok());
    let bad = TriggerSpec::new(id).scrub(Timeline::new(), -1.0);
    assert!(bad.validate().is_err());
    let bad_tl = TriggerSpec::new(id).on_enter(Timeline::new().to(
        [id],
        StyleProps::new().x(1.0),
        TweenOpts::new(f64::NAN),
        0.0,
    ));
    assert!(bad_tl.validate().is_err());
}
