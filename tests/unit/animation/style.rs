use super::*;

#[test]
fn apply_only_touches_set_channels() {
    let mut s = Style::resting();
    s.apply(&StyleProps::new().opacity(0.0).y(60.0));
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.y, 60.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.clip, Inset::NONE);
}

#[test]
fn interpolate_follows_target_shape() {
    let from = StyleProps::new().opacity(0.0).y(40.0).scale(0.98);
    let to = StyleProps::new().opacity(1.0).y(0.0);
    let mid = StyleProps::interpolate(&from, &to, 0.5);
    assert_eq!(mid.opacity, Some(0.5));
    assert_eq!(mid.y, Some(20.0));
    assert_eq!(mid.scale, None);
}

#[test]
fn missing_from_channel_holds_target() {
    let from = StyleProps::new().opacity(0.0);
    let to = StyleProps::new().opacity(1.0).x(-100.0);
    let mid = StyleProps::interpolate(&from, &to, 0.25);
    assert_eq!(mid.x, Some(-100.0));
}

#[test]
fn capture_and_resting_mirror_shape() {
    let mut s = Style::resting();
    s.x = 12.0;
    let shape = StyleProps::new().x(0.0).scale(2.0);
    let cap = StyleProps::capture(&s, &shape);
    assert_eq!(cap.x, Some(12.0));
    assert_eq!(cap.scale, Some(1.0));
    assert_eq!(cap.opacity, None);

    let rest = StyleProps::new().opacity(0.0).clip(Inset::sweep_from_left()).resting();
    assert_eq!(rest.opacity, Some(1.0));
    assert_eq!(rest.clip, Some(Inset::NONE));
}

#[test]
fn inset_parses_css_shorthand() {
    assert_eq!(
        "inset(0% 100% 0% 0%)".parse::<Inset>().unwrap(),
        Inset::sweep_from_left()
    );
    assert_eq!(
        "inset(15% 5%)".parse::<Inset>().unwrap(),
        Inset::new(15.0, 5.0, 15.0, 5.0)
    );
    assert!("circle(50%)".parse::<Inset>().is_err());
}

#[test]
fn inset_visible_fraction() {
    assert_eq!(Inset::NONE.visible_fraction(), 1.0);
    assert_eq!(Inset::sweep_from_bottom().visible_fraction(), 0.0);
    let half = Inset::lerp(&Inset::sweep_from_right(), &Inset::NONE, 0.5);
    assert_eq!(half.visible_fraction(), 0.5);
}

#[test]
fn total_y_combines_pixels_and_percent() {
    let s = Style {
        y: 10.0,
        y_percent: 5.0,
        ..Style::resting()
    };
    assert_eq!(s.total_y(200.0), 20.0);
}
