use super::*;

#[test]
fn viewport_units_scale_with_dimensions() {
    let vp = Viewport::new(1440.0, 900.0).unwrap();
    assert_eq!(vp.vw(10.0), 144.0);
    assert_eq!(vp.vh(130.0), 1170.0);
    assert_eq!(vp.size(), Size::new(1440.0, 900.0));
}

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(0.0, 900.0).is_err());
    assert!(Viewport::new(1440.0, -1.0).is_err());
    assert!(Viewport::new(f64::NAN, 900.0).is_err());
}

#[test]
fn viewport_parses_wxh() {
    let vp: Viewport = "1280x720".parse().unwrap();
    assert_eq!(vp.width, 1280.0);
    assert_eq!(vp.height, 720.0);
    assert!("1280".parse::<Viewport>().is_err());
    assert!("ax720".parse::<Viewport>().is_err());
}
