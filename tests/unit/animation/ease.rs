use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutQuart, Ease::InOutQuint] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn power_names_map_to_polynomial_degree() {
    assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
    assert_eq!("power1.out".parse::<Ease>().unwrap(), Ease::OutQuad);
    assert_eq!("power2.in".parse::<Ease>().unwrap(), Ease::InCubic);
    assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::OutQuart);
    assert_eq!("power4.inOut".parse::<Ease>().unwrap(), Ease::InOutQuint);
    assert_eq!("power2".parse::<Ease>().unwrap(), Ease::OutCubic);
    assert!("elastic.out".parse::<Ease>().is_err());
    assert!("power2.sideways".parse::<Ease>().is_err());
}

#[test]
fn input_outside_unit_range_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::InQuint.apply(2.0), 1.0);
}
