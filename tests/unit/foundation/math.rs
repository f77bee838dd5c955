use super::*;

#[test]
fn progress_clamps_and_handles_degenerate_ranges() {
    assert_eq!(progress(100.0, 200.0, 50.0), 0.0);
    assert_eq!(progress(100.0, 200.0, 150.0), 0.5);
    assert_eq!(progress(100.0, 200.0, 900.0), 1.0);
    assert_eq!(progress(10.0, 10.0, 9.0), 0.0);
    assert_eq!(progress(10.0, 10.0, 10.0), 1.0);
}

#[test]
fn clamp01_maps_nan_to_zero() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(7.0), 1.0);
}

#[test]
fn smooth_toward_converges_and_lands_exactly() {
    let mut v = 0.0;
    for _ in 0..240 {
        v = smooth_toward(v, 10.0, 1.2, 1.0 / 60.0);
    }
    assert_eq!(v, 10.0);
}

#[test]
fn smooth_toward_lags_behind_target() {
    let v = smooth_toward(0.0, 10.0, 1.5, 1.0 / 60.0);
    assert!(v > 0.0 && v < 10.0);
    assert_eq!(smooth_toward(0.0, 10.0, 0.0, 1.0 / 60.0), 10.0);
}
