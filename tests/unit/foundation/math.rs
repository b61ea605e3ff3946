use super::*;

#[test]
fn clamp01_handles_nan_and_bounds() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(0.2, 0.8, 0.0), 0.2);
    assert_eq!(lerp(0.2, 0.8, 1.0), 0.8);
    assert!((lerp(0.0, 1.0, 0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn approx_le_tolerates_conversion_noise() {
    assert!(approx_le(1.8 + 1e-12, 1.8));
    assert!(!approx_le(1.81, 1.8));
}
