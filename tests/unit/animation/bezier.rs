use super::*;

const CURVES: [[f64; 4]; 6] = [
    [0.4, 0.0, 0.2, 1.0],
    [0.2, 0.0, 0.8, 1.0],
    [0.4, 0.0, 1.0, 1.0],
    [0.0, 0.0, 0.65, 1.0],
    [0.10, 0.0, 0.45, 1.0],
    [0.25, -0.6, 0.3, 1.6],
];

#[test]
fn endpoints_are_exact() {
    for [a, b, c, d] in CURVES {
        let curve = CubicBezier::new(a, b, c, d);
        assert_eq!(curve.evaluate(0.0), (0.0, 0.0));
        assert_eq!(curve.evaluate(1.0), (1.0, 1.0));
    }
}

#[test]
fn midpoint_matches_bernstein_form() {
    let curve = CubicBezier::new(0.4, 0.0, 0.2, 1.0);
    let (x, y) = curve.evaluate(0.5);
    // 3 * 0.25 * 0.5 * p1 + 3 * 0.5 * 0.25 * p2 + 0.125
    assert!((x - (0.375 * 0.4 + 0.375 * 0.2 + 0.125)).abs() < 1e-12);
    assert!((y - (0.375 + 0.125)).abs() < 1e-12);
}

#[test]
fn derivative_matches_finite_difference() {
    let curve = CubicBezier::new(0.2, 0.0, 0.8, 1.0);
    let h = 1e-6;
    for t in [0.1, 0.35, 0.5, 0.9] {
        let fd = (curve.x_at(t + h) - curve.x_at(t - h)) / (2.0 * h);
        assert!((fd - curve.dx_dt(t)).abs() < 1e-6);
    }
}

#[test]
fn try_new_rejects_bad_control_points() {
    assert!(CubicBezier::try_new(f64::NAN, 0.0, 0.2, 1.0).is_err());
    assert!(CubicBezier::try_new(0.4, f64::INFINITY, 0.2, 1.0).is_err());
    assert!(CubicBezier::try_new(1.5, 0.0, 0.2, 1.0).is_err());
    assert!(CubicBezier::try_new(0.4, 0.0, -0.1, 1.0).is_err());
    // y control points may overshoot.
    assert!(CubicBezier::try_new(0.25, -0.6, 0.3, 1.6).is_ok());
}

#[test]
fn monotonic_check_flags_folded_curves() {
    assert!(CubicBezier::new(0.4, 0.0, 0.2, 1.0).is_x_monotonic());
    assert!(CubicBezier::new(1.0, 0.0, 0.0, 1.0).is_x_monotonic());
    assert!(!CubicBezier::new(1.5, 0.0, -0.5, 1.0).is_x_monotonic());
}

#[test]
fn serde_uses_control_point_array() {
    let curve = CubicBezier::new(0.4, 0.0, 0.2, 1.0);
    let json = serde_json::to_string(&curve).unwrap();
    assert_eq!(json, "[0.4,0.0,0.2,1.0]");
    let back: CubicBezier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, curve);
    assert!(serde_json::from_str::<CubicBezier>("[1.5,0.0,-0.5,1.0]").is_err());
}

#[test]
fn identity_detection() {
    assert!(CubicBezier::new(0.0, 0.0, 1.0, 1.0).is_identity());
    assert!(CubicBezier::new(0.3, 0.3, 0.6, 0.6).is_identity());
    assert!(!CubicBezier::new(0.4, 0.0, 0.2, 1.0).is_identity());
}
