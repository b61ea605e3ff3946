use super::*;

fn all() -> [Easing; 4] {
    [
        Easing::Linear,
        Easing::CubicBezier(CubicBezier::new(0.4, 0.0, 0.2, 1.0)),
        Easing::CubicBezier(CubicBezier::new(0.42, 0.0, 0.58, 1.0)),
        Easing::CubicBezier(CubicBezier::new(0.0, 0.0, 0.65, 1.0)),
    ]
}

#[test]
fn endpoints_are_stable() {
    let opts = SolveOpts::default();
    for ease in all() {
        assert_eq!(ease.apply(0.0, opts), 0.0);
        assert_eq!(ease.apply(1.0, opts), 1.0);
        assert_eq!(ease.apply(-1.0, opts), 0.0);
        assert_eq!(ease.apply(2.0, opts), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    let opts = SolveOpts::default();
    for ease in all() {
        let a = ease.apply(0.25, opts);
        let b = ease.apply(0.5, opts);
        let c = ease.apply(0.75, opts);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn linear_is_identity() {
    let opts = SolveOpts::default();
    assert_eq!(Easing::Linear.apply(0.3, opts), 0.3);
    assert!(Easing::Linear.curve().is_none());
}

#[test]
fn serde_shape_is_tagged() {
    assert_eq!(
        serde_json::to_string(&Easing::Linear).unwrap(),
        "\"linear\""
    );
    let e: Easing = serde_json::from_str("{\"cubic_bezier\":[0.4,0.0,0.2,1.0]}").unwrap();
    assert_eq!(e.curve(), Some(&CubicBezier::new(0.4, 0.0, 0.2, 1.0)));
}
