use super::*;
use crate::animation::solver::SolveOpts;

#[test]
fn circular_matches_material_spinner_timing() {
    let s = circular().unwrap();
    assert_eq!(s.name(), "circular");
    assert!((s.total() - 1.8).abs() < 1e-12);

    let end = s.segment("end").unwrap();
    assert_eq!(end.begin(), 0.0);
    assert!((end.duration() - 0.8).abs() < 1e-12);

    let start = s.segment("start").unwrap();
    assert_eq!(start.begin(), 0.5);
    assert!((start.duration() - 1.3).abs() < 1e-12);

    assert_eq!(start.easing().curve(), Some(&MATERIAL_STANDARD));
    assert_eq!(s.pairs().len(), 1);
    assert_eq!(s.pairs()[0].head.as_str(), "end");
}

#[test]
fn linear_windows_are_fractions_of_the_cycle() {
    let s = linear_indeterminate(LinearStyle::Bezier).unwrap();
    assert_eq!(s.segments().len(), 4);
    let roles: Vec<_> = s.roles().map(Role::as_str).collect();
    assert_eq!(roles, ["line1-head", "line1-tail", "line2-head", "line2-tail"]);

    let tail = s.segment("line1-tail").unwrap();
    assert!((tail.begin() - 0.333).abs() < 1e-12);
    assert!((tail.end() - 1.083).abs() < 1e-12);
    assert_eq!(tail.easing().curve(), Some(&LINE1_TAIL));

    let last = s.segment("line2-tail").unwrap();
    assert!((last.end() - s.total()).abs() < 1e-12);
    assert_eq!(s.pairs().len(), 2);
}

#[test]
fn plain_style_uses_linear_ramps() {
    let s = linear_indeterminate(LinearStyle::Plain).unwrap();
    assert_eq!(s.name(), "linear-plain");
    assert!(s.segments().iter().all(|seg| seg.easing().curve().is_none()));

    // Halfway through line1-head's [0, 750] ms window.
    let p = s.progress_at("line1-head", 0.375, SolveOpts::default()).unwrap();
    assert!((p - 0.5).abs() < 1e-12);
}

#[test]
fn custom_circular_timing_is_respected() {
    let timing = CircularTiming {
        head_duration: 1.0,
        tail_delay: 0.25,
        curve: MATERIAL_STANDARD,
    };
    let s = timing.schedule().unwrap();
    assert!((s.total() - 1.5).abs() < 1e-12);
    assert!((s.segment("start").unwrap().end() - 1.5).abs() < 1e-12);

    let broken = CircularTiming {
        head_duration: 0.0,
        ..CircularTiming::default()
    };
    assert!(broken.schedule().is_err());
}

#[test]
fn builtin_lookup() {
    for name in BUILTIN_NAMES {
        assert_eq!(builtin(name).unwrap().name(), name);
    }
    assert!(matches!(builtin("square"), Err(StrokeError::Validation(_))));
}
