use super::*;

const MATERIAL: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

fn curves() -> [CubicBezier; 5] {
    [
        MATERIAL,
        CubicBezier::new(0.2, 0.0, 0.8, 1.0),
        CubicBezier::new(0.4, 0.0, 1.0, 1.0),
        CubicBezier::new(0.0, 0.0, 0.65, 1.0),
        CubicBezier::new(0.10, 0.0, 0.45, 1.0),
    ]
}

#[test]
fn endpoints_short_circuit_exactly() {
    let opts = SolveOpts::default();
    for curve in curves() {
        assert_eq!(BezierSolver::solve_for_y(0.0, &curve, opts), 0.0);
        assert_eq!(BezierSolver::solve_for_y(1.0, &curve, opts), 1.0);
        assert_eq!(BezierSolver::solve_for_y(-3.0, &curve, opts), 0.0);
        assert_eq!(BezierSolver::solve_for_y(7.0, &curve, opts), 1.0);
        assert_eq!(BezierSolver::solve_for_y(f64::NAN, &curve, opts), 0.0);

        let s = BezierSolver::solve(&curve, 1.0, opts);
        assert_eq!(s.iterations, 0);
        assert!(s.converged);
    }
}

#[test]
fn progress_is_monotonic_in_target() {
    let opts = SolveOpts::default();
    for curve in curves() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let y = BezierSolver::solve_for_y(f64::from(i) / 100.0, &curve, opts);
            assert!((0.0..=1.0).contains(&y));
            assert!(y >= prev, "curve {curve:?} decreased at step {i}");
            prev = y;
        }
    }
}

#[test]
fn symmetric_curve_passes_through_center() {
    let curve = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
    let y = BezierSolver::solve_for_y(0.5, &curve, SolveOpts::default());
    assert!((y - 0.5).abs() < 1e-9);
}

#[test]
fn residual_is_within_precision_when_converged() {
    let opts = SolveOpts::default();
    for curve in curves() {
        for x in [0.05, 0.3, 0.5, 0.77, 0.99] {
            let s = BezierSolver::solve(&curve, x, opts);
            assert!(s.converged);
            assert!((curve.x_at(s.t) - x).abs() < opts.precision);
            assert_eq!(s.y, curve.y_at(s.t));
        }
    }
}

#[test]
fn increasing_budget_converges_monotonically() {
    let mut brackets = Vec::new();
    let mut values = Vec::new();
    for budget in 1..=40 {
        let opts = SolveOpts {
            precision: 1e-5,
            max_iterations: budget,
        };
        let s = BezierSolver::solve(&MATERIAL, 0.5, opts);
        brackets.push(s.bracket);
        values.push(s.y);
        if !s.converged {
            let width = s.bracket.1 - s.bracket.0;
            assert!(width <= 0.5_f64.powi(budget as i32) + 1e-15);
        }
    }

    for w in brackets.windows(2) {
        let (lo_a, hi_a) = w[0];
        let (lo_b, hi_b) = w[1];
        assert!(lo_b >= lo_a && hi_b <= hi_a, "bracket widened: {w:?}");
    }

    // Once the precision is met every larger budget returns the very same estimate.
    let stable = values[values.len() - 1];
    assert!(values[24..].iter().all(|&v| v == stable));
    assert!((stable - 0.775_561).abs() < 1e-4);

    let final_solution = BezierSolver::solve(&MATERIAL, 0.5, SolveOpts::default());
    assert!((MATERIAL.x_at(final_solution.t) - 0.5).abs() < 1e-5);
}

#[test]
fn exhausted_budget_returns_midpoint_estimate() {
    let opts = SolveOpts {
        precision: 1e-12,
        max_iterations: 3,
    };
    let s = BezierSolver::solve(&MATERIAL, 0.5, opts);
    assert!(!s.converged);
    assert_eq!(s.iterations, 3);
    assert_eq!(s.t, 0.5 * (s.bracket.0 + s.bracket.1));
    assert!((0.0..=1.0).contains(&s.y));
}

#[test]
fn overshooting_curves_are_clamped() {
    let back = CubicBezier::new(0.25, -0.6, 0.3, 1.6);
    let opts = SolveOpts::default();
    for i in 1..100 {
        let y = BezierSolver::solve_for_y(f64::from(i) / 100.0, &back, opts);
        assert!((0.0..=1.0).contains(&y));
    }
}

#[test]
fn options_are_validated() {
    assert!(SolveOpts::default().validate().is_ok());
    assert!(
        SolveOpts {
            precision: 0.0,
            ..SolveOpts::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        SolveOpts {
            precision: f64::NAN,
            ..SolveOpts::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        SolveOpts {
            max_iterations: 0,
            ..SolveOpts::default()
        }
        .validate()
        .is_err()
    );
}
