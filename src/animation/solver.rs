use crate::animation::bezier::CubicBezier;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::foundation::math::clamp01;

/// Default absolute tolerance on `|x(t) - x_target|`.
pub const DEFAULT_PRECISION: f64 = 1e-5;

/// Default bisection budget. Thirty halvings shrink the bracket below `1e-9`.
pub const DEFAULT_MAX_ITERATIONS: u32 = 30;

/// Root-finding options for [`BezierSolver`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolveOpts {
    /// Absolute tolerance on the x residual. Must be finite and `> 0`.
    pub precision: f64,
    /// Maximum number of bisection steps. Must be `>= 1`.
    pub max_iterations: u32,
}

impl Default for SolveOpts {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolveOpts {
    /// Validate option ranges.
    pub fn validate(&self) -> StrokeResult<()> {
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(StrokeError::validation(format!(
                "solver precision must be finite and > 0 (got {})",
                self.precision
            )));
        }
        if self.max_iterations == 0 {
            return Err(StrokeError::validation(
                "solver max_iterations must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Outcome of inverting a curve at one x target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// Curve parameter whose x coordinate approximates the target.
    pub t: f64,
    /// Progress at `t`, clamped to `[0, 1]`.
    pub y: f64,
    /// Bisection steps taken (`0` on the endpoint fast paths).
    pub iterations: u32,
    /// `false` when the budget ran out before the precision was met.
    pub converged: bool,
    /// Bracket `[low, high]` that `t` was taken from.
    pub bracket: (f64, f64),
}

impl Solution {
    fn endpoint(v: f64) -> Self {
        Self {
            t: v,
            y: v,
            iterations: 0,
            converged: true,
            bracket: (v, v),
        }
    }
}

/// Stateless x→y inversion of unit cubic Bézier curves.
///
/// The search assumes `x(t)` is non-decreasing on `[0, 1]`. That precondition is not checked
/// here; curves built with [`CubicBezier::try_new`] satisfy it.
pub struct BezierSolver;

impl BezierSolver {
    /// Find the progress `y` whose curve x coordinate matches `x_target`.
    ///
    /// Targets at or below `0` (and NaN) return exactly `0`, targets at or above `1` return exactly
    /// `1`. Running out of iterations is not an error: the midpoint of the final bracket is used.
    pub fn solve(curve: &CubicBezier, x_target: f64, opts: SolveOpts) -> Solution {
        if x_target.is_nan() || x_target <= 0.0 {
            return Solution::endpoint(0.0);
        }
        if x_target >= 1.0 {
            return Solution::endpoint(1.0);
        }

        let budget = opts.max_iterations.max(1);
        let (mut low, mut high) = (0.0_f64, 1.0_f64);
        for i in 0..budget {
            let mid = 0.5 * (low + high);
            let x = curve.x_at(mid);
            if (x - x_target).abs() < opts.precision {
                return Solution {
                    t: mid,
                    y: clamp01(curve.y_at(mid)),
                    iterations: i + 1,
                    converged: true,
                    bracket: (low, high),
                };
            }
            if x < x_target {
                low = mid;
            } else {
                high = mid;
            }
        }

        let mid = 0.5 * (low + high);
        tracing::trace!(
            x_target,
            budget,
            residual = (curve.x_at(mid) - x_target).abs(),
            "bisection budget exhausted, using midpoint estimate"
        );
        Solution {
            t: mid,
            y: clamp01(curve.y_at(mid)),
            iterations: budget,
            converged: false,
            bracket: (low, high),
        }
    }

    /// Shorthand for [`BezierSolver::solve`] returning only the progress value.
    #[inline]
    pub fn solve_for_y(x_target: f64, curve: &CubicBezier, opts: SolveOpts) -> f64 {
        Self::solve(curve, x_target, opts).y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/solver.rs"]
mod tests;
