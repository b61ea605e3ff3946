use crate::animation::bezier::CubicBezier;
use crate::animation::solver::{BezierSolver, SolveOpts};
use crate::foundation::math::clamp01;

/// Easing applied to a segment's normalized local time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Identity ramp: progress equals normalized time.
    Linear,
    /// Cubic Bézier timing curve, inverted numerically.
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Apply this easing to normalized time `x`, clamped into `[0, 1]` first.
    pub fn apply(&self, x: f64, opts: SolveOpts) -> f64 {
        let x = clamp01(x);
        match self {
            Self::Linear => x,
            Self::CubicBezier(curve) => BezierSolver::solve_for_y(x, curve, opts),
        }
    }

    /// The underlying curve, if any.
    pub fn curve(&self) -> Option<&CubicBezier> {
        match self {
            Self::Linear => None,
            Self::CubicBezier(curve) => Some(curve),
        }
    }
}

impl From<CubicBezier> for Easing {
    fn from(curve: CubicBezier) -> Self {
        Self::CubicBezier(curve)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
