use crate::foundation::error::{StrokeError, StrokeResult};

/// Number of grid steps used when checking that `x(t)` never decreases.
const MONOTONIC_GRID_STEPS: u32 = 256;

/// Unit cubic Bézier easing curve.
///
/// The endpoints are pinned at `(0, 0)` and `(1, 1)`; only the two inner control points are
/// stored. The x axis is normalized time, the y axis is progress. Serialized as the array
/// `[p1x, p1y, p2x, p2y]`; deserialization goes through [`CubicBezier::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    p1x: f64,
    p1y: f64,
    p2x: f64,
    p2y: f64,
}

impl CubicBezier {
    /// Build a curve without any validation.
    ///
    /// The caller is responsible for `x(t)` being non-decreasing on `[0, 1]`; the bisection solver
    /// silently converges to an arbitrary root otherwise. Use [`CubicBezier::try_new`] for
    /// untrusted input.
    pub const fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        Self { p1x, p1y, p2x, p2y }
    }

    /// Build a curve, rejecting non-finite control points and curves whose `x(t)` is not
    /// monotonically non-decreasing.
    pub fn try_new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> StrokeResult<Self> {
        if ![p1x, p1y, p2x, p2y].iter().all(|v| v.is_finite()) {
            return Err(StrokeError::curve(
                "cubic bezier control points must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&p1x) || !(0.0..=1.0).contains(&p2x) {
            return Err(StrokeError::curve(format!(
                "cubic bezier x control points must lie in [0, 1] (got p1x={p1x}, p2x={p2x})"
            )));
        }
        let curve = Self::new(p1x, p1y, p2x, p2y);
        if !curve.is_x_monotonic() {
            return Err(StrokeError::curve(format!(
                "cubic bezier ({p1x}, {p1y}, {p2x}, {p2y}) has a decreasing x(t)"
            )));
        }
        Ok(curve)
    }

    /// Control points as `[p1x, p1y, p2x, p2y]`.
    pub fn control_points(&self) -> [f64; 4] {
        [self.p1x, self.p1y, self.p2x, self.p2y]
    }

    /// Position `(x(t), y(t))` on the curve.
    ///
    /// `t` is not clamped; values outside `[0, 1]` are extrapolated and carry no meaning.
    #[inline]
    pub fn evaluate(&self, t: f64) -> (f64, f64) {
        (self.x_at(t), self.y_at(t))
    }

    /// Normalized-time coordinate at parameter `t`.
    #[inline]
    pub fn x_at(&self, t: f64) -> f64 {
        unit_bernstein(t, self.p1x, self.p2x)
    }

    /// Progress coordinate at parameter `t`.
    #[inline]
    pub fn y_at(&self, t: f64) -> f64 {
        unit_bernstein(t, self.p1y, self.p2y)
    }

    /// Derivative `dx/dt` at parameter `t`.
    #[inline]
    pub fn dx_dt(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * self.p1x + 6.0 * u * t * (self.p2x - self.p1x) + 3.0 * t * t * (1.0 - self.p2x)
    }

    /// Return `true` when `x(t)` is non-decreasing over a fixed grid on `[0, 1]`.
    pub fn is_x_monotonic(&self) -> bool {
        let mut prev = 0.0;
        for i in 1..=MONOTONIC_GRID_STEPS {
            let x = self.x_at(f64::from(i) / f64::from(MONOTONIC_GRID_STEPS));
            if x < prev {
                return false;
            }
            prev = x;
        }
        true
    }

    /// Return `true` when the curve degenerates to the identity ease.
    pub fn is_identity(&self) -> bool {
        self.p1x == self.p1y && self.p2x == self.p2y
    }
}

impl TryFrom<[f64; 4]> for CubicBezier {
    type Error = StrokeError;

    fn try_from(p: [f64; 4]) -> StrokeResult<Self> {
        Self::try_new(p[0], p[1], p[2], p[3])
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(curve: CubicBezier) -> Self {
        curve.control_points()
    }
}

/// Cubic Bernstein polynomial with `p0 = 0` and `p3 = 1`.
#[inline]
fn unit_bernstein(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bezier.rs"]
mod tests;
