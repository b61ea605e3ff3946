use crate::animation::ease::Easing;
use crate::animation::presets::EASE_IN_OUT;
use crate::animation::solver::SolveOpts;
use crate::foundation::core::Role;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::foundation::math::lerp;
use crate::schedule::segment::AnimationSegment;

/// Default duration of a determinate progress change, seconds.
pub const DETERMINATE_DURATION_SECS: f64 = 0.15;

/// Animated change of a determinate progress value (stroke end moving from `from` to `to`).
///
/// Uses the same segment rule as indeterminate schedules, starting at elapsed `0`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ValueTransition {
    from: f64,
    to: f64,
    segment: AnimationSegment,
}

impl ValueTransition {
    /// Transition over [`DETERMINATE_DURATION_SECS`] with the `ease-in-out` curve.
    ///
    /// A missing previous value starts the transition from `0`.
    pub fn new(from: Option<f64>, to: f64) -> StrokeResult<Self> {
        Self::with_timing(
            from.unwrap_or(0.0),
            to,
            DETERMINATE_DURATION_SECS,
            Easing::CubicBezier(EASE_IN_OUT),
        )
    }

    /// Transition with explicit duration and easing.
    pub fn with_timing(from: f64, to: f64, duration: f64, easing: Easing) -> StrokeResult<Self> {
        for (label, v) in [("from", from), ("to", to)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(StrokeError::validation(format!(
                    "transition '{label}' value must lie in [0, 1] (got {v})"
                )));
            }
        }
        let segment = AnimationSegment::new(Role::new("end")?, 0.0, duration, easing)?;
        Ok(Self { from, to, segment })
    }

    /// Starting value.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Target value.
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Transition duration in seconds.
    pub fn duration(&self) -> f64 {
        self.segment.duration()
    }

    /// Value at `elapsed` seconds after the change was requested.
    pub fn value_at(&self, elapsed: f64, opts: SolveOpts) -> f64 {
        lerp(self.from, self.to, self.segment.progress_at(elapsed, opts))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/transition.rs"]
mod tests;
