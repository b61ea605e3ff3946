use crate::animation::ease::Easing;
use crate::animation::solver::SolveOpts;
use crate::foundation::core::Role;
use crate::foundation::error::{StrokeError, StrokeResult};

/// One scheduled progress stream (a stroke head or tail) inside an animation cycle.
///
/// Outside its active window `[begin, begin + duration]` the segment holds `0` before and `1`
/// after, so the same rule serves every stroke of every indicator.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationSegment {
    role: Role,
    begin: f64,
    duration: f64,
    easing: Easing,
}

impl AnimationSegment {
    /// Create a validated segment. Offsets are in seconds.
    ///
    /// `begin` must be finite and `>= 0`; `duration` must be finite and `> 0`.
    pub fn new(role: Role, begin: f64, duration: f64, easing: Easing) -> StrokeResult<Self> {
        if !begin.is_finite() || begin < 0.0 {
            return Err(StrokeError::validation(format!(
                "segment '{role}' begin offset must be finite and >= 0 (got {begin})"
            )));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(StrokeError::validation(format!(
                "segment '{role}' duration must be finite and > 0 (got {duration})"
            )));
        }
        Ok(Self {
            role,
            begin,
            duration,
            easing,
        })
    }

    /// Create a segment from its `[begin, end]` window.
    pub fn from_window(role: Role, begin: f64, end: f64, easing: Easing) -> StrokeResult<Self> {
        Self::new(role, begin, end - begin, easing)
    }

    /// Output role of this segment.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Begin offset in seconds from the start of the cycle.
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// Active duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// End of the active window in seconds.
    pub fn end(&self) -> f64 {
        self.begin + self.duration
    }

    /// Easing applied inside the active window.
    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    /// Return `true` when `elapsed` lies strictly inside the active window.
    pub fn is_active(&self, elapsed: f64) -> bool {
        elapsed > self.begin && elapsed < self.end()
    }

    /// Progress in `[0, 1]` at `elapsed` seconds into the cycle.
    pub fn progress_at(&self, elapsed: f64, opts: SolveOpts) -> f64 {
        if elapsed.is_nan() || elapsed <= self.begin {
            return 0.0;
        }
        if elapsed >= self.end() {
            return 1.0;
        }
        let normalized = (elapsed - self.begin) / self.duration;
        self.easing.apply(normalized, opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/segment.rs"]
mod tests;
