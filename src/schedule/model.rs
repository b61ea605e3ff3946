use crate::animation::solver::SolveOpts;
use crate::foundation::core::Role;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::foundation::math::approx_le;
use crate::schedule::segment::AnimationSegment;

/// A `(head, tail)` pair of roles that together bound one visible stroke.
///
/// For a well-formed pair the head's progress is never below the tail's.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StrokePair {
    /// Leading edge (stroke end).
    pub head: Role,
    /// Trailing edge (stroke start).
    pub tail: Role,
}

/// Ordered set of segments sharing one cycle duration.
///
/// Invariants checked at construction:
///
/// - `total` is finite and `> 0`
/// - at least one segment, role names are unique
/// - every segment window ends within the cycle
/// - every stroke pair names two distinct, existing roles
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationSchedule {
    name: String,
    total: f64,
    segments: Vec<AnimationSegment>,
    pairs: Vec<StrokePair>,
}

impl AnimationSchedule {
    /// Build a validated schedule without stroke pairs.
    pub fn new(
        name: impl Into<String>,
        total: f64,
        segments: Vec<AnimationSegment>,
    ) -> StrokeResult<Self> {
        let name = name.into();
        if !total.is_finite() || total <= 0.0 {
            return Err(StrokeError::schedule(format!(
                "schedule '{name}' total duration must be finite and > 0 (got {total})"
            )));
        }
        if segments.is_empty() {
            return Err(StrokeError::schedule(format!(
                "schedule '{name}' must contain at least one segment"
            )));
        }
        for (i, seg) in segments.iter().enumerate() {
            if segments[..i].iter().any(|s| s.role() == seg.role()) {
                return Err(StrokeError::schedule(format!(
                    "schedule '{name}' has duplicate role '{}'",
                    seg.role()
                )));
            }
            if !approx_le(seg.end(), total) {
                return Err(StrokeError::schedule(format!(
                    "segment '{}' ends at {}s, past the {total}s cycle of schedule '{name}'",
                    seg.role(),
                    seg.end()
                )));
            }
        }
        Ok(Self {
            name,
            total,
            segments,
            pairs: Vec::new(),
        })
    }

    /// Attach stroke pairs, validating that both roles exist and differ.
    pub fn with_pairs(mut self, pairs: Vec<StrokePair>) -> StrokeResult<Self> {
        for pair in &pairs {
            if pair.head == pair.tail {
                return Err(StrokeError::schedule(format!(
                    "stroke pair uses '{}' as both head and tail",
                    pair.head
                )));
            }
            for role in [&pair.head, &pair.tail] {
                if self.segment(role.as_str()).is_none() {
                    return Err(StrokeError::schedule(format!(
                        "stroke pair references unknown role '{role}' in schedule '{}'",
                        self.name
                    )));
                }
            }
        }
        self.pairs = pairs;
        Ok(self)
    }

    /// Schedule name (used in logs and exports).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cycle duration in seconds.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Segments in declaration order.
    pub fn segments(&self) -> &[AnimationSegment] {
        &self.segments
    }

    /// Declared stroke pairs.
    pub fn pairs(&self) -> &[StrokePair] {
        &self.pairs
    }

    /// Roles in declaration order.
    pub fn roles(&self) -> impl ExactSizeIterator<Item = &Role> + '_ {
        self.segments.iter().map(AnimationSegment::role)
    }

    /// Find a segment by role name.
    pub fn segment(&self, role: &str) -> Option<&AnimationSegment> {
        self.segments.iter().find(|s| s.role() == role)
    }

    /// Progress of one role at `elapsed` seconds, or `None` for unknown roles.
    pub fn progress_at(&self, role: &str, elapsed: f64, opts: SolveOpts) -> Option<f64> {
        self.segment(role).map(|s| s.progress_at(elapsed, opts))
    }

    /// Map an unbounded elapsed time onto the repeating cycle.
    ///
    /// `elapsed` wraps modulo `total`. Negative and non-finite times map to the start of the cycle.
    pub fn cycle_time(&self, elapsed: f64) -> f64 {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0.0;
        }
        elapsed.rem_euclid(self.total)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/model.rs"]
mod tests;
