use crate::foundation::core::Role;
use crate::schedule::model::{AnimationSchedule, StrokePair};
use smallvec::SmallVec;

/// Progress of one role at one sampled time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoleValue {
    /// Segment role.
    pub role: Role,
    /// Progress in `[0, 1]`.
    pub value: f64,
}

/// Values of every segment of a schedule at one time point, in segment declaration order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressSample {
    /// Time in seconds the sample was taken at.
    pub time: f64,
    /// Per-role progress values.
    pub values: SmallVec<[RoleValue; 4]>,
}

impl ProgressSample {
    /// Progress for `role`, if the schedule has it.
    pub fn get(&self, role: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|rv| rv.role == *role)
            .map(|rv| rv.value)
    }

    /// Stroke span described by a `(head, tail)` pair.
    pub fn span(&self, pair: &StrokePair) -> Option<StrokeSpan> {
        Some(StrokeSpan {
            start: self.get(pair.tail.as_str())?,
            end: self.get(pair.head.as_str())?,
        })
    }
}

/// Fractional start/end of one drawn stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeSpan {
    /// Stroke start (tail progress).
    pub start: f64,
    /// Stroke end (head progress).
    pub end: f64,
}

impl StrokeSpan {
    /// Visible fraction of the path, never negative.
    pub fn visible(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// One role's values across a sampled timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressSeries {
    /// Segment role.
    pub role: Role,
    /// Values aligned with [`SampledSeries::times`].
    pub values: Vec<f64>,
}

/// Column-oriented view of samples: one series per role over a shared time axis.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampledSeries {
    /// Sample times in seconds, ascending when produced by `ProgressSampler::sample`.
    pub times: Vec<f64>,
    /// Series in schedule declaration order.
    pub series: Vec<ProgressSeries>,
}

impl SampledSeries {
    /// Transpose row samples. Roles are taken from the first sample.
    pub fn from_samples(samples: &[ProgressSample]) -> Self {
        let Some(first) = samples.first() else {
            return Self::default();
        };
        let times = samples.iter().map(|s| s.time).collect();
        let series = first
            .values
            .iter()
            .enumerate()
            .map(|(i, rv)| ProgressSeries {
                role: rv.role.clone(),
                values: samples
                    .iter()
                    .map(|s| s.values.get(i).map_or(0.0, |v| v.value))
                    .collect(),
            })
            .collect();
        Self { times, series }
    }

    /// Values for `role`.
    pub fn series(&self, role: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.role == *role)
            .map(|s| s.values.as_slice())
    }
}

/// A sampled time at which a stroke's head trailed its tail.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FillOrderViolation {
    /// Sample time in seconds.
    pub time: f64,
    /// Offending pair.
    pub pair: StrokePair,
    /// Head progress.
    pub head: f64,
    /// Tail progress.
    pub tail: f64,
}

/// Check every declared stroke pair of `schedule` against `samples`.
///
/// The evaluator never enforces head ≥ tail; this is the diagnostic for schedule authors.
pub fn check_fill_order(
    schedule: &AnimationSchedule,
    samples: &[ProgressSample],
) -> Vec<FillOrderViolation> {
    let mut out = Vec::new();
    for sample in samples {
        for pair in schedule.pairs() {
            let Some(span) = sample.span(pair) else {
                continue;
            };
            if span.end < span.start {
                out.push(FillOrderViolation {
                    time: sample.time,
                    pair: pair.clone(),
                    head: span.end,
                    tail: span.start,
                });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/sample.rs"]
mod tests;
