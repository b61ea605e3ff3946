use crate::animation::solver::SolveOpts;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::sampling::sample::{ProgressSample, RoleValue, SampledSeries};
use crate::schedule::model::AnimationSchedule;
use rayon::prelude::*;

/// Sampling options.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SamplerOpts {
    /// Root-finding options forwarded to every curve inversion.
    pub solve: SolveOpts,
    /// Evaluate time points on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Drives schedules across a timeline and produces progress samples.
///
/// Sampling is pure: the same schedule and arguments always give bit-identical output, serial
/// or parallel.
#[derive(Clone, Debug, Default)]
pub struct ProgressSampler {
    opts: SamplerOpts,
}

impl ProgressSampler {
    /// Create a sampler, validating its options.
    pub fn new(opts: SamplerOpts) -> StrokeResult<Self> {
        opts.solve.validate()?;
        if opts.threads == Some(0) {
            return Err(StrokeError::validation(
                "sampler 'threads' must be >= 1 when set",
            ));
        }
        Ok(Self { opts })
    }

    /// Options this sampler was built with.
    pub fn opts(&self) -> &SamplerOpts {
        &self.opts
    }

    /// Evaluate every segment at `time` seconds into the cycle.
    pub fn sample_at(&self, schedule: &AnimationSchedule, time: f64) -> ProgressSample {
        let values = schedule
            .segments()
            .iter()
            .map(|seg| RoleValue {
                role: seg.role().clone(),
                value: seg.progress_at(time, self.opts.solve),
            })
            .collect();
        ProgressSample { time, values }
    }

    /// Evaluate at an unbounded elapsed time, wrapping it into the repeating cycle.
    ///
    /// The returned sample keeps the unwrapped `elapsed` as its time.
    pub fn sample_cycle_at(&self, schedule: &AnimationSchedule, elapsed: f64) -> ProgressSample {
        let mut sample = self.sample_at(schedule, schedule.cycle_time(elapsed));
        sample.time = elapsed;
        sample
    }

    /// `sample_count` equally spaced samples over `[0, total]`, endpoints included.
    #[tracing::instrument(skip(self, schedule), fields(schedule = schedule.name()))]
    pub fn sample(
        &self,
        schedule: &AnimationSchedule,
        sample_count: usize,
    ) -> StrokeResult<Vec<ProgressSample>> {
        let times = sample_grid(schedule.total(), sample_count);
        self.sample_times(schedule, &times)
    }

    /// Samples at explicit times, in the given order.
    pub fn sample_times(
        &self,
        schedule: &AnimationSchedule,
        times: &[f64],
    ) -> StrokeResult<Vec<ProgressSample>> {
        let out = if self.opts.parallel {
            let pool = build_thread_pool(self.opts.threads)?;
            pool.install(|| {
                times
                    .par_iter()
                    .map(|&t| self.sample_at(schedule, t))
                    .collect::<Vec<_>>()
            })
        } else {
            times.iter().map(|&t| self.sample_at(schedule, t)).collect()
        };
        tracing::debug!(
            samples = out.len(),
            segments = schedule.segments().len(),
            parallel = self.opts.parallel,
            "sampled schedule"
        );
        Ok(out)
    }

    /// [`ProgressSampler::sample`] transposed into one series per role.
    pub fn sample_series(
        &self,
        schedule: &AnimationSchedule,
        sample_count: usize,
    ) -> StrokeResult<SampledSeries> {
        let samples = self.sample(schedule, sample_count)?;
        Ok(SampledSeries::from_samples(&samples))
    }
}

/// Equally spaced times over `[0, total]`.
///
/// `0` points give an empty grid, `1` point gives `[0]`; otherwise the last point is exactly
/// `total`.
pub fn sample_grid(total: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = n - 1;
            (0..n)
                .map(|i| {
                    if i == last {
                        total
                    } else {
                        total * (i as f64) / (last as f64)
                    }
                })
                .collect()
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> StrokeResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StrokeError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/sampler.rs"]
mod tests;
