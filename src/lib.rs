//! Stroke timing evaluates the easing schedules behind circular and linear progress indicators.
//!
//! The API is a pipeline of small, pure steps:
//!
//! - Describe a curve with [`CubicBezier`] and invert it with [`BezierSolver`]
//! - Arrange eased [`AnimationSegment`]s into an [`AnimationSchedule`], either a built-in one or
//!   a [`ScheduleDef`] loaded from JSON
//! - Drive the schedule with a [`ProgressSampler`] and stream the result into a [`SampleSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod export;
pub(crate) mod sampling;
pub(crate) mod schedule;

pub use crate::foundation::core::{Role, TimeUnit};
pub use crate::foundation::error::{StrokeError, StrokeResult};

pub use crate::animation::bezier::CubicBezier;
pub use crate::animation::ease::Easing;
pub use crate::animation::presets::{
    CurvePreset, EASE_IN_OUT, LINE1_HEAD, LINE1_TAIL, LINE2_HEAD, LINE2_TAIL, MATERIAL_STANDARD,
    preset, presets,
};
pub use crate::animation::solver::{
    BezierSolver, DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION, Solution, SolveOpts,
};
pub use crate::export::sink::{
    CsvSink, InMemorySink, JsonSink, SampleSink, SinkConfig, export_samples,
};
pub use crate::sampling::sample::{
    FillOrderViolation, ProgressSample, ProgressSeries, RoleValue, SampledSeries, StrokeSpan,
    check_fill_order,
};
pub use crate::sampling::sampler::{ProgressSampler, SamplerOpts, sample_grid};
pub use crate::schedule::builtin::{
    BUILTIN_NAMES, CircularTiming, LinearStyle, LinearTiming, LinearWindow, builtin, circular,
    linear_indeterminate,
};
pub use crate::schedule::def::{EasingDef, ScheduleDef, SegmentDef};
pub use crate::schedule::model::{AnimationSchedule, StrokePair};
pub use crate::schedule::segment::AnimationSegment;
pub use crate::schedule::transition::{DETERMINATE_DURATION_SECS, ValueTransition};
