//! Built-in schedules for the circular spinner and the linear indeterminate bar.

use crate::animation::bezier::CubicBezier;
use crate::animation::ease::Easing;
use crate::animation::presets::{
    LINE1_HEAD, LINE1_TAIL, LINE2_HEAD, LINE2_TAIL, MATERIAL_STANDARD,
};
use crate::foundation::core::Role;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::schedule::model::{AnimationSchedule, StrokePair};
use crate::schedule::segment::AnimationSegment;

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: [&str; 3] = ["circular", "linear", "linear-plain"];

/// Timing of the circular spinner.
///
/// The stroke end runs over `head_duration`. The stroke start waits `tail_delay`, then runs over
/// `head_duration + tail_delay`, and the cycle lasts one more `tail_delay` after that. The
/// defaults give the 1.8 s material spinner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircularTiming {
    /// Duration of the stroke-end segment, seconds.
    pub head_duration: f64,
    /// Delay before the stroke-start segment begins, seconds.
    pub tail_delay: f64,
    /// Curve shared by both strokes.
    pub curve: CubicBezier,
}

impl Default for CircularTiming {
    fn default() -> Self {
        Self {
            head_duration: 0.8,
            tail_delay: 0.5,
            curve: MATERIAL_STANDARD,
        }
    }
}

impl CircularTiming {
    /// Build the two-segment `end`/`start` schedule.
    pub fn schedule(&self) -> StrokeResult<AnimationSchedule> {
        let tail_duration = self.head_duration + self.tail_delay;
        let total = tail_duration + self.tail_delay;
        let end = Role::new("end")?;
        let start = Role::new("start")?;
        let easing = Easing::CubicBezier(self.curve);
        AnimationSchedule::new(
            "circular",
            total,
            vec![
                AnimationSegment::new(end.clone(), 0.0, self.head_duration, easing)?,
                AnimationSegment::new(start.clone(), self.tail_delay, tail_duration, easing)?,
            ],
        )?
        .with_pairs(vec![StrokePair {
            head: end,
            tail: start,
        }])
    }
}

/// Easing style of the linear indeterminate bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearStyle {
    /// Every segment is a linear ramp.
    Plain,
    /// Every segment uses its own cubic Bézier curve.
    #[default]
    Bezier,
}

/// One `[begin, end]` window of the linear bar, in milliseconds of the cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearWindow {
    /// Window start, milliseconds.
    pub begin_ms: f64,
    /// Window end, milliseconds.
    pub end_ms: f64,
    /// Curve used in [`LinearStyle::Bezier`].
    pub curve: CubicBezier,
}

/// Timing of the linear indeterminate bar: two lines, each with a head and a tail.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearTiming {
    /// Cycle length, milliseconds.
    pub cycle_ms: f64,
    /// Windows in `line1-head`, `line1-tail`, `line2-head`, `line2-tail` order.
    pub windows: [LinearWindow; 4],
    /// Easing style.
    pub style: LinearStyle,
}

impl Default for LinearTiming {
    fn default() -> Self {
        Self {
            cycle_ms: 1800.0,
            windows: [
                LinearWindow {
                    begin_ms: 0.0,
                    end_ms: 750.0,
                    curve: LINE1_HEAD,
                },
                LinearWindow {
                    begin_ms: 333.0,
                    end_ms: 1083.0,
                    curve: LINE1_TAIL,
                },
                LinearWindow {
                    begin_ms: 1000.0,
                    end_ms: 1567.0,
                    curve: LINE2_HEAD,
                },
                LinearWindow {
                    begin_ms: 1267.0,
                    end_ms: 1800.0,
                    curve: LINE2_TAIL,
                },
            ],
            style: LinearStyle::Bezier,
        }
    }
}

impl LinearTiming {
    const ROLES: [&'static str; 4] = ["line1-head", "line1-tail", "line2-head", "line2-tail"];

    /// Default timing with the given style.
    pub fn with_style(style: LinearStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Build the four-segment schedule.
    ///
    /// Windows are converted to fractions of the cycle and then to seconds, so the schedule's
    /// time axis matches the circular one.
    pub fn schedule(&self) -> StrokeResult<AnimationSchedule> {
        if !self.cycle_ms.is_finite() || self.cycle_ms <= 0.0 {
            return Err(StrokeError::validation(format!(
                "linear cycle must be finite and > 0 ms (got {})",
                self.cycle_ms
            )));
        }
        let total = self.cycle_ms / 1000.0;
        let mut segments = Vec::with_capacity(self.windows.len());
        for (name, w) in Self::ROLES.iter().zip(&self.windows) {
            let begin = w.begin_ms / self.cycle_ms * total;
            let end = w.end_ms / self.cycle_ms * total;
            let easing = match self.style {
                LinearStyle::Plain => Easing::Linear,
                LinearStyle::Bezier => Easing::CubicBezier(w.curve),
            };
            segments.push(AnimationSegment::from_window(
                Role::new(*name)?,
                begin,
                end,
                easing,
            )?);
        }

        let name = match self.style {
            LinearStyle::Plain => "linear-plain",
            LinearStyle::Bezier => "linear",
        };
        let pairs = vec![
            StrokePair {
                head: Role::new(Self::ROLES[0])?,
                tail: Role::new(Self::ROLES[1])?,
            },
            StrokePair {
                head: Role::new(Self::ROLES[2])?,
                tail: Role::new(Self::ROLES[3])?,
            },
        ];
        AnimationSchedule::new(name, total, segments)?.with_pairs(pairs)
    }
}

/// Default circular spinner schedule.
pub fn circular() -> StrokeResult<AnimationSchedule> {
    CircularTiming::default().schedule()
}

/// Default linear indeterminate schedule in the given style.
pub fn linear_indeterminate(style: LinearStyle) -> StrokeResult<AnimationSchedule> {
    LinearTiming::with_style(style).schedule()
}

/// Look up a built-in schedule by name (see [`BUILTIN_NAMES`]).
pub fn builtin(name: &str) -> StrokeResult<AnimationSchedule> {
    match name {
        "circular" => circular(),
        "linear" => linear_indeterminate(LinearStyle::Bezier),
        "linear-plain" => linear_indeterminate(LinearStyle::Plain),
        other => Err(StrokeError::validation(format!(
            "unknown built-in schedule '{other}' (expected one of: {})",
            BUILTIN_NAMES.join(", ")
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/builtin.rs"]
mod tests;
