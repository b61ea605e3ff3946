use crate::animation::bezier::CubicBezier;
use crate::animation::ease::Easing;
use crate::animation::presets::preset;
use crate::foundation::core::{Role, TimeUnit};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::schedule::model::{AnimationSchedule, StrokePair};
use crate::schedule::segment::AnimationSegment;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON-facing schedule description.
///
/// This is the human-edited representation. It is validated into an [`AnimationSchedule`] by
/// [`ScheduleDef::to_schedule`]; nothing here is trusted until then.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleDef {
    /// Optional schedule name, defaults to `"custom"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit of `total` and every segment offset.
    #[serde(default)]
    pub unit: TimeUnit,
    /// Cycle duration.
    pub total: f64,
    /// Segments in output order.
    pub segments: Vec<SegmentDef>,
    /// Optional `(head, tail)` stroke pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<StrokePair>,
}

/// One segment of a [`ScheduleDef`]. Exactly one of `duration` and `end` must be set.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentDef {
    /// Output role.
    pub role: Role,
    /// Begin offset.
    #[serde(default)]
    pub begin: f64,
    /// Active duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Window end (alternative to `duration`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// Easing inside the window.
    #[serde(default)]
    pub easing: EasingDef,
}

/// Easing as written in a schedule file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingDef {
    /// `"linear"`
    #[default]
    Linear,
    /// `{ "cubic": [p1x, p1y, p2x, p2y] }`
    Cubic([f64; 4]),
    /// `{ "preset": "material-standard" }`
    Preset(String),
}

impl EasingDef {
    fn resolve(&self) -> StrokeResult<Easing> {
        match self {
            Self::Linear => Ok(Easing::Linear),
            Self::Cubic([a, b, c, d]) => Ok(Easing::CubicBezier(CubicBezier::try_new(
                *a, *b, *c, *d,
            )?)),
            Self::Preset(name) => preset(name)
                .map(Easing::CubicBezier)
                .ok_or_else(|| StrokeError::validation(format!("unknown curve preset '{name}'"))),
        }
    }
}

impl ScheduleDef {
    /// Parse a schedule definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StrokeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StrokeError::serde(format!("parse schedule JSON: {e}")))
    }

    /// Parse a schedule definition from a JSON string.
    pub fn from_json_str(s: &str) -> StrokeResult<Self> {
        serde_json::from_str(s).map_err(|e| StrokeError::serde(format!("parse schedule JSON: {e}")))
    }

    /// Parse a schedule definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StrokeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StrokeError::validation(format!("open schedule JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate and convert into a runtime schedule (times in seconds).
    pub fn to_schedule(&self) -> StrokeResult<AnimationSchedule> {
        let unit = self.unit;
        let mut segments = Vec::with_capacity(self.segments.len());
        for def in &self.segments {
            let easing = def.easing.resolve()?;
            let begin = unit.to_secs(def.begin);
            let seg = match (def.duration, def.end) {
                (Some(duration), None) => AnimationSegment::new(
                    def.role.clone(),
                    begin,
                    unit.to_secs(duration),
                    easing,
                )?,
                (None, Some(end)) => AnimationSegment::from_window(
                    def.role.clone(),
                    begin,
                    unit.to_secs(end),
                    easing,
                )?,
                _ => {
                    return Err(StrokeError::validation(format!(
                        "segment '{}' must set exactly one of 'duration' and 'end'",
                        def.role
                    )));
                }
            };
            segments.push(seg);
        }
        let name = self.name.as_deref().unwrap_or("custom");
        AnimationSchedule::new(name, unit.to_secs(self.total), segments)?
            .with_pairs(self.pairs.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/def.rs"]
mod tests;
