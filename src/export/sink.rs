use crate::foundation::core::Role;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::sampling::sample::ProgressSample;
use crate::schedule::model::AnimationSchedule;
use std::io::Write;

/// Configuration provided to a [`SampleSink`] before any sample is pushed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Schedule name.
    pub schedule: String,
    /// Cycle duration in seconds.
    pub total: f64,
    /// Column roles in schedule order.
    pub roles: Vec<Role>,
}

impl SinkConfig {
    /// Describe `schedule` for a sink.
    pub fn for_schedule(schedule: &AnimationSchedule) -> Self {
        Self {
            schedule: schedule.name().to_owned(),
            total: schedule.total(),
            roles: schedule.roles().cloned().collect(),
        }
    }
}

/// Sink contract for consuming samples in timeline order.
///
/// Ordering contract: `push_sample` is called in the order the samples were produced.
pub trait SampleSink {
    /// Called once before any samples are pushed.
    fn begin(&mut self, cfg: &SinkConfig) -> StrokeResult<()>;
    /// Push one sample.
    fn push_sample(&mut self, sample: &ProgressSample) -> StrokeResult<()>;
    /// Called once after the last sample is pushed.
    fn end(&mut self) -> StrokeResult<()>;
}

/// Stream `samples` of `schedule` through `sink`.
pub fn export_samples(
    sink: &mut dyn SampleSink,
    schedule: &AnimationSchedule,
    samples: &[ProgressSample],
) -> StrokeResult<()> {
    sink.begin(&SinkConfig::for_schedule(schedule))?;
    for sample in samples {
        sink.push_sample(sample)?;
    }
    sink.end()
}

fn io_err(what: &str, e: std::io::Error) -> StrokeError {
    StrokeError::Other(anyhow::Error::new(e).context(what.to_owned()))
}

/// Writes `time,<role>,...` rows.
///
/// Values are written in column order of the configured roles; a role missing from a sample
/// leaves an empty cell.
pub struct CsvSink<W: Write> {
    out: W,
    roles: Vec<Role>,
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            roles: Vec::new(),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleSink for CsvSink<W> {
    fn begin(&mut self, cfg: &SinkConfig) -> StrokeResult<()> {
        self.roles = cfg.roles.clone();
        let mut header = String::from("time");
        for role in &self.roles {
            header.push(',');
            header.push_str(role.as_str());
        }
        writeln!(self.out, "{header}").map_err(|e| io_err("write csv header", e))
    }

    fn push_sample(&mut self, sample: &ProgressSample) -> StrokeResult<()> {
        let mut row = sample.time.to_string();
        for role in &self.roles {
            row.push(',');
            if let Some(v) = sample.get(role.as_str()) {
                row.push_str(&v.to_string());
            }
        }
        writeln!(self.out, "{row}").map_err(|e| io_err("write csv row", e))
    }

    fn end(&mut self) -> StrokeResult<()> {
        self.out.flush().map_err(|e| io_err("flush csv output", e))
    }
}

#[derive(serde::Serialize)]
struct JsonDocument<'a> {
    #[serde(flatten)]
    cfg: &'a SinkConfig,
    samples: &'a [ProgressSample],
}

/// Buffers samples and writes one pretty JSON document on `end`.
pub struct JsonSink<W: Write> {
    out: W,
    cfg: Option<SinkConfig>,
    samples: Vec<ProgressSample>,
}

impl<W: Write> JsonSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            cfg: None,
            samples: Vec::new(),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleSink for JsonSink<W> {
    fn begin(&mut self, cfg: &SinkConfig) -> StrokeResult<()> {
        self.cfg = Some(cfg.clone());
        self.samples.clear();
        Ok(())
    }

    fn push_sample(&mut self, sample: &ProgressSample) -> StrokeResult<()> {
        self.samples.push(sample.clone());
        Ok(())
    }

    fn end(&mut self) -> StrokeResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| StrokeError::evaluation("json sink ended before begin"))?;
        let doc = JsonDocument {
            cfg,
            samples: &self.samples,
        };
        serde_json::to_writer_pretty(&mut self.out, &doc)
            .map_err(|e| StrokeError::serde(format!("write samples JSON: {e}")))?;
        writeln!(self.out).map_err(|e| io_err("write json output", e))?;
        self.out.flush().map_err(|e| io_err("flush json output", e))
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    samples: Vec<ProgressSample>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured samples.
    pub fn samples(&self) -> &[ProgressSample] {
        &self.samples
    }

    /// Whether `end` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SampleSink for InMemorySink {
    fn begin(&mut self, cfg: &SinkConfig) -> StrokeResult<()> {
        self.cfg = Some(cfg.clone());
        self.samples.clear();
        self.finished = false;
        Ok(())
    }

    fn push_sample(&mut self, sample: &ProgressSample) -> StrokeResult<()> {
        self.samples.push(sample.clone());
        Ok(())
    }

    fn end(&mut self) -> StrokeResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
