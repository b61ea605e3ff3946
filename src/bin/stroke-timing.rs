use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

const DEFAULT_SAMPLES: usize = 1000;

#[derive(Parser, Debug)]
#[command(name = "stroke-timing", version)]
struct Cli {
    /// Raise the log level (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a schedule over one cycle and write CSV or JSON.
    Sample(SampleArgs),
    /// Invert a cubic Bézier curve at one or more x values.
    Solve(SolveArgs),
    /// List the named curve presets.
    Presets,
    /// Sample a schedule and report times where a stroke head trails its tail.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ScheduleSource {
    /// Built-in schedule (`circular`, `linear`, `linear-plain`).
    #[arg(long)]
    preset: Option<String>,

    /// Schedule definition JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SolverArgs {
    /// Stop bisecting once |x(t) - x| falls below this.
    #[arg(long, default_value_t = stroke_timing::DEFAULT_PRECISION)]
    precision: f64,

    /// Maximum bisection steps per inversion.
    #[arg(long, default_value_t = stroke_timing::DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,
}

impl SolverArgs {
    fn opts(&self) -> anyhow::Result<stroke_timing::SolveOpts> {
        let opts = stroke_timing::SolveOpts {
            precision: self.precision,
            max_iterations: self.max_iterations,
        };
        opts.validate()?;
        Ok(opts)
    }
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    source: ScheduleSource,

    /// Number of equally spaced samples over the cycle, endpoints included.
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Output path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Evaluate samples on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    solver: SolverArgs,
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Control points as `p1x,p1y,p2x,p2y`.
    #[arg(long, allow_hyphen_values = true)]
    curve: String,

    /// Input progress values.
    #[arg(long = "x", required = true, num_args = 1.., allow_negative_numbers = true)]
    xs: Vec<f64>,

    #[command(flatten)]
    solver: SolverArgs,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    source: ScheduleSource,

    /// Number of equally spaced samples over the cycle, endpoints included.
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Solve(args) => cmd_solve(args),
        Command::Presets => cmd_presets(),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_schedule(source: &ScheduleSource) -> anyhow::Result<stroke_timing::AnimationSchedule> {
    match (&source.preset, &source.in_path) {
        (Some(name), _) => Ok(stroke_timing::builtin(name)?),
        (None, Some(path)) => {
            let def = stroke_timing::ScheduleDef::from_path(path)?;
            def.to_schedule()
                .with_context(|| format!("build schedule from '{}'", path.display()))
        }
        (None, None) => anyhow::bail!("one of --preset or --in is required"),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<ExitCode> {
    let schedule = load_schedule(&args.source)?;
    let sampler = stroke_timing::ProgressSampler::new(stroke_timing::SamplerOpts {
        solve: args.solver.opts()?,
        parallel: args.parallel,
        threads: args.threads,
    })?;
    let samples = sampler.sample(&schedule, args.samples)?;

    let out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut sink: Box<dyn stroke_timing::SampleSink> = match args.format {
        OutputFormat::Csv => Box::new(stroke_timing::CsvSink::new(out)),
        OutputFormat::Json => Box::new(stroke_timing::JsonSink::new(out)),
    };
    stroke_timing::export_samples(sink.as_mut(), &schedule, &samples)?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<ExitCode> {
    let [p1x, p1y, p2x, p2y] = parse_curve(&args.curve)?;
    let curve = stroke_timing::CubicBezier::try_new(p1x, p1y, p2x, p2y)?;
    let opts = args.solver.opts()?;

    println!("x,y,t,iterations,converged");
    for x in args.xs {
        let s = stroke_timing::BezierSolver::solve(&curve, x, opts);
        println!("{x},{},{},{},{}", s.y, s.t, s.iterations, s.converged);
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_curve(s: &str) -> anyhow::Result<[f64; 4]> {
    let values = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .with_context(|| format!("parse control point '{v}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    <[f64; 4]>::try_from(values)
        .map_err(|v| anyhow::anyhow!("--curve expects 4 values, got {}", v.len()))
}

fn cmd_presets() -> anyhow::Result<ExitCode> {
    for p in stroke_timing::presets() {
        let [p1x, p1y, p2x, p2y] = p.curve.control_points();
        println!(
            "{:<18} ({p1x}, {p1y}, {p2x}, {p2y})  {}",
            p.name, p.description
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let schedule = load_schedule(&args.source)?;
    let sampler = stroke_timing::ProgressSampler::default();
    let samples = sampler.sample(&schedule, args.samples)?;
    let violations = stroke_timing::check_fill_order(&schedule, &samples);

    if violations.is_empty() {
        eprintln!(
            "{}: {} pair(s) ok over {} samples",
            schedule.name(),
            schedule.pairs().len(),
            samples.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!(
        "{}: {} fill-order violation(s):",
        schedule.name(),
        violations.len()
    );
    for v in &violations {
        eprintln!(
            "  t={:.6}  {}={:.6} < {}={:.6}",
            v.time, v.pair.head, v.head, v.pair.tail, v.tail
        );
    }
    Ok(ExitCode::FAILURE)
}
