use std::path::PathBuf;
use thiserror::Error;

pub const SUMMARY_CSV: &str = "summary_table.csv";
pub const TAIL_LATENCY_CHART: &str = "latency_p99_vs_threads.png";
pub const THROUGHPUT_CHART_PREFIX: &str = "throughput_";
pub const HISTOGRAM_CHART_SUFFIX: &str = "_hist.png";

/// Error types for BenchPlot operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BenchPlotError {
    #[error("Provide at least one results file (JSON or latency CSV).")]
    Usage,

    #[error("No such file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("I/O error on {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Invalid benchmark report {}: {message}", .path.display())]
    InvalidReport { path: PathBuf, message: String },

    #[error("Unsupported time unit: {0:?}")]
    UnsupportedUnit(String),

    #[error("Malformed thread suffix in benchmark name: {0:?}")]
    MalformedBenchmarkName(String),

    #[error("Benchmark {benchmark:?} is missing field `{field}`")]
    MissingField { benchmark: String, field: String },

    #[error("Benchmark {benchmark:?} has non-positive time per event: {ns_per_event} ns")]
    NonPositiveTime { benchmark: String, ns_per_event: f64 },

    #[error("Latency file name has no trailing thread count: {0:?}")]
    MalformedFilename(String),

    #[error("{}:{line}: not a finite number: {token:?}", .path.display())]
    MalformedSample { path: PathBuf, line: usize, token: String },

    #[error("No latency samples in {}", .0.display())]
    EmptySamples(PathBuf),

    #[error("Failed to render {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },
}

impl BenchPlotError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        BenchPlotError::Io { path: path.into(), message: err.to_string() }
    }
}

/// Result type for BenchPlot operations
pub type Result<T> = std::result::Result<T, BenchPlotError>;

/// Time unit of a benchmark entry's `real_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ns" => Some(TimeUnit::Nanoseconds),
            "us" => Some(TimeUnit::Microseconds),
            "ms" => Some(TimeUnit::Milliseconds),
            "s" => Some(TimeUnit::Seconds),
            _ => None,
        }
    }

    pub fn as_name(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }

    /// Multiplier that converts a value in this unit to nanoseconds.
    pub fn ns_multiplier(&self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1.0,
            TimeUnit::Microseconds => 1e3,
            TimeUnit::Milliseconds => 1e6,
            TimeUnit::Seconds => 1e9,
        }
    }
}

/// One non-aggregate benchmark run, normalized to nanoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub benchmark_name: String,
    pub thread_count: u32,
    pub iterations: u64,
    pub ns_per_event: f64,
    pub events_per_sec: f64,
}

impl BenchmarkRecord {
    /// Build a record from a per-event time, deriving `events_per_sec`.
    ///
    /// Fails when the time is zero, negative, or not finite.
    pub fn new(
        benchmark_name: impl Into<String>,
        thread_count: u32,
        iterations: u64,
        ns_per_event: f64,
    ) -> Result<Self> {
        let benchmark_name = benchmark_name.into();
        if !(ns_per_event.is_finite() && ns_per_event > 0.0) {
            return Err(BenchPlotError::NonPositiveTime { benchmark: benchmark_name, ns_per_event });
        }
        Ok(BenchmarkRecord {
            benchmark_name,
            thread_count,
            iterations,
            ns_per_event,
            events_per_sec: 1e9 / ns_per_event,
        })
    }
}

/// Tail latencies of one latency sample file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileRecord {
    pub thread_count: u32,
    pub p99: f64,
    pub p999: f64,
}
