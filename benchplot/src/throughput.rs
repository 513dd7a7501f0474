use benchplot_common::{BenchPlotError, BenchmarkRecord, Result, TimeUnit};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const THREADS_MARKER: &str = "/threads:";

/// A Google-Benchmark-style JSON report.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub context: Option<RunContext>,
    pub benchmarks: Vec<BenchmarkEntry>,
}

/// Host and build details recorded alongside the measurements.
#[derive(Debug, Clone, Deserialize)]
pub struct RunContext {
    pub date: Option<String>,
    pub host_name: Option<String>,
    pub executable: Option<String>,
    pub num_cpus: Option<u32>,
    pub mhz_per_cpu: Option<u32>,
    pub library_build_type: Option<String>,
}

/// One raw entry of the `benchmarks` array.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    /// Absent on complexity aggregates (`BigO`, `RMS`).
    #[serde(default)]
    pub iterations: Option<u64>,
    #[serde(default)]
    pub real_time: Option<f64>,
    #[serde(default)]
    pub time_unit: Option<String>,
    /// Present only on aggregate rows (mean, median, stddev, BigO, RMS).
    #[serde(default)]
    pub aggregate_name: Option<String>,
}

impl BenchmarkEntry {
    pub fn is_aggregate(&self) -> bool {
        self.aggregate_name.is_some()
    }

    fn require<T>(&self, value: Option<T>, field: &str) -> Result<T> {
        value.ok_or_else(|| BenchPlotError::MissingField {
            benchmark: self.name.clone(),
            field: field.to_string(),
        })
    }
}

pub fn load_report(path: &Path) -> Result<Report> {
    let text = std::fs::read_to_string(path).map_err(|e| BenchPlotError::io(path, e))?;
    let report: Report = serde_json::from_str(&text).map_err(|e| BenchPlotError::InvalidReport {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(ctx) = &report.context {
        info!(
            date = ctx.date.as_deref().unwrap_or("?"),
            host = ctx.host_name.as_deref().unwrap_or("?"),
            executable = ctx.executable.as_deref().unwrap_or("?"),
            num_cpus = ctx.num_cpus.unwrap_or(0),
            mhz_per_cpu = ctx.mhz_per_cpu.unwrap_or(0),
            build = ctx.library_build_type.as_deref().unwrap_or("?"),
            "benchmark run context"
        );
    }
    Ok(report)
}

/// Split `BM_Foo/threads:8` into `("BM_Foo", 8)`. Names without a thread
/// suffix run on one thread and are returned unchanged.
///
/// When the suffix is present the name is cut at its first `/`, which also
/// drops any argument segments (`BM_Foo/64/threads:8` -> `BM_Foo`).
pub fn split_thread_suffix(name: &str) -> Result<(&str, u32)> {
    let Some(pos) = name.rfind(THREADS_MARKER) else {
        return Ok((name, 1));
    };
    let digits = name[pos + THREADS_MARKER.len()..]
        .split('/')
        .next()
        .unwrap_or_default();
    let threads = digits
        .parse::<u32>()
        .ok()
        .filter(|&t| t > 0)
        .ok_or_else(|| BenchPlotError::MalformedBenchmarkName(name.to_string()))?;
    let base = name.split('/').next().unwrap_or(name);
    Ok((base, threads))
}

/// Turn a report into per-run records sorted by `(benchmark_name, thread_count)`.
/// Aggregate rows are skipped.
pub fn summarize(report: &Report) -> Result<Vec<BenchmarkRecord>> {
    let mut records = Vec::with_capacity(report.benchmarks.len());
    for entry in &report.benchmarks {
        if entry.is_aggregate() {
            debug!(name = %entry.name, "skipping aggregate entry");
            continue;
        }
        let iterations = entry.require(entry.iterations, "iterations")?;
        let real_time = entry.require(entry.real_time, "real_time")?;
        let (name, threads) = split_thread_suffix(&entry.name)?;
        let unit_name = entry.time_unit.as_deref().unwrap_or("ns");
        let unit = TimeUnit::from_name(unit_name)
            .ok_or_else(|| BenchPlotError::UnsupportedUnit(unit_name.to_string()))?;
        let record = BenchmarkRecord::new(
            name,
            threads,
            iterations,
            real_time * unit.ns_multiplier(),
        )?;
        debug!(name, threads, ns_per_event = record.ns_per_event, "benchmark entry");
        records.push(record);
    }
    records.sort_by(|a, b| {
        a.benchmark_name
            .cmp(&b.benchmark_name)
            .then(a.thread_count.cmp(&b.thread_count))
    });
    Ok(records)
}

/// Group sorted records by benchmark name, keeping every thread count.
pub fn group_by_benchmark(records: &[BenchmarkRecord]) -> Vec<(&str, Vec<&BenchmarkRecord>)> {
    let mut groups: Vec<(&str, Vec<&BenchmarkRecord>)> = Vec::new();
    for record in records {
        match groups.last_mut() {
            Some((name, group)) if *name == record.benchmark_name => group.push(record),
            _ => groups.push((record.benchmark_name.as_str(), vec![record])),
        }
    }
    groups
}

/// Benchmark name with path separators replaced, usable as a file stem.
pub fn safe_file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
