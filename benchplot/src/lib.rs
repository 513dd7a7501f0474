pub mod charts;
pub mod config;
pub mod inputs;
pub mod latency;
pub mod report;
pub mod stats;
pub mod throughput;

use benchplot_common::{
    BenchPlotError, BenchmarkRecord, PercentileRecord, Result, HISTOGRAM_CHART_SUFFIX, SUMMARY_CSV,
    TAIL_LATENCY_CHART, THROUGHPUT_CHART_PREFIX,
};
use charts::ChartStyle;
use config::Options;
use latency::LatencySamples;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub records: Vec<BenchmarkRecord>,
    pub tail_latencies: Vec<PercentileRecord>,
    /// Files written, in the order they were written.
    pub artifacts: Vec<PathBuf>,
}

fn console_error(err: std::io::Error) -> BenchPlotError {
    BenchPlotError::io("<stdout>", err)
}

/// Classify `paths`, then summarize the throughput report and analyse the
/// latency files, writing artifacts to `options.output_dir` and console text
/// to `out`.
///
/// Stops at the first error; artifacts written before it stay on disk.
pub fn run<P: AsRef<Path>, W: Write>(paths: &[P], options: &Options, out: &mut W) -> Result<RunSummary> {
    let inputs = inputs::classify(paths)?;
    std::fs::create_dir_all(&options.output_dir).map_err(|e| BenchPlotError::io(&options.output_dir, e))?;
    let style = ChartStyle::with_dpi(options.dpi);
    let mut summary = RunSummary::default();

    if let Some(report_path) = &inputs.report {
        summary.records = summarize_throughput(report_path, options, &style, out, &mut summary.artifacts)?;
    }
    if !inputs.latency_files.is_empty() {
        summary.tail_latencies =
            analyse_latency(&inputs.latency_files, options, &style, out, &mut summary.artifacts)?;
    }
    Ok(summary)
}

fn summarize_throughput<W: Write>(
    report_path: &Path,
    options: &Options,
    style: &ChartStyle,
    out: &mut W,
    artifacts: &mut Vec<PathBuf>,
) -> Result<Vec<BenchmarkRecord>> {
    let report = throughput::load_report(report_path)?;
    let records = throughput::summarize(&report)?;
    write!(out, "{}", report::summary_table(&records)).map_err(console_error)?;

    let csv_path = options.output_dir.join(SUMMARY_CSV);
    report::write_summary_csv(&records, &csv_path)?;
    info!(path = %csv_path.display(), rows = records.len(), "wrote summary");
    artifacts.push(csv_path);

    for (benchmark, group) in throughput::group_by_benchmark(&records) {
        let file_name = format!("{THROUGHPUT_CHART_PREFIX}{}.png", throughput::safe_file_stem(benchmark));
        let chart_path = options.output_dir.join(file_name);
        charts::throughput_bar_chart(benchmark, &group, &chart_path, style)?;
        info!(path = %chart_path.display(), benchmark, "wrote throughput chart");
        artifacts.push(chart_path);
    }

    writeln!(out, "Saved {SUMMARY_CSV} and {THROUGHPUT_CHART_PREFIX}*.png").map_err(console_error)?;
    Ok(records)
}

fn analyse_latency<W: Write>(
    files: &[PathBuf],
    options: &Options,
    style: &ChartStyle,
    out: &mut W,
    artifacts: &mut Vec<PathBuf>,
) -> Result<Vec<PercentileRecord>> {
    let mut loaded = Vec::with_capacity(files.len());
    for path in files {
        let samples = LatencySamples::load(path)?;
        let hist = stats::histogram(&samples.samples, options.bins)
            .ok_or_else(|| BenchPlotError::EmptySamples(path.clone()))?;
        let chart_path = options.output_dir.join(format!("{}{HISTOGRAM_CHART_SUFFIX}", samples.stem));
        charts::latency_histogram_chart(samples.thread_count, &hist, &chart_path, style)?;
        info!(path = %chart_path.display(), "wrote latency histogram");
        artifacts.push(chart_path);
        loaded.push(samples);
    }

    let tails = latency::tail_latencies(&loaded);
    write!(out, "{}", report::tail_latency_table(&tails)).map_err(console_error)?;

    let chart_path = options.output_dir.join(TAIL_LATENCY_CHART);
    charts::tail_latency_chart(&tails, &chart_path, style)?;
    info!(path = %chart_path.display(), "wrote tail latency chart");
    artifacts.push(chart_path);

    writeln!(out, "Saved latency_*{HISTOGRAM_CHART_SUFFIX} and {TAIL_LATENCY_CHART}").map_err(console_error)?;
    Ok(tails)
}
