use crate::stats::percentile;
use benchplot_common::{BenchPlotError, PercentileRecord, Result};
use std::path::Path;
use tracing::info;

/// Samples loaded from one latency file.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencySamples {
    pub stem: String,
    pub thread_count: u32,
    /// Latencies in nanoseconds, in file order.
    pub samples: Vec<f64>,
}

impl LatencySamples {
    pub fn load(path: &Path) -> Result<Self> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let thread_count = thread_count_from_stem(&stem)?;
        let samples = load_samples(path)?;
        info!(path = %path.display(), thread_count, samples = samples.len(), "loaded latency samples");
        Ok(LatencySamples { stem, thread_count, samples })
    }

    pub fn percentiles(&self) -> PercentileRecord {
        PercentileRecord {
            thread_count: self.thread_count,
            p99: percentile(&self.samples, 99.0).unwrap_or_default(),
            p999: percentile(&self.samples, 99.9).unwrap_or_default(),
        }
    }
}

/// Thread count from the trailing `_`-separated token of a file stem:
/// `latency_4` -> 4.
pub fn thread_count_from_stem(stem: &str) -> Result<u32> {
    stem.rsplit('_')
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .filter(|&t| t > 0)
        .ok_or_else(|| BenchPlotError::MalformedFilename(stem.to_string()))
}

/// Read whitespace-separated finite numbers, skipping blank lines and `#`
/// comments.
pub fn load_samples(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).map_err(|e| BenchPlotError::io(path, e))?;
    let samples = parse_samples(&text).map_err(|(line, token)| BenchPlotError::MalformedSample {
        path: path.to_path_buf(),
        line,
        token,
    })?;
    if samples.is_empty() {
        return Err(BenchPlotError::EmptySamples(path.to_path_buf()));
    }
    Ok(samples)
}

/// Parse sample text; on failure returns the 1-based line number and the
/// offending token.
pub fn parse_samples(text: &str) -> std::result::Result<Vec<f64>, (usize, String)> {
    let mut samples = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| (idx + 1, token.to_string()))?;
            samples.push(value);
        }
    }
    Ok(samples)
}

/// Percentile records for every file, sorted by thread count.
pub fn tail_latencies(files: &[LatencySamples]) -> Vec<PercentileRecord> {
    let mut records: Vec<PercentileRecord> = files.iter().map(LatencySamples::percentiles).collect();
    records.sort_by_key(|r| r.thread_count);
    records
}
