use benchplot_common::{BenchPlotError, BenchmarkRecord, PercentileRecord, Result};
use std::fmt::Write as _;
use std::path::Path;

const SUMMARY_HEADER: [&str; 5] = ["benchmark", "threads", "iter", "ns_per_event", "events_per_sec"];
const TAIL_HEADER: [&str; 3] = ["threads", "p99_ns", "p999_ns"];

/// Format `value` with `decimals` fractional digits and `,` between
/// thousands groups: `1234567.25` with 1 decimal -> `1,234,567.2`.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Render rows as right-aligned, space-separated columns under `header`.
fn render_columns(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    for cells in std::iter::once(&header_cells).chain(rows) {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// Console table of throughput records.
pub fn summary_table(records: &[BenchmarkRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.benchmark_name.clone(),
                r.thread_count.to_string(),
                r.iterations.to_string(),
                format_thousands(r.ns_per_event, 1),
                format_thousands(r.events_per_sec, 0),
            ]
        })
        .collect();
    render_columns(&SUMMARY_HEADER, &rows)
}

/// Console table of tail latencies.
pub fn tail_latency_table(records: &[PercentileRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.thread_count.to_string(),
                format_thousands(r.p99, 1),
                format_thousands(r.p999, 1),
            ]
        })
        .collect();
    render_columns(&TAIL_HEADER, &rows)
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// CSV text with one row per record under the summary header. Floats keep a
/// fractional part (`5000.0`).
pub fn summary_csv(records: &[BenchmarkRecord]) -> String {
    let mut out = SUMMARY_HEADER.join(",");
    out.push('\n');
    for r in records {
        let _ = writeln!(
            out,
            "{},{},{},{:?},{:?}",
            csv_field(&r.benchmark_name),
            r.thread_count,
            r.iterations,
            r.ns_per_event,
            r.events_per_sec,
        );
    }
    out
}

pub fn write_summary_csv(records: &[BenchmarkRecord], path: &Path) -> Result<()> {
    std::fs::write(path, summary_csv(records)).map_err(|e| BenchPlotError::io(path, e))
}
