use benchplot::latency::{load_samples, parse_samples, tail_latencies, thread_count_from_stem, LatencySamples};
use benchplot_common::{BenchPlotError, PercentileRecord};
use std::fs;

#[test]
fn test_thread_count_from_stem() {
    assert_eq!(thread_count_from_stem("latency_4"), Ok(4));
    assert_eq!(thread_count_from_stem("bus_latency_16"), Ok(16));
    assert_eq!(thread_count_from_stem("8"), Ok(8));
}

#[test]
fn test_thread_count_from_stem_rejects_missing_token() {
    for stem in ["latency", "latency_", "latency_x", "latency_0", "latency4"] {
        assert_eq!(
            thread_count_from_stem(stem),
            Err(BenchPlotError::MalformedFilename(stem.to_string())),
            "{stem:?}"
        );
    }
}

#[test]
fn test_parse_samples_skips_blank_and_comment_lines() {
    let text = "# latency ns\n120\n\n  95.5 \n1e3\n";
    assert_eq!(parse_samples(text), Ok(vec![120.0, 95.5, 1000.0]));
}

#[test]
fn test_parse_samples_reports_line_and_token() {
    assert_eq!(parse_samples("1\n2\nthree\n"), Err((3, "three".to_string())));
}

#[test]
fn test_parse_samples_rejects_infinite_values() {
    assert_eq!(parse_samples("100\ninf\n200\n"), Err((2, "inf".to_string())));
    assert_eq!(parse_samples("100\n-inf\n"), Err((2, "-inf".to_string())));
    assert_eq!(parse_samples("1 infinity\n"), Err((1, "infinity".to_string())));
}

#[test]
fn test_parse_samples_rejects_nan() {
    assert_eq!(parse_samples("1\nnan\n"), Err((2, "nan".to_string())));
    assert_eq!(parse_samples("NaN\n"), Err((1, "NaN".to_string())));
}

#[test]
fn test_load_samples_non_finite_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latency_2.csv");
    fs::write(&path, "100\nNaN\n200\n").unwrap();
    assert_eq!(
        load_samples(&path),
        Err(BenchPlotError::MalformedSample { path: path.clone(), line: 2, token: "NaN".to_string() })
    );
}

#[test]
fn test_load_samples_empty_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latency_1.csv");
    fs::write(&path, "# nothing recorded\n").unwrap();
    assert_eq!(load_samples(&path), Err(BenchPlotError::EmptySamples(path.clone())));
}

#[test]
fn test_load_samples_malformed_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latency_1.csv");
    fs::write(&path, "10\n20,30\n").unwrap();
    assert_eq!(
        load_samples(&path),
        Err(BenchPlotError::MalformedSample { path: path.clone(), line: 2, token: "20,30".to_string() })
    );
}

#[test]
fn test_latency_file_name_yields_thread_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latency_4.csv");
    let body: String = (1..=100).map(|v| format!("{v}\n")).collect();
    fs::write(&path, body).unwrap();

    let loaded = LatencySamples::load(&path).unwrap();
    assert_eq!(loaded.stem, "latency_4");
    assert_eq!(loaded.thread_count, 4);
    assert_eq!(loaded.samples.len(), 100);

    let pct = loaded.percentiles();
    assert_eq!(pct.thread_count, 4);
    assert!((pct.p99 - 99.01).abs() < 1e-9);
    assert!((pct.p999 - 99.901).abs() < 1e-9);
}

#[test]
fn test_malformed_file_name_fails_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latency_final.csv");
    fs::write(&path, "not even numbers").unwrap();
    assert_eq!(
        LatencySamples::load(&path),
        Err(BenchPlotError::MalformedFilename("latency_final".to_string()))
    );
}

#[test]
fn test_tail_latencies_sorted_by_threads() {
    let make = |threads: u32, samples: Vec<f64>| LatencySamples {
        stem: format!("latency_{threads}"),
        thread_count: threads,
        samples,
    };
    let files = vec![make(8, vec![80.0]), make(1, vec![10.0]), make(4, vec![40.0])];
    assert_eq!(
        tail_latencies(&files),
        vec![
            PercentileRecord { thread_count: 1, p99: 10.0, p999: 10.0 },
            PercentileRecord { thread_count: 4, p99: 40.0, p999: 40.0 },
            PercentileRecord { thread_count: 8, p99: 80.0, p999: 80.0 },
        ]
    );
}
