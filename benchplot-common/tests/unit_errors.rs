use benchplot_common::BenchPlotError;
use std::path::PathBuf;

#[test]
fn test_usage_message() {
    assert_eq!(
        BenchPlotError::Usage.to_string(),
        "Provide at least one results file (JSON or latency CSV)."
    );
}

#[test]
fn test_missing_file_display() {
    let err = BenchPlotError::MissingFile(PathBuf::from("results/bus.json"));
    assert_eq!(err.to_string(), "No such file: results/bus.json");
}

#[test]
fn test_error_equality() {
    let err1 = BenchPlotError::UnsupportedUnit("min".to_string());
    let err2 = BenchPlotError::UnsupportedUnit("min".to_string());
    let err3 = BenchPlotError::UnsupportedUnit("h".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}

#[test]
fn test_unsupported_unit_display() {
    let err = BenchPlotError::UnsupportedUnit("min".to_string());
    assert_eq!(err.to_string(), "Unsupported time unit: \"min\"");
}

#[test]
fn test_malformed_filename_display() {
    let err = BenchPlotError::MalformedFilename("latency_final".to_string());
    assert_eq!(
        err.to_string(),
        "Latency file name has no trailing thread count: \"latency_final\""
    );
}

#[test]
fn test_malformed_sample_display() {
    let err = BenchPlotError::MalformedSample {
        path: PathBuf::from("latency_2.csv"),
        line: 7,
        token: "abc".to_string(),
    };
    assert_eq!(err.to_string(), "latency_2.csv:7: not a finite number: \"abc\"");
}

#[test]
fn test_missing_field_display() {
    let err = BenchPlotError::MissingField { benchmark: "BM_Bus".to_string(), field: "real_time".to_string() };
    assert_eq!(err.to_string(), "Benchmark \"BM_Bus\" is missing field `real_time`");
}

#[test]
fn test_io_helper_keeps_path_and_message() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = BenchPlotError::io("out/summary_table.csv", io);
    assert_eq!(
        err,
        BenchPlotError::Io { path: PathBuf::from("out/summary_table.csv"), message: "denied".to_string() }
    );
    assert_eq!(err.to_string(), "I/O error on out/summary_table.csv: denied");
}
