use crate::config::REPORT_EXTENSION;
use benchplot_common::{BenchPlotError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Command-line paths split by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    /// The throughput report, if any. When several are given the last one wins.
    pub report: Option<PathBuf>,
    /// Latency sample files, in argument order.
    pub latency_files: Vec<PathBuf>,
}

/// Validate that every path names an existing file, then sort them into the
/// report and latency sample files.
///
/// Every path is checked before any is classified.
pub fn classify<P: AsRef<Path>>(paths: &[P]) -> Result<Inputs> {
    if paths.is_empty() {
        return Err(BenchPlotError::Usage);
    }
    if let Some(missing) = paths.iter().map(AsRef::as_ref).find(|p| !p.is_file()) {
        return Err(BenchPlotError::MissingFile(missing.to_path_buf()));
    }

    let mut inputs = Inputs::default();
    for path in paths.iter().map(AsRef::as_ref) {
        if is_report(path) {
            if let Some(previous) = inputs.report.replace(path.to_path_buf()) {
                warn!(ignored = %previous.display(), using = %path.display(), "multiple reports given; last one wins");
            }
        } else {
            debug!(path = %path.display(), "latency sample file");
            inputs.latency_files.push(path.to_path_buf());
        }
    }
    Ok(inputs)
}

fn is_report(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == REPORT_EXTENSION)
}
