use std::path::PathBuf;

/// Resolution every chart is saved at unless overridden on the command line.
pub const DEFAULT_DPI: u32 = 300;

/// Number of equal-width bins in each latency histogram.
pub const DEFAULT_BINS: usize = 100;

/// Figure size in inches (width, height).
pub const FIGURE_SIZE_IN: (f64, f64) = (6.4, 4.8);

/// DPI at which font sizes and margins are specified; larger DPIs scale them up.
pub const BASE_DPI: u32 = 100;

/// Extension that marks a path as a throughput report.
pub const REPORT_EXTENSION: &str = "json";

/// Options for one reporter run.
#[derive(Debug, Clone)]
pub struct Options {
    pub output_dir: PathBuf,
    pub dpi: u32,
    pub bins: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            output_dir: PathBuf::from("."),
            dpi: DEFAULT_DPI,
            bins: DEFAULT_BINS,
        }
    }
}
