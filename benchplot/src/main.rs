use benchplot::config::{Options, DEFAULT_BINS, DEFAULT_DPI};
use benchplot_common::BenchPlotError;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "benchplot", about = "Summarize benchmark results into tables and charts")]
struct Args {
    /// Throughput report (.json) and latency sample files (stem ending in _<threads>)
    paths: Vec<PathBuf>,

    /// Directory the CSV and PNG artifacts are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Chart resolution in dots per inch
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Number of bins in each latency histogram
    #[arg(long, default_value_t = DEFAULT_BINS, value_parser = parse_bins)]
    bins: usize,
}

fn parse_bins(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options = Options {
        output_dir: args.output_dir,
        dpi: args.dpi,
        bins: args.bins,
    };

    let mut stdout = std::io::stdout().lock();
    match benchplot::run(&args.paths, &options, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        // Usage text is printed bare, without the `error: ` prefix.
        Err(BenchPlotError::Usage) => {
            eprintln!("{}", BenchPlotError::Usage);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
