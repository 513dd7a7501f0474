use crate::config::{BASE_DPI, DEFAULT_DPI, FIGURE_SIZE_IN};
use crate::stats;
use benchplot_common::{BenchPlotError, BenchmarkRecord, PercentileRecord, Result};
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const FONT: &str = "sans-serif";
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const P999_COLOR: RGBColor = RGBColor(255, 127, 14);

/// Size and layout of one figure. Passed to every render call; there is no
/// process-wide plotting configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    /// Scale margins and label areas with the DPI instead of using fixed
    /// pixel counts.
    pub auto_layout: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle::with_dpi(DEFAULT_DPI)
    }
}

impl ChartStyle {
    pub fn with_dpi(dpi: u32) -> Self {
        ChartStyle {
            width_in: FIGURE_SIZE_IN.0,
            height_in: FIGURE_SIZE_IN.1,
            dpi,
            auto_layout: true,
        }
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * self.dpi as f64).round().max(1.0) as u32;
        (px(self.width_in), px(self.height_in))
    }

    fn scale(&self) -> f64 {
        self.dpi as f64 / BASE_DPI as f64
    }

    /// Font size in pixels for a size given in points at the base DPI.
    fn font(&self, size: f64) -> f64 {
        size * self.scale()
    }

    /// Pixel length for `base` pixels at the base DPI. Without auto layout
    /// the length stays unscaled.
    fn px(&self, base: u32) -> u32 {
        if self.auto_layout {
            (base as f64 * self.scale()).round() as u32
        } else {
            base
        }
    }
}

fn render_error(path: &Path, err: Box<dyn Error>) -> BenchPlotError {
    BenchPlotError::Render { path: path.to_path_buf(), message: err.to_string() }
}

/// Upper bound for a linear axis that leaves headroom above `max`.
fn headroom(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Bar chart of events/sec per thread count for one benchmark.
pub fn throughput_bar_chart(
    benchmark: &str,
    records: &[&BenchmarkRecord],
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    draw_throughput(benchmark, records, path, style).map_err(|e| render_error(path, e))
}

fn draw_throughput(
    benchmark: &str,
    records: &[&BenchmarkRecord],
    path: &Path,
    style: &ChartStyle,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, style.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = headroom(records.iter().map(|r| r.events_per_sec).fold(0.0, f64::max));
    let n = records.len() as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{benchmark} - throughput vs threads"), (FONT, style.font(16.0)))
        .margin(style.px(10))
        .x_label_area_size(style.px(45))
        .y_label_area_size(style.px(90))
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)?;

    let thread_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => records
            .get(*i as usize)
            .map(|r| r.thread_count.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    let count_label = |v: &f64| crate::report::format_thousands(*v, 0);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(records.len().max(1))
        .x_label_formatter(&thread_label)
        .y_label_formatter(&count_label)
        .x_desc("Worker Threads")
        .y_desc("Throughput (events/sec)")
        .label_style((FONT, style.font(10.0)))
        .axis_desc_style((FONT, style.font(12.0)))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(style.px(12))
            .data(records.iter().enumerate().map(|(i, r)| (i as u32, r.events_per_sec))),
    )?;

    root.present()?;
    Ok(())
}

/// Log-scale frequency histogram of one latency file.
pub fn latency_histogram_chart(
    thread_count: u32,
    hist: &stats::Histogram,
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    draw_histogram(thread_count, hist, path, style).map_err(|e| render_error(path, e))
}

fn draw_histogram(
    thread_count: u32,
    hist: &stats::Histogram,
    path: &Path,
    style: &ChartStyle,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, style.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    // Bars start below one so single-sample bins stay visible on a log axis.
    let floor = 0.5;
    let top = (hist.max_count().max(1) as f64) * 2.0;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Latency histogram - {thread_count} thread(s)"), (FONT, style.font(16.0)))
        .margin(style.px(10))
        .x_label_area_size(style.px(45))
        .y_label_area_size(style.px(70))
        .build_cartesian_2d(hist.lo..hist.hi, (floor..top).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Latency (ns)")
        .y_desc("Frequency (log scale)")
        .label_style((FONT, style.font(10.0)))
        .axis_desc_style((FONT, style.font(12.0)))
        .draw()?;

    chart.draw_series(
        hist.bins()
            .filter(|bin| bin.count > 0)
            .map(|bin| Rectangle::new([(bin.lo, floor), (bin.hi, bin.count as f64)], BAR_COLOR.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// p99 and p99.9 latency against thread count.
pub fn tail_latency_chart(records: &[PercentileRecord], path: &Path, style: &ChartStyle) -> Result<()> {
    draw_tail_latency(records, path, style).map_err(|e| render_error(path, e))
}

fn draw_tail_latency(
    records: &[PercentileRecord],
    path: &Path,
    style: &ChartStyle,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, style.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = records.iter().map(|r| r.thread_count).min().unwrap_or(1) as f64;
    let x_max = records.iter().map(|r| r.thread_count).max().unwrap_or(1) as f64;
    let x_pad = ((x_max - x_min) * 0.05).max(0.5);
    let y_max = headroom(records.iter().map(|r| r.p99.max(r.p999)).fold(0.0, f64::max));

    let mut chart = ChartBuilder::on(&root)
        .caption("Tail latency vs threads", (FONT, style.font(16.0)))
        .margin(style.px(10))
        .x_label_area_size(style.px(45))
        .y_label_area_size(style.px(90))
        .build_cartesian_2d((x_min - x_pad)..(x_max + x_pad), 0f64..y_max)?;

    let thread_label = |v: &f64| {
        if (v - v.round()).abs() < 1e-9 {
            format!("{}", v.round() as i64)
        } else {
            String::new()
        }
    };
    chart
        .configure_mesh()
        .x_label_formatter(&thread_label)
        .x_desc("Worker Threads")
        .y_desc("Latency (ns)")
        .label_style((FONT, style.font(10.0)))
        .axis_desc_style((FONT, style.font(12.0)))
        .draw()?;

    let marker = style.px(4);
    let legend_len = style.px(20) as i32;
    let series: [(&str, RGBColor, fn(&PercentileRecord) -> f64); 2] =
        [("p99", BAR_COLOR, |r| r.p99), ("p99.9", P999_COLOR, |r| r.p999)];
    for (label, color, value) in series {
        let points: Vec<(f64, f64)> = records.iter().map(|r| (r.thread_count as f64, value(r))).collect();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(style.px(1).max(1))))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], color));
        chart.draw_series(points.iter().map(|&p| Circle::new(p, marker, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .label_font((FONT, style.font(10.0)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
