/// Percentile `q` (0..=100) of `data` using linear interpolation between the
/// two closest ranks: rank = q/100 * (n - 1).
///
/// Returns `None` for an empty slice.
pub fn percentile(data: &[f64], q: f64) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Equal-width bin counts over `[lo, hi]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<u64>,
}

/// One bin's edges and count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: u64,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| Bin {
            lo: self.lo + width * i as f64,
            hi: self.lo + width * (i + 1) as f64,
            count,
        })
    }
}

/// Bin `data` into `bins` equal-width buckets spanning its min and max.
///
/// Every bin is half-open except the last, which also takes the maximum. When
/// all values are equal the span is widened to `[v - 0.5, v + 0.5]`.
/// Returns `None` for empty input or zero bins.
pub fn histogram(data: &[f64], bins: usize) -> Option<Histogram> {
    if data.is_empty() || bins == 0 {
        return None;
    }
    let (mut lo, mut hi) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &v in data {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Some(Histogram { lo, hi, counts })
}
