use benchplot::stats::{histogram, percentile};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_percentile_linear_interpolation() {
    // rank = q/100 * (n - 1); for 1..=100, p99 -> rank 98.01 -> 99 + 0.01 * (100 - 99)
    let data: Vec<f64> = (1..=100).map(f64::from).collect();
    assert!(close(percentile(&data, 99.0).unwrap(), 99.01));
    assert!(close(percentile(&data, 99.9).unwrap(), 99.901));
    assert!(close(percentile(&data, 50.0).unwrap(), 50.5));
    assert!(close(percentile(&data, 0.0).unwrap(), 1.0));
    assert!(close(percentile(&data, 100.0).unwrap(), 100.0));
}

#[test]
fn test_percentile_unsorted_input() {
    // sorted: [100, 200, 300, 400, 500]; p50 -> rank 2 -> 300; p99 -> rank 3.96 -> 496
    let data = [500.0, 100.0, 300.0, 200.0, 400.0];
    assert!(close(percentile(&data, 50.0).unwrap(), 300.0));
    assert!(close(percentile(&data, 99.0).unwrap(), 496.0));
}

#[test]
fn test_percentile_single_and_empty() {
    assert_eq!(percentile(&[42.0], 99.9), Some(42.0));
    assert_eq!(percentile(&[], 99.0), None);
}

#[test]
fn test_histogram_spans_min_to_max() {
    let data: Vec<f64> = (0..10).map(f64::from).collect();
    let h = histogram(&data, 5).unwrap();
    assert_eq!(h.lo, 0.0);
    assert_eq!(h.hi, 9.0);
    assert_eq!(h.counts.len(), 5);
    assert_eq!(h.counts.iter().sum::<u64>(), 10);
    // The maximum lands in the last bin, which is closed on the right.
    assert_eq!(*h.counts.last().unwrap(), 2);
}

#[test]
fn test_histogram_bins_cover_range() {
    let h = histogram(&[1.0, 2.0, 3.0, 4.0], 3).unwrap();
    let bins: Vec<_> = h.bins().collect();
    assert_eq!(bins.len(), 3);
    assert_eq!(bins[0].lo, 1.0);
    assert!(close(bins[2].hi, 4.0));
    assert!(close(h.bin_width(), 1.0));
    assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![1, 1, 2]);
    assert_eq!(h.max_count(), 2);
}

#[test]
fn test_histogram_constant_samples_widen_span() {
    let h = histogram(&[7.0, 7.0, 7.0], 100).unwrap();
    assert_eq!(h.lo, 6.5);
    assert_eq!(h.hi, 7.5);
    assert_eq!(h.counts.iter().sum::<u64>(), 3);
    assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
}

#[test]
fn test_histogram_empty_or_zero_bins() {
    assert!(histogram(&[], 10).is_none());
    assert!(histogram(&[1.0, 2.0], 0).is_none());
}
