//! Shared utilities for integration tests

#![allow(dead_code)]

use smart_binning::{Bin, Binning, Combine, Rank};

pub const EPSILON: f64 = 1e-10;

/// Boundaries of the reference partition (13 bins)
pub const REFERENCE_BOUNDARIES: [f64; 14] = [
    -100.0, -99.0, 1.0, 2.0, 3.0, 6.0, 8.0, 19.0, 21.0, 120.0, 300.0, 350.0, 355.0, 380.0,
];

/// Values `1..=13` for the reference partition
pub fn reference_values() -> Vec<f64> {
    (1..=13).map(f64::from).collect()
}

/// Route `tracing` output to the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `(lower, upper)` of a bin
pub fn interval(bin: &Bin) -> (f64, f64) {
    (bin.lower(), bin.upper())
}

/// Check that the positional list tiles `span` without gaps or overlaps
pub fn assert_contiguous<C, R>(binning: &Binning<f64, C, R>, span: (f64, f64))
where
    C: Combine<f64>,
    R: Rank<f64>,
{
    let bins: Vec<&Bin> = binning.iter().map(|(_, bin)| bin).collect();
    assert_eq!(bins.len(), binning.len(), "positional list misses live bins");
    assert_eq!(bins[0].lower(), span.0);
    assert_eq!(bins[bins.len() - 1].upper(), span.1);
    for pair in bins.windows(2) {
        assert_eq!(pair[0].upper(), pair[1].lower(), "gap or overlap at {}", pair[0]);
        assert!(pair[0].lower() < pair[1].lower(), "not increasing at {}", pair[0]);
    }
    assert!(bins.iter().all(|bin| !bin.is_deleted()));
}

/// Check that the ranked list holds every live bin in non-decreasing order
pub fn assert_ranked<C, R>(binning: &Binning<f64, C, R>)
where
    C: Combine<f64>,
    R: Rank<f64>,
{
    let bins: Vec<&Bin> = binning.iter_ranked().map(|(_, bin)| bin).collect();
    assert_eq!(bins.len(), binning.len(), "ranked list misses live bins");
    for pair in bins.windows(2) {
        assert!(
            !binning.ranking().less(pair[1], pair[0]),
            "{} ranked before {}",
            pair[0],
            pair[1]
        );
    }
}
