//! Property-based tests for the binning invariants
//!
//! Partitions are generated from random positive widths so boundaries are
//! strictly increasing, then reduced with random deletions and rebuilds.

mod common;

use common::{assert_contiguous, assert_ranked, EPSILON};
use proptest::prelude::*;
use smart_binning::{math::log_add_exp, Additive, Bin, Binning, ByValue, BySize, LogAdditive};

fn boundaries_from_widths(start: f64, widths: &[f64]) -> Vec<f64> {
    let mut boundaries = Vec::with_capacity(widths.len() + 1);
    let mut edge = start;
    boundaries.push(edge);
    for w in widths {
        edge += w;
        boundaries.push(edge);
    }
    boundaries
}

fn partition() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (2usize..60).prop_flat_map(|n| {
        (
            -1000.0f64..1000.0,
            prop::collection::vec(0.5f64..100.0, n),
            prop::collection::vec(0.0f64..50.0, n),
        )
            .prop_map(|(start, widths, values)| (boundaries_from_widths(start, &widths), values))
    })
}

fn span(boundaries: &[f64]) -> (f64, f64) {
    (boundaries[0], boundaries[boundaries.len() - 1])
}

proptest! {
    // Property: construction yields contiguous bins and a sorted ranked list
    #[test]
    fn prop_construction_invariants((x, y) in partition()) {
        let by_size = Binning::new(&x, &y, Additive, BySize).unwrap();
        assert_contiguous(&by_size, span(&x));
        assert_ranked(&by_size);

        let by_value = Binning::new(&x, &y, Additive, ByValue).unwrap();
        assert_contiguous(&by_value, span(&x));
        assert_ranked(&by_value);
        prop_assert_eq!(by_value.values(), y);
    }

    // Property: each delete of the smallest bin removes exactly one bin
    #[test]
    fn prop_delete_smallest_until_one_left((x, y) in partition()) {
        let mut binning = Binning::new(&x, &y, Additive, BySize).unwrap();
        let total: f64 = y.iter().sum();
        let mut expected = binning.len();
        while expected > 1 {
            prop_assert!(binning.delete(binning.smallest()).is_some());
            expected -= 1;
            prop_assert_eq!(binning.len(), expected);
            assert_contiguous(&binning, span(&x));
            assert_ranked(&binning);
        }
        prop_assert!(binning.delete(binning.smallest()).is_none());
        prop_assert_eq!(binning.len(), 1);
        prop_assert!((binning.values()[0] - total).abs() < EPSILON * total.max(1.0));
    }

    // Property: deleting arbitrary bins keeps both lists consistent
    #[test]
    fn prop_arbitrary_deletes_keep_invariants(
        (x, y) in partition(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..40)
    ) {
        let mut binning = Binning::new(&x, &y, Additive, ByValue).unwrap();
        for pick in picks {
            if binning.len() == 1 {
                break;
            }
            let live: Vec<_> = binning.iter().map(|(id, _)| id).collect();
            binning.delete(*pick.get(&live));
            assert_contiguous(&binning, span(&x));
            assert_ranked(&binning);
        }
    }

    // Property: delete then update keeps coverage and never grows the count
    #[test]
    fn prop_delete_then_update((x, y) in partition(), pick in any::<prop::sample::Index>()) {
        let mut binning = Binning::new(&x, &y, Additive, BySize).unwrap();
        let before = binning.len();
        let live: Vec<_> = binning.iter().map(|(id, _)| id).collect();
        binning.delete(*pick.get(&live));
        match binning.update() {
            Ok(()) => {
                prop_assert!(binning.len() <= before);
                prop_assert_eq!(binning.capacity(), binning.len());
                assert_contiguous(&binning, span(&x));
                assert_ranked(&binning);
            }
            // Only a two-bin partition can drop below the minimum
            Err(err) => {
                prop_assert!(err.is_invalid_input());
                prop_assert_eq!(before, 2);
            }
        }
    }

    // Property: filter_bins leaves min(n, count) bins covering the same span
    #[test]
    fn prop_filter_bins_count_and_coverage((x, y) in partition(), n in 2usize..80) {
        let mut binning = Binning::new(&x, &y, Additive, BySize).unwrap();
        let count = binning.len();
        binning.filter_bins(n).unwrap();
        prop_assert_eq!(binning.len(), n.min(count));
        assert_contiguous(&binning, span(&x));
        assert_ranked(&binning);

        let before: f64 = y.iter().sum();
        let after: f64 = binning.values().iter().sum();
        prop_assert!((before - after).abs() < EPSILON * before.max(1.0) * count as f64);
    }

    // Property: log-domain merging preserves total mass
    #[test]
    fn prop_log_filter_preserves_mass((x, y) in partition(), n in 2usize..10) {
        let logs: Vec<f64> = y.iter().map(|v| v.ln()).collect();
        let mut binning = Binning::new(&x, &logs, LogAdditive, ByValue).unwrap();
        binning.filter_bins(n).unwrap();
        assert_ranked(&binning);

        let before: f64 = y.iter().sum();
        let after: f64 = binning.values().iter().map(|v| v.exp()).sum();
        prop_assert!((before - after).abs() <= 1e-9 * before.max(1.0));
    }

    // Property: log-domain combination matches the naive formula
    #[test]
    fn prop_log_sum_matches_naive(a in -30.0f64..30.0, b in -30.0f64..30.0) {
        let naive = (a.exp() + b.exp()).ln();
        prop_assert!((log_add_exp(a, b) - naive).abs() < 1e-9);
        prop_assert_eq!(log_add_exp(f64::NEG_INFINITY, b), b);
        prop_assert_eq!(log_add_exp(a, f64::NEG_INFINITY), a);
    }

    // Property: rebuilt handles never resolve in the old arena's place
    #[test]
    fn prop_rebuild_invalidates_handles((x, y) in partition()) {
        let mut binning = Binning::new(&x, &y, Additive, BySize).unwrap();
        let handles: Vec<_> = binning.iter().map(|(id, _)| id).collect();
        binning.update().unwrap();
        prop_assert!(handles.iter().all(|&id| binning.get(id).is_none()));
        let bins: Vec<&Bin> = binning.iter().map(|(_, bin)| bin).collect();
        prop_assert_eq!(bins.len(), y.len());
    }
}
