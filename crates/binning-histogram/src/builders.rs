//! Builder-style configuration for binnings

use binning_core::{BinFloat, Result};

use crate::binning::Binning;
use crate::strategies::{Additive, ByValue, BySize, LogAdditive};
use crate::traits::{Combine, Rank};

/// Builder for configuring and creating a [`Binning`]
///
/// Defaults: all values zero, [`Additive`] combination, [`BySize`] ranking
/// and no reduction.
///
/// ```rust
/// use binning_histogram::{BinningBuilder, ByValue};
///
/// let binning = BinningBuilder::new(vec![0.0, 1.0, 2.0, 3.0, 4.0])
///     .values(vec![5.0, 1.0, 1.0, 5.0])
///     .rank(ByValue)
///     .target_bins(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(binning.len(), 3);
/// assert_eq!(binning.values().iter().sum::<f64>(), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct BinningBuilder<F: BinFloat = f64, C = Additive, R = BySize> {
    boundaries: Vec<F>,
    values: Vec<F>,
    combine: C,
    rank: R,
    target_bins: Option<usize>,
}

impl<F: BinFloat> BinningBuilder<F> {
    /// Creates a builder for the partition with the given `n + 1` boundaries
    pub fn new(boundaries: impl Into<Vec<F>>) -> Self {
        Self {
            boundaries: boundaries.into(),
            values: Vec::new(),
            combine: Additive,
            rank: BySize,
            target_bins: None,
        }
    }
}

impl<F, C, R> BinningBuilder<F, C, R>
where
    F: BinFloat,
    C: Combine<F> + Clone,
    R: Rank<F> + Clone,
{
    /// Sets the bin values: none, one broadcast value, or one per bin
    pub fn values(mut self, values: impl Into<Vec<F>>) -> Self {
        self.values = values.into();
        self
    }

    /// Sets how values combine when bins merge
    pub fn combine<C2: Combine<F> + Clone>(self, combine: C2) -> BinningBuilder<F, C2, R> {
        BinningBuilder {
            boundaries: self.boundaries,
            values: self.values,
            combine,
            rank: self.rank,
            target_bins: self.target_bins,
        }
    }

    /// Sets the ranking that picks which bin merges next
    pub fn rank<R2: Rank<F> + Clone>(self, rank: R2) -> BinningBuilder<F, C, R2> {
        BinningBuilder {
            boundaries: self.boundaries,
            values: self.values,
            combine: self.combine,
            rank,
            target_bins: self.target_bins,
        }
    }

    /// Reduce to at most `n` bins right after construction
    pub fn target_bins(mut self, n: usize) -> Self {
        self.target_bins = Some(n);
        self
    }

    /// Builds the configured binning
    ///
    /// # Errors
    ///
    /// Fails like [`Binning::new`], or like [`Binning::filter_bins`] when a
    /// target is set.
    pub fn build(self) -> Result<Binning<F, C, R>> {
        let mut binning = Binning::new(&self.boundaries, &self.values, self.combine, self.rank)?;
        if let Some(n) = self.target_bins {
            binning.filter_bins(n)?;
        }
        Ok(binning)
    }
}

/// Convenience function for a count histogram
///
/// Counts add on merge and the emptiest bin is merged first.
pub fn count_binning(
    boundaries: &[f64],
    counts: &[f64],
) -> Result<Binning<f64, Additive, ByValue>> {
    Binning::new(boundaries, counts, Additive, ByValue)
}

/// Convenience function for a histogram of log-counts
///
/// Values merge with log-sum-exp and the lowest log-count is merged first.
pub fn log_binning(
    boundaries: &[f64],
    log_values: &[f64],
) -> Result<Binning<f64, LogAdditive, ByValue>> {
    Binning::new(boundaries, log_values, LogAdditive, ByValue)
}
