//! Read-only traversal and queries over a binning

use std::fmt;
use std::iter::FusedIterator;

use binning_core::BinFloat;

use crate::binning::Binning;
use crate::traits::{Combine, Rank};
use crate::types::{Bin, BinId};

/// Iterator over live bins following one of the two linked orders
pub struct Iter<'a, F: BinFloat> {
    bins: &'a [Bin<F>],
    cursor: Option<usize>,
    generation: u64,
    step: fn(&Bin<F>) -> Option<usize>,
}

impl<'a, F: BinFloat> Iterator for Iter<'a, F> {
    type Item = (BinId, &'a Bin<F>);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let bin = &self.bins[index];
        self.cursor = (self.step)(bin);
        Some((BinId::new(index, self.generation), bin))
    }
}

impl<F: BinFloat> FusedIterator for Iter<'_, F> {}

impl<F, C, R> Binning<F, C, R>
where
    F: BinFloat,
    C: Combine<F>,
    R: Rank<F>,
{
    /// Live bins from left to right
    pub fn iter(&self) -> Iter<'_, F> {
        Iter {
            bins: &self.bins,
            cursor: Some(self.first),
            generation: self.generation,
            step: |bin| bin.next,
        }
    }

    /// Live bins from lowest to highest rank
    pub fn iter_ranked(&self) -> Iter<'_, F> {
        Iter {
            bins: &self.bins,
            cursor: Some(self.smallest),
            generation: self.generation,
            step: |bin| bin.larger,
        }
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<F> {
        let mut edges: Vec<F> = self.iter().map(|(_, bin)| bin.lower()).collect();
        edges.push(self.bins[self.last].upper());
        edges
    }

    /// Get bin values in positional order
    pub fn values(&self) -> Vec<F> {
        self.iter().map(|(_, bin)| bin.y()).collect()
    }

    /// Axis span `(lower, upper)` covered by the live bins
    pub fn span(&self) -> (F, F) {
        (self.bins[self.first].lower(), self.bins[self.last].upper())
    }

    /// Find the bin containing a value
    ///
    /// The final bin also claims its right edge, so every point of the
    /// closed span resolves to a bin.
    pub fn find(&self, value: F) -> Option<BinId> {
        let last = &self.bins[self.last];
        if value == last.upper() {
            return Some(self.last());
        }
        self.iter()
            .find(|(_, bin)| bin.contains(value))
            .map(|(id, _)| id)
    }
}

impl<F, C, R> fmt::Display for Binning<F, C, R>
where
    F: BinFloat,
    C: Combine<F>,
    R: Rank<F>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, bin) in self.iter() {
            writeln!(f, "{bin}")?;
        }
        Ok(())
    }
}
