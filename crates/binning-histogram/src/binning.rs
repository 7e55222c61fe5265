//! The dual-ordered bin structure and its merge algorithm
//!
//! A [`Binning`] keeps its bins in a single arena and threads two doubly
//! linked lists through it:
//!
//! - the **positional** list (`first` .. `last`), ordered by `lower`, whose
//!   intervals tile the axis without gaps or overlaps;
//! - the **ranked** list (`smallest` .. `largest`), ordered by the ranking
//!   strategy.
//!
//! Deleting a bin merges it into one positional neighbour, tombstones its
//! slot and repairs the survivor's place in the ranked list locally. The
//! arena only shrinks on [`Binning::update`], which rebuilds everything from
//! the live sequence.

use std::cmp::Ordering;
use std::ops::Index;

use binning_core::{BinFloat, Error, Result};
use tracing::{debug, instrument, trace};

use crate::strategies::{Additive, BySize};
use crate::traits::{Combine, Rank};
use crate::types::{Bin, BinId, Snapshot};

/// Adaptive partition of an axis into contiguous half-open bins
#[derive(Debug, Clone)]
pub struct Binning<F: BinFloat = f64, C = Additive, R = BySize> {
    pub(crate) bins: Vec<Bin<F>>,
    combine: C,
    rank: R,
    pub(crate) first: usize,
    pub(crate) last: usize,
    pub(crate) smallest: usize,
    pub(crate) largest: usize,
    live: usize,
    pub(crate) generation: u64,
}

impl<F, C, R> Binning<F, C, R>
where
    F: BinFloat,
    C: Combine<F>,
    R: Rank<F>,
{
    /// Create a binning from `n + 1` boundaries and 0, 1 or `n` values
    ///
    /// Bin `i` starts at `boundaries[i]`; the last boundary closes the final
    /// bin. With no values every bin starts at zero, a single value is
    /// broadcast to all bins, otherwise there must be exactly one value per
    /// bin. Bins are sorted by their lower edge before linking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if fewer than 2 bins result, if the
    /// number of values is neither 0, 1 nor `n`, or if a boundary or value
    /// is NaN.
    pub fn new(boundaries: &[F], values: &[F], combine: C, rank: R) -> Result<Self> {
        Self::with_generation(boundaries, values, combine, rank, 0)
    }

    fn with_generation(
        boundaries: &[F],
        values: &[F],
        combine: C,
        rank: R,
        generation: u64,
    ) -> Result<Self> {
        let n = boundaries.len().saturating_sub(1);
        if n < 2 {
            return Err(Error::too_few_bins(n));
        }
        if boundaries.iter().any(|x| x.is_nan()) {
            return Err(Error::not_a_number("boundaries"));
        }
        // NaN values would make the ranked sort inconsistent
        if values.iter().any(|y| y.is_nan()) {
            return Err(Error::not_a_number("bin values"));
        }
        if values.len() > 1 && values.len() != n {
            return Err(Error::size_mismatch(n, values.len(), "bin values"));
        }
        let value_of = |i: usize| match values.len() {
            0 => F::zero(),
            1 => values[0],
            _ => values[i],
        };

        let mut bins: Vec<Bin<F>> = (0..n)
            .map(|i| Bin::new(boundaries[i], boundaries[i], value_of(i)))
            .collect();
        // Stable, so duplicate lower edges keep their input order
        bins.sort_by(|a, b| a.lower.partial_cmp(&b.lower).unwrap_or(Ordering::Equal));

        for i in 0..n - 1 {
            bins[i].upper = bins[i + 1].lower;
            bins[i].next = Some(i + 1);
            bins[i + 1].prev = Some(i);
        }
        bins[n - 1].upper = boundaries[n];

        // Ties under the ranking keep positional order
        let mut ranked: Vec<usize> = (0..n).collect();
        ranked.sort_by(|&a, &b| {
            if rank.less(&bins[a], &bins[b]) {
                Ordering::Less
            } else if rank.less(&bins[b], &bins[a]) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        for pair in ranked.windows(2) {
            bins[pair[0]].larger = Some(pair[1]);
            bins[pair[1]].smaller = Some(pair[0]);
        }

        debug!(bins = n, generation, "constructed binning");

        Ok(Self {
            bins,
            combine,
            rank,
            first: 0,
            last: n - 1,
            smallest: ranked[0],
            largest: ranked[n - 1],
            live: n,
            generation,
        })
    }

    /// Number of live bins
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if there are no live bins
    ///
    /// A binning is never empty: deleting the last remaining bin is a no-op.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Size of the arena, including tombstoned slots
    pub fn capacity(&self) -> usize {
        self.bins.len()
    }

    /// Arena generation; bumped by every rebuild
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The combination strategy
    pub fn combiner(&self) -> &C {
        &self.combine
    }

    /// The ranking strategy
    pub fn ranking(&self) -> &R {
        &self.rank
    }

    /// Leftmost live bin
    pub fn first(&self) -> BinId {
        self.id(self.first)
    }

    /// Rightmost live bin
    pub fn last(&self) -> BinId {
        self.id(self.last)
    }

    /// Lowest ranked live bin, the next candidate for merging
    pub fn smallest(&self) -> BinId {
        self.id(self.smallest)
    }

    /// Highest ranked live bin
    pub fn largest(&self) -> BinId {
        self.id(self.largest)
    }

    /// Look up a bin, returning `None` for handles from an older generation
    pub fn get(&self, id: BinId) -> Option<&Bin<F>> {
        if id.generation != self.generation {
            return None;
        }
        self.bins.get(id.index)
    }

    /// Positional successor
    pub fn next(&self, id: BinId) -> Option<BinId> {
        self[id].next.map(|i| self.id(i))
    }

    /// Positional predecessor
    pub fn prev(&self, id: BinId) -> Option<BinId> {
        self[id].prev.map(|i| self.id(i))
    }

    /// Next bin up in the ranked order
    pub fn larger(&self, id: BinId) -> Option<BinId> {
        self[id].larger.map(|i| self.id(i))
    }

    /// Next bin down in the ranked order
    pub fn smaller(&self, id: BinId) -> Option<BinId> {
        self[id].smaller.map(|i| self.id(i))
    }

    /// Delete a bin by merging it into one of its positional neighbours
    ///
    /// A bin at either end of the axis merges into its only neighbour.
    /// Otherwise it merges into the neighbour that ranks lower, with ties
    /// going to the right. The survivor's value becomes
    /// `combine(survivor, deleted)` and its interval grows to cover the
    /// deleted one. Returns the survivor, or `None` when `id` is the only
    /// live bin, in which case nothing changes.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or refers to a bin that was already deleted.
    pub fn delete(&mut self, id: BinId) -> Option<BinId> {
        let index = self.live_index(id);
        let (prev, next) = (self.bins[index].prev, self.bins[index].next);
        let survivor = match (prev, next) {
            (None, None) => return None,
            (None, Some(right)) => right,
            (Some(left), None) => left,
            (Some(left), Some(right)) => {
                if self.less(left, right) {
                    left
                } else {
                    right
                }
            }
        };

        self.unlink_positional(index);
        self.unlink_ranked(index);
        self.bins[index].deleted = true;
        self.live -= 1;

        let y = self.combine.combine(&self.bins[survivor], &self.bins[index]);
        let (lower, upper) = (self.bins[index].lower, self.bins[index].upper);
        let merged = &mut self.bins[survivor];
        merged.y = y;
        if Some(survivor) == prev {
            merged.upper = upper;
        } else {
            merged.lower = lower;
        }
        trace!(
            deleted = %self.bins[index],
            survivor = %self.bins[survivor],
            leftward = Some(survivor) == prev,
            "merged bin"
        );

        self.rerank(survivor);
        Some(self.id(survivor))
    }

    /// Resolve a handle to a live arena index
    fn live_index(&self, id: BinId) -> usize {
        assert_eq!(
            id.generation, self.generation,
            "stale bin handle {id}: binning was rebuilt"
        );
        assert!(!self.bins[id.index].deleted, "bin {id} was already deleted");
        id.index
    }

    fn id(&self, index: usize) -> BinId {
        BinId::new(index, self.generation)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.rank.less(&self.bins[a], &self.bins[b])
    }

    fn unlink_positional(&mut self, index: usize) {
        let (prev, next) = (self.bins[index].prev, self.bins[index].next);
        match prev {
            Some(p) => self.bins[p].next = next,
            None => {
                if let Some(n) = next {
                    self.first = n;
                }
            }
        }
        match next {
            Some(n) => self.bins[n].prev = prev,
            None => {
                if let Some(p) = prev {
                    self.last = p;
                }
            }
        }
        self.bins[index].prev = None;
        self.bins[index].next = None;
    }

    fn unlink_ranked(&mut self, index: usize) {
        let (smaller, larger) = (self.bins[index].smaller, self.bins[index].larger);
        match smaller {
            Some(s) => self.bins[s].larger = larger,
            None => {
                if let Some(l) = larger {
                    self.smallest = l;
                }
            }
        }
        match larger {
            Some(l) => self.bins[l].smaller = smaller,
            None => {
                if let Some(s) = smaller {
                    self.largest = s;
                }
            }
        }
        self.bins[index].smaller = None;
        self.bins[index].larger = None;
    }

    fn insert_ranked_before(&mut self, index: usize, at: usize) {
        let smaller = self.bins[at].smaller;
        self.bins[index].smaller = smaller;
        self.bins[index].larger = Some(at);
        self.bins[at].smaller = Some(index);
        match smaller {
            Some(s) => self.bins[s].larger = Some(index),
            None => self.smallest = index,
        }
    }

    fn insert_ranked_after(&mut self, index: usize, at: usize) {
        let larger = self.bins[at].larger;
        self.bins[index].larger = larger;
        self.bins[index].smaller = Some(at);
        self.bins[at].larger = Some(index);
        match larger {
            Some(l) => self.bins[l].smaller = Some(index),
            None => self.largest = index,
        }
    }

    /// Restore the ranked order around a bin whose value just changed
    ///
    /// Walks only as far as the bin actually moves. A bin that outgrew its
    /// `larger` neighbour lands before the first bin that is not smaller
    /// than it; a bin that dropped below its `smaller` neighbour lands after
    /// the last bin that is not larger than it.
    fn rerank(&mut self, index: usize) {
        if let Some(larger) = self.bins[index].larger {
            if self.less(larger, index) {
                self.unlink_ranked(index);
                let mut at = larger;
                while self.less(at, index) {
                    match self.bins[at].larger {
                        Some(l) => at = l,
                        None => {
                            trace!(bin = %self.bins[index], "re-ranked to largest");
                            self.insert_ranked_after(index, at);
                            return;
                        }
                    }
                }
                trace!(bin = %self.bins[index], before = %self.bins[at], "re-ranked upwards");
                self.insert_ranked_before(index, at);
                return;
            }
        }
        if let Some(smaller) = self.bins[index].smaller {
            if self.less(index, smaller) {
                self.unlink_ranked(index);
                let mut at = smaller;
                while self.less(index, at) {
                    match self.bins[at].smaller {
                        Some(s) => at = s,
                        None => {
                            trace!(bin = %self.bins[index], "re-ranked to smallest");
                            self.insert_ranked_before(index, at);
                            return;
                        }
                    }
                }
                trace!(bin = %self.bins[index], after = %self.bins[at], "re-ranked downwards");
                self.insert_ranked_after(index, at);
            }
        }
    }

    /// Capture the live positional sequence as boundaries and values
    ///
    /// # Panics
    ///
    /// Panics if a tombstoned bin is reachable from the positional list,
    /// which means the list invariants were broken.
    pub fn snapshot(&self) -> Snapshot<F> {
        let mut boundaries = Vec::with_capacity(self.live + 1);
        let mut values = Vec::with_capacity(self.live);
        let mut cursor = Some(self.first);
        while let Some(i) = cursor {
            let bin = &self.bins[i];
            assert!(!bin.deleted, "internal error: deleted bin {bin} in positional list");
            boundaries.push(bin.lower);
            values.push(bin.y);
            cursor = bin.next;
        }
        boundaries.push(self.bins[self.last].upper);
        Snapshot::new(boundaries, values)
    }
}

impl<F, C, R> Binning<F, C, R>
where
    F: BinFloat,
    C: Combine<F> + Clone,
    R: Rank<F> + Clone,
{
    /// Build a fresh binning from the live bins, discarding tombstones
    ///
    /// The result has the next generation, so handles into `self` are
    /// rejected by it.
    ///
    /// # Errors
    ///
    /// Same as [`Binning::new`], e.g. when fewer than 2 bins are live.
    pub fn rebuild(&self) -> Result<Self> {
        let snapshot = self.snapshot();
        let rebuilt = Self::with_generation(
            snapshot.boundaries(),
            snapshot.values(),
            self.combine.clone(),
            self.rank.clone(),
            self.generation + 1,
        )?;
        debug!(
            from = self.bins.len(),
            to = rebuilt.len(),
            generation = rebuilt.generation,
            "rebuilt binning"
        );
        Ok(rebuilt)
    }

    /// Rebuild in place; see [`Binning::rebuild`]
    ///
    /// On error `self` is left untouched. On success every [`BinId`]
    /// obtained earlier becomes stale.
    pub fn update(&mut self) -> Result<()> {
        *self = self.rebuild()?;
        Ok(())
    }

    /// Merge the lowest ranked bins until at most `n` remain, then rebuild
    ///
    /// Does nothing when `n` bins or fewer are live.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] before touching anything if a
    /// reduction is needed and `n < 2`.
    #[instrument(level = "debug", skip(self))]
    pub fn filter_bins(&mut self, n: usize) -> Result<()> {
        if self.live == 0 || self.live <= n {
            return Ok(());
        }
        if n < 2 {
            return Err(Error::InvalidInput(format!(
                "cannot reduce {} bins to {n}: at least 2 bins must remain",
                self.live
            )));
        }
        let merges = self.live - n;
        debug!(live = self.live, merges, "filtering bins");
        for _ in 0..merges {
            self.delete(self.smallest());
        }
        self.update()
    }
}

impl<F, C, R> Index<BinId> for Binning<F, C, R>
where
    F: BinFloat,
    C: Combine<F>,
    R: Rank<F>,
{
    type Output = Bin<F>;

    /// # Panics
    ///
    /// Panics if `id` is from an older generation.
    fn index(&self, id: BinId) -> &Bin<F> {
        match self.get(id) {
            Some(bin) => bin,
            None => panic!("stale bin handle {id}: binning was rebuilt"),
        }
    }
}
