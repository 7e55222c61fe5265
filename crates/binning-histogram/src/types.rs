//! Core types for the adaptive binning representation

use binning_core::{BinFloat, Result};
use std::fmt;

use crate::binning::Binning;
use crate::traits::{Combine, Rank};

/// A single half-open interval `[lower, upper)` carrying a scalar value
///
/// Bins live in the arena owned by a [`Binning`] and are threaded onto two
/// lists at once: the positional list (by axis location) and the ranked list
/// (by the binning's ranking criterion). Links are arena indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin<F: BinFloat = f64> {
    pub(crate) y: F,
    pub(crate) lower: F,
    pub(crate) upper: F,
    pub(crate) next: Option<usize>,
    pub(crate) prev: Option<usize>,
    pub(crate) smaller: Option<usize>,
    pub(crate) larger: Option<usize>,
    pub(crate) deleted: bool,
}

impl<F: BinFloat> Bin<F> {
    /// Create an unlinked bin covering `[lower, upper)`
    pub fn new(lower: F, upper: F, y: F) -> Self {
        Self {
            y,
            lower,
            upper,
            next: None,
            prev: None,
            smaller: None,
            larger: None,
            deleted: false,
        }
    }

    /// Scalar payload of the bin
    pub fn y(&self) -> F {
        self.y
    }

    /// Left edge of the bin (inclusive)
    pub fn lower(&self) -> F {
        self.lower
    }

    /// Right edge of the bin (exclusive)
    pub fn upper(&self) -> F {
        self.upper
    }

    /// Width of the bin, `upper - lower`
    pub fn size(&self) -> F {
        self.upper - self.lower
    }

    /// Get the center point of the bin
    pub fn center(&self) -> F {
        (self.lower + self.upper) / (F::one() + F::one())
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: F) -> bool {
        value >= self.lower && value < self.upper
    }

    /// Whether the bin has been merged into a neighbour
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl<F: BinFloat> fmt::Display for Bin<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}):{}", self.lower, self.upper, self.y)
    }
}

/// Handle to a bin inside a [`Binning`]
///
/// Handles carry the generation of the arena they were issued for. A rebuild
/// replaces the arena and bumps the generation, so handles obtained before
/// the rebuild are recognised as stale instead of silently pointing at an
/// unrelated bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinId {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl BinId {
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        Self { index, generation }
    }

    /// Slot of the bin in the arena
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generation of the arena this handle belongs to
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}

/// Owned description of a partition: `n + 1` boundaries and `n` values
///
/// This is the form a [`Binning`] is rebuilt from, and what callers get back
/// when they want the coarsened histogram as plain vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<F: BinFloat = f64> {
    boundaries: Vec<F>,
    values: Vec<F>,
}

impl<F: BinFloat> Snapshot<F> {
    pub(crate) fn new(boundaries: Vec<F>, values: Vec<F>) -> Self {
        Self { boundaries, values }
    }

    /// Bin edges, including the rightmost edge
    pub fn boundaries(&self) -> &[F] {
        &self.boundaries
    }

    /// One value per bin
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the snapshot holds no bins
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into `(boundaries, values)`
    pub fn into_parts(self) -> (Vec<F>, Vec<F>) {
        (self.boundaries, self.values)
    }

    /// Construct a fresh binning from this snapshot
    pub fn into_binning<C, R>(self, combine: C, rank: R) -> Result<Binning<F, C, R>>
    where
        C: Combine<F>,
        R: Rank<F>,
    {
        Binning::new(&self.boundaries, &self.values, combine, rank)
    }
}
