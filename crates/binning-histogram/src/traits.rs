//! Strategy traits injected into a binning

use crate::types::Bin;
use binning_core::BinFloat;

/// Combines the values of two bins when one is merged into the other
///
/// The surviving bin is always the first argument and the absorbed bin the
/// second, so non-commutative aggregates see a consistent order. Both bins
/// still carry their pre-merge bounds when this is called.
pub trait Combine<F: BinFloat = f64> {
    /// Value of the surviving bin after absorbing `absorbed`
    fn combine(&self, survivor: &Bin<F>, absorbed: &Bin<F>) -> F;
}

/// Strict ordering used for the ranked list
///
/// The bin ranked smallest is the next one to be merged away. `less` must be
/// a strict weak ordering; equal bins keep their positional order.
pub trait Rank<F: BinFloat = f64> {
    /// Whether `a` ranks strictly below `b`
    fn less(&self, a: &Bin<F>, b: &Bin<F>) -> bool;
}

impl<F, T> Combine<F> for T
where
    F: BinFloat,
    T: Fn(&Bin<F>, &Bin<F>) -> F,
{
    fn combine(&self, survivor: &Bin<F>, absorbed: &Bin<F>) -> F {
        self(survivor, absorbed)
    }
}

impl<F, T> Rank<F> for T
where
    F: BinFloat,
    T: Fn(&Bin<F>, &Bin<F>) -> bool,
{
    fn less(&self, a: &Bin<F>, b: &Bin<F>) -> bool {
        self(a, b)
    }
}
