//! Standard ranking and combination strategies
//!
//! Each strategy exists both as a plain function (usable anywhere a closure
//! is accepted) and as a zero-sized type, which gives the binning a nameable
//! type such as `Binning<f64, LogAdditive, ByValue>`.

use crate::traits::{Combine, Rank};
use crate::types::Bin;
use binning_core::{math::log_add_exp, BinFloat};

/// Rank bins by width
pub fn bin_less_size<F: BinFloat>(a: &Bin<F>, b: &Bin<F>) -> bool {
    a.size() < b.size()
}

/// Rank bins by value
pub fn bin_less_y<F: BinFloat>(a: &Bin<F>, b: &Bin<F>) -> bool {
    a.y() < b.y()
}

/// Add the values of two bins
pub fn bin_sum<F: BinFloat>(a: &Bin<F>, b: &Bin<F>) -> F {
    a.y() + b.y()
}

/// Add two bins whose values are stored as logarithms
pub fn bin_log_sum<F: BinFloat>(a: &Bin<F>, b: &Bin<F>) -> F {
    log_add_exp(a.y(), b.y())
}

/// Narrowest bin is merged first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BySize;

impl<F: BinFloat> Rank<F> for BySize {
    fn less(&self, a: &Bin<F>, b: &Bin<F>) -> bool {
        bin_less_size(a, b)
    }
}

/// Bin with the smallest value is merged first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByValue;

impl<F: BinFloat> Rank<F> for ByValue {
    fn less(&self, a: &Bin<F>, b: &Bin<F>) -> bool {
        bin_less_y(a, b)
    }
}

/// Merged bins add their values (counts, masses)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

impl<F: BinFloat> Combine<F> for Additive {
    fn combine(&self, survivor: &Bin<F>, absorbed: &Bin<F>) -> F {
        bin_sum(survivor, absorbed)
    }
}

/// Merged bins add their values in the log domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogAdditive;

impl<F: BinFloat> Combine<F> for LogAdditive {
    fn combine(&self, survivor: &Bin<F>, absorbed: &Bin<F>) -> F {
        bin_log_sum(survivor, absorbed)
    }
}
