//! Numeric bound shared by the binning crates
//!
//! Bin boundaries and payloads are generic over any IEEE float type. The
//! trait below bundles the bounds every crate in the workspace needs so that
//! signatures stay readable.

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point type usable for bin boundaries and bin values
pub trait BinFloat: Float + Debug + Display + 'static {}

impl<T> BinFloat for T where T: Float + Debug + Display + 'static {}
