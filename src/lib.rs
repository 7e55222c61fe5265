//! Smart binning: adaptive interval binning toolkit
//!
//! Re-exports the workspace crates under one roof: the error type, numeric
//! bound and log-domain helpers from `binning-core`, and the dual-ordered
//! [`Binning`] with its strategies from `binning-histogram`.
//!
//! # Example
//!
//! ```rust
//! use smart_binning::{Additive, Binning, BySize};
//!
//! let x = [-100.0, -99.0, 1.0, 2.0, 3.0, 6.0, 8.0, 19.0, 21.0, 120.0, 300.0, 350.0, 355.0, 380.0];
//! let y: Vec<f64> = (1..=13).map(f64::from).collect();
//!
//! let mut binning = Binning::new(&x, &y, Additive, BySize).unwrap();
//! binning.filter_bins(5).unwrap();
//!
//! assert_eq!(binning.len(), 5);
//! assert_eq!(binning.span(), (-100.0, 380.0));
//! ```

pub use binning_core::{math, BinFloat, Error, Result};
pub use binning_histogram::{
    bin_less_size, bin_less_y, bin_log_sum, bin_sum, count_binning, log_binning, Additive, Bin,
    BinId, Binning, BinningBuilder, ByValue, BySize, Combine, Iter, LogAdditive, Rank, Snapshot,
};
