//! Adaptive interval binning
//!
//! This crate coarsens a fine-grained histogram (or any piecewise-constant
//! signal) by greedily merging bins. The axis stays fully covered at every
//! step; the caller decides which bin goes next through a ranking strategy
//! and how values aggregate through a combination strategy.
//!
//! # Key Features
//!
//! - **Dual ordering**: bins are linked both by position and by rank, so the
//!   next bin to merge is always at hand
//! - **Local repairs**: a merge only re-ranks the bin that grew
//! - **Pluggable strategies**: size or value ranking, additive or
//!   log-domain combination, or any closure
//! - **Generation-tagged handles**: handles from before a rebuild are
//!   detected instead of aliasing new bins
//!
//! # Examples
//!
//! ## Reducing a Histogram
//!
//! ```rust
//! use binning_histogram::{Additive, Binning, BySize};
//!
//! let boundaries = [0.0, 1.0, 2.0, 4.0, 8.0, 16.0];
//! let counts = [3.0, 1.0, 4.0, 1.0, 5.0];
//!
//! let mut binning = Binning::new(&boundaries, &counts, Additive, BySize).unwrap();
//! binning.filter_bins(3).unwrap();
//!
//! assert_eq!(binning.len(), 3);
//! assert_eq!(binning.span(), (0.0, 16.0));
//! assert_eq!(binning.values().iter().sum::<f64>(), 14.0);
//! for (_, bin) in binning.iter() {
//!     println!("{bin}");
//! }
//! ```
//!
//! ## Merging Step by Step
//!
//! ```rust
//! use binning_histogram::count_binning;
//!
//! let mut binning = count_binning(&[0.0, 1.0, 2.0, 3.0], &[7.0, 0.0, 2.0]).unwrap();
//!
//! // The empty bin merges into its emptier neighbour
//! let survivor = binning.delete(binning.smallest()).unwrap();
//! assert_eq!(binning[survivor].lower(), 1.0);
//! assert_eq!(binning[survivor].upper(), 3.0);
//!
//! // Compact the arena; old handles become stale
//! binning.update().unwrap();
//! assert!(binning.get(survivor).is_none());
//! ```

pub mod binning;
pub mod builders;
pub mod ops;
pub mod strategies;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use binning::Binning;
pub use builders::{count_binning, log_binning, BinningBuilder};
pub use ops::Iter;
pub use strategies::{
    bin_less_size, bin_less_y, bin_log_sum, bin_sum, Additive, ByValue, BySize, LogAdditive,
};
pub use traits::{Combine, Rank};
pub use types::{Bin, BinId, Snapshot};

pub use binning_core::{Error, Result};
