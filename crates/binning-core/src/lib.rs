//! Core types shared by the smart-binning crates
//!
//! This crate provides the pieces every other crate in the workspace builds
//! on: the unified [`Error`] type, the [`BinFloat`] numeric bound and the
//! log-domain helpers in [`math`].
//!
//! # Example
//!
//! ```rust
//! use binning_core::{math::log_add_exp, Error};
//!
//! let merged = log_add_exp(0.0f64, 0.0);
//! assert!((merged - std::f64::consts::LN_2).abs() < 1e-12);
//!
//! let err = Error::size_mismatch(4, 2, "bin values");
//! assert!(err.is_invalid_input());
//! ```

pub mod error;
pub mod math;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::BinFloat;
