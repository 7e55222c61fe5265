//! Log-domain arithmetic
//!
//! Values stored as logarithms (log-counts, log-likelihoods) are combined
//! with `log(exp(a) + exp(b))`. Evaluating that expression literally
//! overflows for large inputs, so the helpers here factor out the larger
//! operand first.

use num_traits::Float;

/// Compute `log(exp(a) + exp(b))` without overflow
///
/// Uses `y + log1p(exp(x - y))` with `x <= y`. A `-inf` operand is the log
/// of zero and returns the other operand unchanged; a `+inf` operand returns
/// `+inf`. Both cases would otherwise produce `NaN` through `inf - inf`.
///
/// # Examples
///
/// ```rust
/// use binning_core::math::log_add_exp;
///
/// let sum = log_add_exp(2.0f64.ln(), 3.0f64.ln());
/// assert!((sum - 5.0f64.ln()).abs() < 1e-12);
/// assert_eq!(log_add_exp(f64::NEG_INFINITY, 1.5), 1.5);
/// ```
pub fn log_add_exp<F: Float>(a: F, b: F) -> F {
    let (x, y) = if a > b { (b, a) } else { (a, b) };
    if x == F::neg_infinity() || y == F::infinity() {
        return y;
    }
    y + (x - y).exp().ln_1p()
}
