//! Chebyshev nodes
//!
//! Roots of the degree-`n` Chebyshev polynomial of the first kind,
//! `x_k = cos(π (2k + 1) / (2n))` for `k = 0..n`. They cluster toward the
//! interval ends, which keeps high-degree interpolants from oscillating
//! (Runge's phenomenon).

use std::f64::consts::PI;
use crate::interpolation::errors::InterpolationError;


/// `n` Chebyshev nodes on `[-1, 1]`, in generation order (decreasing).
///
/// # Errors
/// - [`InterpolationError::InvalidNodeCount`] if `n == 0`.
pub fn chebyshev_nodes(n: usize) -> Result<Vec<f64>, InterpolationError> {
    if n == 0 {
        return Err(InterpolationError::InvalidNodeCount { got: n });
    }

    let denom = (2 * n) as f64;
    Ok((0..n)
        .map(|k| (PI * (2 * k + 1) as f64 / denom).cos())
        .collect())
}


/// `n` Chebyshev nodes mapped affinely from `[-1, 1]` onto `[a, b]`.
///
/// Order follows [`chebyshev_nodes`], so the first node is nearest `b`.
///
/// # Errors
/// - [`InterpolationError::InvalidNodeCount`] if `n == 0`.
/// - [`InterpolationError::InvalidInterval`]  if `a`, `b` non-finite or `a >= b`.
pub fn chebyshev_nodes_on(n: usize, a: f64, b: f64) -> Result<Vec<f64>, InterpolationError> {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(InterpolationError::InvalidInterval { a, b });
    }

    let mid  = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    Ok(chebyshev_nodes(n)?
        .into_iter()
        .map(|x| mid + half * x)
        .collect())
}
