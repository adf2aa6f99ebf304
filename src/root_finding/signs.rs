//! Sign utilities for root-finding algorithms.
//! - `opposite_sign`          : `true` if values have opposite sign
//! - `strictly_opposite_sign` : same, but a zero on either side is no sign change

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}


/// Returns `true` if `x * y < 0`, without forming the product.
///
/// The product underflows to zero for tiny magnitudes (e.g. `1e-200 * -1e-200`),
/// which would hide a genuine sign change.
#[inline]
pub(crate) fn strictly_opposite_sign(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && opposite_sign(x, y)
}
