//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed in place by the triangular divided-difference
//! recurrence and evaluated by accumulating the Newton basis products.
//! Node order is whatever the caller supplies; Chebyshev nodes, for one,
//! arrive in decreasing order.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_nodes, impl_common_cfg, node_range, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use tracing::debug;


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between any two nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
/// - Evaluation outside the node range is rejected unless
///   `allow_extrapolation(true)` is set.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Computes Newton divided-difference coefficients in place.
///
/// For each order `j`, `i` runs downward so that `c[i - 1]` is still the
/// order `j - 1` value when `c[i]` is overwritten.
#[inline]
pub(crate) fn newton_coefficients(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}


/// Builds divided-difference coefficients `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`]    : no points
/// - [`InterpolationError::UnequalLength`] : `x.len() != y.len()`
/// - [`InterpolationError::NonFiniteVec`]  : NaN/inf in `x` or `y`
/// - [`InterpolationError::DuplicateX`]    : two nodes closer than
///   [`crate::interpolation::config::DEFAULT_X_TOL`]
pub fn divided_differences(x: &[f64], y: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    Ok(DividedDifferenceTable::new(x, y)?.coeffs)
}


/// Evaluates a Newton-form polynomial at `x`.
///
/// `result = c[0]`; for `i = 1..n` the running product picks up
/// `(x - nodes[i - 1])` and `c[i] * product` is accumulated.
/// An empty coefficient slice is the zero polynomial.
pub fn evaluate(x: f64, nodes: &[f64], coeffs: &[f64]) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };

    let mut result  = c0;
    let mut product = 1.0;
    for (&c, &xn) in rest.iter().zip(nodes) {
        product *= x - xn;
        result  += c * product;
    }
    result
}


/// Evaluates the derivative of a Newton-form polynomial at `x`.
///
/// Carries the basis product `p_i(x) = Π_{j<i} (x - nodes[j])` together with
/// its derivative; the product rule gives
/// `p_{i+1}' = p_i' (x - nodes[i]) + p_i`.
pub fn evaluate_derivative(x: f64, nodes: &[f64], coeffs: &[f64]) -> f64 {
    let rest = match coeffs.split_first() {
        Some((_, rest)) => rest,
        None            => return 0.0,
    };

    let mut derivative = 0.0;
    let mut product    = 1.0;
    let mut d_product  = 0.0;
    for (&c, &xn) in rest.iter().zip(nodes) {
        d_product   = d_product * (x - xn) + product;
        product    *= x - xn;
        derivative += c * d_product;
    }
    derivative
}


/// Immutable divided-difference table over distinct nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable {
    nodes:  Vec<f64>,
    coeffs: Vec<f64>,
}

impl DividedDifferenceTable {
    /// Validates the samples and builds the table.
    ///
    /// See [`divided_differences`] for the error cases.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        check_nodes(x, crate::interpolation::config::DEFAULT_X_TOL, false)?;
        if let Some(idx) = crate::interpolation::config::non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        Ok(Self::from_validated(x, y))
    }

    fn from_validated(x: &[f64], y: &[f64]) -> Self {
        Self {
            nodes:  x.to_vec(),
            coeffs: newton_coefficients(x, y),
        }
    }

    pub fn nodes(&self)  -> &[f64] { &self.nodes }
    pub fn coeffs(&self) -> &[f64] { &self.coeffs }
    pub fn len(&self)    -> usize  { self.nodes.len() }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Value of the interpolant; defined everywhere, including outside the nodes.
    pub fn value_at(&self, x: f64) -> f64 {
        evaluate(x, &self.nodes, &self.coeffs)
    }

    /// Slope of the interpolant.
    pub fn derivative_at(&self, x: f64) -> f64 {
        evaluate_derivative(x, &self.nodes, &self.coeffs)
    }
}

impl Interpolator for DividedDifferenceTable {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFinitePoint { got: x });
        }
        Ok(self.value_at(x))
    }

    fn eval_derivative(&self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFinitePoint { got: x });
        }
        Ok(self.derivative_at(x))
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`, evaluates the
///   Newton form and its derivative.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_nodes`        : same as `n_provided`
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `derivatives`    : slope at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] / [`InterpolationError::UnequalLength`]
///   if `x`, `y` were never set or disagree.
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies outside
///   the node range and extrapolation is off.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();

    let mut report = InterpolationReport::new(
        Algorithm::Newton,
        n_provided,
        n_provided,
        n_evaluated,
    );

    let table = DividedDifferenceTable::from_validated(x, y);
    let (x_min, x_max) = node_range(x);

    // evaluate polynomials for query points
    for &xq in evals {
        if !cfg.common.extrapolate() && (xq < x_min || xq > x_max) {
            return Err(InterpolationError::OutOfBounds {
                got: xq,
                x_min,
                x_max
            });
        }

        report.evaluated.push(table.value_at(xq));
        report.derivatives.push(table.derivative_at(xq));
    }

    debug!(algorithm = report.algorithm_name, n_provided, n_evaluated, "interpolated");
    Ok(report)
}
