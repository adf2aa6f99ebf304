//! Hermite (Osculating) Interpolation
//!
//! Implements [Hermite interpolation](https://en.wikipedia.org/wiki/Hermite_interpolation)
//! with divided differences over a doubled node sequence: every abscissa
//! appears twice, once for the value condition and once for the derivative
//! condition.
//!
//! Wherever two differenced nodes coincide the recurrence substitutes the
//! known derivative instead of dividing by zero. [`HermiteSeed`] selects how
//! the repeated slot is seeded before the recurrence runs:
//!
//! ┌ [`HermiteSeed::DerivativeInRepeatedSlot`] (default)
//! │   the second slot of every repeated node after the first holds the
//! │   derivative. Matches the derivative at every node, but the values
//! │   only at the first two abscissas.
//! └ [`HermiteSeed::ValueInRepeatedSlot`]
//!     both slots hold the value; the textbook construction, matching value
//!     and derivative at every node.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, node_range, non_finite_idx, check_nodes, CommonCfg, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::{evaluate, evaluate_derivative};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use tracing::debug;


/// How the second slot of a repeated node is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HermiteSeed {
    #[default]
    DerivativeInRepeatedSlot,
    ValueInRepeatedSlot,
}


/// Doubles the nodes and runs the divided-difference recurrence with the
/// equal-node derivative substitution at every order.
///
/// Inputs must already be validated (equal, non-zero lengths).
pub(crate) fn hermite_coefficients(
    times: &[f64],
    values: &[f64],
    derivatives: &[f64],
    seed: HermiteSeed,
) -> (Vec<f64>, Vec<f64>) {
    let m = 2 * times.len();
    let mut nodes  = Vec::with_capacity(m);
    let mut coeffs = Vec::with_capacity(m);

    for (i, (&t, &v)) in times.iter().zip(values).enumerate() {
        nodes.push(t);
        nodes.push(t);
        coeffs.push(v);
        coeffs.push(match seed {
            HermiteSeed::DerivativeInRepeatedSlot if i > 0 => derivatives[i],
            _                                              => v,
        });
    }

    for j in 1..m {
        for i in (j..m).rev() {
            let gap = nodes[i] - nodes[i - j];
            coeffs[i] = if gap == 0.0 {
                derivatives[i / 2]
            } else {
                (coeffs[i] - coeffs[i - 1]) / gap
            };
        }
    }

    (nodes, coeffs)
}


fn validate_samples(
    times: &[f64],
    values: &[f64],
    derivatives: &[f64],
    min_spacing: f64,
) -> Result<(), InterpolationError> {
    if times.len() != values.len() || times.len() != derivatives.len() {
        return Err(InterpolationError::UnequalHermiteLength {
            times: times.len(),
            values: values.len(),
            derivatives: derivatives.len(),
        });
    }
    check_nodes(times, min_spacing, true)?;
    if let Some(idx) = non_finite_idx(values) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if let Some(idx) = non_finite_idx(derivatives) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    Ok(())
}


/// Builds the doubled node sequence and Hermite coefficients with the
/// default [`HermiteSeed::DerivativeInRepeatedSlot`] rule.
///
/// # Returns
/// `(nodes, coeffs)`, both of length `2 * times.len()`.
///
/// # Errors
/// - [`InterpolationError::UnequalHermiteLength`] : the three slices disagree
/// - [`InterpolationError::EmptyInput`]           : no samples
/// - [`InterpolationError::NonIncreasingX`]       : `times` not strictly increasing
/// - [`InterpolationError::DuplicateX`]           : two times closer than
///   [`DEFAULT_X_TOL`]
/// - [`InterpolationError::NonFiniteVec`]         : NaN/inf anywhere
pub fn hermite_divided_differences(
    times: &[f64],
    values: &[f64],
    derivatives: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), InterpolationError> {
    let table = HermiteTable::new(times, values, derivatives)?;
    Ok((table.nodes, table.coeffs))
}


/// Value of the Hermite polynomial at `t`; the Newton-form evaluator.
#[inline]
pub fn evaluate_hermite(t: f64, nodes: &[f64], coeffs: &[f64]) -> f64 {
    evaluate(t, nodes, coeffs)
}

/// Slope of the Hermite polynomial at `t`, differentiated term by term.
#[inline]
pub fn evaluate_hermite_derivative(t: f64, nodes: &[f64], coeffs: &[f64]) -> f64 {
    evaluate_derivative(t, nodes, coeffs)
}


/// Immutable Hermite table over the doubled node sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteTable {
    nodes:  Vec<f64>,
    coeffs: Vec<f64>,
    seed:   HermiteSeed,
}

impl HermiteTable {
    /// Builds with [`HermiteSeed::DerivativeInRepeatedSlot`].
    pub fn new(times: &[f64], values: &[f64], derivatives: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_seed(times, values, derivatives, HermiteSeed::default())
    }

    pub fn with_seed(
        times: &[f64],
        values: &[f64],
        derivatives: &[f64],
        seed: HermiteSeed,
    ) -> Result<Self, InterpolationError> {
        Self::with_spacing(times, values, derivatives, seed, DEFAULT_X_TOL)
    }

    /// As [`HermiteTable::with_seed`], with times at least `min_spacing` apart.
    pub(crate) fn with_spacing(
        times: &[f64],
        values: &[f64],
        derivatives: &[f64],
        seed: HermiteSeed,
        min_spacing: f64,
    ) -> Result<Self, InterpolationError> {
        validate_samples(times, values, derivatives, min_spacing)?;
        let (nodes, coeffs) = hermite_coefficients(times, values, derivatives, seed);
        Ok(Self { nodes, coeffs, seed })
    }

    /// First `t = t_start + k * step` in `[t_start, t_end]` where the slope
    /// exceeds `limit`, or `None`. A non-positive or non-finite `step` scans nothing.
    pub fn first_derivative_above(&self, limit: f64, t_start: f64, t_end: f64, step: f64) -> Option<f64> {
        if !(step.is_finite() && step > 0.0) || t_end < t_start {
            return None;
        }
        let steps = ((t_end - t_start) / step).round() as usize;
        (0..=steps)
            .map(|k| t_start + k as f64 * step)
            .find(|&t| self.derivative_at(t) > limit)
    }

    pub fn nodes(&self)  -> &[f64] { &self.nodes }
    pub fn coeffs(&self) -> &[f64] { &self.coeffs }
    pub fn seed(&self)   -> HermiteSeed { self.seed }

    pub fn value_at(&self, t: f64) -> f64 {
        evaluate_hermite(t, &self.nodes, &self.coeffs)
    }

    pub fn derivative_at(&self, t: f64) -> f64 {
        evaluate_hermite_derivative(t, &self.nodes, &self.coeffs)
    }
}

impl Interpolator for HermiteTable {
    fn eval(&self, t: f64) -> Result<f64, InterpolationError> {
        if !t.is_finite() {
            return Err(InterpolationError::NonFinitePoint { got: t });
        }
        Ok(self.value_at(t))
    }

    fn eval_derivative(&self, t: f64) -> Result<f64, InterpolationError> {
        if !t.is_finite() {
            return Err(InterpolationError::NonFinitePoint { got: t });
        }
        Ok(self.derivative_at(t))
    }
}


/// Hermite interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]; `x` are the sample times, `y` the values.
///   Times must be strictly increasing.
/// - `dy`     : derivative at each sample time
/// - `seed`   : [`HermiteSeed`] rule
#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
    dy: &'a [f64],
    seed: HermiteSeed,
}
impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        let mut common = CommonCfg::new();
        common.require_increasing = true;
        Self { common, dy: &[], seed: HermiteSeed::default() }
    }

    pub fn set_dy(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        let times = self.common.x.len();
        if times != 0 && times != v.len() {
            return Err(InterpolationError::UnequalHermiteLength {
                times,
                values: self.common.y.len(),
                derivatives: v.len(),
            });
        }

        self.dy = v;
        Ok(self)
    }

    pub fn set_seed(mut self, seed: HermiteSeed) -> Self {
        self.seed = seed;
        self
    }
}
impl Default for HermiteCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(HermiteCfg<'a>);


/// Performs Hermite interpolation over the data in [`HermiteCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"hermite"`
/// - `n_provided`     : number of samples
/// - `n_nodes`        : `2 * n_provided`
/// - `evaluated`      : interpolated values at each evaluation point
/// - `derivatives`    : interpolated slope at each evaluation point
///
/// # Errors
/// - Validation errors as in [`hermite_divided_differences`].
/// - [`InterpolationError::OutOfBounds`] if an evaluation point lies outside
///   `[t_0, t_{n-1}]` and extrapolation is off.
pub fn interpolate(cfg: HermiteCfg) -> Result<InterpolationReport, InterpolationError> {
    let times = cfg.common.x();
    let evals = cfg.common.x_eval();

    let table = HermiteTable::with_spacing(
        times,
        cfg.common.y(),
        cfg.dy,
        cfg.seed,
        cfg.common.x_min_spacing(),
    )?;
    let mut report = InterpolationReport::new(
        Algorithm::Hermite,
        times.len(),
        table.nodes.len(),
        evals.len(),
    );

    let (t_min, t_max) = node_range(times);
    for &tq in evals {
        if !cfg.common.extrapolate() && (tq < t_min || tq > t_max) {
            return Err(InterpolationError::OutOfBounds { got: tq, x_min: t_min, x_max: t_max });
        }
        report.evaluated.push(table.value_at(tq));
        report.derivatives.push(table.derivative_at(tq));
    }

    debug!(algorithm = report.algorithm_name, n_nodes = report.n_nodes, n_evaluated = report.n_evaluated, "interpolated");
    Ok(report)
}
