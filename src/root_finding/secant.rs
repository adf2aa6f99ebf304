//! Secant method

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, SecantError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use tracing::{debug, warn};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


/// Secant configuration
///
/// # Fields
/// - `common`          : [`CommonCfg`]; `tol` bounds `|f(x)|` at the root.
/// - `min_denominator` : smallest `|f(x1) - f(x0)|` the update will divide by
///   (default `1e-12`).
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`] (100).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
    min_denominator: f64,
}
impl SecantCfg {
    pub const DEFAULT_MIN_DENOMINATOR: f64 = 1e-12;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            min_denominator: Self::DEFAULT_MIN_DENOMINATOR,
        }
    }

    pub fn set_min_denominator(mut self, v: f64) -> Result<Self, SecantError> {
        if !v.is_finite() || v < 0.0 {
            return Err(SecantError::InvalidMinDenominator { got: v });
        }
        self.min_denominator = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn min_denominator(&self) -> f64 { self.min_denominator }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Ok(x2)` with `x2 = x1 - f(x1) (x1 - x0) / (f(x1) - f(x0))`
/// - `Err(DegenerateSecantStep)` if `|f(x1) - f(x0)| < min_denominator`
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
    min_denominator: f64,
) -> Result<f64, SecantError> {
    let denom = fx1 - fx0;
    if denom.abs() < min_denominator {
        return Err(SecantError::DegenerateSecantStep { x0, x1, fx0, fx1 });
    }

    Ok(x1 - fx1 * (x1 - x0) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess.  Must be finite and not equal to `x1`
/// - `x1`   : Second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`SecantCfg`] (tolerance, optional `max_iter`, `min_denominator`)
///
/// # Behavior
/// - While `|f(x1)| > tol`, form the secant intercept `x2` and shift the
///   window `(x0, x1) <- (x1, x2)`.
/// - Stencil holds the pair `{x_k, x_{k-1}}` that produced the root.
///
/// # Errors
/// - [`SecantError::InvalidGuess`]         : `x0` or `x1` is NaN/inf or equal
/// - [`SecantError::DegenerateSecantStep`] : consecutive function values too close
/// - [`SecantError::NonConvergence`]       : `max_iter` updates without `|f(x)| <= tol`
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or non-finite
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let tol       = super::config::check_tol(cfg.tol())?;
    let min_denom = cfg.min_denominator();
    let algo_name = ALGORITHM.algorithm_name();
    let num_iter  = match cfg.max_iter() {
        Some(v) => v,
        None    => ALGORITHM.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        }

        Ok(fx)
    };

    let mut x_parent2 = x0;
    let mut x_parent1 = x1;
    let mut f_parent2 = eval(x0)?;
    let mut f_parent1 = eval(x1)?;
    let mut iter      = 0;

    while f_parent1.abs() > tol {
        if iter == num_iter {
            warn!(algorithm = algo_name, iterations = iter, last_x = x_parent1, "no convergence");
            return Err(SecantError::NonConvergence { last_x: x_parent1, iterations: iter });
        }

        let x_next = match calculate_secant_x_intercept(
            (x_parent2, f_parent2), (x_parent1, f_parent1), min_denom
        ) {
            Ok(x)  => x,
            Err(e) => {
                warn!(algorithm = algo_name, iterations = iter, "division by near-zero secant slope");
                return Err(e);
            }
        };
        let f_next = eval(x_next)?;

        x_parent2 = x_parent1;
        f_parent2 = f_parent1;
        x_parent1 = x_next;
        f_parent1 = f_next;
        iter += 1;
    }

    debug!(algorithm = algo_name, iterations = iter, root = x_parent1, "tolerance reached");
    Ok(RootFindingReport {
        root                : x_parent1,
        f_root              : f_parent1,
        iterations          : iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::ToleranceReached,
        tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
        stencil             : Stencil::doubleton(x_parent1, x_parent2),
        algorithm_name      : algo_name,
    })
}
