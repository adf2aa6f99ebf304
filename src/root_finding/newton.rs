//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{NewtonError, RootFindingError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use tracing::{debug, warn};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


/// Newton configuration.
///
/// # Fields
/// - `common`         : [`CommonCfg`]; `tol` bounds `|f(x)|` at the root.
/// - `min_derivative` : smallest `|f'(x)|` the solver will divide by (default `1e-8`).
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`] (100).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
    min_derivative: f64,
}
impl NewtonCfg {
    pub const DEFAULT_MIN_DERIVATIVE: f64 = 1e-8;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            min_derivative: Self::DEFAULT_MIN_DERIVATIVE,
        }
    }

    pub fn set_min_derivative(mut self, v: f64) -> Result<Self, NewtonError> {
        if !v.is_finite() || v < 0.0 {
            return Err(NewtonError::InvalidMinDerivative { got: v });
        }
        self.min_derivative = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn min_derivative(&self) -> f64 { self.min_derivative }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Helpers
/// - `eval_fx_checked`  : evaluates `f(x)` with finite-check
/// - `eval_dfx_checked` : evaluates user-supplied derivative `df(x)`
#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}
#[inline]
fn eval_dfx_checked<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with an analytic derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerance, optional `max_iter`, `min_derivative`)
///
/// # Behavior
/// - While `|f(x)| > tol` and fewer than `max_iter` updates were made,
///   `x <- x - f(x) / f'(x)`.
/// - A derivative with `|f'(x)| < min_derivative` aborts the run; the error
///   carries the current (non-converged) iterate.
/// - Running out of iterations is *not* an error: the last iterate comes back
///   with [`TerminationReason::IterationLimit`]. Check
///   [`RootFindingReport::converged`] when a guarantee is needed.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::DerivativeTooSmall`]  : `|f'(x)| < min_derivative`
/// - [`NewtonError::DerivativeNotFinite`] : `f'(x)` is NaN/inf
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or non-finite
///
/// # Notes
/// - Convergence is *local only*. For guaranteed convergence use
///   [`crate::root_finding::bisection::bisection`].
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let tol       = super::config::check_tol(cfg.tol())?;
    let min_dfx   = cfg.min_derivative();
    let algo_name = ALGORITHM.algorithm_name();
    let num_iter  = match cfg.max_iter() {
        Some(v) => v,
        None    => ALGORITHM.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals: usize = 0;

    let mut x      = x0;
    let mut prev_x = x0;
    let mut fx     = eval_fx_checked(&mut func, x, &mut evals)?;
    let mut iter   = 0;

    while fx.abs() > tol && iter < num_iter {
        let dfx = eval_dfx_checked(&mut dfunc, x, &mut evals)?;
        if dfx.abs() < min_dfx {
            warn!(algorithm = algo_name, x, dfx, "derivative too small");
            return Err(NewtonError::DerivativeTooSmall { x, dfx });
        }

        prev_x = x;
        x      = x - fx / dfx;
        fx     = eval_fx_checked(&mut func, x, &mut evals)?;
        iter  += 1;
    }

    if fx.abs() > tol {
        warn!(algorithm = algo_name, iterations = iter, root = x, "did not converge within the iteration limit");
        return Ok(RootFindingReport {
            root                : x,
            f_root              : fx,
            iterations          : iter,
            evaluations         : evals,
            termination_reason  : TerminationReason::IterationLimit,
            tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
            stencil             : Stencil::singleton(prev_x),
            algorithm_name      : algo_name,
        });
    }

    debug!(algorithm = algo_name, iterations = iter, root = x, "tolerance reached");
    Ok(RootFindingReport {
        root                : x,
        f_root              : fx,
        iterations          : iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::ToleranceReached,
        tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
        stencil             : Stencil::singleton(prev_x), // previous iterate
        algorithm_name      : algo_name,
    })
}
