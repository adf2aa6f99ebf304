//! Bisection method

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{BisectionError, RootFindingError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::strictly_opposite_sign;
use tracing::{debug, warn};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


/// Bisection configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]; `tol` bounds the final half-width `(b - a) / 2`.
///
/// # Defaults
/// - If `max_iter` is `None`, [`bisection`] uses [`bisection_theoretical_iter`]
///   plus one guard step, capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


/// Number of halvings needed before `(b - a) / 2 <= tol`.
///
/// Returns `0` when the initial bracket already satisfies the tolerance.
pub(crate) fn bisection_theoretical_iter(a: f64, b: f64, tol: f64) -> usize {
    let half_width = (b - a) * 0.5;
    if half_width <= tol {
        return 0;
    }
    (half_width / tol).log2().ceil() as usize
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the bracket. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the bracket. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`]; `tol` is the target half-width.
///
/// # Behavior
/// ├ Requires `f(a) * f(b) < 0`; a zero at either endpoint is not a sign change.
/// ├ Each step evaluates the midpoint `c`. An exact zero returns `c` at once,
/// │ otherwise the endpoint sharing the sign of `f(c)` moves to `c`.
/// └ Stops once `(b - a) / 2 <= tol` and returns the final midpoint.
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` non-finite, or `a >= b`.
/// ├ [`BisectionError::NoSignChange`]  - `f(a)`, `f(b)` not of strictly opposite sign.
/// └ Propagated via [`BisectionError::RootFinding`]:
///   ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` is NaN/inf.
///   └ [`RootFindingError::InvalidTolerance`]    - `tol` <= 0 or non-finite.
///
/// # Notes
/// ├ A tolerance below the spacing of floats near the root cannot be met;
/// │ the solver then stops with [`TerminationReason::MachinePrecisionReached`].
/// └ Hitting the iteration guard reports [`TerminationReason::IterationLimit`].
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let tol       = super::config::check_tol(cfg.tol())?;
    let algo_name = ALGORITHM.algorithm_name();
    let num_iter  = match cfg.max_iter() {
        Some(m) => m,
        None    => (bisection_theoretical_iter(a, b, tol) + 1).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut fa = eval(a)?;
    let fb     = eval(b)?;
    if !strictly_opposite_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut iter = 0;
    while (b - a) * 0.5 > tol {
        let midpoint = calculate_bisection(a, b);

        if iter == num_iter {
            let fm = eval(midpoint)?;
            warn!(algorithm = algo_name, iterations = iter, root = midpoint, "iteration limit reached");
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::IterationLimit,
                tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name,
            });
        }

        // bracket no longer splittable in floating point
        if midpoint <= a || midpoint >= b {
            let fm = eval(midpoint)?;
            debug!(algorithm = algo_name, iterations = iter, root = midpoint, "machine precision reached");
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::MachinePrecisionReached,
                tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name,
            });
        }

        iter += 1;
        let fm = eval(midpoint)?;
        if fm == 0.0 {
            debug!(algorithm = algo_name, iterations = iter, root = midpoint, "exact root");
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ExactRoot,
                tolerance_satisfied : ToleranceSatisfied::ExactZero,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : algo_name,
            });
        }

        // shrink interval
        if strictly_opposite_sign(fa, fm) {
            b = midpoint;
        } else {
            a = midpoint;
            fa = fm;
        }
    }

    let midpoint = calculate_bisection(a, b);
    let fm       = eval(midpoint)?;
    debug!(algorithm = algo_name, iterations = iter, root = midpoint, "width tolerance reached");

    Ok(RootFindingReport {
        root                : midpoint,
        f_root              : fm,
        iterations          : iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::ToleranceReached,
        tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : algo_name,
    })
}
