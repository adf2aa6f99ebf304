//! Strategy objects behind a shared [`RootFinder`] capability.
//!
//! ┌ [`Bisection`] : `a`, `b` bracket the root
//! ├ [`Newton`]    : `a` is the initial guess, `b` is ignored;
//! │                 the derivative is bound at construction
//! └ [`Secant`]    : `a`, `b` are the two distinct seeds
//!
//! Each `solve` call is independent; solvers hold configuration only and may
//! be reused or shared across threads.

use super::bisection::{bisection, BisectionCfg};
use super::errors::{BisectionError, NewtonError, SecantError, SolveError};
use super::newton::{newton, NewtonCfg};
use super::report::RootFindingReport;
use super::secant::{secant, SecantCfg};


/// Finds a zero of `f` from two seed values within `tol`.
///
/// The meaning of `a` and `b` depends on the implementor; see the module docs.
pub trait RootFinder {
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        tol: f64,
    ) -> Result<RootFindingReport, SolveError>;

    fn name(&self) -> &'static str;
}


/// Bracketing solver; see [`bisection`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bisection {
    cfg: BisectionCfg,
}

impl Bisection {
    pub fn new() -> Self { Self::default() }

    pub fn with_cfg(cfg: BisectionCfg) -> Self { Self { cfg } }
}

impl RootFinder for Bisection {
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        tol: f64,
    ) -> Result<RootFindingReport, SolveError> {
        let cfg = self.cfg.set_tol(tol).map_err(BisectionError::from)?;
        Ok(bisection(f, a, b, cfg)?)
    }

    fn name(&self) -> &'static str { "bisection" }
}


/// Newton solver carrying its derivative; see [`newton`].
pub struct Newton<G> {
    df:  G,
    cfg: NewtonCfg,
}

impl<G> Newton<G>
where G: Fn(f64) -> f64 {
    pub fn new(df: G) -> Self {
        Self { df, cfg: NewtonCfg::new() }
    }

    pub fn with_cfg(df: G, cfg: NewtonCfg) -> Self {
        Self { df, cfg }
    }

    /// One-seed entry point: Newton needs no second value.
    pub fn solve_from<F>(
        &self,
        f: F,
        x0: f64,
        tol: f64,
    ) -> Result<RootFindingReport, NewtonError>
    where F: Fn(f64) -> f64 {
        let cfg = self.cfg.set_tol(tol)?;
        newton(f, &self.df, x0, cfg)
    }
}

impl<G> std::fmt::Debug for Newton<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Newton").field("cfg", &self.cfg).finish_non_exhaustive()
    }
}

impl<G> RootFinder for Newton<G>
where G: Fn(f64) -> f64 {
    /// `a` is the initial guess; `b` is ignored.
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        _b: f64,
        tol: f64,
    ) -> Result<RootFindingReport, SolveError> {
        Ok(self.solve_from(f, a, tol)?)
    }

    fn name(&self) -> &'static str { "newton" }
}


/// Two-seed open solver; see [`secant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Secant {
    cfg: SecantCfg,
}

impl Secant {
    pub fn new() -> Self { Self::default() }

    pub fn with_cfg(cfg: SecantCfg) -> Self { Self { cfg } }
}

impl RootFinder for Secant {
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        tol: f64,
    ) -> Result<RootFindingReport, SolveError> {
        let cfg = self.cfg.set_tol(tol).map_err(SecantError::from)?;
        Ok(secant(f, a, b, cfg)?)
    }

    fn name(&self) -> &'static str { "secant" }
}
