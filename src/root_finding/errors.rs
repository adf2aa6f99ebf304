//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation
//! │   ├ invalid tolerance
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! ├ [`BisectionError`]   : bracket errors (no sign change, bad bounds)
//! ├ [`NewtonError`]      : derivative errors (vanishing, non-finite)
//! ├ [`SecantError`]      : degenerate steps and iteration exhaustion
//! │
//! └ [`SolveError`]       : union returned through [`crate::root_finding::RootFinder`]


use thiserror::Error;


/// Root-finding runtime errors shared by every method.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) >= 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid min_derivative: must be finite and >= 0. got {got}")]
    InvalidMinDerivative { got: f64 },

    #[error("derivative too small at x={x}, f'(x)={dfx}")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("invalid min_denominator: must be finite and >= 0. got {got}")]
    InvalidMinDenominator { got: f64 },

    #[error("degenerate secant: |f(x1) - f(x0)| near 0 at x0={x0}, x1={x1}")]
    DegenerateSecantStep { x0: f64, x1: f64, fx0: f64, fx1: f64 },

    #[error("no convergence after {iterations} iterations; last iterate x={last_x}")]
    NonConvergence { last_x: f64, iterations: usize },
}


/// Failure of any solver driven through the [`crate::root_finding::RootFinder`] trait.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Bisection(#[from] BisectionError),

    #[error(transparent)]
    Newton(#[from] NewtonError),

    #[error(transparent)]
    Secant(#[from] SecantError),
}
