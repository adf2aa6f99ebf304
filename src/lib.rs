//! Root-finding and divided-difference interpolation kernels.
//!
//! ┌ [`root_finding`]  : bisection, Newton and secant behind [`root_finding::RootFinder`]
//! ├ [`interpolation`] : Newton and Hermite divided differences, Chebyshev nodes
//! ├ [`curves`]        : Bézier evaluation for the plotting demo
//! └ [`output`]        : flat text dumps read by the plotting scripts

pub mod curves;
pub mod interpolation;
pub mod logging;
pub mod output;
pub mod root_finding;
