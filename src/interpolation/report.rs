//! Defines the [`InterpolationReport`] struct returned by the
//! config-driven `interpolate` entry points.
//!
//! The report summarizes the algorithm used, number of data and evaluation
//! points, and the interpolant (and its slope) at each evaluation point.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"newton"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_nodes`        : length of the node sequence (`2 * n_provided` for hermite)
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
/// - `derivatives`    : slope of the interpolant at each evaluation point
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_nodes: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub derivatives: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_nodes: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_nodes,
            n_evaluated,
            evaluated: Vec::with_capacity(n_evaluated),
            derivatives: Vec::with_capacity(n_evaluated),
        }
    }
}
