// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod config;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod newton;
pub mod secant;

// strategy objects
pub mod solver;
pub use solver::{Bisection, Newton, RootFinder, Secant};
