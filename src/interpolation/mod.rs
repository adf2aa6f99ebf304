pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod chebyshev;
pub mod hermite;
pub mod newton;
