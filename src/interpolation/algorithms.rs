//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Newton`]  ordinary divided differences
/// - [`Algorithm::Hermite`] divided differences over doubled nodes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Newton,
    Hermite,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton  => "newton",
            Algorithm::Hermite => "hermite",
        }
    }
}
