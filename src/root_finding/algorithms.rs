//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`].
/// This cap is only applied when a bracket algorithm’s theoretical iteration bound
/// would otherwise exceed it (e.g. [`BracketFamily::Bisection`]).
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// - Bisection returns `None`, meaning “compute theoretical bound instead”.
    ///   If that bound exceeds practical limits, [`GLOBAL_MAX_ITER_FALLBACK`] is used.
    /// - Newton and secant both stop after 100 updates.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::Secant)          => Some(100),
            Algorithm::Open(OpenFamily::Newton)          => Some(100),
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
