//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    ExactRoot,
    IterationLimit,
    MachinePrecisionReached,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - open methods
///     - |f(x)| <= tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bracket methods
///     - (b - a) / 2 <= tol
/// - [`ToleranceSatisfied::ExactZero`]
///     - f(x) == 0.0 exactly
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - usually with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    ExactZero,
    ToleranceNotReached
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `left`, `right` bounds of the final interval
/// - [`Stencil::Open`]    : open methods
///     - `x` = last iterates used to compute the root
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `f_root`              : function value at `root`
/// - `iterations`          : total iterations
/// - `evaluations`         : total function (and derivative) evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `stencil`             : last set of points used in update formula
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// `true` unless the solver gave up on its iteration budget.
    ///
    /// Newton reports budget exhaustion as a best-effort report rather than
    /// an error, so callers needing a guarantee check this.
    pub fn converged(&self) -> bool {
        self.tolerance_satisfied != ToleranceSatisfied::ToleranceNotReached
    }
}
