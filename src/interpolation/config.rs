//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between
//! `x` data; [`DEFAULT_X_TOL`]. Shared by all interpolation algorithms.
//!
//! [`CommonCfg`] holds the universal fields:
//! - `x`                  : x values provided
//! - `y`                  : y values provided
//! - `x_eval`             : x values to evaluate
//! - `x_min_spacing`      : smallest allowed gap between two nodes
//! - `extrapolate`        : allow evaluation outside `[min x, max x]`
//! - `require_increasing` : nodes must be strictly increasing (hermite)
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) extrapolate: bool,
    pub(crate) require_increasing: bool,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            extrapolate: false,
            require_increasing: false,
        }
    }
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        // x_tol may have been tightened after set_x
        check_nodes(x, self.x_min_spacing, self.require_increasing)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }
    pub fn extrapolate(&self) -> bool { self.extrapolate }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_extrapolate(&mut self, v: bool) { self.extrapolate = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Rejects any two nodes closer than `min_spacing`, in any order.
pub(crate) fn check_distinct(xs: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    for (i, &xi) in xs.iter().enumerate() {
        for &xj in &xs[i + 1..] {
            if (xi - xj).abs() < min_spacing {
                return Err(InterpolationError::DuplicateX { x1: xi, x2: xj });
            }
        }
    }
    Ok(())
}

/// Requires consecutive nodes to increase by at least `min_spacing`.
pub(crate) fn check_increasing(xs: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    for w in xs.windows(2) {
        if (w[1] - w[0]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] });
        }
        if w[1] <= w[0] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

/// Full node validation used by every table constructor.
pub(crate) fn check_nodes(
    xs: &[f64],
    min_spacing: f64,
    require_increasing: bool,
) -> Result<(), InterpolationError> {
    if xs.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(xs) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if require_increasing {
        check_increasing(xs, min_spacing)
    } else {
        check_distinct(xs, min_spacing)
    }
}

/// Smallest and largest node, whatever their order.
pub(crate) fn node_range(xs: &[f64]) -> (f64, f64) {
    xs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                $crate::interpolation::config::check_nodes(
                    v,
                    self.common.x_min_spacing,
                    self.common.require_increasing,
                )?;

                self.common.with_x(v);

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            /// Permit evaluation outside the node range (off by default).
            pub fn allow_extrapolation(mut self, v: bool) -> Self {
                self.common.with_extrapolate(v);
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;
