//! Bézier curves
//!
//! Evaluates [Bézier curves](https://en.wikipedia.org/wiki/B%C3%A9zier_curve)
//! through the Bernstein basis and chains cubic segments over a sampled
//! outline. The heart outline used by the plotting driver lives here too.

use std::f64::consts::PI;
use thiserror::Error;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    #[error("control polygon must contain at least one point")]
    EmptyControlPolygon,

    #[error("segments must be >= 1. got {got}")]
    InvalidSegments { got: usize },
}


/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}


/// `C(n, k)` as a float, built by the multiplicative formula.
#[inline]
fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}


/// Point on the Bézier curve of `control` at parameter `t`.
///
/// `B(t) = Σ C(n, i) (1 - t)^(n - i) t^i P_i` with `n = control.len() - 1`.
///
/// # Errors
/// - [`CurveError::EmptyControlPolygon`] if `control` is empty.
pub fn bezier_point(control: &[Point2], t: f64) -> Result<Point2, CurveError> {
    if control.is_empty() {
        return Err(CurveError::EmptyControlPolygon);
    }

    let n = control.len() - 1;
    let s = 1.0 - t;
    Ok(control.iter().enumerate().fold(Point2::default(), |acc, (i, p)| {
        let w = binomial(n, i) * s.powi((n - i) as i32) * t.powi(i as i32);
        Point2::new(acc.x + w * p.x, acc.y + w * p.y)
    }))
}


/// Samples `m` points of the heart outline
/// `x = cos θ`, `y = 2/3 (sqrt|x| + sin θ)`, `θ = 2π i / m`.
pub fn heart_points(m: usize) -> Vec<Point2> {
    (0..m)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / m as f64;
            let x = theta.cos();
            Point2::new(x, (2.0 / 3.0) * (x.abs().sqrt() + theta.sin()))
        })
        .collect()
}


/// Chains cubic segments `points[i..=i + 3]` for `i = 0, 3, 6, ...` and
/// samples each at `segments + 1` evenly spaced parameters in `[0, 1]`.
///
/// Trailing points that do not complete a segment are ignored.
///
/// # Errors
/// - [`CurveError::InvalidSegments`] if `segments == 0`.
pub fn piecewise_cubic(points: &[Point2], segments: usize) -> Result<Vec<Point2>, CurveError> {
    if segments == 0 {
        return Err(CurveError::InvalidSegments { got: segments });
    }

    let mut curve = Vec::new();
    let mut i = 0;
    while i + 3 < points.len() {
        let control = &points[i..i + 4];
        for j in 0..=segments {
            curve.push(bezier_point(control, j as f64 / segments as f64)?);
        }
        i += 3;
    }
    Ok(curve)
}
