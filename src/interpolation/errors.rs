use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("unequal length: {times} times, {values} values, {derivatives} derivatives")]
    UnequalHermiteLength { times: usize, values: usize, derivatives: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("non-finite evaluation point {got}")]
    NonFinitePoint { got: f64 },

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64},

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid node count {got}: need at least 1")]
    InvalidNodeCount { got: usize },

    #[error("invalid interval [{a}, {b}]: bounds must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },
}
