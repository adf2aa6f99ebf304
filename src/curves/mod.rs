pub mod bezier;
pub use bezier::{bezier_point, heart_points, piecewise_cubic, CurveError, Point2};
