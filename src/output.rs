//! Plain-text dumps consumed by the plotting scripts.
//!
//! ┌ interpolation blocks : `n = <n>:` header, then
//! │                        `x: <x> Exact: <y> Interpolated: <p>` per line
//! │                        (5 decimals), blank line after each block
//! └ point columns        : `<x> <y>` per line, no header

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::curves::Point2;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::Interpolator;


#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}


/// One line of an interpolation block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub x: f64,
    pub exact: f64,
    pub interpolated: f64,
}


/// Evaluates `exact` and `interp` at `samples + 1` evenly spaced points of `[a, b]`.
pub fn compare_on_grid<I, F>(
    interp: &I,
    exact: F,
    a: f64,
    b: f64,
    samples: usize,
) -> Result<Vec<ComparisonRow>, InterpolationError>
where
    I: Interpolator + ?Sized,
    F: Fn(f64) -> f64,
{
    let step = if samples == 0 { 0.0 } else { (b - a) / samples as f64 };
    (0..=samples)
        .map(|i| {
            let x = a + i as f64 * step;
            Ok(ComparisonRow { x, exact: exact(x), interpolated: interp.eval(x)? })
        })
        .collect()
}


/// Writes one `n = <n>:` block followed by a blank line.
pub fn write_interpolation_block<W: Write>(
    out: &mut W,
    n: usize,
    rows: &[ComparisonRow],
) -> Result<(), OutputError> {
    writeln!(out, "n = {n}:")?;
    for row in rows {
        writeln!(
            out,
            "x: {:.5} Exact: {:.5} Interpolated: {:.5}",
            row.x, row.exact, row.interpolated
        )?;
    }
    writeln!(out)?;
    Ok(())
}


/// Writes `x y` columns, one point per line.
pub fn write_points<W: Write>(out: &mut W, points: &[Point2]) -> Result<(), OutputError> {
    for p in points {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    Ok(())
}


/// Creates (truncating) `path` behind a buffered writer.
pub fn create(path: impl AsRef<Path>) -> Result<BufWriter<File>, OutputError> {
    Ok(BufWriter::new(File::create(path)?))
}
