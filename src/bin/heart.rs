//! Approximates a heart outline with piecewise cubic Bézier segments.
//!
//! Writes `heart_<m>.txt` for m = 10, 40, 160.

use numkit::curves::{heart_points, piecewise_cubic, CurveError};
use numkit::logging;
use numkit::output::{self, write_points, OutputError};
use std::io::Write;
use thiserror::Error;
use tracing::info;

const SEGMENTS: usize = 100;

#[derive(Debug, Error)]
enum HeartError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

fn main() -> Result<(), HeartError> {
    logging::init();

    for m in [10, 40, 160] {
        let curve = piecewise_cubic(&heart_points(m), SEGMENTS)?;

        let filename = format!("heart_{m}.txt");
        let mut out = output::create(&filename)?;
        write_points(&mut out, &curve)?;
        out.flush().map_err(OutputError::from)?;
        info!(file = %filename, points = curve.len(), "data saved");
    }
    Ok(())
}
