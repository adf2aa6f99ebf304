//! Equispaced Newton interpolation of `1 / (1 + x^2)` on `[-5, 5]`.
//!
//! Writes `Newton_output.txt`; the edges diverge as `n` grows.

use numkit::interpolation::newton::DividedDifferenceTable;
use numkit::logging;
use numkit::output::{self, compare_on_grid, write_interpolation_block, OutputError};
use std::io::Write;
use tracing::info;

const X_MIN: f64 = -5.0;
const X_MAX: f64 = 5.0;
const SAMPLES: usize = 100;

fn f(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

fn main() -> Result<(), OutputError> {
    logging::init();

    let mut out = output::create("Newton_output.txt")?;
    for n in [2, 4, 6, 8] {
        let x: Vec<f64> = (0..=n)
            .map(|i| X_MIN + i as f64 * (X_MAX - X_MIN) / n as f64)
            .collect();
        let y: Vec<f64> = x.iter().map(|&xi| f(xi)).collect();

        let table = DividedDifferenceTable::new(&x, &y)?;
        let rows  = compare_on_grid(&table, f, X_MIN, X_MAX, SAMPLES)?;
        let worst = rows.iter().map(|r| (r.exact - r.interpolated).abs()).fold(0.0, f64::max);
        info!(n, max_error = worst, "equispaced interpolation");

        write_interpolation_block(&mut out, n, &rows)?;
    }
    out.flush()?;
    Ok(())
}
