//! Newton interpolation of `1 / (1 + 25 x^2)` through Chebyshev nodes.
//!
//! Writes `Chebyshev_output.txt`.

use numkit::interpolation::chebyshev::chebyshev_nodes;
use numkit::interpolation::newton::DividedDifferenceTable;
use numkit::logging;
use numkit::output::{self, compare_on_grid, write_interpolation_block, OutputError};
use std::io::Write;
use tracing::info;

const SAMPLES: usize = 100;

fn f(x: f64) -> f64 {
    1.0 / (1.0 + 25.0 * x * x)
}

fn main() -> Result<(), OutputError> {
    logging::init();

    let mut out = output::create("Chebyshev_output.txt")?;
    for n in [5, 10, 15, 20] {
        let x = chebyshev_nodes(n)?;
        let y: Vec<f64> = x.iter().map(|&xi| f(xi)).collect();

        let table = DividedDifferenceTable::new(&x, &y)?;
        let rows  = compare_on_grid(&table, f, -1.0, 1.0, SAMPLES)?;
        let worst = rows.iter().map(|r| (r.exact - r.interpolated).abs()).fold(0.0, f64::max);
        info!(n, max_error = worst, "chebyshev interpolation");

        write_interpolation_block(&mut out, n, &rows)?;
    }
    out.flush()?;
    Ok(())
}
