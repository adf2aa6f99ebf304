use std::f64::consts::PI;

use numkit::interpolation::chebyshev::{chebyshev_nodes, chebyshev_nodes_on};
use numkit::interpolation::errors::InterpolationError;
use numkit::interpolation::newton::DividedDifferenceTable;

type TestResult = Result<(), InterpolationError>;

fn runge_25(x: f64) -> f64 {
    1.0 / (1.0 + 25.0 * x * x)
}

fn max_error_on_unit(table: &DividedDifferenceTable) -> f64 {
    (0..=100)
        .map(|i| -1.0 + i as f64 * 0.02)
        .map(|x| (runge_25(x) - table.value_at(x)).abs())
        .fold(0.0, f64::max)
}

#[test]
fn count_and_range() -> TestResult {
    for n in [1, 2, 5, 20] {
        let nodes = chebyshev_nodes(n)?;
        assert_eq!(nodes.len(), n);
        assert!(nodes.iter().all(|x| x.abs() < 1.0));
    }
    Ok(())
}

#[test]
fn closed_form() -> TestResult {
    let nodes = chebyshev_nodes(5)?;
    for (k, &x) in nodes.iter().enumerate() {
        let want = (PI * (2 * k + 1) as f64 / 10.0).cos();
        assert!((x - want).abs() < 1e-15);
    }
    // decreasing, symmetric about the origin
    assert!(nodes.windows(2).all(|w| w[0] > w[1]));
    assert!((nodes[0] + nodes[4]).abs() < 1e-15);
    assert!(nodes[2].abs() < 1e-15);
    Ok(())
}

#[test]
fn zero_nodes() {
    assert_eq!(chebyshev_nodes(0), Err(InterpolationError::InvalidNodeCount { got: 0 }));
    assert_eq!(
        chebyshev_nodes_on(0, -1.0, 1.0),
        Err(InterpolationError::InvalidNodeCount { got: 0 })
    );
}

#[test]
fn mapped_onto_interval() -> TestResult {
    let unit   = chebyshev_nodes(4)?;
    let mapped = chebyshev_nodes_on(4, 2.0, 6.0)?;
    for (u, m) in unit.iter().zip(&mapped) {
        assert!((m - (4.0 + 2.0 * u)).abs() < 1e-14);
    }
    assert_eq!(
        chebyshev_nodes_on(3, 1.0, -1.0),
        Err(InterpolationError::InvalidInterval { a: 1.0, b: -1.0 })
    );
    Ok(())
}

#[test]
fn beats_equispaced_nodes() -> TestResult {
    for n in [15, 20] {
        let cheb_x = chebyshev_nodes(n)?;
        let cheb_y: Vec<f64> = cheb_x.iter().map(|&x| runge_25(x)).collect();
        let cheb   = DividedDifferenceTable::new(&cheb_x, &cheb_y)?;

        let equi_x: Vec<f64> = (0..n).map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64).collect();
        let equi_y: Vec<f64> = equi_x.iter().map(|&x| runge_25(x)).collect();
        let equi   = DividedDifferenceTable::new(&equi_x, &equi_y)?;

        let cheb_err = max_error_on_unit(&cheb);
        let equi_err = max_error_on_unit(&equi);
        assert!(cheb_err < 0.1, "n = {n}: chebyshev error {cheb_err}");
        assert!(equi_err > 1.0, "n = {n}: equispaced error {equi_err}");
    }
    Ok(())
}
