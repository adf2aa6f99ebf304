use numkit::interpolation::errors::InterpolationError;
use numkit::interpolation::hermite::{
    evaluate_hermite, hermite_divided_differences, interpolate, HermiteCfg, HermiteSeed,
    HermiteTable,
};
use numkit::interpolation::Interpolator;

use approx::assert_relative_eq;

type TestResult = Result<(), InterpolationError>;

const TIMES: [f64; 5]         = [0.0, 3.0, 5.0, 8.0, 13.0];
const DISPLACEMENTS: [f64; 5] = [0.0, 225.0, 383.0, 623.0, 993.0];
const VELOCITIES: [f64; 5]    = [75.0, 77.0, 80.0, 74.0, 72.0];

#[test]
fn car_prediction_at_ten_seconds() -> TestResult {
    let table = HermiteTable::new(&TIMES, &DISPLACEMENTS, &VELOCITIES)?;

    assert_eq!(table.seed(), HermiteSeed::DerivativeInRepeatedSlot);
    assert_relative_eq!(table.value_at(10.0), -977.896_611_857_079_7, max_relative = 1e-9);
    assert_relative_eq!(table.derivative_at(10.0), -2095.923_376_194_811_7, max_relative = 1e-9);
    Ok(())
}

#[test]
fn car_coefficients() -> TestResult {
    let (nodes, coeffs) = hermite_divided_differences(&TIMES, &DISPLACEMENTS, &VELOCITIES)?;

    assert_eq!(nodes, vec![0.0, 0.0, 3.0, 3.0, 5.0, 5.0, 8.0, 8.0, 13.0, 13.0]);
    assert_eq!(coeffs.len(), 10);
    assert_eq!(coeffs[0], 0.0);
    assert_eq!(coeffs[1], 75.0);
    assert_relative_eq!(coeffs[3], 2.0 / 9.0, max_relative = 1e-12);
    Ok(())
}

#[test]
fn default_rule_matches_every_derivative() -> TestResult {
    let table = HermiteTable::new(&TIMES, &DISPLACEMENTS, &VELOCITIES)?;
    for (&t, &v) in TIMES.iter().zip(&VELOCITIES) {
        assert_relative_eq!(table.derivative_at(t), v, max_relative = 1e-9);
    }

    // values hold only at the first two abscissas
    assert_relative_eq!(table.value_at(0.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(table.value_at(3.0), 225.0, max_relative = 1e-9);
    assert_relative_eq!(table.value_at(5.0), 531.0, max_relative = 1e-9);
    Ok(())
}

#[test]
fn textbook_rule_matches_values_and_derivatives() -> TestResult {
    let table = HermiteTable::with_seed(
        &TIMES, &DISPLACEMENTS, &VELOCITIES, HermiteSeed::ValueInRepeatedSlot,
    )?;

    for ((&t, &y), &v) in TIMES.iter().zip(&DISPLACEMENTS).zip(&VELOCITIES) {
        assert_relative_eq!(table.value_at(t), y, epsilon = 1e-8);
        assert_relative_eq!(table.derivative_at(t), v, max_relative = 1e-9);
    }
    assert_relative_eq!(table.value_at(10.0), 742.502_839_098_770_9, max_relative = 1e-9);
    assert_relative_eq!(table.derivative_at(10.0), 48.381_736_363_981_155, max_relative = 1e-9);
    Ok(())
}

#[test]
fn cubic_is_reproduced_from_two_samples() -> TestResult {
    // p(t) = t^3 - t, p' = 3t^2 - 1
    let p  = |t: f64| t.powi(3) - t;
    let dp = |t: f64| 3.0 * t * t - 1.0;
    let t  = [-1.0, 2.0];

    let table = HermiteTable::new(&t, &t.map(p), &t.map(dp))?;
    for tq in [-2.0, 0.0, 0.5, 3.0] {
        assert_relative_eq!(table.eval(tq)?, p(tq), epsilon = 1e-10);
        assert_relative_eq!(table.eval_derivative(tq)?, dp(tq), epsilon = 1e-10);
    }
    assert_eq!(
        evaluate_hermite(0.5, table.nodes(), table.coeffs()),
        table.value_at(0.5)
    );
    Ok(())
}

#[test]
fn config_driven_interpolation() -> TestResult {
    let t_eval = [10.0];
    let cfg = HermiteCfg::new()
        .set_x(&TIMES)?
        .set_y(&DISPLACEMENTS)?
        .set_dy(&VELOCITIES)?
        .set_x_eval(&t_eval)?
        .set_seed(HermiteSeed::ValueInRepeatedSlot);

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "hermite");
    assert_eq!(rep.n_provided, 5);
    assert_eq!(rep.n_nodes, 10);
    assert_relative_eq!(rep.evaluated[0], 742.502_839_098_770_9, max_relative = 1e-9);
    assert_relative_eq!(rep.derivatives[0], 48.381_736_363_981_155, max_relative = 1e-9);
    Ok(())
}

#[test]
fn config_rejects_out_of_range_times() -> TestResult {
    let t_eval = [14.0];
    let cfg = HermiteCfg::new()
        .set_x(&TIMES)?
        .set_y(&DISPLACEMENTS)?
        .set_dy(&VELOCITIES)?
        .set_x_eval(&t_eval)?;

    assert_eq!(
        interpolate(cfg).unwrap_err(),
        InterpolationError::OutOfBounds { got: 14.0, x_min: 0.0, x_max: 13.0 }
    );
    assert!(interpolate(cfg.allow_extrapolation(true)).is_ok());
    Ok(())
}

#[test]
fn times_must_increase() {
    assert_eq!(
        HermiteTable::new(&[0.0, 5.0, 3.0], &[0.0; 3], &[1.0; 3]).unwrap_err(),
        InterpolationError::NonIncreasingX
    );
    assert!(matches!(
        HermiteCfg::new().set_x(&[0.0, 0.0]),
        Err(InterpolationError::DuplicateX { .. })
    ));
}

#[test]
fn mismatched_lengths() {
    assert_eq!(
        HermiteTable::new(&[0.0, 1.0], &[0.0, 1.0], &[1.0]).unwrap_err(),
        InterpolationError::UnequalHermiteLength { times: 2, values: 2, derivatives: 1 }
    );
    assert_eq!(
        hermite_divided_differences(&[], &[], &[]).unwrap_err(),
        InterpolationError::EmptyInput
    );
}

#[test]
fn car_breaks_the_speed_limit() -> TestResult {
    let table = HermiteTable::new(&TIMES, &DISPLACEMENTS, &VELOCITIES)?;

    let first = table.first_derivative_above(81.0, 0.0, 13.0, 0.1);
    assert_relative_eq!(first.unwrap_or(f64::NAN), 0.1, max_relative = 1e-12);

    let top_speed = (0..=130)
        .map(|k| table.derivative_at(k as f64 * 0.1))
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(top_speed > 4000.0, "top speed = {top_speed}");
    Ok(())
}

#[test]
fn speed_scan_edge_cases() -> TestResult {
    let table = HermiteTable::new(&TIMES, &DISPLACEMENTS, &VELOCITIES)?;
    assert_eq!(table.first_derivative_above(1e9, 0.0, 13.0, 0.1), None);
    assert_eq!(table.first_derivative_above(81.0, 0.0, 13.0, 0.0), None);
    assert_eq!(table.first_derivative_above(81.0, 13.0, 0.0, 0.1), None);
    // the first sample alone is already scanned
    assert_eq!(table.first_derivative_above(70.0, 0.0, 13.0, 0.1), Some(0.0));
    Ok(())
}

#[test]
fn custom_spacing_admits_close_times() -> TestResult {
    let t      = [0.0, 1e-13];
    let t_eval = [5e-14];
    let cfg = HermiteCfg::new()
        .set_x_tol(1e-15)?
        .set_x(&t)?
        .set_y(&t)?
        .set_dy(&[1.0, 1.0])?
        .set_x_eval(&t_eval)?;

    let rep = interpolate(cfg)?;
    assert_relative_eq!(rep.evaluated[0], 5e-14, max_relative = 1e-9);
    assert_relative_eq!(rep.derivatives[0], 1.0, max_relative = 1e-9);
    Ok(())
}

#[test]
fn spacing_tightened_after_times_is_enforced() -> TestResult {
    let t = [0.0, 1e-3];
    let cfg = HermiteCfg::new()
        .set_x(&t)?
        .set_y(&[0.0, 1.0])?
        .set_dy(&[1.0, 1.0])?
        .set_x_tol(1.0)?;

    assert_eq!(
        interpolate(cfg).unwrap_err(),
        InterpolationError::DuplicateX { x1: 0.0, x2: 1e-3 }
    );
    Ok(())
}
