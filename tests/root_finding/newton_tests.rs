//! tests for the newton root finding algorithm
use numkit::root_finding::errors::{NewtonError, RootFindingError};
use numkit::root_finding::newton::{newton, NewtonCfg};
use numkit::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let tol = 1e-12;

    let res = newton(f, df, 1.0, NewtonCfg::new().set_tol(tol)?)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert!(res.f_root.abs() <= tol);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-12);
    assert!(res.iterations < 10);
    Ok(())
}

#[test]
fn x_minus_tan_x_near_four_and_a_half() -> TestResult {
    let f  = |x: f64| x - x.tan();
    let df = |x: f64| 1.0 - 1.0 / x.cos().powi(2);

    let res = newton(f, df, 4.5, NewtonCfg::new().set_tol(1e-10)?)?;
    assert!((res.root - 4.493_409_457_909_064).abs() < 1e-8);
    Ok(())
}

#[test]
fn root_already_at_guess() -> TestResult {
    let res = newton(|x: f64| x - 3.0, |_x: f64| 1.0, 3.0, NewtonCfg::new())?;
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 1);
    assert_eq!(res.root, 3.0);
    Ok(())
}

#[test]
fn vanishing_derivative() {
    let f  = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let err = newton(f, df, 0.0, NewtonCfg::new()).unwrap_err();
    assert_eq!(err, NewtonError::DerivativeTooSmall { x: 0.0, dfx: 0.0 });
}

#[test]
fn iteration_budget_exhausted() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_max_iter(3)?;

    let res = newton(f, df, 100.0, cfg)?;
    assert_eq!(res.iterations, 3);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert!(!res.converged());
    assert!(res.root < 100.0);
    Ok(())
}

#[test]
fn invalid_guess() {
    let err = newton(|x: f64| x, |_x: f64| 1.0, f64::NAN, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { x0 } if x0.is_nan()));
}

#[test]
fn non_finite_function_value() {
    let f   = |x: f64| 1.0 / x;
    let err = newton(f, |x: f64| -1.0 / (x * x), 0.0, NewtonCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::NonFiniteEvaluation { x, .. }) if x == 0.0
    ));
}
