//! tests for the bisection root finding algorithm
use numkit::root_finding::bisection::{bisection, BisectionCfg};
use numkit::root_finding::errors::{BisectionError, RootFindingError};
use numkit::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;

    let cfg = BisectionCfg::new().set_tol(tol)?;
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= tol);
    assert!(res.iterations > 0);
    assert!(res.converged());
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let tol = 1e-8;

    let res = bisection(f, -10.0, 1.0, BisectionCfg::new().set_tol(tol)?)?;
    assert!((res.root + 5.0).abs() <= tol);
    Ok(())
}

#[test]
fn root_stays_inside_bracket() -> TestResult {
    let f = |x: f64| x.cos() - x;
    let (a, b) = (0.0, 1.0);

    let res = bisection(f, a, b, BisectionCfg::new().set_tol(1e-6)?)?;
    assert!(a <= res.root && res.root <= b);
    assert!((res.root - 0.739_085_133_215_160_6).abs() <= 1e-6);

    let [lo, hi] = res.stencil.stencil() else { panic!("bracket stencil") };
    assert!(lo <= hi && hi - lo <= 2e-6);
    Ok(())
}

#[test]
fn midpoint_exact_root() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, -1.0, 1.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.termination_reason, TerminationReason::ExactRoot);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactZero);
    Ok(())
}

#[test]
fn iteration_guard_matches_theory() -> TestResult {
    // half-width 1, tol 2^-10 -> exactly 10 halvings
    let f   = |x: f64| x - 0.3;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new().set_tol(2f64.powi(-10))?)?;
    assert_eq!(res.iterations, 10);
    assert_eq!(res.evaluations, 2 + 10 + 1);
    Ok(())
}

#[test]
fn explicit_iteration_limit() -> TestResult {
    let f   = |x: f64| x - 0.3;
    let cfg = BisectionCfg::new().set_tol(1e-12)?.set_max_iter(5)?;
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.iterations, 5);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert!(!res.converged());
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();
    assert_eq!(err, BisectionError::NoSignChange { a: -1.0, b: 1.0 });
}

#[test]
fn zero_at_endpoint_is_not_a_sign_change() {
    let f   = |x: f64| x;
    let err = bisection(f, 0.0, 1.0, BisectionCfg::new()).unwrap_err();
    assert_eq!(err, BisectionError::NoSignChange { a: 0.0, b: 1.0 });
}

#[test]
fn invalid_bounds() {
    let f = |x: f64| x;
    assert_eq!(
        bisection(f, 1.0, -1.0, BisectionCfg::new()).unwrap_err(),
        BisectionError::InvalidBounds { a: 1.0, b: -1.0 }
    );
    assert!(matches!(
        bisection(f, f64::NAN, 1.0, BisectionCfg::new()),
        Err(BisectionError::InvalidBounds { .. })
    ));
}

#[test]
fn invalid_tolerance() {
    assert_eq!(
        BisectionCfg::new().set_tol(0.0).unwrap_err(),
        RootFindingError::InvalidTolerance { got: 0.0 }
    );
    assert!(BisectionCfg::new().set_tol(f64::INFINITY).is_err());
    assert_eq!(
        BisectionCfg::new().set_max_iter(0).unwrap_err(),
        RootFindingError::InvalidMaxIter { got: 0 }
    );
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()
    ));
}

#[test]
fn infinite_endpoint_is_rejected() {
    let f   = |x: f64| 1.0 / x - x.tan();
    let err = bisection(f, 0.0, 1.5, BisectionCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx == f64::INFINITY
    ));
}

#[test]
fn bracket_moved_off_the_pole() -> TestResult {
    let f   = |x: f64| 1.0 / x - x.tan();
    let res = bisection(f, 0.1, std::f64::consts::FRAC_PI_2 - 0.1, BisectionCfg::new().set_tol(1e-8)?)?;
    assert!((res.root - 0.860_333_589_019_379_8).abs() < 1e-7);
    Ok(())
}
