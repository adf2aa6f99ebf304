//! Solves the root-finding homework problems with all three strategies.
//!
//! Failures are logged and the batch moves on to the next problem.

use std::f64::consts::PI;

use numkit::logging;
use numkit::root_finding::errors::SolveError;
use numkit::root_finding::report::RootFindingReport;
use numkit::root_finding::{Bisection, Newton, RootFinder, Secant};
use tracing::{info, warn};

const TOL: f64 = 1e-6;

fn log_result(label: &str, result: Result<RootFindingReport, SolveError>) -> Option<f64> {
    match result {
        Ok(rep) if rep.converged() => {
            info!(problem = label, algorithm = rep.algorithm_name, root = rep.root, iterations = rep.iterations, "root found");
            Some(rep.root)
        }
        Ok(rep) => {
            warn!(problem = label, algorithm = rep.algorithm_name, last = rep.root, "did not converge");
            Some(rep.root)
        }
        Err(e) => {
            warn!(problem = label, error = %e, "solver failed");
            None
        }
    }
}

fn problem_b(bisection: &Bisection) {
    let f1 = |x: f64| 1.0 / x - x.tan();
    let f2 = |x: f64| 1.0 / x - 2f64.powf(x);
    let f3 = |x: f64| 2f64.powf(-x) + x.exp() + 2.0 * x.cos() - 6.0;
    let f4 = |x: f64| {
        (x.powi(3) + 4.0 * x.powi(2) + 3.0 * x + 5.0)
            / (2.0 * x.powi(3) - 9.0 * x.powi(2) + 18.0 * x - 2.0)
    };

    // f1(0) = f2(0) = +inf fails the finite-evaluation check; 0.1 keeps the sign
    log_result("B1", bisection.solve(&f1, 0.1, PI / 2.0 - 0.1, TOL));
    log_result("B2", bisection.solve(&f2, 0.1, 1.0, TOL));
    log_result("B3", bisection.solve(&f3, 1.0, 3.0, TOL));
    log_result("B4", bisection.solve(&f4, 0.0, 4.0, TOL));
}

fn problem_c() {
    let f  = |x: f64| x - x.tan();
    let df = |x: f64| 1.0 - 1.0 / x.cos().powi(2);
    let newton = Newton::new(df);

    log_result("C near 4.5", newton.solve_from(f, 4.5, TOL).map_err(SolveError::from));
    log_result("C near 7.7", newton.solve_from(f, 7.7, TOL).map_err(SolveError::from));
}

fn problem_d(secant: &Secant) {
    let f1 = |x: f64| (x / 2.0).sin() - 1.0;
    let f2 = |x: f64| x.exp() - x.tan();
    let f3 = |x: f64| x.powi(3) - 12.0 * x.powi(2) + 3.0 * x + 1.0;

    log_result("D1", secant.solve(&f1, PI / 2.0, 4.0, TOL));
    log_result("D2", secant.solve(&f2, 1.0, 1.4, TOL));
    log_result("D3", secant.solve(&f3, 0.0, -0.5, TOL));
}

fn problem_e(bisection: &Bisection, secant: &Secant) {
    const L: f64 = 10.0;
    const R: f64 = 1.0;
    const TARGET: f64 = 12.4;

    let volume = |h: f64| {
        L * (0.5 * PI * R * R - R * R * (h / R).asin() - h * (R * R - h * h).sqrt()) - TARGET
    };
    // exact dV/dh; the homework used -20 / sqrt(1 - h^2)
    let d_volume = |h: f64| -2.0 * L * (R * R - h * h).sqrt();

    log_result("E bisection", bisection.solve(&volume, 0.0, 1.0, TOL));
    log_result("E newton", Newton::new(d_volume).solve(&volume, 0.5, 0.0, TOL));
    log_result("E secant", secant.solve(&volume, 0.0, 1.0, TOL));
}

fn problem_f(secant: &Secant) {
    let l = 89.0;
    let h = 49.0;
    let beta = 11.5f64.to_radians();
    let a = l * beta.sin();
    let b = l * beta.cos();

    // secant is only tried on the D = 30 case
    for (label, d, with_secant) in [("F D=55", 55.0, false), ("F D=30", 30.0, true)] {
        let c = (h + 0.5 * d) * beta.sin() - 0.5 * d * beta.tan();
        let e = (h + 0.5 * d) * beta.cos() - 0.5 * d;

        let f = move |x: f64| {
            a * x.sin() * x.cos() + b * x.sin().powi(2) - c * x.cos() - e * x.sin()
        };
        let df = move |x: f64| {
            a * (x.cos().powi(2) - x.sin().powi(2)) + 2.0 * b * x.sin() * x.cos()
                + c * x.sin() - e * x.cos()
        };

        let guess = 33f64.to_radians();
        if let Some(alpha) = log_result(label, Newton::new(df).solve(&f, guess, 0.0, TOL)) {
            info!(problem = label, degrees = alpha.to_degrees(), "newton angle");
        }
        if !with_secant {
            continue;
        }
        for other in [guess + PI / 4.0, 100.0] {
            if let Some(alpha) = log_result(label, secant.solve(&f, guess, other, TOL)) {
                info!(problem = label, second_guess = other, degrees = alpha.to_degrees(), "secant angle");
            }
        }
    }
}

fn main() {
    logging::init();

    let bisection = Bisection::new();
    let secant    = Secant::new();

    problem_b(&bisection);
    problem_c();
    problem_d(&secant);
    problem_e(&bisection, &secant);
    problem_f(&secant);
}
