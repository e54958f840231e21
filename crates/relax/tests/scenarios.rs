//! Reference systems solved through the public entry points.

use approx::assert_relative_eq;
use nalgebra::{vector, Vector3};
use relax::*;
use sample_problems::{Borderline, Dominant, System};

fn metric_history(method: Method, system: &impl System, precision: f64, max: usize) -> Vec<f64> {
    let mut x = Vector3::zeros();
    match method {
        Method::Jacobi => {
            let mut jacobi = Jacobi::new().keep_history();
            jacobi
                .solve(&system.mat_a(), &system.b(), &mut x, precision, max)
                .unwrap();
            jacobi.history().to_vec()
        }
        Method::Seidel => {
            let mut seidel = Seidel::new().keep_history();
            seidel
                .solve(&system.mat_a(), &system.b(), &mut x, precision, max)
                .unwrap();
            seidel.history().to_vec()
        }
    }
}

#[test_log::test]
fn jacobi_borderline() {
    let system = Borderline {};
    let options = SolveOptions::new("jacobi".into()).with_max_iterations(25);

    let (x, status) = solve(&system.mat_a(), &system.b(), &options)
        .unwrap()
        .into_parts();

    assert_relative_eq!(x, vector![0.0625, -1.75, -0.0625], epsilon = 1e-12);
    assert_eq!(status, "Achieved precision: 0.05, Iterations performed: 4");
}

#[test_log::test]
fn seidel_borderline() {
    let system = Borderline {};
    let options = SolveOptions::new("seidel".into()).with_precision(10e-5);

    let (x, status) = solve(&system.mat_a(), &system.b(), &options)
        .unwrap()
        .into_parts();

    assert_relative_eq!(
        x,
        vector![0.99994659, 2.00006104, -0.99999619],
        max_relative = 1e-7
    );
    assert_eq!(status, "Achieved precision: 0.0001, Iterations performed: 18");
}

#[test_log::test]
fn seidel_beats_jacobi_on_dominant() {
    let system = Dominant {};

    let jacobi = solve(
        &system.mat_a(),
        &system.b(),
        &SolveOptions::new(Method::Jacobi).with_precision(0.01),
    )
    .unwrap();
    assert_eq!(
        jacobi.status,
        SolveStatus::PrecisionAchieved {
            precision: 0.01,
            iterations: 7
        }
    );
    assert_relative_eq!(jacobi.x, vector![0.0352, -0.2357, 0.6592], epsilon = 1e-4);

    let seidel = solve(
        &system.mat_a(),
        &system.b(),
        &SolveOptions::new(Method::Seidel).with_precision(0.01),
    )
    .unwrap();
    assert_eq!(
        seidel.status,
        SolveStatus::PrecisionAchieved {
            precision: 0.01,
            iterations: 5
        }
    );
    assert_relative_eq!(seidel.x, vector![0.0361, -0.2366, 0.6573], epsilon = 1e-4);

    let jacobi_metric = *metric_history(Method::Jacobi, &system, 0.01, 100).last().unwrap();
    let seidel_metric = *metric_history(Method::Seidel, &system, 0.01, 100).last().unwrap();
    assert!(seidel.status.iterations() <= jacobi.status.iterations());
    assert!(seidel_metric <= jacobi_metric);
}

#[test]
fn single_pass_limit() {
    let system = Borderline {};
    let mat_a = system.mat_a();
    let b = system.b();

    let jacobi = solve(
        &mat_a,
        &b,
        &SolveOptions::new(Method::Jacobi).with_max_iterations(1),
    )
    .unwrap();
    assert_eq!(jacobi.status.to_string(), "Iteration limit reached");
    assert_eq!(jacobi.x, b.component_div(&mat_a.diagonal()));

    let seidel = solve(
        &mat_a,
        &b,
        &SolveOptions::new(Method::Seidel).with_max_iterations(1),
    )
    .unwrap();
    assert_eq!(seidel.status.to_string(), "Iteration limit reached");
    assert_eq!(seidel.x, vector![-0.5, 2.5, -1.5]);
}

#[test]
fn unreachable_precision_hits_limit() {
    let system = Dominant {};
    for method in [Method::Jacobi, Method::Seidel] {
        let options = SolveOptions::new(method)
            .with_precision(0.0)
            .with_max_iterations(10);
        let outcome = solve(&system.mat_a(), &system.b(), &options).unwrap();
        assert_eq!(
            outcome.status,
            SolveStatus::IterationLimitReached { iterations: 10 },
            "{method}"
        );
    }
}

#[test]
fn restart_from_converged() {
    let system = Dominant {};
    let (mat_a, b) = (system.mat_a(), system.b());
    let precision = 0.01;

    let outcome = solve(&mat_a, &b, &SolveOptions::new(Method::Jacobi).with_precision(precision))
        .unwrap();
    let mut x = outcome.x;
    let status = Jacobi::new().solve(&mat_a, &b, &mut x, precision, 1).unwrap();
    assert_eq!(
        status,
        SolveStatus::PrecisionAchieved {
            precision,
            iterations: 1
        }
    );

    let outcome = solve(&mat_a, &b, &SolveOptions::new(Method::Seidel).with_precision(precision))
        .unwrap();
    let mut x = outcome.x;
    let status = Seidel::new().solve(&mat_a, &b, &mut x, precision, 1).unwrap();
    assert!(status.converged());
}

#[test]
fn metric_settles_once_below_precision() {
    // holds for the dominant system only, see `metric_oscillates_on_borderline`
    let system = Dominant {};
    let precision = 0.05;

    for method in [Method::Jacobi, Method::Seidel] {
        let history = metric_history(method, &system, 0.0, 20);
        assert_eq!(history.len(), 20);

        let first = history
            .iter()
            .position(|&metric| metric <= precision)
            .expect("metric should drop below precision");
        for pair in history[first..].windows(2) {
            assert!(pair[1] <= pair[0], "{method}: {history:?}");
        }
    }
}

#[test]
fn metric_oscillates_on_borderline() {
    // Seidel still converges on this system, but the metric does not settle once it first
    // drops below 0.05: it rises again at passes 6 and 8.
    let history = metric_history(Method::Seidel, &Borderline {}, 0.0, 30);
    assert_eq!(history.len(), 30);

    let expected = [
        1.0,
        0.5,
        0.2,
        2.0 / 17.0,
        0.04918032786885246,
        0.07575757575757576,
        0.027888446215139442,
        0.03088803088803089,
        0.012782694198623401,
    ];
    for (&metric, &expected) in history.iter().zip(expected.iter()) {
        assert_relative_eq!(metric, expected, max_relative = 1e-12);
    }

    let first = history.iter().position(|&metric| metric <= 0.05).unwrap();
    assert_eq!(first + 1, 5);
    assert!(history[5] > history[4]);
    assert!(history[7] > history[6]);

    assert!(history.iter().all(|&metric| metric > 0.0));
}

#[test]
fn converges_towards_solution() {
    let system = Dominant {};
    let options = SolveOptions::new(Method::Seidel)
        .with_precision(1e-12)
        .with_max_iterations(200);
    let outcome = solve(&system.mat_a(), &system.b(), &options).unwrap();
    assert!(outcome.status.converged());
    assert_relative_eq!(outcome.x, system.solution(), epsilon = 1e-10);
}
