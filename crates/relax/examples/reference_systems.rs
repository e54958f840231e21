//! Solves the reference systems with both methods and prints the outcome.
//!
//! Run with `RUST_LOG=trace` to see the convergence metric of every pass.

use relax::{solve, Method, SolveOptions};
use sample_problems::{Borderline, Dominant, System};

fn report(name: &str, system: &impl System, options: &SolveOptions<f64>) {
    match solve(&system.mat_a(), &system.b(), options) {
        Ok(outcome) => {
            println!("{name} ({}):", options.method);
            println!("    x = {:.8?}", outcome.x.as_slice());
            println!("    {}", outcome.status);
        }
        Err(err) => println!("{name} ({}): {err}", options.method),
    }
}

fn main() {
    env_logger::init();

    report(
        "borderline",
        &Borderline {},
        &SolveOptions::new(Method::Jacobi).with_max_iterations(25),
    );
    report(
        "borderline",
        &Borderline {},
        &SolveOptions::new(Method::Seidel).with_precision(10e-5),
    );
    for method in [Method::Jacobi, Method::Seidel] {
        report(
            "dominant",
            &Dominant {},
            &SolveOptions::new(method).with_precision(0.01),
        );
    }
}
