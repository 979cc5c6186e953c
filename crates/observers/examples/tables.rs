//! Prints the trajectory tables of the textbook runs for every solver.
//!
//! # Usage
//!
//! ```text
//! cargo run --example tables
//! cargo run --example tables -- 3 4
//! RUST_LOG=debug cargo run --example tables
//! ```
//!
//! The single-equation runs solve `x³ + 4x² − 10 = 0`; the system runs solve
//!
//! ```text
//! x_1² − 2x_1 − x_2 + 0.5 = 0
//! x_1² + 4x_2² − 4       = 0
//! ```
//!
//! An optional argument sets the iteration cap for the capped solvers, which
//! shows the stop message when it is too small. A second argument sets the
//! decimal places shown (default 10).

use std::error::Error;

use nlroots_core::{Matrix, Pair, Trajectory};
use nlroots_observers::TraceObserver;
use nlroots_solvers::{
    Solution,
    equation::{self, newton, regula_falsi, secant},
    system::{self, fixed_point},
};
use tracing_subscriber::EnvFilter;

fn f(x: f64) -> f64 {
    x.powi(3) + 4.0 * x.powi(2) - 10.0
}

fn f_derivative(x: f64) -> f64 {
    3.0 * x.powi(2) + 8.0 * x
}

fn residuals(x: &Pair) -> Pair {
    [
        x[0].powi(2) - 2.0 * x[0] - x[1] + 0.5,
        x[0].powi(2) + 4.0 * x[1].powi(2) - 4.0,
    ]
}

fn substitution(x: &Pair) -> Pair {
    [
        (x[0].powi(2) - x[1] + 0.5) / 2.0,
        (-x[0].powi(2) - 4.0 * x[1].powi(2) + 8.0 * x[1] + 4.0) / 8.0,
    ]
}

fn jacobian(x: &Pair) -> Matrix {
    [[2.0 * x[0] - 2.0, -1.0], [2.0 * x[0], 8.0 * x[1]]]
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let max_iters = args
        .next()
        .map(|arg| arg.parse::<usize>())
        .transpose()?
        .unwrap_or(equation::DEFAULT_MAX_ITERS);
    let precision = args.next().map(|arg| arg.parse::<usize>()).transpose()?.unwrap_or(10);

    let config = equation::Config::default().with_max_iters(max_iters)?;
    let system_config = system::Config::default().with_max_iters(max_iters)?;

    let solution = newton::solve(&f, &f_derivative, 1.0, &config, TraceObserver::new("newton"))?;
    report("Newton's method", &solution, precision);

    let solution = secant::solve(&f, [1.0, 2.0], &config, TraceObserver::new("secant"))?;
    report("Secant method", &solution, precision);

    let solution = regula_falsi::solve(
        &f,
        [0.0, 2.0],
        &regula_falsi::Config::default(),
        TraceObserver::new("regula falsi"),
    )?;
    report("Regula falsi", &solution, precision);

    let solution = fixed_point::solve(
        &residuals,
        &substitution,
        [0.0, 1.0],
        &system_config,
        TraceObserver::new("fixed point"),
    );
    report("Iterative method (system)", &solution, precision);

    let solution = system::newton::solve(
        &residuals,
        &jacobian,
        [0.0, 1.0],
        &system_config,
        TraceObserver::new("newton (system)"),
    )?;
    report("Newton's method (system)", &solution, precision);

    Ok(())
}

/// Prints a heading, the outcome, and the trajectory table.
fn report<X: Copy + std::fmt::Debug, const C: usize>(
    title: &str,
    solution: &Solution<X, C>,
    precision: usize,
) {
    println!("\n{title}");
    match solution.root() {
        Some(root) => println!("root: {root:?} after {} iterations", solution.iters),
        None => println!(
            "calculation was stopped ({:?}) after {} iterations:",
            solution.status, solution.iters
        ),
    }
    print_table(&solution.trajectory, precision);
}

fn print_table<const C: usize>(trajectory: &Trajectory<C>, precision: usize) {
    println!("\n{trajectory:.precision$}\n");
}
