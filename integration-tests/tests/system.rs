use approx::assert_relative_eq;

use integration_tests::{jacobian, residuals, substitution};
use nlroots_solvers::{
    Status,
    system::{COLUMNS, Config, Error, fixed_point, newton},
};

#[test]
fn fixed_point_converges_to_a_fixed_point() {
    let solution =
        fixed_point::solve_unobserved(&residuals, &substitution, [0.0, 1.0], &Config::default());

    assert_eq!(solution.status, Status::Converged);
    let root = solution.root().expect("converged");

    let mapped = substitution(&root);
    assert!((root[0] - mapped[0]).abs() < 1e-10);
    assert!((root[1] - mapped[1]).abs() < 1e-10);

    let [f_1, f_2] = residuals(&root);
    assert!(f_1.abs() < 1e-8, "f_1 = {f_1}");
    assert!(f_2.abs() < 1e-8, "f_2 = {f_2}");
}

#[test]
fn newton_reaches_the_same_root_faster() {
    let config = Config::default();

    let iterative = fixed_point::solve_unobserved(&residuals, &substitution, [0.0, 1.0], &config);
    let newton =
        newton::solve_unobserved(&residuals, &jacobian, [0.0, 1.0], &config).expect("regular");

    let a = iterative.root().expect("fixed point converged");
    let b = newton.root().expect("newton converged");
    assert_relative_eq!(a[0], b[0], epsilon = 1e-9);
    assert_relative_eq!(a[1], b[1], epsilon = 1e-9);

    assert!(
        newton.iters < iterative.iters,
        "newton took {}, fixed point took {}",
        newton.iters,
        iterative.iters
    );
}

#[test]
fn known_root_of_textbook_system() {
    let solution = newton::solve_unobserved(&residuals, &jacobian, [0.0, 1.0], &Config::default())
        .expect("regular");

    let root = solution.root().expect("converged");
    assert_relative_eq!(root[0], -0.222_214_555_1, epsilon = 1e-9);
    assert_relative_eq!(root[1], 0.993_808_418_6, epsilon = 1e-9);
}

#[test]
fn seed_records_hold_start_and_residuals() {
    let config = Config::default();
    let expected = [0.0, 1.0, -0.5, 0.0];

    let iterative = fixed_point::solve_unobserved(&residuals, &substitution, [0.0, 1.0], &config);
    assert_eq!(iterative.trajectory.first(), Some(&expected));
    assert_eq!(iterative.trajectory.columns(), &COLUMNS);

    let newton =
        newton::solve_unobserved(&residuals, &jacobian, [0.0, 1.0], &config).expect("regular");
    assert_eq!(newton.trajectory.first(), Some(&expected));
}

#[test]
fn newton_first_step_matches_hand_calculation() {
    // J(0, 1) = [[-2, -1], [0, 8]], F(0, 1) = [-0.5, 0]  =>  delta = [-0.25, 0].
    let next = newton::step(&jacobian, &[0.0, 1.0], &residuals(&[0.0, 1.0])).expect("regular");
    assert_relative_eq!(next[0], -0.25);
    assert_relative_eq!(next[1], 1.0);
}

#[test]
fn singular_jacobian_surfaces_as_error() {
    // Rows are parallel everywhere, so the very first step fails.
    let flat = |_: &[f64; 2]| [[1.0, 2.0], [2.0, 4.0]];
    let result = newton::solve_unobserved(&residuals, &flat, [0.0, 1.0], &Config::default());

    assert_eq!(result, Err(Error::SingularJacobian { x: [0.0, 1.0] }));
}
