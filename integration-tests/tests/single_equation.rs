use approx::assert_relative_eq;

use integration_tests::{CUBIC_ROOT, f, f_derivative};
use nlroots_solvers::{
    Status,
    equation::{Config, Error, newton, regula_falsi, secant},
};

#[test]
fn newton_finds_textbook_root() {
    let solution =
        newton::solve_unobserved(&f, &f_derivative, 1.0, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 100);

    let root = solution.root().expect("converged");
    assert_relative_eq!(root, CUBIC_ROOT, epsilon = 1e-6);

    let g_root = newton::step(&f, &f_derivative, root).expect("non-zero derivative");
    assert_relative_eq!(g_root, root, epsilon = 1e-6);
}

#[test]
fn secant_finds_textbook_root() {
    let solution = secant::solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root().expect("converged"), CUBIC_ROOT, epsilon = 1e-6);
}

#[test]
fn regula_falsi_finds_textbook_root_from_both_brackets() {
    let config = regula_falsi::Config::default();

    for bracket in [[0.0, 2.0], [1.0, 2.0]] {
        let solution = regula_falsi::solve_unobserved(&f, bracket, &config).expect("valid bracket");

        assert_eq!(solution.status, Status::Converged, "bracket {bracket:?}");
        assert_relative_eq!(solution.root().expect("converged"), CUBIC_ROOT, epsilon = 1e-6);
    }
}

#[test]
fn regula_falsi_rejects_same_sign_bracket() {
    let result = regula_falsi::solve_unobserved(&f, [2.0, 3.0], &regula_falsi::Config::default());

    assert_eq!(
        result,
        Err(Error::InvalidInterval {
            x_k: 2.0,
            x_s: 3.0,
            f_k: 14.0,
            f_s: 53.0,
        })
    );
}

#[test]
fn seeds_are_recorded_unmodified() {
    let newton = newton::solve_unobserved(&f, &f_derivative, 1.0, &Config::default())
        .expect("should solve");
    assert_eq!(newton.trajectory.first().map(|r| [r[0], r[1]]), Some([1.0, -5.0]));

    let secant = secant::solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");
    assert_eq!(&secant.trajectory.records()[..2], &[[1.0, -5.0], [2.0, 14.0]]);

    let regula_falsi =
        regula_falsi::solve_unobserved(&f, [0.0, 2.0], &regula_falsi::Config::default())
            .expect("valid bracket");
    assert_eq!(&regula_falsi.trajectory.records()[..2], &[[0.0, -10.0], [2.0, 14.0]]);
}

#[test]
fn final_record_holds_the_root() {
    let secant = secant::solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");
    assert_eq!(secant.trajectory.last().map(|r| r[0]), secant.root());

    let regula_falsi =
        regula_falsi::solve_unobserved(&f, [0.0, 2.0], &regula_falsi::Config::default())
            .expect("valid bracket");
    assert_eq!(regula_falsi.trajectory.last().map(|r| r[0]), regula_falsi.root());

    // Newton records the last accepted iterate once more; its `g_x` column
    // holds the returned root.
    let newton = newton::solve_unobserved(&f, &f_derivative, 1.0, &Config::default())
        .expect("should solve");
    assert_eq!(newton.trajectory.last().map(|r| r[2]), newton.root());
}

#[test]
fn newton_beats_secant_beats_regula_falsi() {
    let config = Config::default();

    let newton = newton::solve_unobserved(&f, &f_derivative, 1.0, &config).expect("should solve");
    let secant = secant::solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");
    let regula_falsi =
        regula_falsi::solve_unobserved(&f, [0.0, 2.0], &regula_falsi::Config::default())
            .expect("valid bracket");

    assert!(newton.trajectory.len() <= secant.trajectory.len());
    assert!(secant.trajectory.len() < regula_falsi.trajectory.len());
}
