use nalgebra::{Matrix2, Vector2};

use nlroots_core::{Matrix, Pair};

/// Solves `a · delta = b` for a 2×2 system by LU decomposition.
///
/// Returns `None` if `a` is singular.
pub(super) fn solve(a: &Matrix, b: &Pair) -> Option<Pair> {
    let a = Matrix2::new(a[0][0], a[0][1], a[1][0], a[1][1]);
    let b = Vector2::new(b[0], b[1]);

    let delta = a.lu().solve(&b)?;
    Some([delta[0], delta[1]])
}
