/// A point in the two-variable solver space, `[x_1, x_2]`.
pub type Pair = [f64; 2];

/// A row-major 2×2 matrix, `[[a_11, a_12], [a_21, a_22]]`.
pub type Matrix = [[f64; 2]; 2];

/// A scalar function of one variable.
///
/// Single-equation solvers use it for the equation `f(x) = 0` itself and,
/// where needed, for its hand-supplied derivative.
/// Closures of type `Fn(f64) -> f64` implement it automatically.
pub trait Equation {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;
}

impl<F> Equation for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A vector-valued function of two variables.
///
/// Used both for the residual vector `F(x_1, x_2)` of a system and for its
/// fixed-point reformulation `G(x_1, x_2)`.
pub trait System {
    /// Evaluates both components at `x`.
    fn value(&self, x: &Pair) -> Pair;
}

impl<F> System for F
where
    F: Fn(&Pair) -> Pair,
{
    fn value(&self, x: &Pair) -> Pair {
        self(x)
    }
}

/// The Jacobian matrix of a two-variable system.
///
/// Row `i` holds the partial derivatives of component `i`.
pub trait Jacobian {
    /// Evaluates the Jacobian at `x`.
    fn value(&self, x: &Pair) -> Matrix;
}

impl<F> Jacobian for F
where
    F: Fn(&Pair) -> Matrix,
{
    fn value(&self, x: &Pair) -> Matrix {
        self(x)
    }
}
