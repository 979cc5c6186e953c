use nlroots_core::Equation;

use super::Error;

/// Returns the root of the line through `(x_1, f(x_1))` and `(x_2, f(x_2))`.
///
/// Shared by the secant and regula falsi solvers.
///
/// # Errors
///
/// Returns [`Error::ZeroSecantSlope`] if `f(x_1) == f(x_2)`.
pub(super) fn secant_point(f: &impl Equation, x_1: f64, x_2: f64) -> Result<f64, Error> {
    let f_1 = f.value(x_1);
    let f_2 = f.value(x_2);
    let slope_denominator = f_2 - f_1;

    #[allow(clippy::float_cmp)]
    if slope_denominator == 0.0 {
        return Err(Error::ZeroSecantSlope { x_1, x_2 });
    }

    Ok(x_2 - ((x_2 - x_1) / slope_denominator) * f_2)
}
