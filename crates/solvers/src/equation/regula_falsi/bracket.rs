use nlroots_core::Equation;

use crate::equation::{Error, two_point::secant_point};

/// The pair of points regula falsi interpolates between.
///
/// `x_k` is the endpoint that advances every step. `x_s` is its partner; it
/// stays put while the new iterate lands on the opposite side of the root
/// from it, and is replaced by the previous `x_k` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    x_k: f64,
    x_s: f64,
}

impl Bracket {
    /// Validates that `f` changes sign between the two endpoints.
    ///
    /// A zero at either endpoint counts as a sign change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] unless `f(x_k) * f(x_s) <= 0`,
    /// which also rejects a NaN at either endpoint.
    pub(super) fn new(f: &impl Equation, x_k: f64, x_s: f64) -> Result<Self, Error> {
        let f_k = f.value(x_k);
        let f_s = f.value(x_s);

        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if !(f_k * f_s <= 0.0) {
            return Err(Error::InvalidInterval { x_k, x_s, f_k, f_s });
        }

        Ok(Self { x_k, x_s })
    }

    /// Returns the advancing endpoint.
    pub(super) fn x_k(&self) -> f64 {
        self.x_k
    }

    /// Returns the partner endpoint.
    pub(super) fn x_s(&self) -> f64 {
        self.x_s
    }

    /// Computes the next iterate and updates the partner endpoint.
    ///
    /// `x_k` is left unchanged; the caller advances it with [`Self::advance`]
    /// once the iterate has been accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSecantSlope`] if `f(x_k) == f(x_s)`, or
    /// [`Error::NonFiniteIterate`] if the update overflows or yields NaN.
    pub(super) fn next(&mut self, f: &impl Equation) -> Result<f64, Error> {
        let next_x = secant_point(f, self.x_k, self.x_s)?;
        if !next_x.is_finite() {
            return Err(Error::NonFiniteIterate {
                x_k: self.x_k,
                x_s: self.x_s,
            });
        }
        if same_sign(f.value(next_x), f.value(self.x_s)) {
            self.x_s = self.x_k;
        }
        Ok(next_x)
    }

    /// Moves the advancing endpoint to an accepted iterate.
    pub(super) fn advance(&mut self, x: f64) {
        self.x_k = x;
    }
}

/// Returns true if `a` and `b` are both strictly positive or both strictly
/// negative.
fn same_sign(a: f64, b: f64) -> bool {
    a * b > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn f(x: f64) -> f64 {
        x.powi(3) + 4.0 * x.powi(2) - 10.0
    }

    #[test]
    fn accepts_sign_change_in_either_order() {
        assert!(Bracket::new(&f, 0.0, 2.0).is_ok());
        assert!(Bracket::new(&f, 2.0, 0.0).is_ok());
    }

    #[test]
    fn accepts_root_at_endpoint() {
        let g = |x: f64| x - 1.0;
        assert!(Bracket::new(&g, 1.0, 5.0).is_ok());
    }

    #[test]
    fn rejects_same_sign() {
        let err = Bracket::new(&f, 2.0, 3.0).expect_err("same sign");
        assert_eq!(
            err,
            Error::InvalidInterval {
                x_k: 2.0,
                x_s: 3.0,
                f_k: 14.0,
                f_s: 53.0,
            }
        );
    }

    #[test]
    fn rejects_nan_endpoint() {
        let g = |x: f64| x.sqrt() - 1.0;
        let err = Bracket::new(&g, -1.0, 4.0).expect_err("nan at x_k");
        assert!(matches!(err, Error::InvalidInterval { f_k, .. } if f_k.is_nan()));
    }

    #[test]
    fn overflowing_update_is_an_error() {
        // f(1e30) overflows to +inf, which still brackets a sign change.
        let g = |x: f64| x.powi(11) - 1.0;
        let mut bracket = Bracket::new(&g, 0.0, 1e30).expect("sign change");

        let err = bracket.next(&g).expect_err("nan update");
        assert_eq!(err, Error::NonFiniteIterate { x_k: 0.0, x_s: 1e30 });
    }

    #[test]
    fn partner_stays_while_iterate_is_opposite() {
        let mut bracket = Bracket::new(&f, 0.0, 2.0).expect("valid bracket");

        let next_x = bracket.next(&f).expect("non-zero slope");
        assert_relative_eq!(next_x, 2.0 - 2.0 / 24.0 * 14.0);
        assert!(f(next_x) < 0.0);
        assert_relative_eq!(bracket.x_s(), 2.0);
        assert_relative_eq!(bracket.x_k(), 0.0);

        bracket.advance(next_x);
        assert_relative_eq!(bracket.x_k(), next_x);
    }

    #[test]
    fn partner_is_replaced_when_iterate_lands_on_its_side() {
        let g = |x: f64| x * x - 1.0;
        let mut bracket = Bracket::new(&g, 3.0, 0.0).expect("valid bracket");

        let next_x = bracket.next(&g).expect("non-zero slope");
        assert_relative_eq!(next_x, 1.0 / 3.0);
        // g(1/3) < 0 shares the sign of g(0), so x_s takes the old x_k.
        assert_relative_eq!(bracket.x_s(), 3.0);
        assert_relative_eq!(bracket.x_k(), 3.0);
    }
}
