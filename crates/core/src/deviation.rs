/// Convergence predicate between two successive iterates.
///
/// Two values are within tolerance when every component-wise absolute
/// difference is at most `tolerance`. A NaN difference never is, so a solver
/// that produces NaN keeps iterating until its cap instead of reporting a
/// spurious convergence.
pub trait Deviation {
    /// Returns true if `self` and `other` differ by at most `tolerance`
    /// in every component.
    fn within(&self, other: &Self, tolerance: f64) -> bool;
}

impl Deviation for f64 {
    fn within(&self, other: &Self, tolerance: f64) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl<const N: usize> Deviation for [f64; N] {
    fn within(&self, other: &Self, tolerance: f64) -> bool {
        self.iter().zip(other).all(|(a, b)| a.within(b, tolerance))
    }
}
