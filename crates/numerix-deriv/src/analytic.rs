//! The derivative-of-function operator.

use numerix_poly::{Coefficient, Polynomial};

/// Produces a new callable approximating (or exactly representing) the
/// derivative of `self`.
pub trait DerivativeOf {
    /// The derivative's type.
    type Output;

    /// Returns the derivative.
    fn derivative_of(&self) -> Self::Output;
}

/// Polynomials are differentiated exactly.
impl<T: Coefficient> DerivativeOf for Polynomial<T> {
    type Output = Polynomial<T>;

    fn derivative_of(&self) -> Polynomial<T> {
        self.derivative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_polynomial_chain() {
        // p = x^4 => p'' = 12x^2
        let p = Polynomial::new(vec![0.0, 0.0, 0.0, 0.0, 1.0]);
        let d2 = p.derivative_of().derivative_of();
        assert_eq!(d2.coeffs(), &[0.0, 0.0, 12.0]);
    }

    #[test]
    fn test_complex_polynomial() {
        // p = i*x^2 => p' = 2i*x
        let p = Polynomial::new(vec![Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::i()]);
        let d = p.derivative_of();
        assert_eq!(d.coeffs(), &[Complex64::new(0.0, 0.0), Complex64::new(0.0, 2.0)]);
    }
}
