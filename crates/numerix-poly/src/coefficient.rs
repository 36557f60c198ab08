//! Scalar types a polynomial may carry.

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_complex::Complex64;
use num_traits::Num;

/// A polynomial coefficient: either a real (`f64`) or a complex (`Complex64`) number.
///
/// Root finding always runs in complex arithmetic, so every coefficient type
/// must lift losslessly into `Complex64`.
pub trait Coefficient:
    Copy + Debug + Display + PartialEq + Num + Neg<Output = Self> + Send + Sync + 'static
{
    /// Builds a coefficient from a real value.
    fn from_real(x: f64) -> Self;

    /// Returns the absolute value (modulus for complex numbers).
    fn magnitude(&self) -> f64;

    /// Returns true if no component is NaN or infinite.
    fn is_finite(&self) -> bool;

    /// Lifts the coefficient into the complex plane.
    fn to_complex(self) -> Complex64;
}

impl Coefficient for f64 {
    #[inline]
    fn from_real(x: f64) -> Self {
        x
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        self.abs()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

impl Coefficient for Complex64 {
    #[inline]
    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        Complex64::is_finite(*self)
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_lift() {
        let z = (-2.5f64).to_complex();
        assert_eq!(z, Complex64::new(-2.5, 0.0));
        assert_eq!(Coefficient::magnitude(&-2.5f64), 2.5);
    }

    #[test]
    fn test_complex_magnitude() {
        let z = Complex64::new(3.0, 4.0);
        assert_eq!(Coefficient::magnitude(&z), 5.0);
        assert!(Coefficient::is_finite(&z));
        assert!(!Coefficient::is_finite(&Complex64::new(f64::NAN, 0.0)));
        assert!(!Coefficient::is_finite(&f64::INFINITY));
    }
}
