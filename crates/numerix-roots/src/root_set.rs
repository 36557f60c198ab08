//! The solver's tagged output.

use num_complex::Complex64;

use crate::config::RootType;

/// A sorted set of polynomial roots, real or complex as requested.
#[derive(Clone, Debug, PartialEq)]
pub enum RootSet {
    /// Real parts of the roots whose imaginary part fell below the cutoff.
    Real(Vec<f64>),
    /// Every root.
    Complex(Vec<Complex64>),
}

impl RootSet {
    /// Returns the number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            RootSet::Real(roots) => roots.len(),
            RootSet::Complex(roots) => roots.len(),
        }
    }

    /// Returns true if no root was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns which variant this is.
    #[must_use]
    pub fn root_type(&self) -> RootType {
        match self {
            RootSet::Real(_) => RootType::Real,
            RootSet::Complex(_) => RootType::Complex,
        }
    }

    /// Returns the real roots, if this is a real set.
    #[must_use]
    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            RootSet::Real(roots) => Some(roots),
            RootSet::Complex(_) => None,
        }
    }

    /// Returns the complex roots, if this is a complex set.
    #[must_use]
    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match self {
            RootSet::Real(_) => None,
            RootSet::Complex(roots) => Some(roots),
        }
    }

    /// Converts into complex roots (real roots get a zero imaginary part).
    #[must_use]
    pub fn into_complex(self) -> Vec<Complex64> {
        match self {
            RootSet::Real(roots) => roots.into_iter().map(|r| Complex64::new(r, 0.0)).collect(),
            RootSet::Complex(roots) => roots,
        }
    }
}
