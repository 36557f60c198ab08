//! Error types for root finding.

use std::fmt;

use num_complex::Complex64;
use numerix_poly::PolyError;
use thiserror::Error;

/// Result type alias using [`RootError`].
pub type Result<T> = std::result::Result<T, RootError>;

/// The iterative method that gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Laguerre root extraction.
    Laguerre,
    /// Newton polishing against the original polynomial.
    Newton,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Laguerre => write!(f, "Laguerre's method"),
            Method::Newton => write!(f, "Newton's method"),
        }
    }
}

/// Coarse classification of a [`RootError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad tolerance, iteration budget or polynomial order.
    Configuration,
    /// The closed form would divide by a (numerically) vanishing quantity.
    Degeneracy,
    /// An iteration exhausted its budget or stalled.
    NonConvergence,
    /// A computed root is NaN or infinite.
    NumericalInvalidity,
}

/// Errors that can occur while solving for polynomial roots.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RootError {
    /// Tolerance must be strictly positive.
    #[error("invalid tolerance {tolerance}: tolerance must be a positive number")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// The iteration budget must allow at least one iteration.
    #[error("invalid maximum number of iterations {max_iterations}: must be at least 1")]
    InvalidMaxIterations {
        /// The rejected bound.
        max_iterations: usize,
    },

    /// The polynomial's order does not fit the solver.
    #[error("{solver} solver expects a polynomial of order {expected}, got order {found}")]
    InvalidOrder {
        /// Name of the solver.
        solver: &'static str,
        /// Accepted order(s).
        expected: &'static str,
        /// Actual order.
        found: usize,
    },

    /// Leading coefficient or stable denominator of a quadratic below tolerance.
    #[error("quadratic polynomial is ill formed")]
    IllFormed,

    /// Iteration budget exhausted.
    #[error("{method} failed to converge within {iterations} iterations")]
    NoConvergence {
        /// The method that failed.
        method: Method,
        /// Iterations performed.
        iterations: usize,
    },

    /// Newton's method hit a vanishing derivative.
    #[error("derivative vanished at {at} (|p'| = {magnitude}) during polishing")]
    DerivativeUnderflow {
        /// Estimate at which the derivative vanished.
        at: Complex64,
        /// Magnitude of the derivative.
        magnitude: f64,
    },

    /// A polished root evaluates to NaN or infinity.
    #[error("root {root} is not finite on the original polynomial")]
    NonFiniteRoot {
        /// The rejected root.
        root: Complex64,
    },

    /// The input polynomial has a NaN or infinite coefficient.
    #[error("polynomial has non-finite coefficients")]
    NonFiniteCoefficients,

    /// Polynomial arithmetic failed.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

impl RootError {
    /// Returns the error's classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RootError::InvalidTolerance { .. }
            | RootError::InvalidMaxIterations { .. }
            | RootError::InvalidOrder { .. }
            | RootError::Poly(_) => ErrorKind::Configuration,
            RootError::IllFormed => ErrorKind::Degeneracy,
            RootError::NoConvergence { .. } | RootError::DerivativeUnderflow { .. } => {
                ErrorKind::NonConvergence
            }
            RootError::NonFiniteRoot { .. } | RootError::NonFiniteCoefficients => {
                ErrorKind::NumericalInvalidity
            }
        }
    }
}
