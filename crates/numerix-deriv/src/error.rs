//! Errors raised by numerical differentiation.

use thiserror::Error;

/// Errors that can occur while differentiating numerically.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerivError {
    /// The finite-difference step must be positive and finite.
    #[error("invalid step size {step}: must be positive and finite")]
    InvalidStepSize {
        /// The rejected step.
        step: f64,
    },

    /// The stencil produced NaN or infinity.
    #[error("derivative at x = {x} (h = {step}) is not finite: {value}")]
    NonFinite {
        /// Evaluation point.
        x: f64,
        /// Effective step used.
        step: f64,
        /// The non-finite result.
        value: f64,
    },
}
