//! # numerix-deriv
//!
//! Derivatives for the numerix toolkit.
//!
//! This crate provides:
//! - [`DerivativeOf`]: the derivative-of-function operator, analytic for
//!   polynomials
//! - Finite-difference stencils for arbitrary `Fn(f64) -> f64`
//! - Checked single-point differentiation ([`diff`], [`central`],
//!   [`forward`], [`backward`])
//!
//! ## Example
//!
//! ```
//! use numerix_deriv::{central, DerivativeOf};
//! use numerix_poly::Polynomial;
//!
//! let p = Polynomial::new(vec![1.0, 0.0, 3.0]); // 1 + 3x^2
//! assert_eq!(p.derivative_of().eval(2.0), 12.0);
//!
//! let d = central(f64::sin, 0.0).unwrap();
//! assert!((d - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analytic;
pub mod error;
pub mod numeric;
pub mod stencil;

#[cfg(test)]
mod proptests;

pub use analytic::DerivativeOf;
pub use error::DerivError;
pub use numeric::{backward, central, default_step, diff, forward, numeric_derivative, NumericDerivative};
pub use stencil::{
    Backward2Point, Backward3Point, Backward4Point, BackwardRichardson, Central3Point, Central5Point,
    CentralRichardson, Forward2Point, Forward3Point, Forward4Point, ForwardRichardson,
    SecondBackward3Point, SecondBackward4Point, SecondCentral3Point, SecondCentral5Point,
    SecondForward3Point, SecondForward4Point, Stencil,
};
