//! # numerix-poly
//!
//! Dense univariate polynomials for the numerix toolkit.
//!
//! This crate provides:
//! - `Polynomial<T>` over real (`f64`) or complex (`Complex64`) coefficients
//! - Horner evaluation at real or complex arguments
//! - Formal derivatives
//! - Long division and deflation by a linear factor
//!
//! ## Coefficient Order
//!
//! Coefficients are stored constant term first:
//!
//! ```text
//! [c0, c1, c2, c3]  =>  c0 + c1*x + c2*x^2 + c3*x^3
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coefficient;
pub mod dense;
pub mod error;

#[cfg(test)]
mod proptests;

pub use coefficient::Coefficient;
pub use dense::Polynomial;
pub use error::PolyError;
pub use num_complex::Complex64;
