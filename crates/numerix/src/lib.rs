//! # Numerix
//!
//! A small numerical toolkit centred on polynomial root solving.
//!
//! ## Features
//!
//! - **Polynomials**: dense real or complex coefficients, Horner evaluation,
//!   formal derivatives, long division and deflation
//! - **Derivatives**: exact for polynomials, finite-difference stencils for
//!   arbitrary functions
//! - **Root Solving**: closed forms up to cubics, Laguerre iteration with
//!   Newton polishing above that
//!
//! ## Quick Start
//!
//! ```rust
//! use numerix::prelude::*;
//!
//! // x^2 + 1 has no real roots
//! let p = Polynomial::new(vec![1.0, 0.0, 1.0]);
//! let config = SolverConfig::default();
//!
//! assert!(polysolve(&p, &config, RootType::Real).unwrap().is_empty());
//! assert_eq!(polysolve(&p, &config, RootType::Complex).unwrap().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numerix_deriv as deriv;
pub use numerix_poly as poly;
pub use numerix_roots as roots;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use num_complex::Complex64;
    pub use numerix_deriv::{central, DerivativeOf};
    pub use numerix_poly::{Coefficient, Polynomial};
    pub use numerix_roots::{polysolve, RootError, RootSet, RootType, SolverConfig};
}
