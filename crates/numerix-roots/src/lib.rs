//! # numerix-roots
//!
//! Polynomial root finding for the numerix toolkit.
//!
//! This crate provides:
//! - Closed-form solvers for orders 1 to 3 ([`linear`], [`quadratic`], [`cubic`])
//! - Laguerre iteration with periodic random perturbation ([`laguerre`])
//! - Newton polishing against an undeflated polynomial ([`polish`])
//! - The full deflation pipeline ([`polysolve`])
//! - Sorting and real/complex classification of root sets ([`sort_roots`])
//!
//! ## Example
//!
//! ```
//! use numerix_poly::Polynomial;
//! use numerix_roots::{polysolve, RootType, SolverConfig};
//!
//! // (x - 1)(x - 2)(x - 3)(x - 4)
//! let p = Polynomial::from_roots(&[1.0, 2.0, 3.0, 4.0]);
//! let roots = polysolve(&p, &SolverConfig::default(), RootType::Real).unwrap();
//!
//! for (found, expected) in roots.as_real().unwrap().iter().zip([1.0, 2.0, 3.0, 4.0]) {
//!     assert!((found - expected).abs() < 1e-9);
//! }
//! ```
//!
//! ## Determinism
//!
//! Every call owns its random generator, seeded from [`SolverConfig::seed`],
//! so equal inputs give equal outputs and calls on separate threads share
//! nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analytic;
pub mod config;
pub mod error;
pub mod laguerre;
pub mod polish;
pub mod polysolve;
pub mod root_set;
pub mod sort;

#[cfg(test)]
mod proptests;

pub use analytic::{cubic, linear, quadratic};
pub use config::{RootType, SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_SEED, DEFAULT_TOLERANCE};
pub use error::{ErrorKind, Method, Result, RootError};
pub use laguerre::{laguerre, laguerre_default, laguerre_with_rng};
pub use polish::polish;
pub use polysolve::polysolve;
pub use root_set::RootSet;
pub use sort::sort_roots;
