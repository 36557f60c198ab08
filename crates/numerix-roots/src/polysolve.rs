//! The deflation driver.
//!
//! Orders 1 to 3 go straight to the closed forms. Higher orders peel off
//! one root at a time: Laguerre on the current (deflated) polynomial from
//! a zero guess, Newton polishing on the untouched original, a finiteness
//! check, then synthetic division by `(x - root)`. The remaining cubic is
//! solved in closed form and its roots are polished on the original too.

use num_complex::Complex64;
use numerix_poly::{Coefficient, Polynomial};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::analytic::{cubic_roots, linear_roots, quadratic_roots};
use crate::config::{RootType, SolverConfig};
use crate::error::{Result, RootError};
use crate::laguerre::laguerre_with_rng;
use crate::polish::polish;
use crate::root_set::RootSet;
use crate::sort::sort_roots;

fn ensure_finite<T: Coefficient>(original: &Polynomial<T>, root: Complex64) -> Result<()> {
    if root.is_finite() && original.eval_complex(root).is_finite() {
        Ok(())
    } else {
        warn!(%root, "rejecting non-finite root");
        Err(RootError::NonFiniteRoot { root })
    }
}

fn extract_roots<T: Coefficient>(poly: &Polynomial<T>, config: &SolverConfig) -> Result<Vec<Complex64>> {
    let tolerance = config.tolerance;
    match poly.order() {
        0 => Err(RootError::InvalidOrder {
            solver: "polysolve",
            expected: ">= 1",
            found: 0,
        }),
        1 => linear_roots(poly, tolerance),
        2 => quadratic_roots(poly, tolerance),
        3 => cubic_roots(poly, tolerance),
        order => {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            let mut current = poly.to_complex();
            let mut roots = Vec::with_capacity(order);

            while current.order() > 3 {
                let estimate = laguerre_with_rng(&current, Complex64::new(0.0, 0.0), config, &mut rng)?;
                let root = polish(poly, estimate, config)?;
                ensure_finite(poly, root)?;
                debug!(order = current.order(), %estimate, %root, "extracted root");

                current = current.deflate(root)?;
                roots.push(root);
            }

            // The closed form runs on the deflated cubic, so its roots carry
            // the accumulated deflation error and get polished as well.
            for estimate in cubic_roots(&current, tolerance)? {
                let root = polish(poly, estimate, config)?;
                ensure_finite(poly, root)?;
                debug!(%estimate, %root, "polished residual cubic root");
                roots.push(root);
            }
            Ok(roots)
        }
    }
}

/// Finds every root of `poly`.
///
/// The result is sorted by real part, then by imaginary part among roots
/// whose real parts agree within `sqrt(tolerance)`. With
/// [`RootType::Real`] only roots whose imaginary part is below
/// `sqrt(tolerance)` are kept, so the real set may be shorter than the
/// order (or empty).
///
/// The input is never modified; deflation works on a private copy.
///
/// # Errors
///
/// - [`RootError::InvalidTolerance`] / [`RootError::InvalidMaxIterations`]
///   for a bad `config`, and [`RootError::InvalidOrder`] for a constant
///   polynomial. These are checked before any computation.
/// - [`RootError::IllFormed`] from the quadratic closed form.
/// - [`RootError::NoConvergence`] / [`RootError::DerivativeUnderflow`]
///   from Laguerre extraction or Newton polishing.
/// - [`RootError::NonFiniteCoefficients`] if `poly` has a NaN or infinite
///   coefficient.
/// - [`RootError::NonFiniteRoot`] if a root, or the polynomial at it, is
///   NaN or infinite.
///
/// Above order 3 every returned root has passed Newton polishing on `poly`,
/// so a root that cannot be brought within tolerance of `poly` is an error
/// rather than part of the result.
pub fn polysolve<T: Coefficient>(poly: &Polynomial<T>, config: &SolverConfig, root_type: RootType) -> Result<RootSet> {
    config.validate()?;
    if !poly.is_finite() {
        return Err(RootError::NonFiniteCoefficients);
    }
    debug!(order = poly.order(), ?root_type, "polysolve");

    let roots = extract_roots(poly, config)?;
    for &root in &roots {
        ensure_finite(poly, root)?;
    }

    sort_roots(roots, config.tolerance, root_type)
}
