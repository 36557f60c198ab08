//! Newton refinement of an extracted root against the original polynomial.

use num_complex::Complex64;
use numerix_deriv::DerivativeOf;
use numerix_poly::{Coefficient, Polynomial};
use tracing::{trace, warn};

use crate::config::SolverConfig;
use crate::error::{Method, Result, RootError};

/// Derivative magnitude below which a Newton step is refused.
const DERIVATIVE_FLOOR: f64 = f64::EPSILON;

fn below(z: Complex64, tolerance: f64) -> bool {
    z.re.abs() < tolerance && z.im.abs() < tolerance
}

/// Refines `estimate` by Newton's method on `original`.
///
/// Converges once both `p(x)` and the Newton step are below the tolerance
/// in their real and imaginary parts separately. `original` should be the
/// polynomial the caller started with, not a deflated factor of it.
///
/// # Errors
///
/// - Configuration errors from [`SolverConfig::validate`].
/// - [`RootError::DerivativeUnderflow`] if `|p'(x)|` drops below machine epsilon.
/// - [`RootError::NoConvergence`] once `max_iterations` is exhausted.
pub fn polish<T: Coefficient>(
    original: &Polynomial<T>,
    estimate: Complex64,
    config: &SolverConfig,
) -> Result<Complex64> {
    config.validate()?;

    let derivative = original.derivative_of();
    let tolerance = config.tolerance;

    let mut root = estimate;
    for iteration in 0..config.max_iterations {
        let value = original.eval_complex(root);
        let slope = derivative.eval_complex(root);

        if slope.norm() < DERIVATIVE_FLOOR {
            warn!(%root, "derivative vanished while polishing");
            return Err(RootError::DerivativeUnderflow {
                at: root,
                magnitude: slope.norm(),
            });
        }

        let step = value / slope;
        root -= step;
        trace!(iteration, %root, step = step.norm(), "newton");

        if below(value, tolerance) && below(step, tolerance) {
            return Ok(root);
        }
    }

    warn!(iterations = config.max_iterations, %root, "Newton polishing did not converge");
    Err(RootError::NoConvergence {
        method: Method::Newton,
        iterations: config.max_iterations,
    })
}
