//! Laguerre iteration for a single complex root.
//!
//! The step is `3 / (G ± sqrt(2(3H - G^2)))` with `G = p'/p` and
//! `H = G^2 - p''/p`, taking the sign that makes the denominator larger.
//! Every [`PERTURBATION_PERIOD`] iterations the step is scaled by a random
//! factor close to one to break limit cycles.

use num_complex::Complex64;
use numerix_deriv::DerivativeOf;
use numerix_poly::{Coefficient, Polynomial};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{trace, warn};

use crate::config::SolverConfig;
use crate::error::{Method, Result, RootError};

/// Iterations between two stagnation-breaking perturbations.
pub const PERTURBATION_PERIOD: usize = 10;

/// Step taken when the Laguerre denominator degenerates.
const FALLBACK_STEP: Complex64 = Complex64::new(0.1, 0.0);

/// Starting point used by [`laguerre_default`].
pub const DEFAULT_GUESS: Complex64 = Complex64::new(1.0, 1.0);

/// The Laguerre step, or `None` if the denominator vanishes or the step
/// is not finite.
fn laguerre_step(g: Complex64, h: Complex64) -> Option<Complex64> {
    let radical = ((h * 3.0 - g * g) * 2.0).sqrt();
    let plus = g + radical;
    let minus = g - radical;
    let denominator = if plus.norm() >= minus.norm() { plus } else { minus };

    if denominator.norm() < f64::EPSILON {
        return None;
    }

    let step = Complex64::new(3.0, 0.0) / denominator;
    step.is_finite().then_some(step)
}

/// Finds one root of `poly` starting from `guess`.
///
/// The perturbation generator is seeded from `config.seed`, so the result
/// is a pure function of the arguments.
///
/// # Errors
///
/// See [`laguerre_with_rng`].
pub fn laguerre<T: Coefficient>(
    poly: &Polynomial<T>,
    guess: Complex64,
    config: &SolverConfig,
) -> Result<Complex64> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    laguerre_with_rng(poly, guess, config, &mut rng)
}

/// Finds one root of `poly` starting from [`DEFAULT_GUESS`].
///
/// # Errors
///
/// See [`laguerre_with_rng`].
pub fn laguerre_default<T: Coefficient>(poly: &Polynomial<T>, config: &SolverConfig) -> Result<Complex64> {
    laguerre(poly, DEFAULT_GUESS, config)
}

/// Finds one root of `poly` using a caller-owned perturbation generator.
///
/// Stops when `|p(x)| < tolerance` or when the step shrinks below the
/// tolerance.
///
/// # Errors
///
/// - Configuration errors from [`SolverConfig::validate`].
/// - [`RootError::InvalidOrder`] if `poly` has order below 4.
/// - [`RootError::NoConvergence`] once `max_iterations` is exhausted.
pub fn laguerre_with_rng<T, R>(
    poly: &Polynomial<T>,
    guess: Complex64,
    config: &SolverConfig,
    rng: &mut R,
) -> Result<Complex64>
where
    T: Coefficient,
    R: Rng + ?Sized,
{
    config.validate()?;
    if poly.order() < 4 {
        return Err(RootError::InvalidOrder {
            solver: "Laguerre",
            expected: ">= 4",
            found: poly.order(),
        });
    }

    let d1 = poly.derivative_of();
    let d2 = d1.derivative_of();
    let tolerance = config.tolerance;

    let mut root = guess;
    for iteration in 0..config.max_iterations {
        let p = poly.eval_complex(root);
        trace!(iteration, %root, residual = p.norm(), "laguerre");

        if p.norm() < tolerance {
            return Ok(root);
        }

        let g = d1.eval_complex(root) / p;
        let h = g * g - d2.eval_complex(root) / p;
        let mut step = laguerre_step(g, h).unwrap_or(FALLBACK_STEP);

        if step.norm() < tolerance {
            return Ok(root);
        }

        if iteration > 0 && iteration % PERTURBATION_PERIOD == 0 {
            let factor: f64 = rng.gen_range(0.9..1.1);
            step *= factor;
        }

        root -= step;
    }

    warn!(iterations = config.max_iterations, %root, "Laguerre iteration did not converge");
    Err(RootError::NoConvergence {
        method: Method::Laguerre,
        iterations: config.max_iterations,
    })
}
