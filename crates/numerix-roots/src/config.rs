//! Solver configuration and output selection.

use crate::error::{Result, RootError};

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Default iteration budget for Laguerre extraction and Newton polishing.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default seed for the stagnation-breaking perturbation.
pub const DEFAULT_SEED: u64 = 42;

/// Rejects non-positive (and NaN) tolerances.
pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance > 0.0 {
        Ok(())
    } else {
        Err(RootError::InvalidTolerance { tolerance })
    }
}

/// Configuration shared by every solver in this crate.
///
/// The same tolerance drives iteration convergence, the quadratic
/// degeneracy check, and (through its square root) real/complex
/// classification of the final roots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance, strictly positive.
    pub tolerance: f64,
    /// Iteration budget per iterative stage, at least 1.
    pub max_iterations: usize,
    /// Seed of the per-call random generator.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the tolerance only (the closed-form solvers never iterate).
    ///
    /// # Errors
    ///
    /// [`RootError::InvalidTolerance`] unless `tolerance > 0`. NaN is rejected.
    pub fn validate_tolerance(&self) -> Result<()> {
        check_tolerance(self.tolerance)
    }

    /// Checks tolerance and iteration budget.
    ///
    /// # Errors
    ///
    /// [`RootError::InvalidTolerance`] or [`RootError::InvalidMaxIterations`].
    pub fn validate(&self) -> Result<()> {
        self.validate_tolerance()?;
        if self.max_iterations < 1 {
            return Err(RootError::InvalidMaxIterations {
                max_iterations: self.max_iterations,
            });
        }
        Ok(())
    }

    /// The cutoff below which imaginary parts (and real-part differences)
    /// count as zero: `sqrt(tolerance)`.
    #[must_use]
    pub fn classification_cutoff(&self) -> f64 {
        self.tolerance.sqrt()
    }
}

/// The kind of roots the caller wants back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RootType {
    /// Only roots with a negligible imaginary part, as real numbers.
    Real,
    /// All roots.
    #[default]
    Complex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_invalid_tolerance() {
        for tolerance in [0.0, -1e-6, f64::NAN] {
            let config = SolverConfig::new().with_tolerance(tolerance);
            assert!(matches!(
                config.validate(),
                Err(RootError::InvalidTolerance { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_iterations() {
        let config = SolverConfig::new().with_max_iterations(0);
        assert_eq!(
            config.validate(),
            Err(RootError::InvalidMaxIterations { max_iterations: 0 })
        );
        // Tolerance is checked first.
        let config = config.with_tolerance(-1.0);
        assert!(matches!(
            config.validate(),
            Err(RootError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn test_cutoff() {
        let config = SolverConfig::new().with_tolerance(1e-6);
        assert!((config.classification_cutoff() - 1e-3).abs() < 1e-15);
    }
}
