//! Checked numerical differentiation of real functions.

use std::marker::PhantomData;

use crate::error::DerivError;
use crate::stencil::{BackwardRichardson, CentralRichardson, ForwardRichardson, Stencil};

/// The default relative step: the cube root of machine epsilon.
#[must_use]
pub fn default_step() -> f64 {
    f64::EPSILON.cbrt()
}

/// Scales a relative step to the magnitude of `x`.
fn effective_step(step: f64, x: f64) -> f64 {
    step * x.abs().max(1.0)
}

/// Differentiates `f` at `x` with stencil `S`.
///
/// The step is relative: the stencil is applied with `step * max(1, |x|)`.
///
/// # Errors
///
/// - [`DerivError::InvalidStepSize`] if `step` is not positive and finite.
/// - [`DerivError::NonFinite`] if the stencil yields NaN or infinity
///   (for example when `f` is undefined on one side of `x`).
pub fn diff<S, F>(f: F, x: f64, step: f64) -> Result<f64, DerivError>
where
    S: Stencil,
    F: Fn(f64) -> f64,
{
    if !(step.is_finite() && step > 0.0) {
        return Err(DerivError::InvalidStepSize { step });
    }

    let h = effective_step(step, x);
    let value = S::apply(&f, x, h);

    if value.is_finite() {
        Ok(value)
    } else {
        Err(DerivError::NonFinite { x, step: h, value })
    }
}

/// Central Richardson derivative at the default step.
///
/// # Errors
///
/// See [`diff`].
pub fn central<F: Fn(f64) -> f64>(f: F, x: f64) -> Result<f64, DerivError> {
    diff::<CentralRichardson, F>(f, x, default_step())
}

/// Forward Richardson derivative at the default step.
///
/// Only samples `f` strictly to the right of `x`.
///
/// # Errors
///
/// See [`diff`].
pub fn forward<F: Fn(f64) -> f64>(f: F, x: f64) -> Result<f64, DerivError> {
    diff::<ForwardRichardson, F>(f, x, default_step())
}

/// Backward Richardson derivative at the default step.
///
/// Only samples `f` strictly to the left of `x`.
///
/// # Errors
///
/// See [`diff`].
pub fn backward<F: Fn(f64) -> f64>(f: F, x: f64) -> Result<f64, DerivError> {
    diff::<BackwardRichardson, F>(f, x, default_step())
}

/// A function object approximating the derivative of `f`.
///
/// Evaluation is unchecked; use [`NumericDerivative::try_eval`] or [`diff`]
/// when a non-finite result must be reported.
#[derive(Clone, Debug)]
pub struct NumericDerivative<F, S = CentralRichardson> {
    f: F,
    step: f64,
    _stencil: PhantomData<S>,
}

impl<F, S> NumericDerivative<F, S>
where
    F: Fn(f64) -> f64,
    S: Stencil,
{
    /// Evaluates the approximate derivative at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        S::apply(&self.f, x, effective_step(self.step, x))
    }

    /// Evaluates the approximate derivative at `x`, checking the result.
    ///
    /// # Errors
    ///
    /// See [`diff`].
    pub fn try_eval(&self, x: f64) -> Result<f64, DerivError> {
        diff::<S, _>(&self.f, x, self.step)
    }

    /// Returns the relative step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Wraps `f` into a callable approximating its derivative with stencil `S`.
///
/// Pass `None` for the default step.
#[must_use]
pub fn numeric_derivative<S, F>(f: F, step: Option<f64>) -> NumericDerivative<F, S>
where
    S: Stencil,
    F: Fn(f64) -> f64,
{
    NumericDerivative {
        f,
        step: step.unwrap_or_else(default_step),
        _stencil: PhantomData,
    }
}
