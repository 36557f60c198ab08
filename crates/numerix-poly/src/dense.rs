//! Dense univariate polynomials.
//!
//! Polynomials are immutable values: every operation that changes the
//! coefficients (arithmetic, division, deflation) returns a fresh polynomial.

use num_complex::Complex64;

use crate::coefficient::Coefficient;
use crate::error::PolyError;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order. Trailing zero
/// coefficients are stripped on construction, so the leading coefficient
/// of a non-zero polynomial is always non-zero.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<T: Coefficient> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a new polynomial from coefficients (constant term first).
    #[must_use]
    pub fn new(mut coeffs: Vec<T>) -> Self {
        while coeffs.len() > 1 && coeffs.last().map_or(false, |c| c.is_zero()) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![T::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monic polynomial `(x - r0)(x - r1)...(x - rn)`.
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        roots.iter().fold(Self::one(), |acc, &r| {
            acc.mul(&Self::new(vec![-r, T::one()]))
        })
    }

    /// Returns the order (degree) of the polynomial.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> T {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).copied().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients, constant term first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Evaluates the polynomial at a complex point using Horner's method.
    ///
    /// Works for real polynomials too; this is how roots off the real axis
    /// are checked against a real-coefficient polynomial.
    #[must_use]
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .rev()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c.to_complex())
    }

    /// Lifts the coefficients into the complex plane.
    #[must_use]
    pub fn to_complex(&self) -> Polynomial<Complex64> {
        Polynomial {
            coeffs: self.coeffs.iter().map(|&c| c.to_complex()).collect(),
        }
    }

    /// Returns true if every coefficient is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(Coefficient::is_finite)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|&c| -c).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook, O(n·m)).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![T::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j] + a * b;
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: T) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|&x| x * c).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.order() == 0 {
            return Self::zero();
        }

        #[allow(clippy::cast_precision_loss)]
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * T::from_real(i as f64))
            .collect();

        Self::new(coeffs)
    }

    /// Polynomial long division: returns `(quotient, remainder)`.
    ///
    /// The remainder has order strictly below the divisor's (or is zero).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }

        let n = self.order();
        let d = divisor.order();
        if n < d {
            return Ok((Self::zero(), self.clone()));
        }

        let lead = divisor.leading_coeff();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![T::zero(); n - d + 1];

        for k in (0..quot.len()).rev() {
            let q = rem[k + d] / lead;
            quot[k] = q;
            for (j, &c) in divisor.coeffs.iter().enumerate() {
                rem[k + j] = rem[k + j] - q * c;
            }
        }

        // Everything at or above x^d has been eliminated.
        rem.truncate(d);
        Ok((Self::new(quot), Self::new(rem)))
    }

    /// Synthetic division by `(x - root)`: returns `(quotient, remainder)`.
    ///
    /// The quotient has order exactly `order - 1` and the remainder equals
    /// `self.eval(root)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CannotDeflate`] for constant polynomials.
    pub fn synthetic_division(&self, root: T) -> Result<(Self, T), PolyError> {
        let n = self.order();
        if n == 0 {
            return Err(PolyError::CannotDeflate { order: n });
        }

        let mut quot = vec![T::zero(); n];
        let mut carry = self.coeffs[n];
        for i in (0..n).rev() {
            quot[i] = carry;
            carry = self.coeffs[i] + carry * root;
        }

        // quot[n - 1] is the old leading coefficient, so no normalization is needed.
        Ok((Self { coeffs: quot }, carry))
    }

    /// Divides out the linear factor `(x - root)`, discarding the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CannotDeflate`] for constant polynomials.
    pub fn deflate(&self, root: T) -> Result<Self, PolyError> {
        self.synthetic_division(root).map(|(quotient, _)| quotient)
    }
}

impl<T: Coefficient> std::fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
