//! Closed-form solvers for polynomials of order 1, 2 and 3.
//!
//! All arithmetic is complex: a real cubic with one real root still goes
//! through a negative discriminant. The `*_roots` functions return the raw,
//! unsorted roots for the orchestrator; the public wrappers sort and
//! classify them.

use num_complex::Complex64;
use numerix_poly::{Coefficient, Polynomial};

use crate::config::{check_tolerance, RootType};
use crate::error::{Result, RootError};
use crate::root_set::RootSet;
use crate::sort::sort_roots;

/// Picks the sign of `root` that makes `Re(conj(anchor) * root) >= 0`.
///
/// Adding the aligned root to `anchor` can then never cancel. On the
/// boundary (`== 0`) the positive branch is taken.
fn align_sign(anchor: Complex64, root: Complex64) -> Complex64 {
    if (anchor.conj() * root).re >= 0.0 {
        root
    } else {
        -root
    }
}

fn check_order<T: Coefficient>(
    poly: &Polynomial<T>,
    order: usize,
    solver: &'static str,
    expected: &'static str,
) -> Result<()> {
    if poly.order() == order {
        Ok(())
    } else {
        Err(RootError::InvalidOrder {
            solver,
            expected,
            found: poly.order(),
        })
    }
}

/// Root of `c1*x + c0`.
pub(crate) fn linear_roots<T: Coefficient>(poly: &Polynomial<T>, tolerance: f64) -> Result<Vec<Complex64>> {
    check_tolerance(tolerance)?;
    check_order(poly, 1, "linear", "1")?;

    let c0 = poly.coeff(0).to_complex();
    let c1 = poly.coeff(1).to_complex();
    Ok(vec![-c0 / c1])
}

/// Roots of `a*x^2 + b*x + c` by the cancellation-free quadratic formula.
pub(crate) fn quadratic_roots<T: Coefficient>(poly: &Polynomial<T>, tolerance: f64) -> Result<Vec<Complex64>> {
    check_tolerance(tolerance)?;
    check_order(poly, 2, "quadratic", "2")?;

    let a = poly.coeff(2).to_complex();
    let b = poly.coeff(1).to_complex();
    let c = poly.coeff(0).to_complex();

    let sqrt_disc = (b * b - a * c * 4.0).sqrt();
    let q = -(b + align_sign(b, sqrt_disc)) * 0.5;

    if q.norm() < tolerance || poly.leading_coeff().magnitude() < tolerance {
        return Err(RootError::IllFormed);
    }

    Ok(vec![q / a, c / q])
}

/// Roots of a cubic via the depressed-cubic closed form.
///
/// Pathological coefficients may yield non-finite roots; callers validate.
pub(crate) fn cubic_roots<T: Coefficient>(poly: &Polynomial<T>, tolerance: f64) -> Result<Vec<Complex64>> {
    check_tolerance(tolerance)?;
    check_order(poly, 3, "cubic", "3")?;

    // Monic form: x^3 + a*x^2 + b*x + c
    let lead = poly.leading_coeff().to_complex();
    let a = poly.coeff(2).to_complex() / lead;
    let b = poly.coeff(1).to_complex() / lead;
    let c = poly.coeff(0).to_complex() / lead;

    let q = (a * a - b * 3.0) / 9.0;
    let r = (a * a * a * 2.0 - a * b * 9.0 + c * 27.0) / 54.0;

    let sqrt_disc = (r * r - q * q * q).sqrt();
    let big_a = -(r + align_sign(r, sqrt_disc)).powf(1.0 / 3.0);
    let big_b = if big_a.norm() == 0.0 {
        Complex64::new(0.0, 0.0)
    } else {
        q / big_a
    };

    let shift = a / 3.0;
    let sum = big_a + big_b;
    let rotated = (big_a - big_b) * Complex64::i() * (0.5 * 3.0f64.sqrt());

    Ok(vec![
        sum - shift,
        -sum * 0.5 - shift + rotated,
        -sum * 0.5 - shift - rotated,
    ])
}

/// Solves a linear polynomial.
///
/// # Errors
///
/// - [`RootError::InvalidTolerance`] unless `tolerance > 0`.
/// - [`RootError::InvalidOrder`] unless `poly` has order 1.
pub fn linear<T: Coefficient>(poly: &Polynomial<T>, tolerance: f64, root_type: RootType) -> Result<RootSet> {
    sort_roots(linear_roots(poly, tolerance)?, tolerance, root_type)
}

/// Solves a quadratic polynomial.
///
/// # Errors
///
/// - [`RootError::InvalidTolerance`] unless `tolerance > 0`.
/// - [`RootError::InvalidOrder`] unless `poly` has order 2.
/// - [`RootError::IllFormed`] if the leading coefficient or the stable
///   denominator `q` is smaller than `tolerance` in magnitude.
pub fn quadratic<T: Coefficient>(poly: &Polynomial<T>, tolerance: f64, root_type: RootType) -> Result<RootSet> {
    sort_roots(quadratic_roots(poly, tolerance)?, tolerance, root_type)
}

/// Solves a cubic polynomial.
///
/// # Errors
///
/// - [`RootError::InvalidTolerance`] unless `tolerance > 0`.
/// - [`RootError::InvalidOrder`] unless `poly` has order 3.
pub fn cubic<T: Coefficient>(poly: &Polynomial<T>, tolerance: f64, root_type: RootType) -> Result<RootSet> {
    sort_roots(cubic_roots(poly, tolerance)?, tolerance, root_type)
}
