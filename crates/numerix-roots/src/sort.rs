//! Canonical ordering and real/complex classification of roots.
//!
//! Two roots whose real parts differ by less than `sqrt(tolerance)` are
//! treated as having the same real part and ordered by imaginary part;
//! otherwise roots are ordered by real part. For real output, roots with
//! `|im| >= sqrt(tolerance)` are dropped and the real parts returned.
//!
//! Grouping is done against a cluster anchor (the smallest real part of the
//! cluster) after a total sort by real part, so the result never depends on
//! the sort algorithm's visiting order.

use num_complex::Complex64;

use crate::config::{check_tolerance, RootType};
use crate::error::Result;
use crate::root_set::RootSet;

/// Sorts `roots` and, for [`RootType::Real`], keeps only the (nearly) real ones.
///
/// # Errors
///
/// [`RootError::InvalidTolerance`](crate::RootError::InvalidTolerance) unless
/// `tolerance > 0`.
pub fn sort_roots(mut roots: Vec<Complex64>, tolerance: f64, root_type: RootType) -> Result<RootSet> {
    check_tolerance(tolerance)?;
    let cutoff = tolerance.sqrt();

    if root_type == RootType::Real {
        roots.retain(|z| z.im.abs() < cutoff);
    }

    roots.sort_by(|a, b| a.re.total_cmp(&b.re));

    let mut start = 0;
    while start < roots.len() {
        let anchor = roots[start].re;
        let len = 1 + roots[start + 1..]
            .iter()
            .take_while(|z| z.re - anchor < cutoff)
            .count();
        roots[start..start + len].sort_by(|a, b| a.im.total_cmp(&b.im));
        start += len;
    }

    Ok(match root_type {
        RootType::Real => RootSet::Real(roots.into_iter().map(|z| z.re).collect()),
        RootType::Complex => RootSet::Complex(roots),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RootError;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_orders_by_real_part() {
        let roots = vec![c(3.0, 0.0), c(-1.0, 0.0), c(2.0, 0.0)];
        let sorted = sort_roots(roots, 1e-9, RootType::Real).unwrap();
        assert_eq!(sorted, RootSet::Real(vec![-1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_conjugates_ordered_by_imaginary_part() {
        // The real parts differ by noise well below sqrt(tol).
        let roots = vec![c(1.0 + 1e-12, 2.0), c(1.0, -2.0), c(0.0, 1.0), c(0.0, -1.0)];
        let sorted = sort_roots(roots, 1e-9, RootType::Complex).unwrap();
        assert_eq!(
            sorted,
            RootSet::Complex(vec![c(0.0, -1.0), c(0.0, 1.0), c(1.0, -2.0), c(1.0 + 1e-12, 2.0)])
        );
    }

    #[test]
    fn test_real_filter_uses_sqrt_tolerance() {
        // sqrt(1e-6) = 1e-3
        let roots = vec![c(1.0, 5e-4), c(2.0, 2e-3), c(-1.0, -1e-8)];
        let sorted = sort_roots(roots, 1e-6, RootType::Real).unwrap();
        assert_eq!(sorted, RootSet::Real(vec![-1.0, 1.0]));
    }

    #[test]
    fn test_purely_complex_roots_filtered_out() {
        let roots = vec![c(0.0, 1.0), c(0.0, -1.0)];
        let sorted = sort_roots(roots, 1e-9, RootType::Real).unwrap();
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_nan_does_not_stall() {
        let roots = vec![c(f64::NAN, 0.0), c(1.0, 0.0)];
        let sorted = sort_roots(roots, 1e-9, RootType::Complex).unwrap();
        assert_eq!(sorted.len(), 2);
    }

    #[test]
    fn test_invalid_tolerance() {
        assert!(matches!(
            sort_roots(vec![c(1.0, 0.0)], 0.0, RootType::Complex),
            Err(RootError::InvalidTolerance { .. })
        ));
    }
}
