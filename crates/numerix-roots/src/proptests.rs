//! Property-based tests for root solving.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use numerix_poly::Polynomial;
    use proptest::prelude::*;

    use crate::analytic::quadratic;
    use crate::config::{RootType, SolverConfig};
    use crate::polysolve::polysolve;

    // Distinct half-integers in [-3, 3], sorted ascending.
    fn real_roots() -> impl Strategy<Value = Vec<f64>> {
        proptest::sample::subsequence((-6i32..=6).collect::<Vec<_>>(), 4..=6)
            .prop_map(|ks| ks.into_iter().map(|k| f64::from(k) / 2.0).collect())
    }

    // Distinct points of a half-integer grid in the square [-1.5, 1.5]^2.
    fn complex_roots() -> impl Strategy<Value = Vec<Complex64>> {
        let grid: Vec<(i32, i32)> = (-3..=3).flat_map(|re| (-3..=3).map(move |im| (re, im))).collect();
        proptest::sample::subsequence(grid, 4..=6).prop_map(|points| {
            points
                .into_iter()
                .map(|(re, im)| Complex64::new(f64::from(re) / 2.0, f64::from(im) / 2.0))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn polysolve_recovers_real_roots(roots in real_roots()) {
            let p = Polynomial::from_roots(&roots);
            let config = SolverConfig::new().with_tolerance(1e-8);
            let found = polysolve(&p, &config, RootType::Real).unwrap();
            let found = found.as_real().unwrap();

            prop_assert_eq!(found.len(), roots.len());
            for (f, r) in found.iter().zip(&roots) {
                prop_assert!((f - r).abs() < 1e-6, "{:?} vs {:?}", found, roots);
            }
        }

        #[test]
        fn polysolve_residual_on_original(roots in complex_roots()) {
            let p = Polynomial::from_roots(&roots);
            let config = SolverConfig::new().with_tolerance(1e-8);
            let found = polysolve(&p, &config, RootType::Complex).unwrap().into_complex();

            prop_assert_eq!(found.len(), roots.len());
            for z in found {
                prop_assert!(p.eval_complex(z).norm() < 1e-6, "p({}) = {}", z, p.eval_complex(z));
            }
        }

        #[test]
        fn polysolve_order_matches_root_count(roots in complex_roots()) {
            let p = Polynomial::from_roots(&roots);
            let found = polysolve(&p, &SolverConfig::default(), RootType::Complex).unwrap();
            prop_assert_eq!(found.len(), p.order());
        }

        // |r1| = |r2| puts Re(conj(b) * sqrt(D)) exactly on the sign boundary.
        #[test]
        fn quadratic_sign_boundary(
            radius in 0.5f64..3.0,
            theta in 0.0f64..std::f64::consts::PI,
            gap in 0.3f64..std::f64::consts::PI,
        ) {
            let r1 = Complex64::from_polar(radius, theta);
            let r2 = Complex64::from_polar(radius, theta + gap);
            let p = Polynomial::from_roots(&[r1, r2]);

            let found = quadratic(&p, 1e-9, RootType::Complex).unwrap().into_complex();
            prop_assert_eq!(found.len(), 2);
            for r in [r1, r2] {
                prop_assert!(
                    found.iter().any(|z| (z - r).norm() < 1e-9),
                    "{} not in {:?}", r, found
                );
            }
        }
    }
}
