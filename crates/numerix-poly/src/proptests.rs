//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    // Integer-valued coefficients keep f64 arithmetic exact at these sizes.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    // Polynomials of order at least one
    fn nonconstant_poly() -> impl Strategy<Value = Polynomial<f64>> {
        small_poly().prop_filter("polynomial must have a root", |p| p.order() >= 1)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -3i32..3i32) {
            // (a * b)(x) = a(x) * b(x)
            let x = f64::from(x);
            prop_assert_eq!(a.mul(&b).eval(x), a.eval(x) * b.eval(x));
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).derivative(), a.derivative().add(&b.derivative()));
        }

        #[test]
        fn deflate_lowers_order_by_one(p in nonconstant_poly(), root in -5i32..5i32) {
            let q = p.deflate(f64::from(root)).unwrap();
            prop_assert_eq!(q.order(), p.order() - 1);
        }

        #[test]
        fn synthetic_remainder_is_value(p in nonconstant_poly(), root in -5i32..5i32) {
            let root = f64::from(root);
            let (_, rem) = p.synthetic_division(root).unwrap();
            prop_assert_eq!(rem, p.eval(root));
        }

        #[test]
        fn deflating_a_known_root_recovers_the_cofactor(
            roots in proptest::collection::vec(-6i32..6i32, 2..=5)
        ) {
            let roots: Vec<f64> = roots.into_iter().map(f64::from).collect();
            let p = Polynomial::from_roots(&roots);
            let q = p.deflate(roots[0]).unwrap();
            prop_assert_eq!(q, Polynomial::from_roots(&roots[1..]));
        }

        #[test]
        fn div_rem_reconstructs(p in small_poly(), d in nonconstant_poly()) {
            // Monic divisors keep the quotient integral.
            let mut coeffs = d.coeffs().to_vec();
            let last = coeffs.len() - 1;
            coeffs[last] = 1.0;
            let d = Polynomial::new(coeffs);

            let (q, r) = p.div_rem(&d).unwrap();
            prop_assert!(r.is_zero() || r.order() < d.order());
            prop_assert_eq!(q.mul(&d).add(&r), p);
        }
    }
}
