//! Property-based tests: analytic and numerical derivatives agree.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::analytic::DerivativeOf;
    use crate::numeric::central;
    use numerix_poly::Polynomial;

    fn small_poly() -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec((-10i32..10i32).prop_map(f64::from), 1..=5)
            .prop_map(Polynomial::new)
    }

    proptest! {
        #[test]
        fn central_matches_formal_derivative(p in small_poly(), x in -2.0f64..2.0) {
            let exact = p.derivative_of().eval(x);
            let approx = central(|t| p.eval(t), x).unwrap();
            prop_assert!((exact - approx).abs() < 1e-5 * exact.abs().max(1.0));
        }

        #[test]
        fn derivative_lowers_order(p in small_poly()) {
            let d = p.derivative_of();
            if p.order() > 0 {
                prop_assert_eq!(d.order(), p.order() - 1);
            } else {
                prop_assert!(d.is_zero());
            }
        }
    }
}
