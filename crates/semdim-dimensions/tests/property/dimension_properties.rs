//! Property tests for dimension construction and cross-validation.

use proptest::prelude::*;

use semdim_dimensions::{DimensionBuilder, DimensionComparator, DimensionMethod, DimensionValidator};

fn pole_terms(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

proptest! {
    #[test]
    fn prop_build_is_antisymmetric(seed in 0u64..500, per_pole in 1usize..8) {
        let space = test_fixtures::bipolar_space(per_pole, 4, 6, seed);
        let a = pole_terms("a", per_pole);
        let b = pole_terms("b", per_pole);
        let ab = DimensionBuilder::build_from_terms(&space, "d", &a, &b, DimensionMethod::Larsen).unwrap();
        let ba = DimensionBuilder::build_from_terms(&space, "d", &b, &a, DimensionMethod::Larsen).unwrap();
        for (x, y) in ab.direction().iter().zip(ba.direction()) {
            prop_assert_eq!(*x, -*y);
        }
    }

    #[test]
    fn prop_self_cosine_is_one(seed in 0u64..500) {
        let space = test_fixtures::bipolar_space(4, 4, 8, seed);
        let d = DimensionBuilder::build_from_terms(
            &space, "d", &pole_terms("a", 4), &pole_terms("b", 4), DimensionMethod::Larsen,
        ).unwrap();
        prop_assert!((DimensionComparator::cosine(&d, &d) - 1.0).abs() < 1e-6);
        prop_assert!((DimensionComparator::cosine(&d, &d.negated()) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn prop_accuracy_bounded_and_exact(
        seed in 0u64..500,
        n_a in 2usize..9,
        n_b in 2usize..9,
        k in 2usize..12,
    ) {
        let space = test_fixtures::bipolar_space(n_a.max(n_b), 6, 6, seed);
        let cv = DimensionValidator::validate_terms(
            &space, "d", &pole_terms("a", n_a), &pole_terms("b", n_b), k, DimensionMethod::Larsen,
        ).unwrap();

        prop_assert_eq!(cv.effective_k, k.min(n_a.min(n_b)));
        prop_assert_eq!(cv.holdout.total, n_a + n_b);
        prop_assert_eq!(cv.train.total, (n_a + n_b) * (cv.effective_k - 1));
        for pct in [cv.train_accuracy_percent(), cv.holdout_accuracy_percent()] {
            prop_assert!((0.0..=1.0).contains(&pct));
        }
        let exact = cv.holdout.correct as f64 / cv.holdout.total as f64;
        prop_assert!((cv.holdout_accuracy_percent() - exact).abs() < 1e-9);
    }
}
