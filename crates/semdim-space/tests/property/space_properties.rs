//! Property tests for vector space lookup and folding.

use proptest::prelude::*;

use semdim_space::{math, TermFolder, VectorSpace};

fn nonzero_vec(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, dims)
        .prop_filter("non-zero", |v| math::norm(v) > 1e-3)
}

proptest! {
    #[test]
    fn prop_fold_weights_sum_to_one(
        a in nonzero_vec(6),
        b in nonzero_vec(6),
        fa in 0u64..10_000,
        fb in 1u64..10_000,
    ) {
        let space = VectorSpace::from_entries(vec![("t", a, fa), ("s", b, fb)]).unwrap();
        let out = TermFolder::compose(&space, "t", "s").unwrap();
        prop_assert!((out.target_weight + out.synonym_weight - 1.0).abs() < 1e-12);
        prop_assert_eq!(out.frequency, fa + fb);
        prop_assert_eq!(out.target_weight, fa as f64 / (fa + fb) as f64);
    }

    #[test]
    fn prop_fold_is_unit_length(
        a in nonzero_vec(5),
        fa in 1u64..1_000,
        fb in 1u64..1_000,
    ) {
        // A pair pointing the same way never cancels out.
        let b: Vec<f32> = a.iter().map(|x| x * 2.0).collect();
        let space = VectorSpace::from_entries(vec![("t", a, fa), ("s", b, fb)]).unwrap();
        let out = TermFolder::compose(&space, "t", "s").unwrap();
        prop_assert!((math::norm(&out.vector) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn prop_nearest_is_sorted_descending(
        vectors in prop::collection::vec(nonzero_vec(4), 1..30),
        query in nonzero_vec(4),
        top_n in 1usize..40,
    ) {
        let space = VectorSpace::from_entries(
            vectors.into_iter().enumerate().map(|(i, v)| (format!("w{i}"), v, 1)),
        ).unwrap();
        let hits = space.nearest(&query, top_n).unwrap();
        prop_assert_eq!(hits.len(), top_n.min(space.len()));
        for pair in hits.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
        for hit in &hits {
            prop_assert!((-1.0..=1.0).contains(&hit.similarity));
        }
    }
}
