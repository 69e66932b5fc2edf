//! End-to-end dimension construction, validation, and comparison on the toy space.

use semdim_core::errors::DimensionError;
use semdim_core::models::{DimensionSpec, Pole, SeedRecord};
use semdim_dimensions::*;
use semdim_space::math;

const DANGER: [&str; 5] = ["danger", "risk", "threat", "hazard", "peril"];
const SAFE: [&str; 5] = ["safe", "secure", "protected", "harmless", "calm"];

fn danger_spec() -> DimensionSpec {
    DimensionSpec::new("danger", DANGER, SAFE)
}

#[test]
fn two_by_two_dimension_is_unit_and_self_similar() {
    let space = test_fixtures::stigma_toy_space();
    let dim = DimensionBuilder::build_from_terms(
        &space,
        "danger",
        &["danger", "risk"],
        &["safe", "secure"],
        DimensionMethod::Larsen,
    )
    .unwrap();
    assert!((math::norm(dim.direction()) - 1.0).abs() < 1e-6);
    assert!((DimensionComparator::cosine(&dim, &dim) - 1.0).abs() < 1e-6);
    assert!(dim.omissions.is_empty());
}

#[test]
fn swapping_poles_negates_direction() {
    let space = test_fixtures::stigma_toy_space();
    let forward = DimensionBuilder::build_from_terms(
        &space, "d", &DANGER, &SAFE, DimensionMethod::Larsen,
    )
    .unwrap();
    let backward = DimensionBuilder::build_from_terms(
        &space, "d", &SAFE, &DANGER, DimensionMethod::Larsen,
    )
    .unwrap();
    for (f, b) in forward.direction().iter().zip(backward.direction()) {
        assert_eq!(*f, -*b);
    }
    assert_eq!(forward.negated().direction(), backward.direction());
    assert!((DimensionComparator::cosine(&forward, &backward) + 1.0).abs() < 1e-6);
}

#[test]
fn ten_terms_five_folds_hold_out_each_term_once() {
    let space = test_fixtures::stigma_toy_space();
    let dim = DimensionBuilder::build(&space, &danger_spec(), DimensionMethod::Larsen).unwrap();
    let cv = DimensionValidator::validate(&space, &dim, 5).unwrap();

    assert_eq!(cv.effective_k, 5);
    assert!(!cv.k_adjusted());
    let holdout_total: usize = cv.folds.iter().map(|f| f.holdout_n).sum();
    assert_eq!(holdout_total, 10);
    assert_eq!(cv.holdout.total, 10);
    // Every fold trains on the other 8 terms.
    assert!(cv.folds.iter().all(|f| f.train_n == 8 && f.holdout_n == 2));
    assert_eq!(cv.holdout_accuracy_percent(), 1.0);
}

#[test]
fn pooled_percent_is_exact_ratio() {
    let space = test_fixtures::stigma_toy_space();
    // Crossed purity seeds leave the poles only partly separable.
    let cv = DimensionValidator::validate_terms(
        &space,
        "mixed",
        &["danger", "risk", "filthy", "pure"],
        &["safe", "secure", "clean", "dirty"],
        4,
        DimensionMethod::Larsen,
    )
    .unwrap();
    assert_eq!(cv.holdout.total, 8);
    assert!(cv.holdout.correct < 8);
    // N counts predictions made, not correct ones.
    assert_eq!(cv.holdout_accuracy_n(), 8);
    assert_eq!(cv.holdout_correct(), 4);
    assert_eq!(cv.train_accuracy_n(), 24);
    assert_eq!(cv.train_correct(), 20);
    let expected = cv.holdout.correct as f64 / cv.holdout.total as f64;
    assert!((cv.holdout_accuracy_percent() - expected).abs() < 1e-9);
    assert!((0.0..=1.0).contains(&cv.holdout_accuracy_percent()));
    assert!((0.0..=1.0).contains(&cv.train_accuracy_percent()));
}

#[test]
fn missing_seed_terms_are_recorded_not_fatal() {
    let space = test_fixtures::stigma_toy_space();
    let spec = DimensionSpec::new("danger", ["danger", "menace", "risk"], ["safe", "sanctuary"]);
    let dim = DimensionBuilder::build(&space, &spec, DimensionMethod::Larsen).unwrap();
    let omitted: Vec<&str> = dim.omissions.iter().map(|o| o.term.as_str()).collect();
    assert_eq!(omitted, vec!["menace", "sanctuary"]);
    assert_eq!(dim.pole_a, vec!["danger", "risk"]);
}

#[test]
fn fully_missing_pole_is_empty_pole() {
    let space = test_fixtures::stigma_toy_space();
    let spec = DimensionSpec::new("ghost", ["wraith", "specter"], ["safe"]);
    let err = DimensionBuilder::build(&space, &spec, DimensionMethod::Larsen).unwrap_err();
    assert!(matches!(err, DimensionError::EmptyPole { .. }));
}

#[test]
fn neighbors_come_from_opposite_ends() {
    let space = test_fixtures::stigma_toy_space();
    let dim = DimensionBuilder::build(&space, &danger_spec(), DimensionMethod::Larsen).unwrap();
    let n = DimensionComparator::neighbors(&space, &dim, 3).unwrap();

    assert_eq!(n.most_similar.len(), 3);
    assert_eq!(n.least_similar.len(), 3);
    for hit in &n.most_similar {
        assert!(DANGER.contains(&hit.term.as_str()), "{} not a danger term", hit.term);
    }
    for hit in &n.least_similar {
        assert!(SAFE.contains(&hit.term.as_str()), "{} not a safe term", hit.term);
    }
}

#[test]
fn orthogonal_constructs_have_low_cosine() {
    let space = test_fixtures::stigma_toy_space();
    let records = vec![
        SeedRecord::new("filthy", "impure"),
        SeedRecord::new("dirty", "impure"),
        SeedRecord::new("tainted", "impure"),
        SeedRecord::new("clean", "pure"),
        SeedRecord::new("pure", "pure"),
        SeedRecord::new("spotless", "pure"),
    ];
    let purity_spec = DimensionSpec::from_seed_records("purity", "impure", "pure", &records).unwrap();
    let purity = DimensionBuilder::build(&space, &purity_spec, DimensionMethod::Larsen).unwrap();
    let danger = DimensionBuilder::build(&space, &danger_spec(), DimensionMethod::Larsen).unwrap();
    let cos = DimensionComparator::cosine(&purity, &danger);
    assert!(cos.abs() < 0.5, "purity and danger should be nearly orthogonal, got {cos}");
}

#[test]
fn composite_terms_can_seed_a_dimension() {
    use semdim_core::models::TermFoldSpec;
    use semdim_space::TermFolder;

    let mut space = test_fixtures::stigma_toy_space();
    TermFolder::fold_all(&mut space, &TermFoldSpec::standard_set()).unwrap();
    let dim = DimensionBuilder::build_from_terms(
        &space,
        "illness",
        &["epilepsy_folded", "obesity_folded"],
        &["safe", "calm"],
        DimensionMethod::Larsen,
    )
    .unwrap();
    assert!(dim.omissions.is_empty());
    assert!(dim.project(space.vector_of("epileptic").unwrap()) > 0.0);
}

#[test]
fn classify_follows_projection_sign() {
    let space = test_fixtures::stigma_toy_space();
    let dim = DimensionBuilder::build(&space, &danger_spec(), DimensionMethod::Larsen).unwrap();
    assert_eq!(dim.classify(space.vector_of("risk").unwrap()), Pole::A);
    assert_eq!(dim.classify(space.vector_of("calm").unwrap()), Pole::B);
    // A zero projection falls to pole B.
    assert_eq!(dim.classify(&[0.0; 4]), Pole::B);
    assert_eq!(dim.negated().classify(space.vector_of("risk").unwrap()), Pole::B);
}
