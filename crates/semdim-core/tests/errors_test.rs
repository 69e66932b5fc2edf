use semdim_core::errors::*;
use semdim_core::models::Pole;

#[test]
fn term_not_found_carries_term() {
    let err = SpaceError::TermNotFound {
        term: "epileptic".into(),
    };
    assert!(err.to_string().contains("epileptic"));
}

#[test]
fn empty_pole_names_dimension_and_pole() {
    let err = DimensionError::EmptyPole {
        dimension: "danger".into(),
        pole: Pole::B,
    };
    let msg = err.to_string();
    assert!(msg.contains("danger"));
    assert!(msg.contains("pole B"));
}

#[test]
fn invalid_fold_count_carries_values() {
    let err = DimensionError::InvalidFoldCount {
        requested: 10,
        smaller_pole: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains("10"));
    assert!(msg.contains('1'));
}

// --- From impls ---

#[test]
fn space_error_converts_to_semdim_error() {
    let err: SemdimError = SpaceError::EmptyVocabulary.into();
    assert!(matches!(err, SemdimError::Space(_)));
    assert!(err.is_run_local());
}

#[test]
fn store_error_is_run_local() {
    let err: SemdimError = StoreError::ModelLoadError {
        path: "models/x.vec".into(),
        reason: "missing".into(),
    }
    .into();
    assert!(err.is_run_local());
    assert!(err.to_string().contains("models/x.vec"));
}

#[test]
fn config_error_is_not_run_local() {
    let err: SemdimError = ConfigError::ValidationFailed {
        field: "validation.folds".into(),
        message: "must be at least 2".into(),
    }
    .into();
    assert!(!err.is_run_local());
}

#[test]
fn run_failed_exposes_source() {
    use std::error::Error;

    let inner: SemdimError = SpaceError::TermNotFound {
        term: "obese".into(),
    }
    .into();
    let err = AggregateError::RunFailed {
        run: "1980#boot3".into(),
        source: Box::new(inner),
    };
    assert!(err.to_string().contains("1980#boot3"));
    assert!(err.source().is_some());
}
