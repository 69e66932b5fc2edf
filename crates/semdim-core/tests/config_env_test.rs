//! Environment overrides applied by `SemdimConfig::load`.
//!
//! Kept in its own test binary so the process-wide variables cannot leak
//! into other config tests.

use semdim_core::config::SemdimConfig;

#[test]
fn env_overrides_win_over_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semdim.toml");
    std::fs::write(
        &path,
        "[study]\nmodel_root = \"from_file\"\n\n[validation]\nfolds = 5\n\n[aggregation]\nthreads = 2\n",
    )
    .unwrap();

    std::env::set_var("SEMDIM_FOLDS", "7");
    std::env::set_var("SEMDIM_MODEL_ROOT", "/data/models");
    std::env::set_var("SEMDIM_FAIL_FAST", "true");
    std::env::set_var("SEMDIM_THREADS", "not-a-number");
    let config = SemdimConfig::load(&path).unwrap();
    for var in ["SEMDIM_FOLDS", "SEMDIM_MODEL_ROOT", "SEMDIM_FAIL_FAST", "SEMDIM_THREADS"] {
        std::env::remove_var(var);
    }

    assert_eq!(config.validation.folds, 7);
    assert_eq!(config.study.model_root, "/data/models");
    assert!(config.aggregation.fail_fast);
    // Unparseable values leave the file value in place.
    assert_eq!(config.aggregation.threads, 2);

    let plain = SemdimConfig::load(&path).unwrap();
    assert_eq!(plain.validation.folds, 5);
    assert_eq!(plain.study.model_root, "from_file");
}
