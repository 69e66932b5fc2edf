//! Top-level configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AggregationConfig, FoldingConfig, ObservabilityConfig, StudyConfig, ValidationConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SEMDIM_*`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SemdimConfig {
    pub study: StudyConfig,
    pub validation: ValidationConfig,
    pub aggregation: AggregationConfig,
    pub folding: FoldingConfig,
    pub observability: ObservabilityConfig,
}

impl SemdimConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: SemdimConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string without validating it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.study.windows.is_empty() {
            return Err(invalid("study.windows", "must list at least one window"));
        }
        if self.study.resamples.is_empty() {
            return Err(invalid("study.resamples", "must list at least one resample"));
        }
        if self.study.window_span == 0 {
            return Err(invalid("study.window_span", "must be greater than 0"));
        }
        if self.validation.folds < 2 {
            return Err(invalid("validation.folds", "must be at least 2"));
        }
        if self.validation.neighbor_count == 0 {
            return Err(invalid("validation.neighbor_count", "must be greater than 0"));
        }
        for fold in &self.folding.terms {
            if fold.target == fold.synonym {
                return Err(invalid(
                    "folding.terms",
                    &format!("{} folds {} into itself", fold.composite, fold.target),
                ));
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SEMDIM_MODEL_ROOT") {
            self.study.model_root = val;
        }
        if let Ok(val) = std::env::var("SEMDIM_MODEL_PREFIX") {
            self.study.model_prefix = val;
        }
        if let Ok(val) = std::env::var("SEMDIM_FOLDS") {
            if let Ok(v) = val.parse::<usize>() {
                self.validation.folds = v;
            }
        }
        if let Ok(val) = std::env::var("SEMDIM_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                self.aggregation.threads = v;
            }
        }
        if let Ok(val) = std::env::var("SEMDIM_FAIL_FAST") {
            if let Ok(v) = val.parse::<bool>() {
                self.aggregation.fail_fast = v;
            }
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
